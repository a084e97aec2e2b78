use soroban_sdk::{contractclient, Env};

use crate::types::RoundData;

/// Aggregated base/quote price feed. `answer` is scaled by `10^decimals()`.
#[contractclient(name = "PriceFeedClient")]
pub trait PriceFeed {
    fn decimals(env: Env) -> u32;

    fn latest_round_data(env: Env) -> RoundData;

    fn get_round_data(env: Env, round_id: u64) -> RoundData;
}
