use soroban_sdk::{contract, contracterror, contractimpl, contracttype, panic_with_error, Env};

use crate::{interfaces::PriceFeed, types::RoundData};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum PriceFeedError {
    RoundNotFound = 350,
}

#[derive(Clone)]
#[contracttype]
enum DataKey {
    Decimals,
    LatestRound,
    Round(u64),
}

/// Aggregator whose answer is pushed by the test. Every update opens a new
/// round and earlier rounds stay queryable.
#[contract]
pub struct MockPriceFeed;

#[contractimpl]
impl MockPriceFeed {
    pub fn __constructor(env: Env, decimals: u32, initial_answer: i128) {
        env.storage().instance().set(&DataKey::Decimals, &decimals);
        Self::update_answer(env, initial_answer);
    }

    pub fn update_answer(env: Env, answer: i128) -> u64 {
        let round_id = latest_round_id(&env) + 1;
        let now = env.ledger().timestamp();

        env.storage().instance().set(
            &DataKey::Round(round_id),
            &RoundData {
                round_id,
                answer,
                started_at: now,
                updated_at: now,
                answered_in_round: round_id,
            },
        );
        env.storage()
            .instance()
            .set(&DataKey::LatestRound, &round_id);

        round_id
    }
}

#[contractimpl]
impl PriceFeed for MockPriceFeed {
    fn decimals(env: Env) -> u32 {
        env.storage()
            .instance()
            .get(&DataKey::Decimals)
            .unwrap_or(0)
    }

    fn latest_round_data(env: Env) -> RoundData {
        let round_id = latest_round_id(&env);
        Self::get_round_data(env, round_id)
    }

    fn get_round_data(env: Env, round_id: u64) -> RoundData {
        env.storage()
            .instance()
            .get(&DataKey::Round(round_id))
            .unwrap_or_else(|| panic_with_error!(&env, PriceFeedError::RoundNotFound))
    }
}

fn latest_round_id(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::LatestRound)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use pretty_assertions::assert_eq;
    use soroban_sdk::testutils::Ledger;

    #[test]
    fn returns_decimals_and_initial_price() {
        let env = Env::default();
        let feed = MockPriceFeedClient::new(&env, &env.register(MockPriceFeed, (8u32, 200_000_000_000i128)));

        assert_eq!(feed.decimals(), 8);
        assert_eq!(feed.latest_round_data().answer, 200_000_000_000);
        assert_eq!(feed.latest_round_data().round_id, 1);
    }

    #[test]
    fn update_opens_a_new_round() {
        let env = Env::default();
        let feed = MockPriceFeedClient::new(&env, &env.register(MockPriceFeed, (8u32, 200_000_000_000i128)));

        env.ledger().set_timestamp(1_000);
        assert_eq!(feed.update_answer(&300_000_000_000), 2);

        let latest = feed.latest_round_data();
        assert_eq!(
            latest,
            RoundData {
                round_id: 2,
                answer: 300_000_000_000,
                started_at: 1_000,
                updated_at: 1_000,
                answered_in_round: 2,
            }
        );
        assert_eq!(feed.get_round_data(&1).answer, 200_000_000_000);
    }

    #[test]
    fn unknown_round_is_rejected() {
        let env = Env::default();
        let feed = MockPriceFeedClient::new(&env, &env.register(MockPriceFeed, (8u32, 1i128)));

        assert_eq!(
            feed.try_get_round_data(&42),
            Err(Ok(PriceFeedError::RoundNotFound.into()))
        );
    }
}
