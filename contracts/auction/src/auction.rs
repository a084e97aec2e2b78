use gavel::types::{FeeDestination, HighestBid};
use soroban_sdk::{Address, Env};

use crate::{errors::ContractError, storage::AuctionInfo};

pub trait AuctionTrait {
    /// One-time setup, authorized by the seller. The asset must already be
    /// held by this instance. No bids are accepted before this succeeds.
    #[allow(clippy::too_many_arguments)]
    fn initialize(
        env: Env,
        asset_contract: Option<Address>,
        asset_id: u32,
        seller: Address,
        admin: Address,
        duration: u64,
        ledger_token: Address,
        native_token: Address,
        oracle: Option<Address>,
        fee_bps: u32,
        fee_destination: FeeDestination,
    ) -> Result<(), ContractError>;

    /// Bid in the native currency. The amount is pulled from the bidder
    /// under the bidder's own signature.
    fn bid_native(env: Env, bidder: Address, amount: i128) -> Result<(), ContractError>;

    /// Bid with the fungible ledger token. The bidder must have granted this
    /// instance an allowance of at least `amount`.
    fn bid_fungible(env: Env, bidder: Address, amount: i128) -> Result<(), ContractError>;

    /// Settles the auction. Callable by anyone once the deadline has passed,
    /// and only once.
    fn end_auction(env: Env) -> Result<(), ContractError>;

    /// Sends every retained fee held after settlement to `to`. Only `admin`
    /// may call it.
    fn withdraw_fees(env: Env, to: Address) -> Result<(), ContractError>;

    // ################################################################
    //                             Queries
    // ################################################################

    fn get_bid_usd_value(env: Env, amount: i128, is_fungible: bool) -> Result<i128, ContractError>;

    fn get_info(env: Env) -> Result<AuctionInfo, ContractError>;

    fn get_highest_bid(env: Env) -> HighestBid;

    fn is_ended(env: Env) -> bool;

    /// Seconds until the deadline, zero once it has passed.
    fn time_left(env: Env) -> Result<u64, ContractError>;
}
