use soroban_sdk::{Address, Env, Symbol};

pub struct AuctionEvents {}

impl AuctionEvents {
    /// Emitted once the instance has been set up
    ///
    /// - topics - `["initialize", seller: Address]`
    /// - data - `[asset_contract: Address, asset_id: u32, end_time: u64]`
    pub fn initialize(
        env: &Env,
        seller: Address,
        asset_contract: Address,
        asset_id: u32,
        end_time: u64,
    ) {
        let topics = (Symbol::new(env, "initialize"), seller);
        env.events()
            .publish(topics, (asset_contract, asset_id, end_time));
    }

    /// Emitted when a bid takes the lead
    ///
    /// - topics - `["new_bid", bidder: Address]`
    /// - data - `[amount: i128, is_fungible: bool]`
    pub fn new_bid(env: &Env, bidder: Address, amount: i128, is_fungible: bool) {
        let topics = (Symbol::new(env, "new_bid"), bidder);
        env.events().publish(topics, (amount, is_fungible));
    }

    /// Emitted on settlement. `winner` is `None` when nobody bid and the
    /// asset went back to the seller.
    ///
    /// - topics - `["auction_ended"]`
    /// - data - `[winner: Option<Address>, amount: i128]`
    pub fn auction_ended(env: &Env, winner: Option<Address>, amount: i128) {
        let topics = (Symbol::new(env, "auction_ended"),);
        env.events().publish(topics, (winner, amount));
    }

    /// Emitted when retained fees leave the instance
    ///
    /// - topics - `["withdraw_fees", to: Address]`
    /// - data - `[native_amount: i128, fungible_amount: i128]`
    pub fn withdraw_fees(env: &Env, to: Address, native_amount: i128, fungible_amount: i128) {
        let topics = (Symbol::new(env, "withdraw_fees"), to);
        env.events()
            .publish(topics, (native_amount, fungible_amount));
    }
}
