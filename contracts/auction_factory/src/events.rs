use gavel::types::FeeDestination;
use soroban_sdk::{Address, Env, Symbol};

pub struct FactoryEvents {}

impl FactoryEvents {
    /// - topics - `["initialize", owner: Address]`
    /// - data - `[native_token: Address, fee_destination: FeeDestination]`
    pub fn initialize(
        env: &Env,
        owner: Address,
        native_token: Address,
        fee_destination: FeeDestination,
    ) {
        let topics = (Symbol::new(env, "initialize"), owner);
        env.events().publish(topics, (native_token, fee_destination));
    }

    /// Emitted for every instance created by the factory
    ///
    /// - topics - `["auction_deployed", instance: Address]`
    /// - data - `[seller: Address, asset_contract: Address, asset_id: u32]`
    pub fn auction_deployed(
        env: &Env,
        instance: Address,
        seller: Address,
        asset_contract: Address,
        asset_id: u32,
    ) {
        let topics = (Symbol::new(env, "auction_deployed"), instance);
        env.events()
            .publish(topics, (seller, asset_contract, asset_id));
    }

    /// - topics - `["migrate"]`
    /// - data - `[version: u32]`
    pub fn migrate(env: &Env, version: u32) {
        let topics = (Symbol::new(env, "migrate"),);
        env.events().publish(topics, version);
    }

    /// - topics - `["transfer_ownership", previous_owner: Address]`
    /// - data - `[new_owner: Address]`
    pub fn transfer_ownership(env: &Env, previous_owner: Address, new_owner: Address) {
        let topics = (Symbol::new(env, "transfer_ownership"), previous_owner);
        env.events().publish(topics, new_owner);
    }
}
