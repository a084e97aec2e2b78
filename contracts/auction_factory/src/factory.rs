use gavel::types::FeeDestination;
use soroban_sdk::{Address, BytesN, Env, Vec};

use crate::{errors::ContractError, storage::FactoryConfig};

pub trait AuctionFactoryTrait {
    fn initialize(
        env: Env,
        owner: Address,
        auction_wasm_hash: BytesN<32>,
        native_token: Address,
        fee_destination: FeeDestination,
    ) -> Result<(), ContractError>;

    /// Deploys a new auction for `asset_id` with the caller as seller.
    ///
    /// The seller must have approved the factory on the asset registry
    /// beforehand; the asset is moved straight into the new instance.
    #[allow(clippy::too_many_arguments)]
    fn create_auction(
        env: Env,
        seller: Address,
        asset_contract: Option<Address>,
        asset_id: u32,
        duration: u64,
        ledger_token: Address,
        oracle: Option<Address>,
        fee_bps: u32,
    ) -> Result<Address, ContractError>;

    /// Replaces the template and/or fee destination used for future
    /// auctions. Returns the new config version.
    fn migrate(
        env: Env,
        sender: Address,
        new_wasm_hash: Option<BytesN<32>>,
        new_fee_destination: Option<FeeDestination>,
    ) -> Result<u32, ContractError>;

    fn transfer_ownership(env: Env, sender: Address, new_owner: Address) -> Result<(), ContractError>;

    /// Sweeps the retained fees of a settled auction deployed by this
    /// factory to the owner.
    fn withdraw_fees(env: Env, sender: Address, auction: Address) -> Result<(), ContractError>;

    // ################################################################
    //                             Queries
    // ################################################################

    fn get_auctions(env: Env) -> Vec<Address>;

    /// Up to `limit` auctions starting at position `start`, in creation order.
    fn get_auctions_page(env: Env, start: u32, limit: u32) -> Vec<Address>;

    fn auction_count(env: Env) -> u32;

    fn get_config(env: Env) -> Result<FactoryConfig, ContractError>;

    fn get_owner(env: Env) -> Result<Address, ContractError>;
}
