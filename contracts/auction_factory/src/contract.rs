use gavel::{
    constants::{BPS_DENOMINATOR, INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD},
    interfaces::AssetRegistryClient,
    math::safe_math::SafeMath,
    types::FeeDestination,
};
use soroban_sdk::{
    contract, contractimpl, contractmeta, log, Address, BytesN, Env, IntoVal, Symbol, Val, Vec,
};

use crate::{
    errors::ContractError,
    events::FactoryEvents,
    factory::AuctionFactoryTrait,
    storage::{
        get_auction_vec, get_config, is_initialized, save_auction_vec, save_config,
        set_initialized, FactoryConfig,
    },
    utils::{auction_address, auction_salt, deploy_auction_contract},
};

contractmeta!(
    key = "Description",
    val = "Factory deploying single-asset auction instances"
);

#[contract]
pub struct AuctionFactory;

#[contractimpl]
impl AuctionFactoryTrait for AuctionFactory {
    fn initialize(
        env: Env,
        owner: Address,
        auction_wasm_hash: BytesN<32>,
        native_token: Address,
        fee_destination: FeeDestination,
    ) -> Result<(), ContractError> {
        if is_initialized(&env) {
            log!(
                &env,
                "Factory: Initialize: initializing contract twice is not allowed"
            );
            return Err(ContractError::AlreadyInitialized);
        }
        owner.require_auth();

        set_initialized(&env);
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        save_config(
            &env,
            &FactoryConfig {
                version: 1,
                owner: owner.clone(),
                auction_wasm_hash,
                native_token: native_token.clone(),
                fee_destination: fee_destination.clone(),
            },
        );
        save_auction_vec(&env, &Vec::new(&env));

        FactoryEvents::initialize(&env, owner, native_token, fee_destination);

        Ok(())
    }

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
    ) -> Result<Address, ContractError> {
        seller.require_auth();
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        let config = get_config(&env)?;

        let asset_contract = asset_contract.ok_or_else(|| {
            log!(&env, "Factory: Create auction: asset contract is not set");
            ContractError::InvalidAssetContract
        })?;

        if duration == 0 {
            log!(&env, "Factory: Create auction: duration must be positive");
            return Err(ContractError::InvalidDuration);
        }

        if fee_bps >= BPS_DENOMINATOR {
            log!(
                &env,
                "Factory: Create auction: fee must be below {} bps",
                BPS_DENOMINATOR
            );
            return Err(ContractError::InvalidFee);
        }

        if oracle.is_none() {
            log!(&env, "Factory: Create auction: price feed is not set");
            return Err(ContractError::InvalidOracle);
        }

        let mut auction_vec = get_auction_vec(&env);
        let salt = auction_salt(&env, auction_vec.len(), &asset_contract, asset_id);
        let auction = auction_address(&env, &salt);

        AssetRegistryClient::new(&env, &asset_contract).transfer_from(
            &env.current_contract_address(),
            &seller,
            &auction,
            &asset_id,
        );

        let deployed = deploy_auction_contract(&env, config.auction_wasm_hash, salt);

        let init_fn = Symbol::new(&env, "initialize");
        let init_args: Vec<Val> = (
            Some(asset_contract.clone()),
            asset_id,
            seller.clone(),
            env.current_contract_address(),
            duration,
            ledger_token,
            config.native_token,
            oracle,
            fee_bps,
            config.fee_destination,
        )
            .into_val(&env);
        env.invoke_contract::<()>(&deployed, &init_fn, init_args);

        auction_vec.push_back(deployed.clone());
        save_auction_vec(&env, &auction_vec);

        FactoryEvents::auction_deployed(&env, deployed.clone(), seller, asset_contract, asset_id);

        Ok(deployed)
    }

    fn migrate(
        env: Env,
        sender: Address,
        new_wasm_hash: Option<BytesN<32>>,
        new_fee_destination: Option<FeeDestination>,
    ) -> Result<u32, ContractError> {
        sender.require_auth();
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        let config = get_config(&env)?;
        if config.owner != sender {
            log!(&env, "Factory: Migrate: You are not authorized!");
            return Err(ContractError::NotAuthorized);
        }

        let version = config.version.safe_add(1, &env)?;
        save_config(
            &env,
            &FactoryConfig {
                version,
                auction_wasm_hash: new_wasm_hash.unwrap_or(config.auction_wasm_hash),
                fee_destination: new_fee_destination.unwrap_or(config.fee_destination),
                ..config
            },
        );

        FactoryEvents::migrate(&env, version);

        Ok(version)
    }

    fn transfer_ownership(env: Env, sender: Address, new_owner: Address) -> Result<(), ContractError> {
        sender.require_auth();
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        let config = get_config(&env)?;
        if config.owner != sender {
            log!(&env, "Factory: Transfer ownership: You are not authorized!");
            return Err(ContractError::NotAuthorized);
        }

        save_config(
            &env,
            &FactoryConfig {
                owner: new_owner.clone(),
                ..config
            },
        );

        FactoryEvents::transfer_ownership(&env, sender, new_owner);

        Ok(())
    }

    fn withdraw_fees(env: Env, sender: Address, auction: Address) -> Result<(), ContractError> {
        sender.require_auth();
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        let config = get_config(&env)?;
        if config.owner != sender {
            log!(&env, "Factory: Withdraw fees: You are not authorized!");
            return Err(ContractError::NotAuthorized);
        }

        if !get_auction_vec(&env).contains(&auction) {
            log!(&env, "Factory: Withdraw fees: auction was not deployed by this factory");
            return Err(ContractError::UnknownAuction);
        }

        let withdraw_fn = Symbol::new(&env, "withdraw_fees");
        let withdraw_args: Vec<Val> = (config.owner,).into_val(&env);
        env.invoke_contract::<()>(&auction, &withdraw_fn, withdraw_args);

        Ok(())
    }

    // ################################################################
    //                             Queries
    // ################################################################

    fn get_auctions(env: Env) -> Vec<Address> {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
        get_auction_vec(&env)
    }

    fn get_auctions_page(env: Env, start: u32, limit: u32) -> Vec<Address> {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        let auction_vec = get_auction_vec(&env);
        let len = auction_vec.len();
        if start >= len {
            return Vec::new(&env);
        }

        let end = start.saturating_add(limit).min(len);
        auction_vec.slice(start..end)
    }

    fn auction_count(env: Env) -> u32 {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
        get_auction_vec(&env).len()
    }

    fn get_config(env: Env) -> Result<FactoryConfig, ContractError> {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
        get_config(&env)
    }

    fn get_owner(env: Env) -> Result<Address, ContractError> {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
        Ok(get_config(&env)?.owner)
    }
}
