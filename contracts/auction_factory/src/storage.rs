use gavel::{
    constants::{PERSISTENT_BUMP_AMOUNT, PERSISTENT_LIFETIME_THRESHOLD},
    types::FeeDestination,
};
use soroban_sdk::{
    contracttype, log, Address, BytesN, ConversionError, Env, TryFromVal, Val, Vec,
};

use crate::errors::ContractError;

#[derive(Clone, Copy)]
#[repr(u32)]
pub enum DataKey {
    Config = 1,
    AuctionVec = 2,
    Initialized = 3,
}

impl TryFromVal<Env, DataKey> for Val {
    type Error = ConversionError;

    fn try_from_val(_env: &Env, v: &DataKey) -> Result<Self, Self::Error> {
        Ok((*v as u32).into())
    }
}

/// Settings applied to every auction created from now on. Each `migrate`
/// bumps `version`; instances created earlier keep what they were given.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FactoryConfig {
    pub version: u32,
    pub owner: Address,
    pub auction_wasm_hash: BytesN<32>,
    pub native_token: Address,
    pub fee_destination: FeeDestination,
}

pub fn save_config(env: &Env, config: &FactoryConfig) {
    env.storage().persistent().set(&DataKey::Config, config);
    env.storage().persistent().extend_ttl(
        &DataKey::Config,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );
}

pub fn get_config(env: &Env) -> Result<FactoryConfig, ContractError> {
    let config = env
        .storage()
        .persistent()
        .get(&DataKey::Config)
        .ok_or_else(|| {
            log!(env, "Factory: config not set");
            ContractError::NotInitialized
        })?;

    env.storage().persistent().extend_ttl(
        &DataKey::Config,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );

    Ok(config)
}

pub fn get_auction_vec(env: &Env) -> Vec<Address> {
    let auction_vec = env
        .storage()
        .persistent()
        .get(&DataKey::AuctionVec)
        .unwrap_or_else(|| Vec::new(env));

    env.storage()
        .persistent()
        .has(&DataKey::AuctionVec)
        .then(|| {
            env.storage().persistent().extend_ttl(
                &DataKey::AuctionVec,
                PERSISTENT_LIFETIME_THRESHOLD,
                PERSISTENT_BUMP_AMOUNT,
            );
        });

    auction_vec
}

pub fn save_auction_vec(env: &Env, auction_vec: &Vec<Address>) {
    env.storage()
        .persistent()
        .set(&DataKey::AuctionVec, auction_vec);
    env.storage().persistent().extend_ttl(
        &DataKey::AuctionVec,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage()
        .persistent()
        .get(&DataKey::Initialized)
        .unwrap_or(false)
}

pub fn set_initialized(env: &Env) {
    env.storage().persistent().set(&DataKey::Initialized, &true);
    env.storage().persistent().extend_ttl(
        &DataKey::Initialized,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );
}
