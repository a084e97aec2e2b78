use gavel::{
    constants::{PERSISTENT_BUMP_AMOUNT, PERSISTENT_LIFETIME_THRESHOLD},
    types::{FeeDestination, HighestBid},
};
use soroban_sdk::{contracttype, log, Address, ConversionError, Env, TryFromVal, Val};

use crate::errors::ContractError;

#[derive(Clone, Copy)]
#[repr(u32)]
pub enum DataKey {
    Info = 1,
    HighestBid = 2,
    Ended = 3,
}

impl TryFromVal<Env, DataKey> for Val {
    type Error = ConversionError;

    fn try_from_val(_env: &Env, v: &DataKey) -> Result<Self, Self::Error> {
        Ok((*v as u32).into())
    }
}

/// Everything fixed at `initialize`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionInfo {
    /// Registry holding the auctioned asset
    pub asset_contract: Address,
    pub asset_id: u32,
    pub seller: Address,
    /// Allowed to withdraw retained fees once the auction is settled
    pub admin: Address,
    /// Deadline as a ledger timestamp
    pub end_time: u64,
    pub fee_bps: u32,
    /// SEP-41 token accepted by `bid_fungible`
    pub ledger_token: Address,
    /// Native asset contract used by `bid_native`
    pub native_token: Address,
    pub oracle: Address,
    pub fee_destination: FeeDestination,
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().persistent().has(&DataKey::Info)
}

pub fn save_info(env: &Env, info: &AuctionInfo) {
    env.storage().persistent().set(&DataKey::Info, info);
    env.storage().persistent().extend_ttl(
        &DataKey::Info,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );
}

pub fn get_info(env: &Env) -> Result<AuctionInfo, ContractError> {
    let info = env
        .storage()
        .persistent()
        .get(&DataKey::Info)
        .ok_or_else(|| {
            log!(env, "Auction: instance has not been initialized");
            ContractError::NotInitialized
        })?;

    env.storage().persistent().extend_ttl(
        &DataKey::Info,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );

    Ok(info)
}

pub fn get_highest_bid(env: &Env) -> HighestBid {
    let highest_bid = env
        .storage()
        .persistent()
        .get(&DataKey::HighestBid)
        .unwrap_or_else(HighestBid::empty);

    env.storage()
        .persistent()
        .has(&DataKey::HighestBid)
        .then(|| {
            env.storage().persistent().extend_ttl(
                &DataKey::HighestBid,
                PERSISTENT_LIFETIME_THRESHOLD,
                PERSISTENT_BUMP_AMOUNT,
            );
        });

    highest_bid
}

pub fn save_highest_bid(env: &Env, highest_bid: &HighestBid) {
    env.storage()
        .persistent()
        .set(&DataKey::HighestBid, highest_bid);
    env.storage().persistent().extend_ttl(
        &DataKey::HighestBid,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );
}

pub fn is_ended(env: &Env) -> bool {
    env.storage()
        .persistent()
        .get(&DataKey::Ended)
        .unwrap_or(false)
}

pub fn set_ended(env: &Env) {
    env.storage().persistent().set(&DataKey::Ended, &true);
    env.storage().persistent().extend_ttl(
        &DataKey::Ended,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );
}
