#![no_std]

mod contract;
mod errors;
mod events;
mod factory;
mod storage;
mod utils;

pub use contract::{AuctionFactory, AuctionFactoryClient};
pub use errors::ContractError;
pub use storage::FactoryConfig;

#[cfg(test)]
mod tests;
