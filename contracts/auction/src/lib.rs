#![no_std]

mod auction;
mod contract;
mod errors;
mod events;
mod storage;

pub use crate::contract::{Auction, AuctionClient};
pub use crate::errors::ContractError;
pub use crate::storage::AuctionInfo;
