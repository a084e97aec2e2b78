use gavel::error::{Categorized, ErrorCode as SharedErrorCode, ErrorKind};
use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    AlreadyInitialized = 101,
    NotInitialized = 102,
    InvalidAssetContract = 103,
    InvalidDuration = 104,
    InvalidFee = 105,
    InvalidOracle = 106,
    SellerCannotBid = 107,
    InvalidBidAmount = 108,
    BidTooLow = 109,
    BiddingClosed = 110,
    AuctionNotYetEnded = 111,
    AuctionAlreadyEnded = 112,
    InvalidPriceData = 113,
    MathError = 114,
    AssetNotInCustody = 115,
}

impl Categorized for ContractError {
    fn kind(&self) -> ErrorKind {
        match self {
            ContractError::AlreadyInitialized
            | ContractError::NotInitialized
            | ContractError::InvalidAssetContract
            | ContractError::InvalidDuration
            | ContractError::InvalidFee
            | ContractError::InvalidOracle
            | ContractError::AssetNotInCustody
            | ContractError::InvalidBidAmount
            | ContractError::BidTooLow => ErrorKind::Validation,
            ContractError::SellerCannotBid => ErrorKind::Authorization,
            ContractError::BiddingClosed
            | ContractError::AuctionNotYetEnded
            | ContractError::AuctionAlreadyEnded => ErrorKind::Timing,
            ContractError::InvalidPriceData => ErrorKind::StaleData,
            ContractError::MathError => ErrorKind::Arithmetic,
        }
    }
}

impl From<SharedErrorCode> for ContractError {
    fn from(_: SharedErrorCode) -> Self {
        ContractError::MathError
    }
}
