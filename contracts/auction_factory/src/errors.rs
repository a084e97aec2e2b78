use gavel::error::{Categorized, ErrorCode as SharedErrorCode, ErrorKind};
use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    AlreadyInitialized = 201,
    NotInitialized = 202,
    NotAuthorized = 203,
    InvalidAssetContract = 204,
    InvalidDuration = 205,
    InvalidFee = 206,
    InvalidOracle = 207,
    MathError = 208,
    UnknownAuction = 209,
}

impl From<SharedErrorCode> for ContractError {
    fn from(error: SharedErrorCode) -> Self {
        match error {
            SharedErrorCode::MathError => ContractError::MathError,
        }
    }
}

impl Categorized for ContractError {
    fn kind(&self) -> ErrorKind {
        match self {
            ContractError::NotAuthorized => ErrorKind::Authorization,
            ContractError::MathError => ErrorKind::Arithmetic,
            _ => ErrorKind::Validation,
        }
    }
}
