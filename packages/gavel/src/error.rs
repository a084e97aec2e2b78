use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ErrorCode {
    MathError = 900,
}

pub type GavelResult<T = ()> = Result<T, ErrorCode>;

/// Coarse failure category shared by every contract in the workspace.
///
/// Callers branch on the kind rather than on individual codes or log text.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// Bad construction or bid parameters.
    Validation,
    /// Caller is not allowed to perform the operation.
    Authorization,
    /// Balance or allowance shortfall reported by a fungible ledger.
    InsufficientFunds,
    /// The price feed reported unusable data.
    StaleData,
    /// Operation attempted at the wrong point of the auction lifecycle.
    Timing,
    Arithmetic,
}

pub trait Categorized {
    fn kind(&self) -> ErrorKind;
}

// Stellar Asset Contract error codes that signal a funds shortfall.
const LEDGER_ALLOWANCE_ERROR: u32 = 9;
const LEDGER_BALANCE_ERROR: u32 = 10;

impl ErrorKind {
    /// Classifies a contract error code raised by a SEP-41 ledger and
    /// propagated unchanged through an auction call.
    pub fn of_ledger_code(code: u32) -> Option<ErrorKind> {
        match code {
            LEDGER_ALLOWANCE_ERROR | LEDGER_BALANCE_ERROR => Some(ErrorKind::InsufficientFunds),
            _ => None,
        }
    }
}

impl Categorized for ErrorCode {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Arithmetic
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ledger_shortfall_codes_are_insufficient_funds() {
        assert_eq!(
            ErrorKind::of_ledger_code(9),
            Some(ErrorKind::InsufficientFunds)
        );
        assert_eq!(
            ErrorKind::of_ledger_code(10),
            Some(ErrorKind::InsufficientFunds)
        );
        assert_eq!(ErrorKind::of_ledger_code(4), None);
    }

    #[test]
    fn shared_code_is_arithmetic() {
        assert_eq!(ErrorCode::MathError.kind(), ErrorKind::Arithmetic);
    }
}
