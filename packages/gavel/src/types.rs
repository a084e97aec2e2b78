use soroban_sdk::{contracttype, Address};

/// Where the settlement fee ends up once it has been deducted from the
/// seller's payout.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FeeDestination {
    /// The fee stays in the auction instance.
    Retained,
    /// The fee is forwarded to the given account at settlement, in the
    /// currency of the winning bid.
    Treasury(Address),
}

/// Current leader of an auction.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HighestBid {
    /// `None` until the first bid is accepted
    pub bidder: Option<Address>,
    pub amount: i128,
    /// Whether the bid was paid through the fungible ledger. Drives the
    /// currency of the refund when the bid is displaced and of the payout
    /// when it wins.
    pub is_fungible: bool,
}

impl HighestBid {
    pub fn empty() -> Self {
        HighestBid {
            bidder: None,
            amount: 0,
            is_fungible: false,
        }
    }
}

/// One price round as reported by a [`crate::interfaces::PriceFeed`].
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RoundData {
    pub round_id: u64,
    pub answer: i128,
    pub started_at: u64,
    pub updated_at: u64,
    pub answered_in_round: u64,
}
