//! In-process stand-ins for the external collaborators, for contract tests.

mod asset_registry;
mod price_feed;

pub use asset_registry::{MockAssetRegistry, MockAssetRegistryClient, RegistryError};
pub use price_feed::{MockPriceFeed, MockPriceFeedClient, PriceFeedError};
