mod asset_registry;
mod price_feed;

pub use asset_registry::{AssetRegistry, AssetRegistryClient};
pub use price_feed::{PriceFeed, PriceFeedClient};
