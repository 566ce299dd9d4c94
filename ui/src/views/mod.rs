mod marketplace;
pub use marketplace::{FarmerMarketplace, MarketplacePage, MarketplacePageProps};
