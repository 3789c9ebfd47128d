pub mod filter;
pub mod stats;
pub mod store;

pub use filter::{filter_listings, unique_crops, unique_location_regions};
pub use stats::{marketplace_stats, MarketplaceStats};
pub use store::{ListingSource, SeedListings};
