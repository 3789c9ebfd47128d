use crate::models::{Listing, ListingType};
use serde::Serialize;
use std::collections::HashSet;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketplaceStats {
    pub total: usize,
    pub sell: usize,
    pub buy: usize,
    pub distinct_crops: usize,
}

pub fn marketplace_stats(listings: &[Listing]) -> MarketplaceStats {
    let mut crops = HashSet::new();
    let mut stats = listings
        .iter()
        .fold(MarketplaceStats::default(), |mut acc, l| {
            acc.total += 1;
            match l.listing_type {
                ListingType::Sell => acc.sell += 1,
                ListingType::Buy => acc.buy += 1,
            }
            crops.insert(l.crop.as_str());
            acc
        });
    stats.distinct_crops = crops.len();
    stats
}
