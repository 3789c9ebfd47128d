use crate::models::{FilterCriteria, Listing};
use std::collections::BTreeSet;

/// Whitespace-only terms do not constrain. Any other term is matched as
/// typed, surrounding spaces included.
fn constraint(field: &Option<String>) -> Option<String> {
    field
        .as_deref()
        .filter(|s| !s.trim().is_empty())
        .map(str::to_lowercase)
}

/// Reduces `listings` to the entries matching every present criterion.
/// Blank criteria do not constrain; relative order is preserved.
pub fn filter_listings(listings: &[Listing], criteria: &FilterCriteria) -> Vec<Listing> {
    let search = constraint(&criteria.search_term);
    let crop = constraint(&criteria.crop);
    let location = constraint(&criteria.location_substring);

    listings
        .iter()
        .filter(|l| {
            search.as_deref().map_or(true, |term| {
                [
                    &l.crop,
                    &l.variety,
                    &l.location,
                    &l.description,
                    &l.seller_name,
                ]
                .iter()
                .any(|field| field.to_lowercase().contains(term))
            })
        })
        .filter(|l| crop.as_deref().map_or(true, |c| l.crop.to_lowercase() == c))
        .filter(|l| {
            criteria
                .listing_type
                .map_or(true, |t| l.listing_type == t)
        })
        .filter(|l| {
            location
                .as_deref()
                .map_or(true, |loc| l.location.to_lowercase().contains(loc))
        })
        .cloned()
        .collect()
}

/// Distinct crop names in case-sensitive ascending order.
pub fn unique_crops(listings: &[Listing]) -> Vec<String> {
    listings
        .iter()
        .map(|l| l.crop.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Distinct non-empty states taken from the "<city>, <state>" location.
pub fn unique_location_regions(listings: &[Listing]) -> Vec<String> {
    listings
        .iter()
        .filter_map(|l| l.region())
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
