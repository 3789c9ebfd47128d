use crate::error::{BhoomiError, BhoomiResult};
use crate::marketplace::{
    filter_listings, marketplace_stats, unique_crops, unique_location_regions, MarketplaceStats,
};
use crate::models::{FilterCriteria, Listing, ListingType};
use crate::state::AppState;
use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Deserialize)]
pub struct ListingQuery {
    pub search: Option<String>,
    pub crop: Option<String>,
    #[serde(rename = "type")]
    pub listing_type: Option<String>,
    pub location: Option<String>,
}

impl ListingQuery {
    pub fn into_criteria(self) -> BhoomiResult<FilterCriteria> {
        let listing_type = match self.listing_type.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(raw.parse::<ListingType>().map_err(BhoomiError::Validation)?),
        };
        Ok(FilterCriteria {
            search_term: self.search,
            crop: self.crop,
            listing_type,
            location_substring: self.location,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct ListingView {
    #[serde(flatten)]
    pub listing: Listing,
    /// "quintals", or "pieces" for coconuts
    pub unit: &'static str,
}

impl From<Listing> for ListingView {
    fn from(listing: Listing) -> Self {
        let unit = listing.unit();
        Self { listing, unit }
    }
}

#[derive(Debug, Serialize)]
pub struct ListingPage {
    pub listings: Vec<ListingView>,
    pub shown: usize,
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct FilterOptions {
    pub crops: Vec<String>,
    pub regions: Vec<String>,
}

pub async fn get_listings(
    State(state): State<AppState>,
    Query(query): Query<ListingQuery>,
) -> BhoomiResult<Json<ListingPage>> {
    let criteria = query.into_criteria()?;
    let all = state.listings.all();
    let listings = filter_listings(all, &criteria);
    tracing::debug!("Listing search {:?} -> {} of {}", criteria, listings.len(), all.len());

    Ok(Json(ListingPage {
        shown: listings.len(),
        total: all.len(),
        listings: listings.into_iter().map(ListingView::from).collect(),
    }))
}

pub async fn get_filter_options(State(state): State<AppState>) -> Json<FilterOptions> {
    let all = state.listings.all();
    Json(FilterOptions {
        crops: unique_crops(all),
        regions: unique_location_regions(all),
    })
}

pub async fn get_marketplace_stats(State(state): State<AppState>) -> Json<MarketplaceStats> {
    Json(marketplace_stats(state.listings.all()))
}
