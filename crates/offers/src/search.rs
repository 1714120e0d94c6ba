//! Offer search engine: filter, sort, paginate.
//!
//! The pipeline order is fixed — filter, capture the total, sort, paginate —
//! so `total_count` always describes the filtered set, never the page.

use std::collections::BTreeSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use offerdesk_core::{AccountId, ValueObject, paginate};

use crate::offer::{Offer, OfferCategory, OfferStatus};

/// Page size applied when the caller does not choose one.
pub const DEFAULT_LIMIT: u32 = 20;

/// Sort key for search results.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SortBy {
    PriceAsc,
    PriceDesc,
    CreatedAsc,
    #[default]
    CreatedDesc,
    /// Case-insensitive lexical order.
    TitleAsc,
    TitleDesc,
    /// By view count, descending only.
    Popularity,
}

/// Composable search criteria.
///
/// Every filter is optional and absent filters always match; the specified
/// ones must all hold (AND). The one deliberate exception is the tag filter,
/// which is an OR across the requested tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchCriteria {
    /// Case-insensitive substring over title, description, and tags.
    pub query: Option<String>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub category: Option<OfferCategory>,
    pub status: Option<OfferStatus>,
    pub seller_id: Option<AccountId>,
    pub tags: Option<BTreeSet<String>>,
    pub sort_by: SortBy,
    pub limit: u32,
    pub offset: u32,
}

impl Default for SearchCriteria {
    fn default() -> Self {
        Self {
            query: None,
            min_price: None,
            max_price: None,
            category: None,
            status: None,
            seller_id: None,
            tags: None,
            sort_by: SortBy::default(),
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }
}

impl ValueObject for SearchCriteria {}

/// One result page plus the metadata needed to continue paging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub offers: Vec<Offer>,
    /// Size of the filtered set, before pagination was applied.
    pub total_count: u64,
    pub has_next: bool,
    pub has_previous: bool,
}

impl ValueObject for SearchResult {}

/// Run the full search pipeline over a collection.
pub fn search_offers(offers: Vec<Offer>, criteria: &SearchCriteria) -> SearchResult {
    let mut matched: Vec<Offer> = offers
        .into_iter()
        .filter(|offer| matches(offer, criteria))
        .collect();

    let total_count = matched.len() as u64;

    sort(&mut matched, criteria.sort_by);

    let page = paginate(
        matched,
        Some(criteria.offset as usize),
        Some(criteria.limit as usize),
    );

    SearchResult {
        offers: page,
        total_count,
        has_next: u64::from(criteria.offset) + u64::from(criteria.limit) < total_count,
        has_previous: criteria.offset > 0,
    }
}

fn matches(offer: &Offer, criteria: &SearchCriteria) -> bool {
    let query_match = criteria.query.as_deref().is_none_or(|query| {
        let term = query.to_lowercase();
        offer.title.to_lowercase().contains(&term)
            || offer.description.to_lowercase().contains(&term)
            || offer.tags.iter().any(|tag| tag.to_lowercase().contains(&term))
    });

    let price_match = criteria.min_price.is_none_or(|min| offer.price >= min)
        && criteria.max_price.is_none_or(|max| offer.price <= max);

    let category_match = criteria.category.is_none_or(|category| offer.category == category);
    let status_match = criteria.status.is_none_or(|status| offer.status == status);
    let seller_match = criteria
        .seller_id
        .as_ref()
        .is_none_or(|seller| offer.seller_id == *seller);

    // OR across requested tags, substring match against any offer tag.
    let tags_match = criteria.tags.as_ref().is_none_or(|wanted| {
        wanted.iter().any(|wanted_tag| {
            let wanted_tag = wanted_tag.to_lowercase();
            offer
                .tags
                .iter()
                .any(|offer_tag| offer_tag.to_lowercase().contains(&wanted_tag))
        })
    });

    query_match && price_match && category_match && status_match && seller_match && tags_match
}

/// Stable sort by the selected key: ties keep their pre-sort order.
fn sort(offers: &mut [Offer], sort_by: SortBy) {
    match sort_by {
        SortBy::PriceAsc => offers.sort_by(|a, b| a.price.cmp(&b.price)),
        SortBy::PriceDesc => offers.sort_by(|a, b| b.price.cmp(&a.price)),
        SortBy::CreatedAsc => offers.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
        SortBy::CreatedDesc => offers.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortBy::TitleAsc => {
            offers.sort_by(|a, b| a.title.to_lowercase().cmp(&b.title.to_lowercase()));
        }
        SortBy::TitleDesc => {
            offers.sort_by(|a, b| b.title.to_lowercase().cmp(&a.title.to_lowercase()));
        }
        SortBy::Popularity => offers.sort_by(|a, b| b.view_count.cmp(&a.view_count)),
    }
}
