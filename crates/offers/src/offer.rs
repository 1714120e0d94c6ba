use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use url::Url;

use offerdesk_core::{AccountId, Entity, OfferId};

/// Offer status lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OfferStatus {
    /// Created but not published.
    Draft,
    /// Live and available to buyers.
    Active,
    /// Temporarily disabled by the seller.
    Suspended,
    /// Expired or deactivated.
    Expired,
}

/// Closed set of catalog categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OfferCategory {
    Electronics,
    Fashion,
    Home,
    Books,
    Sports,
    Automotive,
    Other,
}

/// A sellable listing.
///
/// Offers are immutable records: every mutation goes through a copy-on-write
/// method that returns a fresh `Offer` with the same `id` and a refreshed
/// `updated_at`. Field content is unconstrained here; the validation engine
/// owns every length, range, and content rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Offer {
    pub id: OfferId,
    pub title: String,
    pub description: String,
    pub price: Decimal,
    pub category: OfferCategory,
    pub status: OfferStatus,
    pub image_url: Url,
    pub seller_id: AccountId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
    pub tags: BTreeSet<String>,
    pub view_count: u64,
}

impl Offer {
    /// Create a fresh draft with no expiration, no tags, and a zero view count.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: OfferId,
        title: impl Into<String>,
        description: impl Into<String>,
        price: Decimal,
        category: OfferCategory,
        image_url: Url,
        seller_id: AccountId,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            price,
            category,
            status: OfferStatus::Draft,
            image_url,
            seller_id,
            created_at: now,
            updated_at: now,
            expires_at: None,
            tags: BTreeSet::new(),
            view_count: 0,
        }
    }

    /// Whether the offer has an expiration instant strictly in the past.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|expires_at| expires_at < now)
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    /// Active means published AND not past its expiration.
    pub fn is_active_at(&self, now: DateTime<Utc>) -> bool {
        self.status == OfferStatus::Active && !self.is_expired_at(now)
    }

    pub fn is_active(&self) -> bool {
        self.is_active_at(Utc::now())
    }

    /// Only drafts and suspended offers accept content edits.
    pub fn can_be_modified(&self) -> bool {
        matches!(self.status, OfferStatus::Draft | OfferStatus::Suspended)
    }

    /// Copy-on-write status change: same `id`, refreshed `updated_at`.
    pub fn with_status(&self, status: OfferStatus, now: DateTime<Utc>) -> Self {
        Self {
            status,
            updated_at: now,
            ..self.clone()
        }
    }

    pub fn activate(&self, now: DateTime<Utc>) -> Self {
        self.with_status(OfferStatus::Active, now)
    }

    pub fn suspend(&self, now: DateTime<Utc>) -> Self {
        self.with_status(OfferStatus::Suspended, now)
    }

    pub fn expire(&self, now: DateTime<Utc>) -> Self {
        self.with_status(OfferStatus::Expired, now)
    }
}

impl Entity for Offer {
    type Id = OfferId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn test_offer(now: DateTime<Utc>) -> Offer {
        Offer::new(
            OfferId::new(1),
            "Mountain bike, 29-inch wheels",
            "Hardtail mountain bike with a recently serviced drivetrain and new tires.",
            Decimal::new(25_000, 2),
            OfferCategory::Sports,
            Url::parse("https://img.example.com/bike.jpg").unwrap(),
            AccountId::new("seller-1"),
            now,
        )
    }

    #[test]
    fn new_offer_starts_as_unexpiring_draft() {
        let now = Utc::now();
        let offer = test_offer(now);
        assert_eq!(offer.status, OfferStatus::Draft);
        assert_eq!(offer.expires_at, None);
        assert_eq!(offer.created_at, now);
        assert_eq!(offer.updated_at, now);
        assert_eq!(offer.view_count, 0);
        assert!(offer.tags.is_empty());
    }

    #[test]
    fn expiry_is_strictly_in_the_past() {
        let now = Utc::now();
        let mut offer = test_offer(now);

        offer.expires_at = Some(now - Duration::seconds(1));
        assert!(offer.is_expired_at(now));

        offer.expires_at = Some(now);
        assert!(!offer.is_expired_at(now), "an offer expiring exactly now is not yet expired");

        offer.expires_at = None;
        assert!(!offer.is_expired_at(now));
    }

    #[test]
    fn active_requires_status_and_unexpired() {
        let now = Utc::now();
        let mut offer = test_offer(now);
        assert!(!offer.is_active_at(now), "drafts are never active");

        offer.status = OfferStatus::Active;
        offer.expires_at = Some(now + Duration::days(3));
        assert!(offer.is_active_at(now));

        offer.expires_at = Some(now - Duration::days(1));
        assert!(!offer.is_active_at(now), "past expiry overrides the status");
    }

    #[test]
    fn only_draft_and_suspended_are_modifiable() {
        let now = Utc::now();
        let offer = test_offer(now);
        assert!(offer.can_be_modified());
        assert!(offer.suspend(now).can_be_modified());
        assert!(!offer.activate(now).can_be_modified());
        assert!(!offer.expire(now).can_be_modified());
    }

    #[test]
    fn transitions_copy_rather_than_mutate() {
        let now = Utc::now();
        let later = now + Duration::minutes(5);
        let offer = test_offer(now);

        let activated = offer.activate(later);
        assert_eq!(offer.status, OfferStatus::Draft, "the original is untouched");
        assert_eq!(activated.status, OfferStatus::Active);
        assert_eq!(activated.id, offer.id);
        assert_eq!(activated.created_at, offer.created_at);
        assert_eq!(activated.updated_at, later);
        assert_eq!(activated.seller_id, offer.seller_id);
    }
}
