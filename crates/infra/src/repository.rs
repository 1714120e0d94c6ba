//! In-memory offer store.

use std::collections::{BTreeMap, HashMap};
use std::sync::RwLock;

use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use url::Url;

use offerdesk_core::{AccountId, DomainError, DomainResult, OfferId};
use offerdesk_offers::{Offer, OfferCategory, OfferStatus, OffersRepository};

#[derive(Debug, Default)]
struct Catalog {
    offers: BTreeMap<OfferId, Offer>,
    by_seller: HashMap<AccountId, Vec<OfferId>>,
}

/// In-memory offer repository.
///
/// Dual-indexed: by offer id for lookups and updates, by seller for
/// ownership queries. Listing order is offer-id order, which keeps every
/// downstream sort deterministic. Intended for tests/dev. Not optimized for
/// performance.
#[derive(Debug, Default)]
pub struct InMemoryOffersRepository {
    catalog: RwLock<Catalog>,
}

impl InMemoryOffersRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// A small pre-seeded catalog for demos and tests.
    ///
    /// Seeding goes straight through [`OffersRepository::add_offer`], so the
    /// demo data obeys the same dual-index bookkeeping as live writes.
    pub fn with_demo_catalog(now: DateTime<Utc>) -> Self {
        let repository = Self::new();
        for offer in demo_offers(now) {
            let seller = offer.seller_id.clone();
            // A fresh store cannot collide on the fixed demo ids.
            repository
                .add_offer(&seller, offer)
                .unwrap_or_else(|e| unreachable!("seeding an empty store failed: {e}"));
        }
        repository
    }

    /// Ids owned by one seller, in insertion order.
    pub fn offer_ids_for_seller(&self, account_id: &AccountId) -> DomainResult<Vec<OfferId>> {
        let catalog = self.read_catalog()?;
        Ok(catalog
            .by_seller
            .get(account_id)
            .cloned()
            .unwrap_or_default())
    }

    fn read_catalog(&self) -> DomainResult<std::sync::RwLockReadGuard<'_, Catalog>> {
        self.catalog
            .read()
            .map_err(|_| DomainError::storage("offer store lock poisoned"))
    }

    fn write_catalog(&self) -> DomainResult<std::sync::RwLockWriteGuard<'_, Catalog>> {
        self.catalog
            .write()
            .map_err(|_| DomainError::storage("offer store lock poisoned"))
    }
}

impl OffersRepository for InMemoryOffersRepository {
    fn add_offer(&self, account_id: &AccountId, offer: Offer) -> DomainResult<()> {
        let mut catalog = self.write_catalog()?;
        if catalog.offers.contains_key(&offer.id) {
            return Err(DomainError::conflict(format!(
                "offer {} already exists",
                offer.id
            )));
        }
        catalog
            .by_seller
            .entry(account_id.clone())
            .or_default()
            .push(offer.id);
        catalog.offers.insert(offer.id, offer);
        Ok(())
    }

    fn offers(&self) -> DomainResult<Vec<Offer>> {
        let catalog = self.read_catalog()?;
        Ok(catalog.offers.values().cloned().collect())
    }

    fn offer_by_id(&self, offer_id: OfferId) -> DomainResult<Option<Offer>> {
        let catalog = self.read_catalog()?;
        Ok(catalog.offers.get(&offer_id).cloned())
    }

    fn update_offer(&self, offer: Offer) -> DomainResult<Offer> {
        let mut catalog = self.write_catalog()?;
        match catalog.offers.get_mut(&offer.id) {
            Some(stored) => {
                *stored = offer.clone();
                Ok(offer)
            }
            None => Err(DomainError::not_found()),
        }
    }
}

fn demo_offers(now: DateTime<Utc>) -> Vec<Offer> {
    let mut laptop = Offer::new(
        OfferId::new(1),
        "Gaming Laptop",
        "High-performance gaming laptop with a dedicated graphics card and 32 GB of memory.",
        Decimal::new(1_299_99, 2),
        OfferCategory::Electronics,
        demo_image("laptop"),
        AccountId::new("seller1"),
        now - Duration::days(5),
    );
    laptop.status = OfferStatus::Active;
    laptop.expires_at = Some(now + Duration::days(30));
    laptop.tags = ["gaming", "laptop", "rtx", "warranty"].map(String::from).into();

    let mut jeans = Offer::new(
        OfferId::new(2),
        "Designer Jeans",
        "Premium denim jeans in excellent condition, worn only a handful of times.",
        Decimal::new(89_99, 2),
        OfferCategory::Fashion,
        demo_image("jeans"),
        AccountId::new("seller2"),
        now - Duration::days(3),
    );
    jeans.status = OfferStatus::Active;
    jeans.expires_at = Some(now + Duration::days(30));
    jeans.tags = ["jeans", "designer", "size32", "condition-excellent"]
        .map(String::from)
        .into();

    let mut cookbook = Offer::new(
        OfferId::new(3),
        "Cookbook Collection",
        "Set of five professional cooking books covering pastry, stocks, and knife work.",
        Decimal::new(45_50, 2),
        OfferCategory::Books,
        demo_image("books"),
        AccountId::new("seller3"),
        now - Duration::days(1),
    );
    cookbook.status = OfferStatus::Active;
    cookbook.expires_at = Some(now + Duration::days(30));
    cookbook.tags = ["cookbook", "cooking", "professional", "collection"]
        .map(String::from)
        .into();

    let mut bike = Offer::new(
        OfferId::new(4),
        "Bicycle - Draft",
        "Mountain bike in good mechanical shape, still needs final photos taken.",
        Decimal::new(250_00, 2),
        OfferCategory::Sports,
        demo_image("bike"),
        AccountId::new("seller4"),
        now - Duration::hours(2),
    );
    bike.tags = ["bicycle", "mountain", "sports"].map(String::from).into();

    vec![laptop, jeans, cookbook, bike]
}

fn demo_image(name: &str) -> Url {
    // The demo host never resolves; these urls are shape, not content.
    Url::parse(&format!("https://demo.offerdesk.example/{name}.jpg"))
        .unwrap_or_else(|e| unreachable!("static demo url failed to parse: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_offer(id: u64, seller: &str) -> Offer {
        Offer::new(
            OfferId::new(id),
            format!("Listing number {id}"),
            "A plain catalog entry used to exercise the repository.",
            Decimal::new(10_00, 2),
            OfferCategory::Other,
            demo_image("sample"),
            AccountId::new(seller),
            Utc::now(),
        )
    }

    #[test]
    fn add_then_lookup_round_trips() {
        let repository = InMemoryOffersRepository::new();
        let offer = sample_offer(7, "seller-a");
        let seller = offer.seller_id.clone();
        repository.add_offer(&seller, offer.clone()).unwrap();

        assert_eq!(repository.offer_by_id(OfferId::new(7)).unwrap(), Some(offer));
        assert_eq!(repository.offer_by_id(OfferId::new(8)).unwrap(), None);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let repository = InMemoryOffersRepository::new();
        let offer = sample_offer(7, "seller-a");
        let seller = offer.seller_id.clone();
        repository.add_offer(&seller, offer.clone()).unwrap();

        let err = repository.add_offer(&seller, offer).unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
    }

    #[test]
    fn listing_is_ordered_by_offer_id() {
        let repository = InMemoryOffersRepository::new();
        let seller = AccountId::new("seller-a");
        for id in [5, 2, 9] {
            repository.add_offer(&seller, sample_offer(id, "seller-a")).unwrap();
        }
        let ids: Vec<u64> = repository
            .offers()
            .unwrap()
            .iter()
            .map(|o| o.id.as_u64())
            .collect();
        assert_eq!(ids, vec![2, 5, 9]);
    }

    #[test]
    fn seller_index_tracks_insertion_order() {
        let repository = InMemoryOffersRepository::new();
        let seller = AccountId::new("seller-a");
        for id in [5, 2, 9] {
            repository.add_offer(&seller, sample_offer(id, "seller-a")).unwrap();
        }
        repository
            .add_offer(&AccountId::new("seller-b"), sample_offer(11, "seller-b"))
            .unwrap();

        assert_eq!(
            repository.offer_ids_for_seller(&seller).unwrap(),
            vec![OfferId::new(5), OfferId::new(2), OfferId::new(9)]
        );
        assert_eq!(
            repository.offer_ids_for_seller(&AccountId::new("seller-c")).unwrap(),
            Vec::new()
        );
    }

    #[test]
    fn update_replaces_the_stored_snapshot() {
        let repository = InMemoryOffersRepository::new();
        let offer = sample_offer(7, "seller-a");
        let seller = offer.seller_id.clone();
        repository.add_offer(&seller, offer.clone()).unwrap();

        let suspended = offer.suspend(Utc::now());
        let persisted = repository.update_offer(suspended.clone()).unwrap();
        assert_eq!(persisted, suspended);
        assert_eq!(
            repository.offer_by_id(OfferId::new(7)).unwrap(),
            Some(suspended)
        );
    }

    #[test]
    fn updating_a_missing_offer_fails() {
        let repository = InMemoryOffersRepository::new();
        let err = repository.update_offer(sample_offer(1, "seller-a")).unwrap_err();
        assert_eq!(err, DomainError::NotFound);
    }

    #[test]
    fn demo_catalog_is_seeded_through_the_port() {
        let repository = InMemoryOffersRepository::with_demo_catalog(Utc::now());
        let offers = repository.offers().unwrap();
        assert_eq!(offers.len(), 4);
        assert_eq!(
            repository.offer_ids_for_seller(&AccountId::new("seller1")).unwrap(),
            vec![OfferId::new(1)]
        );
    }
}
