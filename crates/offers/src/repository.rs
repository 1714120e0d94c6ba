//! Storage port for the offer catalog.

use offerdesk_core::{AccountId, DomainResult, OfferId};

use crate::offer::Offer;

/// Authoritative offer store.
///
/// The core treats the repository as the single source of truth and performs
/// no caching of its own. Indexing (by offer id, by seller) and the id
/// numbering scheme are adapter concerns; the port only promises the lookup
/// contracts below.
pub trait OffersRepository: Send + Sync {
    /// Persist a newly created offer under the owning account.
    ///
    /// Fails with [`offerdesk_core::DomainError::Conflict`] when the offer id
    /// is already taken — ids are never reused.
    fn add_offer(&self, account_id: &AccountId, offer: Offer) -> DomainResult<()>;

    /// The whole collection, ordered by offer id.
    fn offers(&self) -> DomainResult<Vec<Offer>>;

    fn offer_by_id(&self, offer_id: OfferId) -> DomainResult<Option<Offer>>;

    /// Replace the stored snapshot of an existing offer.
    ///
    /// Fails with [`offerdesk_core::DomainError::NotFound`] when no offer
    /// with that id exists.
    fn update_offer(&self, offer: Offer) -> DomainResult<Offer>;
}
