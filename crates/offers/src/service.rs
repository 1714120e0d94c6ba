//! Offer lifecycle orchestration.
//!
//! Wires the validation engine, the search engine, the account-status
//! capability, and the repository into the operations exposed to callers.
//! Creation reports validation findings back to the caller; a status
//! transition has no partial-acceptance semantics, so there a failed
//! validation is a hard error.

use chrono::Utc;
use rust_decimal::Decimal;
use thiserror::Error;

use offerdesk_accounts::{AccountStatus, AccountStatusClient};
use offerdesk_core::{AccountId, DomainError, OfferId, RequestId, paginate};

use crate::offer::{Offer, OfferCategory, OfferStatus};
use crate::repository::OffersRepository;
use crate::search::{SearchCriteria, SearchResult, search_offers};
use crate::validation::{ValidationResult, validate, validate_at};

/// Failures surfaced by [`OffersService`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OfferServiceError {
    #[error("offer {0} not found")]
    NotFound(OfferId),

    #[error("account {account_id} cannot modify offer {offer_id}")]
    Unauthorized {
        account_id: AccountId,
        offer_id: OfferId,
    },

    #[error("account {account_id} is not eligible to publish offers (status: {status:?})")]
    AccountNotEligible {
        account_id: AccountId,
        status: AccountStatus,
    },

    #[error("cannot apply status change: {}", .0.error_messages().join(", "))]
    ValidationFailed(ValidationResult),

    #[error("limit and offset must be positive when supplied")]
    InvalidPagination,

    #[error(transparent)]
    Repository(#[from] DomainError),
}

/// Lifecycle service over the offer catalog.
pub struct OffersService<R, A> {
    repository: R,
    accounts: A,
}

impl<R, A> OffersService<R, A>
where
    R: OffersRepository,
    A: AccountStatusClient,
{
    pub fn new(repository: R, accounts: A) -> Self {
        Self {
            repository,
            accounts,
        }
    }

    /// Plain listing with optional pagination bounds.
    ///
    /// The bounds are unsigned, so "≤ 0" reduces to an explicitly supplied
    /// zero; that is rejected before any repository work happens.
    pub fn offers(
        &self,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<Vec<Offer>, OfferServiceError> {
        if limit == Some(0) || offset == Some(0) {
            return Err(OfferServiceError::InvalidPagination);
        }
        let offers = self.repository.offers()?;
        Ok(paginate(
            offers,
            offset.map(|o| o as usize),
            limit.map(|l| l as usize),
        ))
    }

    /// Expose the validation engine unchanged.
    pub fn validate_offer(&self, offer: &Offer) -> ValidationResult {
        validate(offer)
    }

    /// Filter, sort, and paginate the catalog.
    pub fn search(&self, criteria: &SearchCriteria) -> Result<SearchResult, OfferServiceError> {
        if criteria.limit == 0 {
            return Err(OfferServiceError::InvalidPagination);
        }
        let offers = self.repository.offers()?;
        Ok(search_offers(offers, criteria))
    }

    /// Create an offer for `account_id`.
    ///
    /// Account eligibility is checked before validation runs; a rejected
    /// validation is a *reported* outcome, not an error — the findings go
    /// back to the caller and nothing is persisted.
    pub fn create_offer(
        &self,
        offer: Offer,
        account_id: &AccountId,
        request_id: RequestId,
    ) -> Result<ValidationResult, OfferServiceError> {
        let status = self.accounts.account_status(account_id);
        if status.blocks_publishing() {
            tracing::warn!(
                "rejected offer creation for account {account_id} (status {status:?}, request {request_id})"
            );
            return Err(OfferServiceError::AccountNotEligible {
                account_id: account_id.clone(),
                status,
            });
        }

        let offer_id = offer.id;
        let result = validate(&offer);
        if !result.is_valid() {
            tracing::info!(
                "offer {offer_id} failed validation with {} error(s) (request {request_id})",
                result.errors.len()
            );
            return Ok(result);
        }

        self.repository.add_offer(account_id, offer)?;
        tracing::info!("offer {offer_id} created by account {account_id} (request {request_id})");
        Ok(result)
    }

    /// Move an offer to `new_status`.
    ///
    /// The transition itself accepts any requested target — including
    /// re-entry from EXPIRED — and relies on re-validating the resulting
    /// offer as the gate. The entity is rebuilt, never mutated in place.
    pub fn transition_status(
        &self,
        offer_id: OfferId,
        new_status: OfferStatus,
        account_id: &AccountId,
    ) -> Result<Offer, OfferServiceError> {
        let offer = self
            .repository
            .offer_by_id(offer_id)?
            .ok_or(OfferServiceError::NotFound(offer_id))?;

        if offer.seller_id != *account_id {
            return Err(OfferServiceError::Unauthorized {
                account_id: account_id.clone(),
                offer_id,
            });
        }

        let now = Utc::now();
        let updated = offer.with_status(new_status, now);

        let result = validate_at(&updated, now);
        if !result.is_valid() {
            tracing::info!(
                "refused moving offer {offer_id} to {new_status:?}: {}",
                result.error_messages().join(", ")
            );
            return Err(OfferServiceError::ValidationFailed(result));
        }

        let persisted = self.repository.update_offer(updated)?;
        tracing::info!("offer {offer_id} moved to {new_status:?} by account {account_id}");
        Ok(persisted)
    }

    pub fn offers_by_category(
        &self,
        category: OfferCategory,
        limit: u32,
        offset: u32,
    ) -> Result<Vec<Offer>, OfferServiceError> {
        let criteria = SearchCriteria {
            category: Some(category),
            limit,
            offset,
            ..SearchCriteria::default()
        };
        Ok(self.search(&criteria)?.offers)
    }

    pub fn active_offers(&self, limit: u32, offset: u32) -> Result<Vec<Offer>, OfferServiceError> {
        let criteria = SearchCriteria {
            status: Some(OfferStatus::Active),
            limit,
            offset,
            ..SearchCriteria::default()
        };
        Ok(self.search(&criteria)?.offers)
    }

    pub fn offers_in_price_range(
        &self,
        min_price: Decimal,
        max_price: Decimal,
        limit: u32,
        offset: u32,
    ) -> Result<Vec<Offer>, OfferServiceError> {
        let criteria = SearchCriteria {
            min_price: Some(min_price),
            max_price: Some(max_price),
            limit,
            offset,
            ..SearchCriteria::default()
        };
        Ok(self.search(&criteria)?.offers)
    }
}
