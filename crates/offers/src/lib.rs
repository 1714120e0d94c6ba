//! Offers domain module.
//!
//! This crate contains the business rules for the offer catalog — validation,
//! search, and lifecycle — implemented purely as deterministic domain logic
//! (no IO, no HTTP, no storage).

pub mod offer;
pub mod repository;
pub mod search;
pub mod service;
pub mod validation;

pub use offer::{Offer, OfferCategory, OfferStatus};
pub use repository::OffersRepository;
pub use search::{SearchCriteria, SearchResult, SortBy, search_offers};
pub use service::{OfferServiceError, OffersService};
pub use validation::{
    ValidationError, ValidationResult, ValidationWarning, validate, validate_at,
};
