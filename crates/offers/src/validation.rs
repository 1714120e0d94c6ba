//! Offer validation engine.
//!
//! Evaluates an offer against four independent rule groups — field rules,
//! business rules, category rules, and the status guard — and returns every
//! finding in one pass. Groups never short-circuit each other, so a single
//! call surfaces all violations; within the error sequence, findings appear
//! in fixed group order and duplicates across groups are preserved.
//!
//! Everything here is a pure function of the offer and a single clock
//! reading; no IO, no hidden state.

use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use offerdesk_core::{DomainError, DomainResult, ValueObject};

use crate::offer::{Offer, OfferCategory, OfferStatus};

/// Terms that may not appear in listing text, matched case-insensitively.
const BANNED_TERMS: [&str; 5] = ["spam", "fake", "scam", "fraud", "cheat"];

const ELECTRONICS_EXPECTED_TAGS: [&str; 4] = ["warranty", "brand", "model", "condition"];
const AUTOMOTIVE_EXPECTED_TAGS: [&str; 4] = ["make", "model", "year", "mileage"];
const FASHION_EXPECTED_TAGS: [&str; 3] = ["size", "condition", "brand"];

/// Blocking validation finding.
///
/// The display string is the human-readable rule message; the serialized
/// form is the stable SCREAMING_SNAKE_CASE code.
#[derive(Debug, Error, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValidationError {
    // Title
    #[error("Title cannot be empty")]
    TitleEmpty,
    #[error("Title must be at least 5 characters long")]
    TitleTooShort,
    #[error("Title cannot exceed 100 characters")]
    TitleTooLong,
    #[error("Title contains inappropriate content")]
    TitleContainsProfanity,

    // Description
    #[error("Description cannot be empty")]
    DescriptionEmpty,
    #[error("Description must be at least 20 characters long")]
    DescriptionTooShort,
    #[error("Description cannot exceed 2000 characters")]
    DescriptionTooLong,
    #[error("Description contains inappropriate content")]
    DescriptionContainsProfanity,

    // Price
    #[error("Price must be greater than zero")]
    PriceInvalid,
    #[error("Price cannot exceed 999,999.99")]
    PriceTooHigh,
    #[error("Price must be at least 0.01")]
    PriceTooLow,

    // Seller
    #[error("Seller ID cannot be empty")]
    SellerIdEmpty,

    // Business rules
    #[error("Expiration date must be at least 1 hour in the future")]
    ExpirationTooSoon,
    #[error("Expiration date cannot be more than 1 year in the future")]
    ExpirationTooFar,
    #[error("Active offers must have an expiration date")]
    ActiveOfferNeedsExpiration,
    #[error("Expired offers cannot have future expiration dates")]
    ExpiredOfferFutureExpiration,
    #[error("Cannot activate an expired offer")]
    CannotActivateExpiredOffer,

    // Tags
    #[error("Cannot have more than 10 tags")]
    TooManyTags,
    #[error("Tags cannot exceed 50 characters")]
    TagTooLong,

    // Category-specific
    #[error("Electronics items under $10 require manual review")]
    ElectronicsPriceSuspicious,
    #[error("Electronics offers should include warranty, brand, model, or condition tags")]
    ElectronicsMissingRequiredTags,
    #[error("Automotive items under $500 should be marked as parts")]
    AutomotivePriceSuspicious,
    #[error("Automotive offers should include make, model, year, or mileage tags")]
    AutomotiveMissingRequiredTags,
    #[error("Fashion offers should include size, condition, or brand tags")]
    FashionMissingRequiredTags,
    #[error("Books over $1000 require manual review")]
    BooksPriceSuspicious,
}

/// Advisory finding; never blocks acceptance.
#[derive(Debug, Error, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValidationWarning {
    #[error("This is a high-priced item that may require additional verification")]
    HighPriceWarning,
    #[error("Consider adding more details to improve buyer confidence")]
    ShortDescriptionWarning,
    #[error("Adding relevant tags will help buyers find your offer")]
    NoTagsWarning,
    #[error("This offer expires within 7 days")]
    ExpiresSoonWarning,
}

/// Outcome of validating one offer: ordered errors, ordered warnings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    /// Valid iff no blocking errors; warnings are advisory only.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    pub fn warning_messages(&self) -> Vec<String> {
        self.warnings.iter().map(ToString::to_string).collect()
    }

    /// Collapse the findings into a single domain error, for callers with no
    /// use for the structured result.
    pub fn ensure_valid(&self) -> DomainResult<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(DomainError::validation(self.error_messages().join(", ")))
        }
    }
}

impl ValueObject for ValidationResult {}

/// Validate an offer against every rule group.
///
/// Reads the clock exactly once so all time-dependent rules in a single call
/// judge the same instant.
pub fn validate(offer: &Offer) -> ValidationResult {
    validate_at(offer, Utc::now())
}

/// Clock-explicit variant of [`validate`].
pub fn validate_at(offer: &Offer, now: DateTime<Utc>) -> ValidationResult {
    let mut errors = Vec::new();

    check_fields(offer, &mut errors);
    check_business_rules(offer, now, &mut errors);
    if let Some(rule) = category_rule(offer.category) {
        rule(offer, &mut errors);
    }
    check_status_guard(offer, now, &mut errors);

    ValidationResult {
        errors,
        warnings: collect_warnings(offer, now),
    }
}

/// Per-field priority chains: exactly one outcome per field, most severe
/// first (emptiness before length bounds before content).
fn check_fields(offer: &Offer, errors: &mut Vec<ValidationError>) {
    if offer.title.trim().is_empty() {
        errors.push(ValidationError::TitleEmpty);
    } else if offer.title.chars().count() < 5 {
        errors.push(ValidationError::TitleTooShort);
    } else if offer.title.chars().count() > 100 {
        errors.push(ValidationError::TitleTooLong);
    } else if contains_banned_term(&offer.title) {
        errors.push(ValidationError::TitleContainsProfanity);
    }

    if offer.description.trim().is_empty() {
        errors.push(ValidationError::DescriptionEmpty);
    } else if offer.description.chars().count() < 20 {
        errors.push(ValidationError::DescriptionTooShort);
    } else if offer.description.chars().count() > 2000 {
        errors.push(ValidationError::DescriptionTooLong);
    } else if contains_banned_term(&offer.description) {
        errors.push(ValidationError::DescriptionContainsProfanity);
    }

    if offer.price <= Decimal::ZERO {
        errors.push(ValidationError::PriceInvalid);
    } else if offer.price > Decimal::new(99_999_999, 2) {
        errors.push(ValidationError::PriceTooHigh);
    } else if offer.price < Decimal::new(1, 2) {
        errors.push(ValidationError::PriceTooLow);
    }

    if offer.seller_id.is_blank() {
        errors.push(ValidationError::SellerIdEmpty);
    }
}

/// Business rules are independent of each other: all of them run.
fn check_business_rules(offer: &Offer, now: DateTime<Utc>, errors: &mut Vec<ValidationError>) {
    if let Some(expires_at) = offer.expires_at {
        if expires_at < now + Duration::hours(1) {
            errors.push(ValidationError::ExpirationTooSoon);
        }
        if expires_at > now + Duration::days(365) {
            errors.push(ValidationError::ExpirationTooFar);
        }
    }

    match offer.status {
        OfferStatus::Active => {
            if offer.expires_at.is_none() {
                errors.push(ValidationError::ActiveOfferNeedsExpiration);
            }
        }
        OfferStatus::Expired => {
            if offer.expires_at.is_some_and(|expires_at| expires_at > now) {
                errors.push(ValidationError::ExpiredOfferFutureExpiration);
            }
        }
        OfferStatus::Draft | OfferStatus::Suspended => {}
    }

    if offer.tags.len() > 10 {
        errors.push(ValidationError::TooManyTags);
    }
    for tag in &offer.tags {
        if tag.chars().count() > 50 {
            errors.push(ValidationError::TagTooLong);
        }
    }
}

type CategoryRule = fn(&Offer, &mut Vec<ValidationError>);

/// Category rule dispatch, keyed on the closed category set.
fn category_rule(category: OfferCategory) -> Option<CategoryRule> {
    match category {
        OfferCategory::Electronics => Some(check_electronics),
        OfferCategory::Automotive => Some(check_automotive),
        OfferCategory::Fashion => Some(check_fashion),
        OfferCategory::Books => Some(check_books),
        OfferCategory::Home | OfferCategory::Sports | OfferCategory::Other => None,
    }
}

fn check_electronics(offer: &Offer, errors: &mut Vec<ValidationError>) {
    if offer.price < Decimal::from(10) {
        errors.push(ValidationError::ElectronicsPriceSuspicious);
    }
    if !has_any_expected_tag(offer, &ELECTRONICS_EXPECTED_TAGS) {
        errors.push(ValidationError::ElectronicsMissingRequiredTags);
    }
}

fn check_automotive(offer: &Offer, errors: &mut Vec<ValidationError>) {
    // "parts" is an exact tag match, unlike the case-insensitive expected set.
    if offer.price < Decimal::from(500) && !offer.tags.contains("parts") {
        errors.push(ValidationError::AutomotivePriceSuspicious);
    }
    if !has_any_expected_tag(offer, &AUTOMOTIVE_EXPECTED_TAGS) {
        errors.push(ValidationError::AutomotiveMissingRequiredTags);
    }
}

fn check_fashion(offer: &Offer, errors: &mut Vec<ValidationError>) {
    if !has_any_expected_tag(offer, &FASHION_EXPECTED_TAGS) {
        errors.push(ValidationError::FashionMissingRequiredTags);
    }
}

fn check_books(offer: &Offer, errors: &mut Vec<ValidationError>) {
    if offer.price > Decimal::from(1000) {
        errors.push(ValidationError::BooksPriceSuspicious);
    }
}

/// An ACTIVE offer whose expiration is already behind us cannot stand.
fn check_status_guard(offer: &Offer, now: DateTime<Utc>, errors: &mut Vec<ValidationError>) {
    if offer.status == OfferStatus::Active && offer.is_expired_at(now) {
        errors.push(ValidationError::CannotActivateExpiredOffer);
    }
}

fn collect_warnings(offer: &Offer, now: DateTime<Utc>) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    if offer.price > Decimal::from(10_000) {
        warnings.push(ValidationWarning::HighPriceWarning);
    }
    if offer.description.chars().count() < 50 {
        warnings.push(ValidationWarning::ShortDescriptionWarning);
    }
    if offer.tags.is_empty() {
        warnings.push(ValidationWarning::NoTagsWarning);
    }
    if offer
        .expires_at
        .is_some_and(|expires_at| expires_at < now + Duration::days(7))
    {
        warnings.push(ValidationWarning::ExpiresSoonWarning);
    }

    warnings
}

fn contains_banned_term(text: &str) -> bool {
    let lowered = text.to_lowercase();
    BANNED_TERMS.iter().any(|term| lowered.contains(term))
}

fn has_any_expected_tag(offer: &Offer, expected: &[&str]) -> bool {
    offer
        .tags
        .iter()
        .any(|tag| expected.contains(&tag.to_lowercase().as_str()))
}
