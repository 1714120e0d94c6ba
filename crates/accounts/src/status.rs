//! Account status lookup (external capability).

use serde::{Deserialize, Serialize};

use offerdesk_core::AccountId;

/// Lifecycle status of an account, as reported by the account system.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountStatus {
    Active,
    ToActivate,
    Blocked,
    Suspended,
    Archived,
}

impl AccountStatus {
    /// Whether this status bars the account from publishing offers.
    ///
    /// Only fully activated accounts may create offers; everything else is
    /// turned away before validation even runs.
    pub fn blocks_publishing(&self) -> bool {
        !matches!(self, AccountStatus::Active)
    }
}

/// Client for the account-status capability.
///
/// Queried once per offer-creation request. Implementations are expected to
/// be cheap and synchronous; the core performs no caching of its own.
pub trait AccountStatusClient: Send + Sync {
    fn account_status(&self, account_id: &AccountId) -> AccountStatus;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_active_accounts_may_publish() {
        assert!(!AccountStatus::Active.blocks_publishing());
        for status in [
            AccountStatus::ToActivate,
            AccountStatus::Blocked,
            AccountStatus::Suspended,
            AccountStatus::Archived,
        ] {
            assert!(status.blocks_publishing(), "{status:?} should block");
        }
    }
}
