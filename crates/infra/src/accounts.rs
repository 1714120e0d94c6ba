//! In-memory account directory.

use std::collections::HashMap;
use std::sync::RwLock;

use offerdesk_accounts::{AccountStatus, AccountStatusClient};
use offerdesk_core::AccountId;

/// Account-status lookup backed by a plain map.
///
/// Stands in for the real account system in tests and local runs. Unknown
/// accounts report the configured default status.
#[derive(Debug)]
pub struct InMemoryAccountDirectory {
    statuses: RwLock<HashMap<AccountId, AccountStatus>>,
    default_status: AccountStatus,
}

impl InMemoryAccountDirectory {
    pub fn new(default_status: AccountStatus) -> Self {
        Self {
            statuses: RwLock::new(HashMap::new()),
            default_status,
        }
    }

    /// Builder-style registration, convenient for test setup.
    pub fn with_status(self, account_id: AccountId, status: AccountStatus) -> Self {
        self.set_status(account_id, status);
        self
    }

    pub fn set_status(&self, account_id: AccountId, status: AccountStatus) {
        let mut statuses = match self.statuses.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        statuses.insert(account_id, status);
    }
}

impl AccountStatusClient for InMemoryAccountDirectory {
    fn account_status(&self, account_id: &AccountId) -> AccountStatus {
        let statuses = match self.statuses.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        statuses
            .get(account_id)
            .copied()
            .unwrap_or(self.default_status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registered_accounts_report_their_status() {
        let directory = InMemoryAccountDirectory::new(AccountStatus::ToActivate)
            .with_status(AccountId::new("seller1"), AccountStatus::Active)
            .with_status(AccountId::new("seller2"), AccountStatus::Blocked);

        assert_eq!(
            directory.account_status(&AccountId::new("seller1")),
            AccountStatus::Active
        );
        assert_eq!(
            directory.account_status(&AccountId::new("seller2")),
            AccountStatus::Blocked
        );
    }

    #[test]
    fn unknown_accounts_fall_back_to_the_default() {
        let directory = InMemoryAccountDirectory::new(AccountStatus::ToActivate);
        assert_eq!(
            directory.account_status(&AccountId::new("nobody")),
            AccountStatus::ToActivate
        );
    }

    #[test]
    fn statuses_can_change_after_registration() {
        let directory = InMemoryAccountDirectory::new(AccountStatus::ToActivate);
        let account = AccountId::new("seller1");
        directory.set_status(account.clone(), AccountStatus::Active);
        directory.set_status(account.clone(), AccountStatus::Suspended);
        assert_eq!(directory.account_status(&account), AccountStatus::Suspended);
    }
}
