//! Accounts collaborator capability.
//!
//! The offer core never manages accounts itself; it only asks an external
//! capability for the status of the account behind a request.

pub mod status;

pub use status::{AccountStatus, AccountStatusClient};
