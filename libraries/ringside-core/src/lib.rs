//! Ringside Core
//!
//! Platform-agnostic domain types, traits, and error handling for the
//! Ringside marketplace backend.
//!
//! The core crate defines:
//! - **Domain Types**: `Account` and its create/update companions
//! - **Core Traits**: `AccountStore`
//! - **Error Handling**: Unified `CoreError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use ringside_core::types::CreateAccount;
//! use chrono::NaiveDate;
//!
//! let create = CreateAccount {
//!     user_name: "nine10".to_string(),
//!     first_name: "Kao".to_string(),
//!     last_name: "Ten".to_string(),
//!     date_of_birth: NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(),
//! };
//! assert!(create.validate().is_ok());
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod storage;
pub mod types;

// Re-export commonly used types
pub use error::{CoreError, Result};
pub use storage::AccountStore;

// Export all types
pub use types::{Account, AccountId, CreateAccount, UpdateAccount};
