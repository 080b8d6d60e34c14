//! Storage trait for account persistence

use crate::error::Result;
use crate::types::{Account, AccountId, CreateAccount, UpdateAccount};
use async_trait::async_trait;

/// Storage context providing access to account operations
///
/// This trait abstracts persistence so handlers never touch the database
/// directly, and so tests can run against any backing implementation.
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Get every account
    async fn get_all_accounts(&self) -> Result<Vec<Account>>;

    /// Get one account by ID
    async fn get_account_by_id(&self, id: AccountId) -> Result<Option<Account>>;

    /// Create a new account
    async fn create_account(&self, account: CreateAccount) -> Result<Account>;

    /// Apply a partial update; returns `None` when the ID is unknown
    async fn update_account(
        &self,
        id: AccountId,
        update: UpdateAccount,
    ) -> Result<Option<Account>>;
}
