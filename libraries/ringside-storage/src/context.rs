use crate::accounts;
use async_trait::async_trait;
use ringside_core::{error::Result, storage::AccountStore, types::*, CoreError};
use sqlx::SqlitePool;

/// Local storage context using `SQLite`
pub struct LocalStore {
    pool: SqlitePool,
}

impl LocalStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open the database at `database_url` and bring the schema up to date
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = crate::create_pool(database_url).await?;
        crate::run_migrations(&pool)
            .await
            .map_err(|err| CoreError::storage(err.to_string()))?;
        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl AccountStore for LocalStore {
    async fn get_all_accounts(&self) -> Result<Vec<Account>> {
        accounts::get_all(&self.pool).await
    }

    async fn get_account_by_id(&self, id: AccountId) -> Result<Option<Account>> {
        accounts::get_by_id(&self.pool, id).await
    }

    async fn create_account(&self, account: CreateAccount) -> Result<Account> {
        accounts::create(&self.pool, account).await
    }

    async fn update_account(
        &self,
        id: AccountId,
        update: UpdateAccount,
    ) -> Result<Option<Account>> {
        accounts::update(&self.pool, id, update).await
    }
}
