//! Account queries
//!
//! The accounts slice owns every SQL statement touching the `accounts`
//! table. Handlers go through `LocalStore`; tests may call these functions
//! directly with a pool.

use chrono::Utc;
use ringside_core::{error::Result, types::*, CoreError};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};

fn from_row(row: &SqliteRow) -> Account {
    Account {
        id: row.get("id"),
        user_name: row.get("user_name"),
        first_name: row.get("first_name"),
        last_name: row.get("last_name"),
        date_of_birth: row.get("date_of_birth"),
        create_at: row.get("create_at"),
    }
}

/// Get every account, oldest first
pub async fn get_all(pool: &SqlitePool) -> Result<Vec<Account>> {
    let rows = sqlx::query(
        r#"
        SELECT id, user_name, first_name, last_name, date_of_birth, create_at
        FROM accounts
        ORDER BY create_at
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows.iter().map(from_row).collect())
}

/// Get account by ID
pub async fn get_by_id(pool: &SqlitePool, id: AccountId) -> Result<Option<Account>> {
    let row = sqlx::query(
        r#"
        SELECT id, user_name, first_name, last_name, date_of_birth, create_at
        FROM accounts
        WHERE id = ?
        LIMIT 1
        "#,
    )
    .bind(&id)
    .fetch_optional(pool)
    .await?;

    Ok(row.as_ref().map(from_row))
}

/// Create a new account
///
/// Required fields are checked before the INSERT; a `user_name` collision
/// surfaces as `CoreError::Duplicate`.
pub async fn create(pool: &SqlitePool, account: CreateAccount) -> Result<Account> {
    account.validate()?;

    let record = Account {
        id: AccountId::generate(),
        user_name: account.user_name,
        first_name: account.first_name,
        last_name: account.last_name,
        date_of_birth: account.date_of_birth,
        create_at: Utc::now(),
    };

    sqlx::query(
        r#"
        INSERT INTO accounts (id, user_name, first_name, last_name, date_of_birth, create_at)
        VALUES (?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&record.id)
    .bind(&record.user_name)
    .bind(&record.first_name)
    .bind(&record.last_name)
    .bind(record.date_of_birth)
    .bind(record.create_at)
    .execute(pool)
    .await
    .map_err(|err| duplicate_user_name(err, &record.user_name))?;

    Ok(record)
}

/// Apply a partial update
///
/// Only fields carried by `update` are written; `create_at` and `id` are
/// never touched. Returns `None` when the ID is unknown.
pub async fn update(
    pool: &SqlitePool,
    id: AccountId,
    update: UpdateAccount,
) -> Result<Option<Account>> {
    let Some(existing) = get_by_id(pool, id.clone()).await? else {
        return Ok(None);
    };

    if update.is_empty() {
        return Ok(Some(existing));
    }

    let mut query_parts = Vec::new();
    if update.user_name.is_some() {
        query_parts.push("user_name = ?");
    }
    if update.first_name.is_some() {
        query_parts.push("first_name = ?");
    }
    if update.last_name.is_some() {
        query_parts.push("last_name = ?");
    }
    if update.date_of_birth.is_some() {
        query_parts.push("date_of_birth = ?");
    }

    let query_str = format!("UPDATE accounts SET {} WHERE id = ?", query_parts.join(", "));

    let mut query = sqlx::query(&query_str);
    if let Some(user_name) = &update.user_name {
        query = query.bind(user_name);
    }
    if let Some(first_name) = &update.first_name {
        query = query.bind(first_name);
    }
    if let Some(last_name) = &update.last_name {
        query = query.bind(last_name);
    }
    if let Some(date_of_birth) = update.date_of_birth {
        query = query.bind(date_of_birth);
    }

    query
        .bind(&id)
        .execute(pool)
        .await
        .map_err(|err| match &update.user_name {
            Some(user_name) => duplicate_user_name(err, user_name),
            None => err.into(),
        })?;

    get_by_id(pool, id).await
}

fn duplicate_user_name(err: sqlx::Error, user_name: &str) -> CoreError {
    match &err {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            CoreError::Duplicate(format!("user_name '{user_name}' is already taken"))
        }
        _ => err.into(),
    }
}
