/// Accounts API routes
use crate::{
    error::{Result, ServerError},
    state::AppState,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::NaiveDate;
use ringside_core::{
    types::{Account, AccountId, CreateAccount, UpdateAccount},
    AccountStore, CoreError,
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateAccountRequest {
    pub user_name: String,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
}

/// Partial update body.
///
/// A field updates only when it is present as a key and carries a non-blank
/// value. The storefront sends blank strings for untouched inputs, so blanks
/// keep the stored value.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateAccountRequest {
    pub user_name: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
}

impl UpdateAccountRequest {
    fn into_update(self) -> UpdateAccount {
        UpdateAccount {
            user_name: self.user_name.filter(|value| !value.trim().is_empty()),
            first_name: self.first_name.filter(|value| !value.trim().is_empty()),
            last_name: self.last_name.filter(|value| !value.trim().is_empty()),
            date_of_birth: self.date_of_birth,
        }
    }
}

/// GET /accounts
pub async fn list_accounts(State(app_state): State<AppState>) -> Result<Json<Vec<Account>>> {
    let accounts = app_state
        .db
        .get_all_accounts()
        .await
        .map_err(|err| ServerError::internal("Error fetching accounts", err))?;

    Ok(Json(accounts))
}

/// POST /accounts
pub async fn create_account(
    State(app_state): State<AppState>,
    Json(req): Json<CreateAccountRequest>,
) -> Result<(StatusCode, Json<Account>)> {
    let create = CreateAccount {
        user_name: req.user_name,
        first_name: req.first_name,
        last_name: req.last_name,
        date_of_birth: req.date_of_birth,
    };

    // All create failures, storage included, answer as 400
    let account = app_state
        .db
        .create_account(create)
        .await
        .map_err(|err| ServerError::bad_request("Error creating account", err))?;

    Ok((StatusCode::CREATED, Json(account)))
}

/// PUT /accounts/:id
pub async fn update_account(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
    Json(req): Json<UpdateAccountRequest>,
) -> Result<Json<Account>> {
    let id = AccountId::new(id);

    let account = app_state
        .db
        .update_account(id.clone(), req.into_update())
        .await
        .and_then(|updated| updated.ok_or_else(|| CoreError::AccountNotFound(id)))
        .map_err(|err| ServerError::from_core("Error updating account", err))?;

    Ok(Json(account))
}
