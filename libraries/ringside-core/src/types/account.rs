/// Account domain type
use super::AccountId;
use crate::error::{CoreError, Result};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A marketplace member account.
///
/// The serialized field names match the published API shape, including the
/// `_id` identifier and the `create_at` spelling of the creation timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Unique account identifier
    #[serde(rename = "_id")]
    pub id: AccountId,

    /// Unique login handle
    pub user_name: String,

    /// Given name
    pub first_name: String,

    /// Family name
    pub last_name: String,

    /// Date of birth
    pub date_of_birth: NaiveDate,

    /// Creation timestamp, set once at insert and never mutated
    pub create_at: DateTime<Utc>,
}

/// Fields required to create an account
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAccount {
    pub user_name: String,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
}

impl CreateAccount {
    /// Check that every required field carries a usable value.
    ///
    /// Whitespace-only strings count as empty.
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("user_name", &self.user_name),
            ("first_name", &self.first_name),
            ("last_name", &self.last_name),
        ] {
            if value.trim().is_empty() {
                return Err(CoreError::invalid_input(format!("{field} is required")));
            }
        }
        Ok(())
    }
}

/// Partial update for an account.
///
/// `None` fields keep their stored value. The creation timestamp and the
/// identifier are not updatable.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateAccount {
    pub user_name: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
}

impl UpdateAccount {
    /// True when no field would change
    pub fn is_empty(&self) -> bool {
        self.user_name.is_none()
            && self.first_name.is_none()
            && self.last_name.is_none()
            && self.date_of_birth.is_none()
    }
}
