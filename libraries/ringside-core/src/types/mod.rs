mod account;
mod ids;

pub use account::{Account, CreateAccount, UpdateAccount};
pub use ids::AccountId;
