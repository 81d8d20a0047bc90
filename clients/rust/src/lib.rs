mod account;
mod base;
mod status;

use account::AccountClient;
pub(crate) use base::BaseClient;
pub use base::{APIError, APIResponse};
pub use banking_api_structs::dtos::*;
pub use reqwest::StatusCode;
use status::StatusClient;
use std::sync::Arc;

/// Banking API SDK
///
/// The SDK contains methods for interacting with the banking accounts
/// server API.
#[derive(Clone)]
pub struct BankingSDK {
    pub account: AccountClient,
    pub status: StatusClient,
}

impl BankingSDK {
    pub fn new<T: Into<String>>(address: String, api_key: T) -> Self {
        let mut base = BaseClient::new(address);
        base.set_api_key(api_key.into());
        Self::from_base(base)
    }

    /// A client that sends no `x-api-key` header at all
    pub fn without_api_key(address: String) -> Self {
        Self::from_base(BaseClient::new(address))
    }

    fn from_base(base: BaseClient) -> Self {
        let base = Arc::new(base);
        let account = AccountClient::new(base.clone());
        let status = StatusClient::new(base);

        Self { account, status }
    }
}
