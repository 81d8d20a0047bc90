use crate::dtos::AccountDTO;
use banking_domain::Account;
use serde::{Deserialize, Serialize};

pub mod list_accounts {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct AccountsData {
        pub accounts: Vec<AccountDTO>,
    }

    /// `{ "data": { "accounts": [...] } }`
    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub data: AccountsData,
    }

    impl APIResponse {
        pub fn new(accounts: Vec<Account>) -> Self {
            Self {
                data: AccountsData {
                    accounts: accounts.iter().map(AccountDTO::new).collect(),
                },
            }
        }
    }
}
