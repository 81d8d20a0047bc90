use banking_domain::Account;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountDTO {
    pub account_id: String,
    pub display_name: String,
    pub account_type: String,
    pub account_status: String,
    pub currency: String,
}

impl AccountDTO {
    pub fn new(account: &Account) -> Self {
        Self {
            account_id: account.account_id.clone(),
            display_name: account.display_name.clone(),
            account_type: account.account_type.clone(),
            account_status: account.account_status.clone(),
            currency: account.currency.clone(),
        }
    }
}
