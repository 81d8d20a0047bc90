use crate::shared::entity::Entity;

const BOOTSTRAP_ACCOUNT_TYPE: &str = "SAVINGS";
const BOOTSTRAP_ACCOUNT_STATUS: &str = "Active";
const BOOTSTRAP_CURRENCY: &str = "AUD";

/// A bank `Account` as exposed by the listing endpoint.
///
/// The `account_id` is the primary key and is unique across the store.
/// Records are never updated or deleted once inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub account_id: String,
    pub display_name: String,
    pub account_type: String,
    pub account_status: String,
    pub currency: String,
}

impl Account {
    pub fn new<T: Into<String>>(
        account_id: T,
        display_name: T,
        account_type: T,
        account_status: T,
        currency: T,
    ) -> Self {
        Self {
            account_id: account_id.into(),
            display_name: display_name.into(),
            account_type: account_type.into(),
            account_status: account_status.into(),
            currency: currency.into(),
        }
    }

    /// The `Account`s inserted into an empty store so that the listing
    /// endpoint never comes back empty
    pub fn bootstrap_set() -> Vec<Self> {
        vec![
            Self::new(
                "123",
                "Richa's Account",
                BOOTSTRAP_ACCOUNT_TYPE,
                BOOTSTRAP_ACCOUNT_STATUS,
                BOOTSTRAP_CURRENCY,
            ),
            Self::new(
                "456",
                "AK's Account",
                BOOTSTRAP_ACCOUNT_TYPE,
                BOOTSTRAP_ACCOUNT_STATUS,
                BOOTSTRAP_CURRENCY,
            ),
        ]
    }
}

impl Entity for Account {
    fn id(&self) -> &str {
        &self.account_id
    }
}
