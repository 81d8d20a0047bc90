use super::IAccountRepo;
use crate::repos::shared::inmemory_repo::*;
use banking_domain::Account;

pub struct InMemoryAccountRepo {
    accounts: std::sync::Mutex<Vec<Account>>,
}

impl InMemoryAccountRepo {
    pub fn new() -> Self {
        Self {
            accounts: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IAccountRepo for InMemoryAccountRepo {
    async fn insert(&self, account: &Account) -> anyhow::Result<()> {
        insert(account, &self.accounts)
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Account>> {
        find_all(&self.accounts)
    }

    async fn insert_if_empty(&self, accounts: &[Account]) -> anyhow::Result<bool> {
        insert_many_if_empty(accounts, &self.accounts)
    }
}
