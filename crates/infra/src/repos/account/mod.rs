mod inmemory;
mod postgres;

pub use inmemory::InMemoryAccountRepo;
pub use postgres::PostgresAccountRepo;

use banking_domain::Account;

#[async_trait::async_trait]
pub trait IAccountRepo: Send + Sync {
    /// Fails if an `Account` with the same `account_id` is already stored
    async fn insert(&self, account: &Account) -> anyhow::Result<()>;
    /// Every stored `Account` ordered by `account_id`
    async fn find_all(&self) -> anyhow::Result<Vec<Account>>;
    /// Inserts `accounts` as one step, but only if the store holds no
    /// `Account` at all. Returns whether anything was inserted.
    async fn insert_if_empty(&self, accounts: &[Account]) -> anyhow::Result<bool>;
}
