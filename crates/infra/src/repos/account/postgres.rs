use super::IAccountRepo;
use banking_domain::Account;
use sqlx::{
    postgres::PgArguments,
    query::Query,
    FromRow, PgPool, Postgres,
};
use tracing::error;

pub struct PostgresAccountRepo {
    pool: PgPool,
}

impl PostgresAccountRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
pub struct AccountRaw {
    account_id: String,
    display_name: String,
    account_type: String,
    account_status: String,
    currency: String,
}

impl From<AccountRaw> for Account {
    fn from(e: AccountRaw) -> Self {
        Self {
            account_id: e.account_id,
            display_name: e.display_name,
            account_type: e.account_type,
            account_status: e.account_status,
            currency: e.currency,
        }
    }
}

fn insert_query(account: &Account) -> Query<'_, Postgres, PgArguments> {
    sqlx::query(
        r#"
        INSERT INTO accounts(account_id, display_name, account_type, account_status, currency)
        VALUES($1, $2, $3, $4, $5)
        "#,
    )
    .bind(&account.account_id)
    .bind(&account.display_name)
    .bind(&account.account_type)
    .bind(&account.account_status)
    .bind(&account.currency)
}

#[async_trait::async_trait]
impl IAccountRepo for PostgresAccountRepo {
    async fn insert(&self, account: &Account) -> anyhow::Result<()> {
        insert_query(account)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!(
                    "Unable to insert account: {:?}. DB returned error: {:?}",
                    account, e
                );
                e
            })?;
        Ok(())
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Account>> {
        let accounts_raw: Vec<AccountRaw> = sqlx::query_as(
            r#"
            SELECT account_id, display_name, account_type, account_status, currency
            FROM accounts
            ORDER BY account_id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!("Find all accounts failed. DB returned error: {:?}", e);
            e
        })?;

        Ok(accounts_raw.into_iter().map(|acc| acc.into()).collect())
    }

    async fn insert_if_empty(&self, accounts: &[Account]) -> anyhow::Result<bool> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            error!("Unable to start seed transaction. DB returned error: {:?}", e);
            e
        })?;

        // SHARE ROW EXCLUSIVE conflicts with itself, so concurrent seeders
        // run the count and the inserts one at a time
        sqlx::query("LOCK TABLE accounts IN SHARE ROW EXCLUSIVE MODE")
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                error!("Unable to lock accounts for seeding. DB returned error: {:?}", e);
                e
            })?;

        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM accounts")
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| {
                error!("Count accounts failed. DB returned error: {:?}", e);
                e
            })?;
        if count > 0 {
            tx.rollback().await.map_err(|e| {
                error!("Unable to roll back seed transaction. DB returned error: {:?}", e);
                e
            })?;
            return Ok(false);
        }

        for account in accounts {
            insert_query(account).execute(&mut *tx).await.map_err(|e| {
                error!(
                    "Unable to seed account: {:?}. DB returned error: {:?}",
                    account, e
                );
                e
            })?;
        }
        tx.commit().await.map_err(|e| {
            error!("Unable to commit seed transaction. DB returned error: {:?}", e);
            e
        })?;

        Ok(true)
    }
}
