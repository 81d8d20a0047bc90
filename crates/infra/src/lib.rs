mod config;
mod repos;

pub use config::Config;
pub use repos::{IAccountRepo, Repos};
use tracing::info;

#[derive(Clone)]
pub struct BankingContext {
    pub repos: Repos,
    pub config: Config,
}

struct ContextParams {
    pub postgres_connection_string: String,
}

impl BankingContext {
    async fn create(params: ContextParams) -> anyhow::Result<Self> {
        let repos = Repos::create_postgres(&params.postgres_connection_string).await?;
        Ok(Self {
            repos,
            config: Config::new(),
        })
    }

    pub fn create_inmemory() -> Self {
        Self {
            repos: Repos::create_inmemory(),
            config: Config::new(),
        }
    }
}

/// Will setup the infrastructure context given the environment.
///
/// Postgres is used when `DATABASE_URL` is present, otherwise every
/// repository is kept in memory.
pub async fn setup_context() -> anyhow::Result<BankingContext> {
    match get_psql_connection_string() {
        Some(postgres_connection_string) => {
            BankingContext::create(ContextParams {
                postgres_connection_string,
            })
            .await
        }
        None => {
            info!("DATABASE_URL was not set, using the inmemory account store");
            Ok(BankingContext::create_inmemory())
        }
    }
}

fn get_psql_connection_string() -> Option<String> {
    const PSQL_CONNECTION_STRING: &str = "DATABASE_URL";

    std::env::var(PSQL_CONNECTION_STRING).ok()
}
