use crate::{
    error::BankingError,
    shared::{
        auth::ApiClient,
        usecase::{execute, UseCase},
    },
};
use actix_web::{web, HttpResponse};
use banking_api_structs::list_accounts::APIResponse;
use banking_domain::Account;
use banking_infra::BankingContext;
use tracing::info;

pub async fn list_accounts_controller(
    _client: ApiClient,
    ctx: web::Data<BankingContext>,
) -> Result<HttpResponse, BankingError> {
    let usecase = ListAccountsUseCase {};

    execute(usecase, &ctx)
        .await
        .map(|accounts| HttpResponse::Ok().json(APIResponse::new(accounts)))
        .map_err(BankingError::from)
}

/// Lists every stored `Account`. An empty store is first seeded with
/// `Account::bootstrap_set`, so the response is never empty.
#[derive(Debug)]
pub struct ListAccountsUseCase {}

#[derive(Debug)]
pub enum UseCaseError {
    StorageUnavailable(anyhow::Error),
}

impl From<UseCaseError> for BankingError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::StorageUnavailable(_) => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for ListAccountsUseCase {
    type Response = Vec<Account>;

    type Error = UseCaseError;

    const NAME: &'static str = "ListAccounts";

    async fn execute(&mut self, ctx: &BankingContext) -> Result<Self::Response, Self::Error> {
        let accounts = ctx
            .repos
            .accounts
            .find_all()
            .await
            .map_err(UseCaseError::StorageUnavailable)?;
        if !accounts.is_empty() {
            return Ok(accounts);
        }

        let seeded = ctx
            .repos
            .accounts
            .insert_if_empty(&Account::bootstrap_set())
            .await
            .map_err(UseCaseError::StorageUnavailable)?;
        if seeded {
            info!("Account store was empty, inserted the bootstrap accounts");
        }

        ctx.repos
            .accounts
            .find_all()
            .await
            .map_err(UseCaseError::StorageUnavailable)
    }
}
