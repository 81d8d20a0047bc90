use crate::{APIResponse, BaseClient};
use banking_api_structs::*;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct AccountClient {
    base: Arc<BaseClient>,
}

impl AccountClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn list(&self) -> APIResponse<list_accounts::APIResponse> {
        self.base
            .get("banking/accounts".into(), StatusCode::OK)
            .await
    }

    /// Same request as `list`, but hands back the status and body as is
    pub async fn list_raw(&self) -> APIResponse<(StatusCode, String)> {
        self.base.get_raw("banking/accounts".into()).await
    }
}
