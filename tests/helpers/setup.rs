use banking_api::Application;
use banking_domain::Account;
use banking_infra::{BankingContext, Config};
use banking_sdk::BankingSDK;

pub const TEST_API_KEY: &str = "test-key";

pub struct TestApp {
    pub config: Config,
    pub address: String,
}

impl TestApp {
    /// Client sending `api_key` in the `x-api-key` header
    pub fn client<T: Into<String>>(&self, api_key: T) -> BankingSDK {
        BankingSDK::new(self.address.clone(), api_key)
    }

    pub fn anonymous_client(&self) -> BankingSDK {
        BankingSDK::without_api_key(self.address.clone())
    }
}

// Launch the application as a background task
pub async fn spawn_app(api_key: Option<&str>, accounts: Vec<Account>) -> TestApp {
    let mut ctx = BankingContext::create_inmemory();
    ctx.config.port = 0; // Random port
    ctx.config.api_key = api_key.map(String::from);
    for account in &accounts {
        ctx.repos
            .accounts
            .insert(account)
            .await
            .expect("Expected to seed account");
    }

    let config = ctx.config.clone();
    let application = Application::new(ctx)
        .await
        .expect("Failed to build application.");

    let address = format!("http://localhost:{}", application.port());
    let _ = actix_web::rt::spawn(async move {
        application
            .start()
            .await
            .expect("Expected application to start");
    });

    TestApp { config, address }
}
