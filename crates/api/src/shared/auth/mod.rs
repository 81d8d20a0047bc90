mod api_key;
mod route_guards;

pub use api_key::{ApiClient, ApiKeyAuth};
pub use route_guards::protect_account_route;
