use super::{ApiClient, ApiKeyAuth};
use crate::error::BankingError;
use actix_web::{dev::Payload, web, FromRequest, HttpRequest};
use std::future::{ready, Ready};
use tracing::{error, warn};

/// Authenticates the request with the `ApiKeyAuth` registered on the app.
///
/// Both rejection reasons collapse into the same `Unauthorized` error, the
/// reason itself is only logged.
pub fn protect_account_route(req: &HttpRequest) -> Result<ApiClient, BankingError> {
    let auth = match req.app_data::<web::Data<ApiKeyAuth>>() {
        Some(auth) => auth,
        None => {
            error!("ApiKeyAuth was not registered on the application");
            return Err(BankingError::InternalError);
        }
    };

    auth.authenticate(req.headers()).map_err(|e| {
        warn!(reason = %e, path = %req.path(), "Rejected unauthenticated request");
        BankingError::Unauthorized
    })
}

/// Taking an `ApiClient` as a handler argument runs the api key check
/// before the handler body
impl FromRequest for ApiClient {
    type Error = BankingError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(protect_account_route(req))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn uses_registered_api_key_auth() {
        let req = TestRequest::default()
            .app_data(web::Data::new(ApiKeyAuth::new(Some("yoyo".into()))))
            .insert_header(("X-API-Key", "yoyo"))
            .to_http_request();
        let client = protect_account_route(&req).unwrap();
        assert_eq!(client.name(), ApiClient::NAME);
    }

    #[test]
    fn maps_rejections_to_unauthorized() {
        let auth = web::Data::new(ApiKeyAuth::new(Some("yoyo".into())));

        let missing = TestRequest::default()
            .app_data(auth.clone())
            .to_http_request();
        let invalid = TestRequest::default()
            .app_data(auth)
            .insert_header(("X-API-Key", "nope"))
            .to_http_request();

        for req in &[missing, invalid] {
            match protect_account_route(req) {
                Err(BankingError::Unauthorized) => {}
                res => panic!("Expected unauthorized, got: {:?}", res),
            }
        }
    }

    #[test]
    fn fails_when_auth_is_not_registered() {
        let req = TestRequest::default()
            .insert_header(("X-API-Key", "yoyo"))
            .to_http_request();
        assert!(matches!(
            protect_account_route(&req),
            Err(BankingError::InternalError)
        ));
    }
}
