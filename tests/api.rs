mod helpers;

use banking_domain::Account;
use banking_sdk::{APIError, AccountDTO, StatusCode};
use helpers::setup::{spawn_app, TEST_API_KEY};

fn richas_account() -> Account {
    Account::new("123", "Richa's Account", "Savings", "", "")
}

#[actix_web::test]
async fn test_status_ok() {
    let app = spawn_app(Some(TEST_API_KEY), Vec::new()).await;
    assert!(app.anonymous_client().status.check_health().await.is_ok());
}

#[actix_web::test]
async fn test_missing_api_key_is_unauthorized() {
    let app = spawn_app(Some(TEST_API_KEY), vec![richas_account()]).await;

    let res = app.anonymous_client().account.list().await;
    assert!(matches!(
        res,
        Err(APIError::UnexpectedStatusCode(StatusCode::UNAUTHORIZED))
    ));
}

#[actix_web::test]
async fn test_wrong_api_key_is_unauthorized() {
    let app = spawn_app(Some(TEST_API_KEY), vec![richas_account()]).await;

    for key in &["wrong-key", "TEST-KEY", "test-ke", ""] {
        let res = app.client(*key).account.list().await;
        assert!(
            matches!(
                res,
                Err(APIError::UnexpectedStatusCode(StatusCode::UNAUTHORIZED))
            ),
            "key {:?} should be rejected",
            key
        );
    }
}

#[actix_web::test]
async fn test_unset_api_key_rejects_every_request() {
    let app = spawn_app(None, vec![richas_account()]).await;
    assert!(app.config.api_key.is_none());

    for key in &["", "test-key"] {
        let (status, _) = app.client(*key).account.list_raw().await.unwrap();
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }
}

#[actix_web::test]
async fn test_unauthorized_body_does_not_reveal_reason() {
    let app = spawn_app(Some(TEST_API_KEY), Vec::new()).await;

    let (missing_status, missing_body) = app.anonymous_client().account.list_raw().await.unwrap();
    let (invalid_status, invalid_body) = app.client("nope").account.list_raw().await.unwrap();

    assert_eq!(missing_status, StatusCode::UNAUTHORIZED);
    assert_eq!(invalid_status, StatusCode::UNAUTHORIZED);
    assert_eq!(missing_body, invalid_body);
    assert!(!invalid_body.contains(TEST_API_KEY));
}

#[actix_web::test]
async fn test_list_preseeded_accounts() {
    let account = richas_account();
    let app = spawn_app(Some(TEST_API_KEY), vec![account.clone()]).await;

    let (status, body) = app.client(TEST_API_KEY).account.list_raw().await.unwrap();
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("accounts"));
    assert!(body.contains("123"));

    let res = app
        .client(TEST_API_KEY)
        .account
        .list()
        .await
        .expect("Expected to list accounts");
    assert_eq!(res.data.accounts, vec![AccountDTO::new(&account)]);
}

#[actix_web::test]
async fn test_list_seeds_empty_store() {
    let app = spawn_app(Some(TEST_API_KEY), Vec::new()).await;
    let client = app.client(TEST_API_KEY);

    let expected = Account::bootstrap_set()
        .iter()
        .map(AccountDTO::new)
        .collect::<Vec<_>>();

    let res = client.account.list().await.expect("Expected to list accounts");
    let ids = res
        .data
        .accounts
        .iter()
        .map(|acc| acc.account_id.as_str())
        .collect::<Vec<_>>();
    assert_eq!(ids, vec!["123", "456"]);
    assert_eq!(res.data.accounts, expected);

    // Listing again must not seed a second time
    let res = client.account.list().await.expect("Expected to list accounts");
    assert_eq!(res.data.accounts, expected);
}
