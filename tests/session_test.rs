use std::sync::Arc;
use std::time::Duration;

use serde_json::{Value, json};
use spocli::Error;
use spocli::management::{CredentialStore, ManualClock, TokenSession};
use wiremock::matchers::{body_string, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn token_body(access_token: &str) -> Value {
    json!({"access_token": access_token, "token_type": "Bearer", "expires_in": 3600})
}

async fn setup(clock: &Arc<ManualClock>) -> (MockServer, TokenSession) {
    let server = MockServer::start().await;
    let credentials = CredentialStore::new("abc", "xyz").unwrap();
    let session = TokenSession::new(credentials, reqwest::Client::new())
        .with_token_url(&format!("{}/api/token", server.uri()))
        .with_clock(clock.clone());
    (server, session)
}

async fn mount_token_once(server: &MockServer, access_token: &str) {
    Mock::given(method("POST"))
        .and(path("/api/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_body(access_token)))
        .up_to_n_times(1)
        .mount(server)
        .await;
}

async fn issuance_count(server: &MockServer) -> usize {
    server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .filter(|r| r.url.path() == "/api/token")
        .count()
}

#[tokio::test]
async fn first_call_issues_exactly_one_token() {
    let clock = Arc::new(ManualClock::new(1000));
    let (server, session) = setup(&clock).await;

    Mock::given(method("POST"))
        .and(path("/api/token"))
        .and(header("authorization", "Basic YWJjOnh5eg=="))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string("grant_type=client_credentials"))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_body("T1")))
        .expect(1)
        .mount(&server)
        .await;

    let header = session.ensure_valid().await.unwrap();
    assert_eq!(header.as_str(), "Bearer T1");

    let token = session.current_token().await.unwrap();
    assert_eq!(token.access_token, "T1");
    assert_eq!(token.token_type, "Bearer");
    assert_eq!(token.issued_at, 1000);
    assert_eq!(token.ttl_seconds, 3600);
}

#[tokio::test]
async fn valid_token_is_reused_without_a_request() {
    let clock = Arc::new(ManualClock::new(1000));
    let (server, session) = setup(&clock).await;
    mount_token_once(&server, "T1").await;

    let first = session.ensure_valid().await.unwrap();
    clock.advance(1800);
    let second = session.ensure_valid().await.unwrap();

    assert_eq!(first, second);
    assert_eq!(issuance_count(&server).await, 1);
}

#[tokio::test]
async fn refresh_happens_exactly_at_ttl_boundary() {
    let clock = Arc::new(ManualClock::new(1000));
    let (server, session) = setup(&clock).await;
    mount_token_once(&server, "T1").await;
    mount_token_once(&server, "T2").await;

    session.ensure_valid().await.unwrap();

    clock.set(1000 + 3599);
    let header = session.ensure_valid().await.unwrap();
    assert_eq!(header.as_str(), "Bearer T1");
    assert_eq!(issuance_count(&server).await, 1);

    clock.set(1000 + 3600);
    let header = session.ensure_valid().await.unwrap();
    assert_eq!(header.as_str(), "Bearer T2");
    assert_eq!(issuance_count(&server).await, 2);

    let token = session.current_token().await.unwrap();
    assert_eq!(token.issued_at, 4600);
}

#[tokio::test]
async fn expired_token_is_replaced_with_new_values() {
    let clock = Arc::new(ManualClock::new(1000));
    let (server, session) = setup(&clock).await;
    mount_token_once(&server, "T1").await;

    assert_eq!(session.ensure_valid().await.unwrap().as_str(), "Bearer T1");

    clock.set(4601);
    mount_token_once(&server, "T2").await;

    assert_eq!(session.ensure_valid().await.unwrap().as_str(), "Bearer T2");
}

#[tokio::test]
async fn custom_ttl_is_honoured_over_server_expiry() {
    let clock = Arc::new(ManualClock::new(0));
    let server = MockServer::start().await;
    let session = TokenSession::new(CredentialStore::new("abc", "xyz").unwrap(), reqwest::Client::new())
        .with_token_url(&format!("{}/api/token", server.uri()))
        .with_clock(clock.clone())
        .with_ttl(3500);
    mount_token_once(&server, "T1").await;
    mount_token_once(&server, "T2").await;

    session.ensure_valid().await.unwrap();
    clock.set(3499);
    assert_eq!(session.ensure_valid().await.unwrap().as_str(), "Bearer T1");
    clock.set(3500);
    assert_eq!(session.ensure_valid().await.unwrap().as_str(), "Bearer T2");
}

#[tokio::test]
async fn token_type_comes_from_the_server() {
    let clock = Arc::new(ManualClock::new(1000));
    let (server, session) = setup(&clock).await;

    Mock::given(method("POST"))
        .and(path("/api/token"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"access_token": "T1", "token_type": "MAC"})),
        )
        .mount(&server)
        .await;

    assert_eq!(session.ensure_valid().await.unwrap().as_str(), "MAC T1");
}

#[tokio::test]
async fn missing_access_token_is_an_auth_error_and_keeps_state() {
    let clock = Arc::new(ManualClock::new(1000));
    let (server, session) = setup(&clock).await;

    Mock::given(method("POST"))
        .and(path("/api/token"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"token_type": "Bearer", "expires_in": 3600})),
        )
        .mount(&server)
        .await;

    let err = session.ensure_valid().await.unwrap_err();
    assert!(matches!(err, Error::Auth(_)), "unexpected error: {err:?}");
    assert!(session.current_token().await.is_none());
}

#[tokio::test]
async fn failed_refresh_keeps_stale_token_but_never_serves_it() {
    let clock = Arc::new(ManualClock::new(1000));
    let (server, session) = setup(&clock).await;
    mount_token_once(&server, "T1").await;

    session.ensure_valid().await.unwrap();
    let before = session.current_token().await;

    Mock::given(method("POST"))
        .and(path("/api/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token_type": "Bearer"})))
        .up_to_n_times(1)
        .mount(&server)
        .await;

    clock.set(5000);
    let err = session.ensure_valid().await.unwrap_err();
    assert!(matches!(err, Error::Auth(_)));
    assert_eq!(session.current_token().await, before);

    // the next call tries again instead of handing out the expired token
    mount_token_once(&server, "T3").await;
    assert_eq!(session.ensure_valid().await.unwrap().as_str(), "Bearer T3");
    assert_eq!(issuance_count(&server).await, 3);
}

#[tokio::test]
async fn rejected_exchange_surfaces_server_detail() {
    let clock = Arc::new(ManualClock::new(1000));
    let (server, session) = setup(&clock).await;

    Mock::given(method("POST"))
        .and(path("/api/token"))
        .respond_with(ResponseTemplate::new(400).set_body_json(
            json!({"error": "invalid_client", "error_description": "Invalid client secret"}),
        ))
        .mount(&server)
        .await;

    match session.ensure_valid().await {
        Err(Error::Auth(message)) => {
            assert!(message.contains("400"));
            assert!(message.contains("invalid_client: Invalid client secret"));
        }
        other => panic!("expected auth error, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_body_is_an_auth_error() {
    let clock = Arc::new(ManualClock::new(1000));
    let (server, session) = setup(&clock).await;

    Mock::given(method("POST"))
        .and(path("/api/token"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    assert!(matches!(session.issue_token().await, Err(Error::Auth(_))));
}

#[tokio::test]
async fn connection_refused_is_a_network_error() {
    let session = TokenSession::new(CredentialStore::new("abc", "xyz").unwrap(), reqwest::Client::new())
        .with_token_url("http://127.0.0.1:1/api/token");

    let err = session.ensure_valid().await.unwrap_err();
    assert!(matches!(err, Error::Network(_)), "unexpected error: {err:?}");
    assert!(err.to_string().starts_with("could not reach auth server"));
}

#[tokio::test]
async fn slow_token_endpoint_times_out_as_network_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/token"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(token_body("T1"))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let http = reqwest::Client::builder()
        .timeout(Duration::from_millis(200))
        .build()
        .unwrap();
    let session = TokenSession::new(CredentialStore::new("abc", "xyz").unwrap(), http)
        .with_token_url(&format!("{}/api/token", server.uri()));

    assert!(matches!(session.ensure_valid().await, Err(Error::Network(_))));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_callers_share_one_issuance() {
    let clock = Arc::new(ManualClock::new(1000));
    let (server, session) = setup(&clock).await;
    let session = Arc::new(session);

    Mock::given(method("POST"))
        .and(path("/api/token"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(token_body("T1"))
                .set_delay(Duration::from_millis(200)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let session = Arc::clone(&session);
            tokio::spawn(async move { session.ensure_valid().await })
        })
        .collect();

    for handle in handles {
        let header = handle.await.unwrap().unwrap();
        assert_eq!(header.as_str(), "Bearer T1");
    }
    assert_eq!(issuance_count(&server).await, 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_callers_share_one_refresh() {
    let clock = Arc::new(ManualClock::new(1000));
    let (server, session) = setup(&clock).await;
    let session = Arc::new(session);
    mount_token_once(&server, "T1").await;

    session.ensure_valid().await.unwrap();
    clock.set(10_000);

    Mock::given(method("POST"))
        .and(path("/api/token"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(token_body("T2"))
                .set_delay(Duration::from_millis(200)),
        )
        .mount(&server)
        .await;

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let session = Arc::clone(&session);
            tokio::spawn(async move { session.ensure_valid().await })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.await.unwrap().unwrap().as_str(), "Bearer T2");
    }
    assert_eq!(issuance_count(&server).await, 2);
}
