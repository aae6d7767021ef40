mod common;

use std::sync::Arc;

use chat_relay::client::{ClientError, RelayClient};
use chat_relay::routes::create_router;
use chat_relay::session::{ChatSession, ERROR_REPLY};
use chat_relay::state::AppState;
use common::StubProvider;

async fn spawn_relay(provider: Arc<StubProvider>) -> String {
    let state = Arc::new(AppState::new(provider, 1000));
    let app = create_router("public", "views/index.html").with_state(state);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn test_exchange_through_running_server() {
    let provider = StubProvider::replying("4");
    let client = RelayClient::new(&spawn_relay(provider.clone()).await).unwrap();

    let mut session = ChatSession::new();
    let message = session.submit("  2+2?  ").unwrap();
    let outcome = client.send(&message).await;
    session.settle(outcome);

    assert_eq!(provider.last_user_message().as_deref(), Some("2+2?"));
    assert_eq!(session.transcript()[1].text, "4");
    assert!(!session.indicator_visible());
}

#[tokio::test]
async fn test_server_error_becomes_fixed_reply() {
    let client = RelayClient::new(&spawn_relay(StubProvider::failing()).await).unwrap();

    let err = client.send("hello").await.unwrap_err();
    assert!(matches!(err, ClientError::Status(500)));

    let mut session = ChatSession::new();
    session.submit("hello");
    session.settle(Err::<String, _>(err));
    assert_eq!(session.transcript()[1].text, ERROR_REPLY);
    assert!(session.submit_enabled());
}

#[tokio::test]
async fn test_unreachable_server_is_transport_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = RelayClient::new(&format!("http://{addr}/")).unwrap();
    let err = client.send("hello").await.unwrap_err();
    assert!(matches!(err, ClientError::Transport(_)));
}
