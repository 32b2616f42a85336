use crate::common::*;
use mockito::{Matcher, Server};
use pretty_assertions::assert_eq;
use std::time::Duration;
use tv_subscriber::utils::logger::setup_logger;
use tv_subscriber::{AuthError, SubscriptionError, TransportError};

#[tokio::test]
async fn test_login_then_subscribe_carries_token() {
    setup_logger();
    let mut server = Server::new_async().await;

    let login = server
        .mock("POST", "/login.php")
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("username".into(), "alice".into()),
            Matcher::UrlEncoded("password".into(), "correctpw".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(login_body("session-abc"))
        .expect(1)
        .create_async()
        .await;

    let subscribe = server
        .mock("POST", "/addres.php")
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("token".into(), "session-abc".into()),
            Matcher::UrlEncoded("sid".into(), "42".into()),
            Matcher::UrlEncoded("reservetoken".into(), "f9baeab748ee25d6420521c4f7b0242c".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(reservation_body())
        .expect(1)
        .create_async()
        .await;

    let mut subscriber = subscriber_for(&server);
    let session = subscriber.login("alice", "correctpw").await.unwrap();
    assert!(subscriber.is_authenticated());
    assert_eq!(session.username(), "alice");

    let reservation = subscriber.subscribe(&channel_42()).await.unwrap();
    assert_eq!(reservation.orderid, "29373");
    assert!(reservation.is_valid());

    login.assert_async().await;
    subscribe.assert_async().await;
}

#[tokio::test]
async fn test_rejected_login_blocks_subscribe() {
    setup_logger();
    let mut server = Server::new_async().await;

    let login = server
        .mock("POST", "/login.php")
        .with_status(401)
        .expect(1)
        .create_async()
        .await;
    let subscribe = server
        .mock("POST", "/addres.php")
        .expect(0)
        .create_async()
        .await;

    let mut subscriber = subscriber_for(&server);
    let err = subscriber.login("alice", "wrongpw").await.unwrap_err();
    assert!(err.is_rejected());
    assert!(!subscriber.is_authenticated());

    let err = subscriber.subscribe(&channel_42()).await.unwrap_err();
    assert!(matches!(err, SubscriptionError::NotAuthenticated(_)));

    login.assert_async().await;
    subscribe.assert_async().await;
}

#[tokio::test]
async fn test_login_timeout_is_not_a_rejection() {
    setup_logger();
    let base_url = silent_server().await;
    let mut subscriber = subscriber_at(&base_url, Duration::from_millis(200));

    let err = subscriber.login("alice", "correctpw").await.unwrap_err();
    assert!(err.is_transport());
    assert!(!err.is_rejected());
    assert!(matches!(
        err,
        AuthError::Transport(TransportError::Timeout(_))
    ));
    assert!(!subscriber.is_authenticated());
}

#[tokio::test]
async fn test_expired_session_surfaces_as_rejection() {
    setup_logger();
    let mut server = Server::new_async().await;

    server
        .mock("POST", "/login.php")
        .with_status(200)
        .with_body(login_body("session-abc"))
        .create_async()
        .await;
    let userinfo = server
        .mock("POST", "/userinfo.php")
        .match_body(Matcher::UrlEncoded("token".into(), "session-abc".into()))
        .with_status(200)
        .with_body(r#"{"response_code":401,"responsetime":"2023-06-12 22:05:51","information":"鉴权失败，Token错误"}"#)
        .expect(2)
        .create_async()
        .await;

    let mut subscriber = subscriber_for(&server);
    subscriber.login("alice", "correctpw").await.unwrap();

    match subscriber.get_userinfo().await.unwrap_err() {
        SubscriptionError::Rejected { code, .. } => assert_eq!(code, 401),
        other => panic!("expected rejection, got {other:?}"),
    }
    assert!(!subscriber.is_online().await);
    userinfo.assert_async().await;
}

#[tokio::test]
async fn test_server_error_on_subscribe() {
    setup_logger();
    let mut server = Server::new_async().await;

    server
        .mock("POST", "/login.php")
        .with_status(200)
        .with_body(login_body("session-abc"))
        .create_async()
        .await;
    server
        .mock("POST", "/addres.php")
        .with_status(502)
        .with_body("Bad Gateway")
        .create_async()
        .await;

    let mut subscriber = subscriber_for(&server);
    subscriber.login("alice", "correctpw").await.unwrap();

    let err = subscriber.subscribe(&channel_42()).await.unwrap_err();
    assert!(matches!(err, SubscriptionError::UnexpectedStatus(s) if s.as_u16() == 502));
    assert!(subscriber.is_authenticated());
}
