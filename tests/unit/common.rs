use mockito::Server;
use serde_json::{json, Value};
use std::time::Duration;
use tokio::net::TcpListener;
use tv_subscriber::application::models::network::Network;
use tv_subscriber::application::models::reservation::SubscriptionTarget;
use tv_subscriber::transport::http_client::RestTransport;
use tv_subscriber::TvSubscriber;

pub fn subscriber_for(server: &Server) -> TvSubscriber {
    subscriber_at(&server.url(), Duration::from_secs(5))
}

pub fn subscriber_at(base_url: &str, timeout: Duration) -> TvSubscriber {
    let transport = RestTransport::with_timeout(base_url, "tv-test/1.0", timeout).unwrap();
    TvSubscriber::with_transport(std::sync::Arc::new(transport))
}

/// Address of a server that accepts connections and never answers.
pub async fn silent_server() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            held.push(socket);
        }
    });
    format!("http://{addr}")
}

pub fn login_body(token: &str) -> String {
    json!({
        "response_code": 200,
        "responsetime": "2023-05-08 15:03:38",
        "onlinetoken": token,
        "role": "1",
        "information": "已成功登陆用户：alice"
    })
    .to_string()
}

pub fn channel_42() -> SubscriptionTarget {
    SubscriptionTarget {
        sid: "42".to_string(),
        eid: "27472".to_string(),
        tsid: "32740".to_string(),
        onid: "32740".to_string(),
        price: 3.5,
        network: Network::Kanto,
        reservetoken: "f9baeab748ee25d6420521c4f7b0242c".to_string(),
    }
}

pub fn reservation_body() -> String {
    let body: Value = json!({
        "response_code": 200,
        "responsetime": "2023-05-08 18:30:23",
        "username": "alice",
        "wallet_before": "80.5",
        "wallet_after": 77,
        "information": "订单详情已发送至您的邮件地址",
        "reservation": {
            "sid": "42",
            "eid": "27472",
            "service": "フジテレビ",
            "title": "鬼滅の刃",
            "starttime": "2023-05-14 23:15:00",
            "duration": "30",
            "price": "3.5",
            "resid": "25512",
            "orderid": "29373",
            "server": 0
        }
    });
    body.to_string()
}
