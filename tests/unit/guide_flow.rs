use crate::common::*;
use mockito::{Matcher, Server};
use pretty_assertions::assert_eq;
use serde_json::json;
use tv_subscriber::application::models::network::Network;
use tv_subscriber::application::models::order::OrderQuery;
use tv_subscriber::application::models::reservation::SubscriptionTarget;
use tv_subscriber::utils::logger::setup_logger;

#[tokio::test]
async fn test_browse_guide_and_book() {
    setup_logger();
    let mut server = Server::new_async().await;

    server
        .mock("POST", "/login.php")
        .with_status(200)
        .with_body(login_body("session-abc"))
        .create_async()
        .await;

    let channels = server
        .mock("POST", "/get-channel.php")
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("token".into(), "session-abc".into()),
            Matcher::UrlEncoded("network".into(), "Kanto".into()),
        ]))
        .with_status(200)
        .with_body(
            json!({
                "response_code": 200,
                "network": "Kanto",
                "channels": [
                    {"service": "081 フジテレビ", "sid": 1056, "epgtoken": "8ce2"},
                    {"service": "041 日テレ", "sid": 1040}
                ]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let epg = server
        .mock("POST", "/get-epg.php")
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("token".into(), "session-abc".into()),
            Matcher::UrlEncoded("sid".into(), "1056".into()),
            Matcher::UrlEncoded("epgtoken".into(), "8ce2".into()),
        ]))
        .with_status(200)
        .with_body(
            json!({
                "response_code": 200,
                "service": "フジテレビ",
                "mins30price": "3.5",
                "count": "2",
                "events": [
                    {
                        "sid": "1056", "tsid": "32740", "onid": "32740", "eid": "27472",
                        "service": "フジテレビ", "startdate": "2023/05/14",
                        "starttime": "23:15:00", "timestamp": 1684077300, "week": "0",
                        "week_text": "日", "duration": 30, "event_name": "鬼滅の刃",
                        "event_text": "第六話", "event_ext_text": "", "category": "anime",
                        "resolution": "1080i", "network": "Kanto", "price": 3.5,
                        "reservetoken": "f9ba"
                    },
                    {
                        "sid": "1056", "tsid": "32740", "onid": "32740", "eid": "59722",
                        "service": "フジテレビ", "startdate": "2023/05/15",
                        "starttime": "01:25:00", "timestamp": 1684081500, "week": "1",
                        "week_text": "月", "duration": 155, "event_name": "放送休止",
                        "event_text": "", "category": null, "resolution": "1080i",
                        "network": "Kanto", "price": 120, "reservetoken": "1c29"
                    }
                ]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let booking = server
        .mock("POST", "/addres.php")
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("eid".into(), "27472".into()),
            Matcher::UrlEncoded("price".into(), "3.5".into()),
            Matcher::UrlEncoded("reservetoken".into(), "f9ba".into()),
        ]))
        .with_status(200)
        .with_body(reservation_body())
        .create_async()
        .await;

    let mut subscriber = subscriber_for(&server);
    subscriber.login("alice", "correctpw").await.unwrap();

    let list = subscriber.get_channels(Network::Kanto).await.unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list[1].epgtoken, None);

    let events = subscriber.get_epgs(&list[0]).await.unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].event_name, "鬼滅の刃");

    let reservation = subscriber
        .subscribe(&SubscriptionTarget::from(&events[0]))
        .await
        .unwrap();
    assert_eq!(reservation.resid, "25512");

    channels.assert_async().await;
    epg.assert_async().await;
    booking.assert_async().await;
}

#[tokio::test]
async fn test_order_history() {
    setup_logger();
    let mut server = Server::new_async().await;

    server
        .mock("POST", "/login.php")
        .with_status(200)
        .with_body(login_body("session-abc"))
        .create_async()
        .await;
    let orders = server
        .mock("POST", "/get-order.php")
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("token".into(), "session-abc".into()),
            Matcher::UrlEncoded("index".into(), "1".into()),
            Matcher::UrlEncoded("count".into(), "15".into()),
            Matcher::UrlEncoded("order".into(), "DESC".into()),
        ]))
        .with_status(200)
        .with_body(
            json!({
                "response_code": 200,
                "date": null,
                "keyword": "|",
                "index": "1",
                "count": "15",
                "count_in_list": "1",
                "reservations": [{
                    "orderid": "29391", "resid": "25333", "service": "フジテレビ",
                    "title": "鬼滅の刃", "category": "7", "detail": "第五話",
                    "starttime": "2023-05-07 23:15", "duration": "30",
                    "reservetime": "2023-05-07 21:15", "sharelink": null, "price": "3.5"
                }]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let mut subscriber = subscriber_for(&server);
    subscriber.login("alice", "correctpw").await.unwrap();

    let page = subscriber.get_orders(&OrderQuery::default()).await.unwrap();
    assert_eq!(page.count_in_list, Some(1));
    assert_eq!(page.reservations[0].orderid, "29391");
    assert_eq!(page.reservations[0].sharelink, None);
    orders.assert_async().await;
}
