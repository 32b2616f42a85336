use crate::application::models::epg::Event;
use crate::application::models::network::Network;
use crate::constants::DATETIME_FORMAT;
use crate::presentation::serialization::{
    i64_or_string, json_string, provider_datetime, serialize_provider_datetime, string_or_number,
};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// What `subscribe` books: one programme on one channel.
///
/// The fields are passed through to `addres.php` untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionTarget {
    pub sid: String,
    pub eid: String,
    pub tsid: String,
    pub onid: String,
    pub price: f64,
    pub network: Network,
    pub reservetoken: String,
}

impl SubscriptionTarget {
    pub(crate) fn form_fields(&self) -> Vec<(String, String)> {
        vec![
            ("sid".to_string(), self.sid.clone()),
            ("eid".to_string(), self.eid.clone()),
            ("tsid".to_string(), self.tsid.clone()),
            ("onid".to_string(), self.onid.clone()),
            ("price".to_string(), format_price(self.price)),
            ("network".to_string(), self.network.as_str().to_string()),
            ("reservetoken".to_string(), self.reservetoken.clone()),
        ]
    }
}

impl From<&Event> for SubscriptionTarget {
    fn from(event: &Event) -> Self {
        Self {
            sid: event.sid.clone(),
            eid: event.eid.clone(),
            tsid: event.tsid.clone(),
            onid: event.onid.clone(),
            price: event.price,
            network: event.network,
            reservetoken: event.reservetoken.clone(),
        }
    }
}

/// The provider rejects `3.0` where it expects `3`.
fn format_price(price: f64) -> String {
    if price.fract() == 0.0 {
        format!("{}", price as i64)
    } else {
        price.to_string()
    }
}

/// Booking confirmed by `addres.php`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    #[serde(deserialize_with = "string_or_number")]
    pub sid: String,
    #[serde(deserialize_with = "string_or_number")]
    pub eid: String,
    pub service: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(
        serialize_with = "serialize_provider_datetime",
        deserialize_with = "provider_datetime"
    )]
    pub starttime: NaiveDateTime,
    /// Minutes.
    #[serde(deserialize_with = "string_or_number")]
    pub duration: String,
    #[serde(deserialize_with = "string_or_number")]
    pub price: String,
    #[serde(deserialize_with = "string_or_number")]
    pub resid: String,
    #[serde(deserialize_with = "string_or_number")]
    pub orderid: String,
    /// Sum of booked recorders: `#REC 01` adds 1, `#REC 02` adds 2,
    /// `#REC BACKUP` adds 4. `0` means recorded in the database only,
    /// `-1` means invalid.
    #[serde(deserialize_with = "i64_or_string")]
    pub server: i64,
}

impl Reservation {
    pub fn is_valid(&self) -> bool {
        self.server >= 0
    }
}

impl fmt::Display for Reservation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{\"orderid\":{},\"resid\":{},\"service\":{},\"starttime\":\"{}\",\"price\":{}}}",
            json_string(&self.orderid),
            json_string(&self.resid),
            json_string(&self.service),
            self.starttime.format(DATETIME_FORMAT),
            json_string(&self.price)
        )
    }
}
