use crate::application::models::network::Network;
use crate::presentation::serialization::{
    broadcast_date, broadcast_time, f64_or_string, i64_or_string, string_or_number,
};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// One programme from a channel's guide (`get-epg.php`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    #[serde(deserialize_with = "string_or_number")]
    pub sid: String,
    #[serde(deserialize_with = "string_or_number")]
    pub tsid: String,
    #[serde(deserialize_with = "string_or_number")]
    pub onid: String,
    #[serde(deserialize_with = "string_or_number")]
    pub eid: String,
    pub service: String,
    #[serde(deserialize_with = "broadcast_date")]
    pub startdate: NaiveDate,
    #[serde(deserialize_with = "broadcast_time")]
    pub starttime: NaiveTime,
    /// Unix seconds of the start time.
    #[serde(deserialize_with = "i64_or_string")]
    pub timestamp: i64,
    /// Day of week, `0` (Sunday) to `6`.
    #[serde(deserialize_with = "string_or_number")]
    pub week: String,
    pub week_text: String,
    /// Minutes.
    #[serde(deserialize_with = "i64_or_string")]
    pub duration: i64,
    pub event_name: String,
    pub event_text: String,
    #[serde(default)]
    pub event_ext_text: String,
    #[serde(default)]
    pub category: Option<String>,
    pub resolution: String,
    pub network: Network,
    #[serde(deserialize_with = "f64_or_string")]
    pub price: f64,
    pub reservetoken: String,
}

impl Event {
    pub fn starts_at(&self) -> NaiveDateTime {
        self.startdate.and_time(self.starttime)
    }
}

impl PartialEq for Event {
    fn eq(&self, other: &Self) -> bool {
        self.network == other.network
            && self.sid == other.sid
            && self.tsid == other.tsid
            && self.onid == other.onid
            && self.eid == other.eid
            && self.price == other.price
    }
}
