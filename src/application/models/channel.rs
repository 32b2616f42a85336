use crate::application::models::network::Network;
use crate::presentation::serialization::{option_string_or_number, string_or_number};
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// A channel as listed by `get-channel.php`.
///
/// Identity is `(service, network, sid, tsid)`. The `epgtoken` is refreshed
/// by the provider from time to time and does not take part in equality.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Channel {
    /// Channel name, e.g. `081 フジテレビ`.
    pub service: String,
    #[serde(deserialize_with = "string_or_number")]
    pub sid: String,
    /// Only present on BS and CS networks.
    #[serde(default, deserialize_with = "option_string_or_number")]
    pub tsid: Option<String>,
    #[serde(default)]
    pub epgtoken: Option<String>,
    pub network: Network,
}

impl PartialEq for Channel {
    fn eq(&self, other: &Self) -> bool {
        self.service == other.service
            && self.network == other.network
            && self.sid == other.sid
            && self.tsid == other.tsid
    }
}

impl Eq for Channel {}

impl Hash for Channel {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.service.hash(state);
        self.network.hash(state);
        self.sid.hash(state);
        self.tsid.hash(state);
    }
}
