use crate::constants::ONLINE_FLAG;
use crate::presentation::serialization::{
    json_string, option_provider_datetime, option_string_or_number,
    serialize_option_provider_datetime, string_or_number,
};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Account details from `userinfo.php`.
///
/// The provider also echoes the account password back; it is not kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub username: String,
    /// Balance, as the provider formats it.
    #[serde(deserialize_with = "string_or_number")]
    pub wallet: String,
    #[serde(default)]
    pub email: Option<String>,
    /// Last read notification id.
    #[serde(default, deserialize_with = "option_string_or_number")]
    pub readnid: Option<String>,
    /// Session cookie liveness flag.
    #[serde(deserialize_with = "string_or_number")]
    pub online: String,
    pub onlinetoken: String,
    #[serde(default)]
    pub lastip: Option<String>,
    #[serde(
        default,
        serialize_with = "serialize_option_provider_datetime",
        deserialize_with = "option_provider_datetime"
    )]
    pub lasttime: Option<NaiveDateTime>,
    /// Remaining lottery draws.
    #[serde(default, deserialize_with = "option_string_or_number")]
    pub times_draw: Option<String>,
}

impl UserInfo {
    pub fn is_online(&self) -> bool {
        self.online == ONLINE_FLAG
    }
}

impl fmt::Display for UserInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{\"id\":{},\"username\":{},\"wallet\":{},\"online\":{},\"onlinetoken\":\"[REDACTED]\"}}",
            json_string(&self.id),
            json_string(&self.username),
            json_string(&self.wallet),
            self.is_online()
        )
    }
}
