/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 7/9/24
******************************************************************************/

pub const DEFAULT_BASE_URL: &str = "https://rec.mlsub.net/api/user";

pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:108.0) Gecko/20100101 Firefox/108.0";

/// Seconds
pub const DEFAULT_REQUEST_TIMEOUT: u64 = 30;

pub const LOGIN_ENDPOINT: &str = "/login.php";
pub const GET_CHANNEL_ENDPOINT: &str = "/get-channel.php";
pub const GET_EPG_ENDPOINT: &str = "/get-epg.php";
pub const SUBSCRIBE_ENDPOINT: &str = "/addres.php";
pub const USERINFO_ENDPOINT: &str = "/userinfo.php";
pub const GET_ORDER_ENDPOINT: &str = "/get-order.php";

/// `response_code` the provider puts in every successful envelope.
pub(crate) const RESPONSE_CODE_OK: i64 = 200;

/// Form field carrying the session token on dependent requests.
pub(crate) const TOKEN_FORM_KEY: &str = "token";

/// Value of `UserInfo::online` while the session cookie is alive.
pub(crate) const ONLINE_FLAG: &str = "1";

pub(crate) const DATE_FORMAT: &str = "%Y/%m/%d";
pub(crate) const DATE_FORMAT_ISO: &str = "%Y-%m-%d";
pub(crate) const TIME_FORMAT: &str = "%H:%M:%S";
pub(crate) const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
