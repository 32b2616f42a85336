use crate::constants::{DEFAULT_BASE_URL, DEFAULT_REQUEST_TIMEOUT, DEFAULT_USER_AGENT};
use crate::error::AuthError;
use crate::presentation::serialization::json_string;
use serde::Deserialize;
use std::env;
use std::fmt;
use std::fmt::Debug;
use std::str::FromStr;
use tracing::{debug, error};

/// Username/password pair, validated when built.
///
/// Deserializes from `{"username": "...", "password": "..."}` and rejects
/// empty or blank fields during deserialization.
#[derive(Deserialize, Clone, PartialEq)]
#[serde(try_from = "RawCredentials")]
pub struct Credentials {
    username: String,
    password: String,
}

#[derive(Deserialize)]
struct RawCredentials {
    username: String,
    password: String,
}

impl TryFrom<RawCredentials> for Credentials {
    type Error = AuthError;

    fn try_from(raw: RawCredentials) -> Result<Self, Self::Error> {
        Credentials::new(raw.username, raw.password)
    }
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Result<Self, AuthError> {
        let username = username.into();
        let password = password.into();
        if username.trim().is_empty() {
            return Err(AuthError::EmptyField("username"));
        }
        if password.trim().is_empty() {
            return Err(AuthError::EmptyField("password"));
        }
        Ok(Self { username, password })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub credentials: Option<Credentials>,
    pub rest_api: RestApiConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RestApiConfig {
    pub base_url: String,
    /// Per-request timeout, in seconds.
    pub timeout: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

impl fmt::Display for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{\"username\":{},\"password\":\"[REDACTED]\"}}",
            json_string(&self.username)
        )
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{\"credentials\":{},\"rest_api\":{}}}",
            self.credentials
                .as_ref()
                .map_or("null".to_string(), |c| c.to_string()),
            self.rest_api
        )
    }
}

impl fmt::Display for RestApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{\"base_url\":{},\"timeout\":{},\"user_agent\":{}}}",
            json_string(&self.base_url),
            self.timeout,
            json_string(&self.user_agent)
        )
    }
}

impl Default for RestApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_REQUEST_TIMEOUT,
            user_agent: default_user_agent(),
        }
    }
}

pub fn get_env_or_default<T: FromStr>(env_var: &str, default: T) -> T
where
    <T as FromStr>::Err: Debug,
{
    match env::var(env_var) {
        Ok(val) => val.parse::<T>().unwrap_or_else(|_| {
            error!("Failed to parse {}: {}, using default", env_var, val);
            default
        }),
        Err(_) => default,
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Builds the configuration from `TVSUB_*` environment variables.
    ///
    /// Credentials are only set when both `TVSUB_USERNAME` and
    /// `TVSUB_PASSWORD` are present and non-empty.
    pub fn new() -> Self {
        let username = get_env_or_default("TVSUB_USERNAME", String::new());
        let password = get_env_or_default("TVSUB_PASSWORD", String::new());
        let credentials = match Credentials::new(username, password) {
            Ok(credentials) => Some(credentials),
            Err(e) => {
                debug!("No usable credentials in environment: {}", e);
                None
            }
        };

        Config {
            credentials,
            rest_api: RestApiConfig {
                base_url: get_env_or_default("TVSUB_REST_BASE_URL", DEFAULT_BASE_URL.to_string()),
                timeout: get_env_or_default("TVSUB_REST_TIMEOUT", DEFAULT_REQUEST_TIMEOUT),
                user_agent: get_env_or_default("TVSUB_USER_AGENT", default_user_agent()),
            },
        }
    }
}
