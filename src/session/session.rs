/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 7/9/24
******************************************************************************/
use crate::presentation::serialization::json_string;
use chrono::{DateTime, Utc};
use std::fmt;

/// Authenticated connection to the provider.
///
/// Only exists after a successful login; holding one means the adapter is
/// authenticated. The token is opaque provider material and never printed.
#[derive(Clone, PartialEq)]
pub struct Session {
    username: String,
    token: String,
    role: Option<String>,
    authenticated_at: DateTime<Utc>,
}

impl Session {
    pub(crate) fn new(username: String, token: String, role: Option<String>) -> Self {
        Self {
            username,
            token,
            role,
            authenticated_at: Utc::now(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    /// Permission level reported at login.
    pub fn role(&self) -> Option<&str> {
        self.role.as_deref()
    }

    pub fn authenticated_at(&self) -> DateTime<Utc> {
        self.authenticated_at
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("username", &self.username)
            .field("token", &"[REDACTED]")
            .field("role", &self.role)
            .field("authenticated_at", &self.authenticated_at)
            .finish()
    }
}

impl fmt::Display for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{\"username\":{},\"token\":\"[REDACTED]\",\"role\":{},\"authenticated_at\":\"{}\"}}",
            json_string(&self.username),
            self.role
                .as_deref()
                .map_or("null".to_string(), json_string),
            self.authenticated_at.to_rfc3339()
        )
    }
}
