use crate::constants::RESPONSE_CODE_OK;
use crate::error::ProviderFailure;
use crate::presentation::serialization::i64_or_string;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{debug, warn};

/// Raw answer of one HTTP exchange, before any provider-level decoding.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpReply {
    pub status: StatusCode,
    pub body: String,
}

impl HttpReply {
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Checks the HTTP status, parses the JSON envelope and its
    /// `response_code`.
    pub(crate) fn into_envelope(self) -> Result<ApiEnvelope, ProviderFailure> {
        if self.status == StatusCode::UNAUTHORIZED || self.status == StatusCode::FORBIDDEN {
            let information = serde_json::from_str::<ApiEnvelope>(&self.body)
                .ok()
                .and_then(|envelope| envelope.information)
                .unwrap_or_else(|| {
                    let body = self.body.trim();
                    if body.is_empty() {
                        self.status
                            .canonical_reason()
                            .unwrap_or_default()
                            .to_string()
                    } else {
                        body.to_string()
                    }
                });
            warn!("Provider refused request with http {}", self.status);
            return Err(ProviderFailure::Rejected {
                code: i64::from(self.status.as_u16()),
                information,
            });
        }

        if !self.status.is_success() {
            warn!(
                "Unexpected http status {}, body: {}",
                self.status, self.body
            );
            return Err(ProviderFailure::UnexpectedStatus(self.status));
        }

        let envelope: ApiEnvelope = serde_json::from_str(&self.body).map_err(|e| {
            warn!("Response is not a provider envelope: {}", e);
            ProviderFailure::Malformed(format!("invalid json envelope: {e}"))
        })?;

        if envelope.response_code != RESPONSE_CODE_OK {
            debug!(
                "Provider answered code {} at {:?}",
                envelope.response_code, envelope.responsetime
            );
            return Err(ProviderFailure::Rejected {
                code: envelope.response_code,
                information: envelope.information.unwrap_or_default(),
            });
        }

        Ok(envelope)
    }
}

/// Common wrapper of every provider answer.
///
/// Operation-specific data (`channels`, `events`, `reservation`, ...) stays
/// in `payload` until it is claimed with [`ApiEnvelope::take`].
#[derive(Debug, Clone, Deserialize)]
pub struct ApiEnvelope {
    #[serde(deserialize_with = "i64_or_string")]
    pub response_code: i64,
    #[serde(default)]
    pub responsetime: Option<String>,
    #[serde(default)]
    pub information: Option<String>,
    #[serde(flatten)]
    pub payload: Map<String, Value>,
}

impl ApiEnvelope {
    pub(crate) fn take_value(&mut self, key: &str) -> Result<Value, ProviderFailure> {
        match self.payload.remove(key) {
            Some(Value::Null) | None => Err(ProviderFailure::Malformed(format!(
                "missing field `{key}`"
            ))),
            Some(value) => Ok(value),
        }
    }

    pub(crate) fn take<T: DeserializeOwned>(&mut self, key: &str) -> Result<T, ProviderFailure> {
        let value = self.take_value(key)?;
        serde_json::from_value(value)
            .map_err(|e| ProviderFailure::Malformed(format!("invalid `{key}`: {e}")))
    }

    /// Whole envelope, payload included, as one typed value.
    pub(crate) fn into_typed<T: DeserializeOwned>(self) -> Result<T, ProviderFailure> {
        let mut object = self.payload;
        object.insert("response_code".to_string(), Value::from(self.response_code));
        if let Some(time) = self.responsetime {
            object.insert("responsetime".to_string(), Value::String(time));
        }
        if let Some(information) = self.information {
            object.insert("information".to_string(), Value::String(information));
        }
        serde_json::from_value(Value::Object(object))
            .map_err(|e| ProviderFailure::Malformed(format!("invalid response: {e}")))
    }
}
