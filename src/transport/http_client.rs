use crate::config::RestApiConfig;
use crate::error::TransportError;
use crate::presentation::serialization::json_string;
use crate::transport::model::HttpReply;
use async_trait::async_trait;
use reqwest::Client;
use std::fmt;
use std::time::Duration;
use tracing::{debug, error, instrument};

/// Sends one form-encoded request to the provider and hands back the raw
/// reply. Status and body interpretation is left to the caller.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn post_form(
        &self,
        endpoint: &str,
        form: &[(String, String)],
    ) -> Result<HttpReply, TransportError>;
}

/// reqwest-backed transport with a per-request timeout.
#[derive(Debug)]
pub struct RestTransport {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl RestTransport {
    pub fn new(config: &RestApiConfig) -> Result<Self, TransportError> {
        let timeout = Duration::from_secs(config.timeout);
        Self::with_timeout(&config.base_url, &config.user_agent, timeout)
    }

    pub fn with_timeout(
        base_url: &str,
        user_agent: &str,
        timeout: Duration,
    ) -> Result<Self, TransportError> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .map_err(TransportError::Client)?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[async_trait]
impl HttpTransport for RestTransport {
    #[instrument(skip(self, form), fields(form_len = form.len()))]
    async fn post_form(
        &self,
        endpoint: &str,
        form: &[(String, String)],
    ) -> Result<HttpReply, TransportError> {
        let url = format!("{}{}", self.base_url, endpoint);
        debug!("Sending POST request to {}", url);

        let response = match self.client.post(&url).form(form).send().await {
            Ok(response) => response,
            Err(e) if e.is_timeout() => {
                error!("POST {} timed out after {:?}", url, self.timeout);
                return Err(TransportError::Timeout(endpoint.to_string()));
            }
            Err(e) => {
                error!("Failed to send POST request: {:?}", e);
                return Err(TransportError::Network(e));
            }
        };

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            error!("Failed to read response body: {:?}", e);
            if e.is_timeout() {
                TransportError::Timeout(endpoint.to_string())
            } else {
                TransportError::Network(e)
            }
        })?;

        debug!("Response Status: {}", status);
        Ok(HttpReply { status, body })
    }
}

impl fmt::Display for RestTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{\"base_url\":{},\"timeout\":{}}}",
            json_string(&self.base_url),
            self.timeout.as_secs()
        )
    }
}
