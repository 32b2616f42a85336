use crate::application::models::channel::Channel;
use crate::application::models::epg::Event;
use crate::application::models::network::Network;
use crate::application::models::order::{OrderPage, OrderQuery};
use crate::application::models::reservation::{Reservation, SubscriptionTarget};
use crate::application::models::user::UserInfo;
use crate::config::{Config, Credentials, RestApiConfig};
use crate::constants::{
    GET_CHANNEL_ENDPOINT, GET_EPG_ENDPOINT, GET_ORDER_ENDPOINT, LOGIN_ENDPOINT, SUBSCRIBE_ENDPOINT,
    TOKEN_FORM_KEY, USERINFO_ENDPOINT,
};
use crate::error::{
    AuthError, NotAuthenticatedError, ProviderFailure, SubscriptionError, TransportError,
};
use crate::session::auth::{login_form, LoginResponse};
use crate::session::Session;
use crate::transport::http_client::{HttpTransport, RestTransport};
use crate::transport::model::ApiEnvelope;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Event fields that must be present and non-empty for an entry to be a
/// bookable programme. Broadcast breaks come without them.
const REQUIRED_EVENT_FIELDS: [&str; 3] = ["event_name", "event_text", "category"];

/// Client for one account on the provider.
///
/// Starts unauthenticated. [`login`](Self::login) is the only way in; every
/// other call fails with [`SubscriptionError::NotAuthenticated`] before
/// touching the network until it has succeeded. There is no automatic
/// re-login: when the provider drops the session, calls fail with
/// [`SubscriptionError::Rejected`] and the caller decides whether to log in
/// again.
#[derive(Debug)]
pub struct TvSubscriber<T: HttpTransport = RestTransport> {
    transport: Arc<T>,
    session: Option<Session>,
}

impl TvSubscriber<RestTransport> {
    pub fn new(config: &RestApiConfig) -> Result<Self, TransportError> {
        let transport = RestTransport::new(config)?;
        Ok(Self::with_transport(Arc::new(transport)))
    }

    pub fn from_config(config: &Config) -> Result<Self, TransportError> {
        Self::new(&config.rest_api)
    }
}

impl<T: HttpTransport> TvSubscriber<T> {
    pub fn with_transport(transport: Arc<T>) -> Self {
        Self {
            transport,
            session: None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn username(&self) -> Option<&str> {
        self.session.as_ref().map(Session::username)
    }

    /// Authenticates and replaces the current session.
    ///
    /// The previous session is dropped first, so after a failed attempt the
    /// adapter is unauthenticated. Logging in again with valid credentials
    /// is always allowed.
    ///
    /// # Errors
    ///
    /// * `AuthError::EmptyField` - blank username or password, nothing sent
    /// * `AuthError::Rejected` - the provider refused the credentials
    /// * `AuthError::MalformedResponse` - no usable token in the answer
    /// * `AuthError::Transport` - timeout or network failure
    #[instrument(skip(self, password))]
    pub async fn login(&mut self, username: &str, password: &str) -> Result<Session, AuthError> {
        self.session = None;
        let credentials = Credentials::new(username, password)?;
        self.login_with(&credentials).await
    }

    /// Same as [`login`](Self::login), from an already validated pair.
    #[instrument(skip(self, credentials), fields(username = credentials.username()))]
    pub async fn login_with(&mut self, credentials: &Credentials) -> Result<Session, AuthError> {
        self.session = None;
        debug!("Authenticating user: {}", credentials.username());

        let form = login_form(credentials.username(), credentials.password());
        let reply = self.transport.post_form(LOGIN_ENDPOINT, &form).await?;

        let response: LoginResponse = match reply.into_envelope().and_then(ApiEnvelope::into_typed)
        {
            Ok(response) => response,
            Err(e) => {
                warn!("Login failed for {}: {:?}", credentials.username(), e);
                return Err(e.into());
            }
        };

        if response.onlinetoken.trim().is_empty() {
            return Err(AuthError::MalformedResponse(
                "empty onlinetoken".to_string(),
            ));
        }

        let session = Session::new(
            credentials.username().to_string(),
            response.onlinetoken,
            response.role,
        );
        info!(
            "Logged in as {} ({})",
            session.username(),
            response.information.as_deref().unwrap_or("no message")
        );
        self.session = Some(session.clone());
        Ok(session)
    }

    fn require_session(&self) -> Result<&Session, NotAuthenticatedError> {
        self.session.as_ref().ok_or(NotAuthenticatedError)
    }

    /// Sends a session-scoped request and checks the provider envelope.
    async fn call(
        &self,
        endpoint: &str,
        fields: Vec<(String, String)>,
    ) -> Result<ApiEnvelope, SubscriptionError> {
        let session = self.require_session()?;

        let mut form = Vec::with_capacity(fields.len() + 1);
        form.push((TOKEN_FORM_KEY.to_string(), session.token().to_string()));
        form.extend(fields);

        let reply = self.transport.post_form(endpoint, &form).await?;
        reply.into_envelope().map_err(|e| {
            warn!("Request to {} failed: {:?}", endpoint, e);
            SubscriptionError::from(e)
        })
    }

    /// Books a programme. Requires a prior successful login.
    #[instrument(skip(self, target), fields(sid = %target.sid, eid = %target.eid))]
    pub async fn subscribe(
        &self,
        target: &SubscriptionTarget,
    ) -> Result<Reservation, SubscriptionError> {
        let mut envelope = self.call(SUBSCRIBE_ENDPOINT, target.form_fields()).await?;
        let reservation: Reservation = envelope.take("reservation")?;
        info!(
            "Reserved {} on {} (order {})",
            target.eid, reservation.service, reservation.orderid
        );
        Ok(reservation)
    }

    /// Lists the channels of a network.
    #[instrument(skip(self))]
    pub async fn get_channels(&self, network: Network) -> Result<Vec<Channel>, SubscriptionError> {
        let fields = vec![("network".to_string(), network.as_str().to_string())];
        let mut envelope = self.call(GET_CHANNEL_ENDPOINT, fields).await?;

        let entries = match envelope.take_value("channels")? {
            Value::Array(entries) => entries,
            other => {
                return Err(ProviderFailure::Malformed(format!(
                    "`channels` is not a list: {other}"
                ))
                .into())
            }
        };

        let channels = entries
            .into_iter()
            .map(|mut entry| {
                if let Value::Object(fields) = &mut entry {
                    fields.insert("network".to_string(), Value::from(network.as_str()));
                }
                serde_json::from_value::<Channel>(entry)
            })
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| SubscriptionError::MalformedResponse(format!("invalid channel: {e}")))?;

        debug!("Fetched {} channels on {}", channels.len(), network);
        Ok(channels)
    }

    /// Fetches the programme guide of a channel.
    ///
    /// Entries without a name, description or category are not bookable and
    /// are left out.
    #[instrument(skip(self, channel), fields(service = %channel.service))]
    pub async fn get_epgs(&self, channel: &Channel) -> Result<Vec<Event>, SubscriptionError> {
        self.require_session()?;
        let epgtoken = channel
            .epgtoken
            .clone()
            .filter(|token| !token.is_empty())
            .ok_or_else(|| SubscriptionError::MissingEpgToken(channel.service.clone()))?;

        let mut fields = vec![
            ("sid".to_string(), channel.sid.clone()),
            ("network".to_string(), channel.network.as_str().to_string()),
            ("epgtoken".to_string(), epgtoken),
        ];
        if let Some(tsid) = &channel.tsid {
            fields.push(("tsid".to_string(), tsid.clone()));
        }

        let mut envelope = self.call(GET_EPG_ENDPOINT, fields).await?;
        let entries = match envelope.take_value("events")? {
            Value::Array(entries) => entries,
            other => {
                return Err(ProviderFailure::Malformed(format!(
                    "`events` is not a list: {other}"
                ))
                .into())
            }
        };

        let total = entries.len();
        let events = entries
            .into_iter()
            .filter(is_bookable)
            .map(serde_json::from_value::<Event>)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| SubscriptionError::MalformedResponse(format!("invalid event: {e}")))?;

        debug!(
            "Fetched {} events, skipped {} without programme data",
            events.len(),
            total - events.len()
        );
        Ok(events)
    }

    #[instrument(skip(self))]
    pub async fn get_userinfo(&self) -> Result<UserInfo, SubscriptionError> {
        let mut envelope = self.call(USERINFO_ENDPOINT, Vec::new()).await?;
        Ok(envelope.take("userinfo")?)
    }

    #[instrument(skip(self))]
    pub async fn get_orders(&self, query: &OrderQuery) -> Result<OrderPage, SubscriptionError> {
        let envelope = self.call(GET_ORDER_ENDPOINT, query.form_fields()).await?;
        let page: OrderPage = envelope.into_typed()?;
        debug!("Fetched {} orders", page.reservations.len());
        Ok(page)
    }

    /// Whether the provider still considers the session alive.
    ///
    /// Never fails: an unauthenticated adapter or any error counts as
    /// offline.
    pub async fn is_online(&self) -> bool {
        if !self.is_authenticated() {
            return false;
        }
        match self.get_userinfo().await {
            Ok(user) => user.is_online(),
            Err(e) => {
                debug!("Treating session as offline: {}", e);
                false
            }
        }
    }
}

fn is_bookable(entry: &Value) -> bool {
    REQUIRED_EVENT_FIELDS.iter().all(|field| {
        entry
            .get(field)
            .and_then(Value::as_str)
            .is_some_and(|s| !s.is_empty())
    })
}

impl<T: HttpTransport> fmt::Display for TvSubscriber<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TvSubscriber(\"{}\")", self.username().unwrap_or_default())
    }
}
