/******************************************************************************
    Author: Joaquín Béjar García
    Email: jb@taunais.com
    Date: 12/5/25
 ******************************************************************************/
use reqwest::StatusCode;
use std::fmt;
use std::fmt::{Display, Formatter};

/// Failure to reach the provider or to read its answer.
#[derive(Debug)]
pub enum TransportError {
    /// The request to the given endpoint exceeded the configured timeout.
    Timeout(String),
    Network(reqwest::Error),
    /// The underlying HTTP client could not be built.
    Client(reqwest::Error),
}

impl Display for TransportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            TransportError::Timeout(endpoint) => write!(f, "request to {endpoint} timed out"),
            TransportError::Network(e) => write!(f, "network error: {e}"),
            TransportError::Client(e) => write!(f, "http client error: {e}"),
        }
    }
}

impl std::error::Error for TransportError {}

impl From<reqwest::Error> for TransportError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            let endpoint = e.url().map(|u| u.path().to_string()).unwrap_or_default();
            TransportError::Timeout(endpoint)
        } else {
            TransportError::Network(e)
        }
    }
}

/// A dependent operation was called before a successful login.
///
/// Detected locally; no request is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotAuthenticatedError;

impl Display for NotAuthenticatedError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "not authenticated: login must succeed first")
    }
}

impl std::error::Error for NotAuthenticatedError {}

#[derive(Debug)]
pub enum AuthError {
    /// A credential field was empty; nothing was sent.
    EmptyField(&'static str),
    /// The provider refused the credentials.
    Rejected { code: i64, information: String },
    UnexpectedStatus(StatusCode),
    MalformedResponse(String),
    Transport(TransportError),
}

impl AuthError {
    pub fn is_rejected(&self) -> bool {
        matches!(self, AuthError::Rejected { .. })
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, AuthError::Transport(_))
    }
}

impl Display for AuthError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::EmptyField(field) => write!(f, "{field} must not be empty"),
            AuthError::Rejected { code, information } => {
                write!(f, "login rejected (code {code}): {information}")
            }
            AuthError::UnexpectedStatus(s) => write!(f, "unexpected http status: {s}"),
            AuthError::MalformedResponse(msg) => write!(f, "malformed login response: {msg}"),
            AuthError::Transport(e) => write!(f, "login failed: {e}"),
        }
    }
}

impl std::error::Error for AuthError {}

impl From<TransportError> for AuthError {
    fn from(e: TransportError) -> Self {
        AuthError::Transport(e)
    }
}

impl From<ProviderFailure> for AuthError {
    fn from(e: ProviderFailure) -> Self {
        match e {
            ProviderFailure::Rejected { code, information } => {
                AuthError::Rejected { code, information }
            }
            ProviderFailure::UnexpectedStatus(s) => AuthError::UnexpectedStatus(s),
            ProviderFailure::Malformed(msg) => AuthError::MalformedResponse(msg),
        }
    }
}

/// Failure of an operation that needs an authenticated session.
#[derive(Debug)]
pub enum SubscriptionError {
    NotAuthenticated(NotAuthenticatedError),
    /// The channel carries no EPG token, so its guide cannot be requested.
    MissingEpgToken(String),
    /// The provider answered with a non-200 `response_code` (or 401/403).
    /// An expired session lands here as well.
    Rejected { code: i64, information: String },
    UnexpectedStatus(StatusCode),
    MalformedResponse(String),
    Transport(TransportError),
}

impl SubscriptionError {
    pub fn is_not_authenticated(&self) -> bool {
        matches!(self, SubscriptionError::NotAuthenticated(_))
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, SubscriptionError::Rejected { .. })
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, SubscriptionError::Transport(_))
    }
}

impl Display for SubscriptionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SubscriptionError::NotAuthenticated(e) => write!(f, "{e}"),
            SubscriptionError::MissingEpgToken(service) => {
                write!(f, "channel {service} has no epg token")
            }
            SubscriptionError::Rejected { code, information } => {
                write!(f, "request rejected (code {code}): {information}")
            }
            SubscriptionError::UnexpectedStatus(s) => write!(f, "unexpected http status: {s}"),
            SubscriptionError::MalformedResponse(msg) => write!(f, "malformed response: {msg}"),
            SubscriptionError::Transport(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for SubscriptionError {}

impl From<NotAuthenticatedError> for SubscriptionError {
    fn from(e: NotAuthenticatedError) -> Self {
        SubscriptionError::NotAuthenticated(e)
    }
}

impl From<TransportError> for SubscriptionError {
    fn from(e: TransportError) -> Self {
        SubscriptionError::Transport(e)
    }
}

impl From<ProviderFailure> for SubscriptionError {
    fn from(e: ProviderFailure) -> Self {
        match e {
            ProviderFailure::Rejected { code, information } => {
                SubscriptionError::Rejected { code, information }
            }
            ProviderFailure::UnexpectedStatus(s) => SubscriptionError::UnexpectedStatus(s),
            ProviderFailure::Malformed(msg) => SubscriptionError::MalformedResponse(msg),
        }
    }
}

/// Outcome of decoding one provider reply, before it is attributed to
/// login or to a dependent operation.
#[derive(Debug, PartialEq)]
pub(crate) enum ProviderFailure {
    Rejected { code: i64, information: String },
    UnexpectedStatus(StatusCode),
    Malformed(String),
}

/// Any error this crate can return.
#[derive(Debug)]
pub enum AppError {
    Auth(AuthError),
    Subscription(SubscriptionError),
    Transport(TransportError),
}

impl Display for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Auth(e) => write!(f, "auth error: {e}"),
            AppError::Subscription(e) => write!(f, "subscription error: {e}"),
            AppError::Transport(e) => write!(f, "transport error: {e}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<AuthError> for AppError {
    fn from(e: AuthError) -> Self {
        AppError::Auth(e)
    }
}

impl From<SubscriptionError> for AppError {
    fn from(e: SubscriptionError) -> Self {
        AppError::Subscription(e)
    }
}

impl From<TransportError> for AppError {
    fn from(e: TransportError) -> Self {
        AppError::Transport(e)
    }
}
