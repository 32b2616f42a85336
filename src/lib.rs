/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 3/9/24
******************************************************************************/

//! Async client for the rec.mlsub.net TV recording service.
//!
//! A [`TvSubscriber`] owns one authenticated session. Call
//! [`TvSubscriber::login`] first; every other operation (channel listing,
//! programme guide, subscription, account info) requires that session and
//! fails locally with [`SubscriptionError::NotAuthenticated`] otherwise.

pub mod config;

pub mod constants;

pub mod error;

pub mod application;

pub mod presentation;

pub mod session;

pub mod transport;

pub mod utils;

pub use application::services::subscriber_service::TvSubscriber;
pub use config::{Config, Credentials};
pub use error::{AppError, AuthError, NotAuthenticatedError, SubscriptionError, TransportError};
