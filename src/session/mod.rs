pub(crate) mod auth;

pub mod session;

pub use session::Session;
