//! Core components for talking to the Panda video encoding service.
//!
//! This crate provides the shared plumbing used by the panda crates:
//!
//! - **Context**: holds the HTTP transport, environment access and the
//!   observers that receive debug and transport-failure notifications.
//! - **Errors**: a single [`Error`] type classified by [`ErrorKind`].
//! - **Utilities**: HMAC hashing, timestamp formatting and secret redaction.
//!
//! ## Traits
//!
//! - [`HttpSend`]: For sending HTTP requests
//! - [`Env`]: For environment variable access
//! - [`Observe`]: For receiving diagnostics
//!
//! ## Utilities
//!
//! - [`hash`]: Cryptographic hashing utilities
//! - [`time`]: Time formatting utilities
//! - [`utils`]: General utilities including data redaction

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod context;
pub use context::Context;
pub use context::Env;
pub use context::NoopEnv;
pub use context::OsEnv;
pub use context::StaticEnv;
mod http;
pub use http::HttpSend;
pub use http::NoopHttpSend;
mod observe;
pub use observe::LogObserver;
pub use observe::Observe;

mod error;
pub use error::{Error, ErrorKind, Result};
