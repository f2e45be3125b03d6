//! Sticky upstream host selection for HTTP clients.
//!
//! A [`HostRotator`] picks one host from a fixed pool and keeps sending
//! requests there until a request fails at the host level (a 5xx response or
//! a network error). It then moves to a different host, chosen at random.
//! [`HostRotatorLayer`] plugs the rotator into a tower client stack.

pub mod config;
pub mod error;
pub mod health;
pub mod http;
pub mod observability;
pub mod pool;

pub use config::RotatorConfig;
pub use error::ConfigError;
pub use health::{ClassifyFailure, FailureKind, TransportError};
pub use crate::http::{HostRotator, HostRotatorLayer, HostRotatorService};
pub use pool::HostEntry;
