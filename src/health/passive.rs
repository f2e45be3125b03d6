//! Passive health checking (failure detection).
//!
//! # Responsibilities
//! - Observe request outcomes
//! - Decide whether an outcome is attributable to the host
//!
//! # Design Decisions
//! - Only network errors and 5xx count as host failures
//! - Timeouts are network errors
//! - 4xx (and 429) are NOT failures (client error, not host)
//! - Errors are classified through the `ClassifyFailure` capability rather
//!   than one concrete error type, so any transport can plug in

use std::error::Error as StdError;
use std::fmt;
use std::io;

use http::{Response, StatusCode};
use thiserror::Error;

/// Which side of the connection an error is attributable to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// Reaching or talking to the host failed (refused, reset, DNS, TLS, timeout).
    Network,
    /// The request itself could not be built or sent; host health is unknown.
    Request,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::Network => f.write_str("network"),
            FailureKind::Request => f.write_str("request"),
        }
    }
}

/// Classify a downstream error as network-level or request-level.
pub trait ClassifyFailure {
    fn failure_kind(&self) -> FailureKind;
}

/// Why an outcome counts against the host that served it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostFailure {
    /// The host answered with a status of 500 or above.
    ServerError(StatusCode),
    /// The request never completed against the host.
    Network,
}

impl fmt::Display for HostFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostFailure::ServerError(status) => write!(f, "server error {}", status.as_u16()),
            HostFailure::Network => f.write_str("network error"),
        }
    }
}

/// Return the host failure carried by an outcome, if any.
pub fn classify_outcome<B, E>(result: &Result<Response<B>, E>) -> Option<HostFailure>
where
    E: ClassifyFailure,
{
    match result {
        Ok(response) if response.status().as_u16() >= 500 => {
            Some(HostFailure::ServerError(response.status()))
        }
        Ok(_) => None,
        Err(e) => match e.failure_kind() {
            FailureKind::Network => Some(HostFailure::Network),
            FailureKind::Request => None,
        },
    }
}

/// True when the outcome should move traffic off the host.
pub fn is_host_failure<B, E>(result: &Result<Response<B>, E>) -> bool
where
    E: ClassifyFailure,
{
    classify_outcome(result).is_some()
}

/// An error explicitly tagged with its failure kind.
///
/// For transports whose own error types carry no usable classification.
#[derive(Debug, Error)]
#[error("{kind} error: {message}")]
pub struct TransportError {
    kind: FailureKind,
    message: String,
}

impl TransportError {
    pub fn network(message: impl Into<String>) -> Self {
        Self {
            kind: FailureKind::Network,
            message: message.into(),
        }
    }

    pub fn request(message: impl Into<String>) -> Self {
        Self {
            kind: FailureKind::Request,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> FailureKind {
        self.kind
    }
}

impl ClassifyFailure for TransportError {
    fn failure_kind(&self) -> FailureKind {
        self.kind
    }
}

impl ClassifyFailure for io::Error {
    fn failure_kind(&self) -> FailureKind {
        match self.kind() {
            io::ErrorKind::ConnectionRefused
            | io::ErrorKind::ConnectionReset
            | io::ErrorKind::ConnectionAborted
            | io::ErrorKind::NotConnected
            | io::ErrorKind::AddrNotAvailable
            | io::ErrorKind::BrokenPipe
            | io::ErrorKind::TimedOut
            | io::ErrorKind::UnexpectedEof => FailureKind::Network,
            _ => FailureKind::Request,
        }
    }
}

impl ClassifyFailure for hyper::Error {
    fn failure_kind(&self) -> FailureKind {
        // User errors are raised before anything reaches the host.
        if self.is_user() {
            FailureKind::Request
        } else {
            FailureKind::Network
        }
    }
}

impl ClassifyFailure for hyper_util::client::legacy::Error {
    fn failure_kind(&self) -> FailureKind {
        if self.is_connect() {
            return FailureKind::Network;
        }
        self.source()
            .map(classify_chain)
            .unwrap_or(FailureKind::Request)
    }
}

impl ClassifyFailure for tower::timeout::error::Elapsed {
    fn failure_kind(&self) -> FailureKind {
        FailureKind::Network
    }
}

impl ClassifyFailure for tower::BoxError {
    fn failure_kind(&self) -> FailureKind {
        classify_chain(&**self)
    }
}

/// Classify an arbitrary error by walking its source chain.
///
/// The first error in the chain of a known type decides; an error chain
/// with no known type is treated as request-level.
pub fn classify_chain(err: &(dyn StdError + 'static)) -> FailureKind {
    let mut current = Some(err);
    while let Some(e) = current {
        if let Some(kind) = known_kind(e) {
            return kind;
        }
        current = e.source();
    }
    FailureKind::Request
}

fn known_kind(e: &(dyn StdError + 'static)) -> Option<FailureKind> {
    if let Some(e) = e.downcast_ref::<TransportError>() {
        return Some(e.failure_kind());
    }
    if let Some(e) = e.downcast_ref::<hyper_util::client::legacy::Error>() {
        return Some(e.failure_kind());
    }
    if let Some(e) = e.downcast_ref::<hyper::Error>() {
        return Some(e.failure_kind());
    }
    if let Some(e) = e.downcast_ref::<tower::timeout::error::Elapsed>() {
        return Some(e.failure_kind());
    }
    if let Some(e) = e.downcast_ref::<io::Error>() {
        return Some(e.failure_kind());
    }
    None
}
