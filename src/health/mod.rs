//! Health checking subsystem.
//!
//! # Data Flow
//! ```text
//! Passive health checks (passive.rs):
//!     Request outcome observed
//!     → classify: 5xx / network error / anything else
//!     → host failure reported to the rotator
//! ```
//!
//! # Design Decisions
//! - Health is inferred from live traffic only; there are no active checks
//! - A single host failure is enough to move traffic, no thresholds
//! - Request-level errors say nothing about the host and are ignored

pub mod passive;

pub use passive::{
    classify_chain, classify_outcome, is_host_failure, ClassifyFailure, FailureKind, HostFailure,
    TransportError,
};
