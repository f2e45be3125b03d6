//! Host pool subsystem.
//!
//! # Data Flow
//! ```text
//! configured host strings
//!     → host.rs (parse, normalize to scheme + host + port)
//!     → rotation.rs (ordered Vec<HostEntry> + current index)
//!     → current() on every request
//!     → rotate() on host-level failure
//! ```
//!
//! # Design Decisions
//! - Index into a Vec rather than a linked structure; pools are small
//! - Rotation never shrinks the pool, a failed host is re-queued at the back
//! - The pool itself is not synchronized; `http::rotator` wraps it in a lock

pub mod host;
pub mod rotation;

pub use host::HostEntry;
pub use rotation::HostPool;
