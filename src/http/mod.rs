//! HTTP request handling subsystem.
//!
//! # Data Flow
//! ```text
//! outgoing request
//!     → middleware.rs (tower Service, called by the retry stage)
//!     → rotator.rs (read current host under the lock)
//!     → request.rs (rewrite scheme + authority)
//!     → inner transport service (no lock held)
//!     → rotator.rs (classify outcome, rotate on host failure)
//!     → original result returned upstream
//! ```

pub mod middleware;
pub mod request;
pub mod rotator;

pub use middleware::{HostRotatorLayer, HostRotatorService};
pub use request::{rewrite_request, rewrite_uri};
pub use rotator::HostRotator;
