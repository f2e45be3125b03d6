//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML) or command line host list
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → RotatorConfig (validated, immutable)
//!     → HostRotator::from_config
//! ```
//!
//! # Design Decisions
//! - Config is read once at construction; there is no runtime reload
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config};
pub use schema::{HostList, ObservabilityConfig, RotatorConfig, TimeoutConfig};
pub use validation::validate_config;
