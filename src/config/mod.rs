//! Configuration resolution and the resolve-once registry.
//!
//! Handles environment variable reading, the refresh-token file, the
//! credential-triple check, and log level normalisation.

pub mod loader;
pub mod log_level;
pub mod registry;
pub mod secret;

pub use loader::{AuthMode, ConfigError, ConfigSummary, ResolvedConfig};
pub use log_level::LogLevel;
pub use registry::{ConfigRegistry, RegistryState};
pub use secret::{Secret, read_secret_file};
