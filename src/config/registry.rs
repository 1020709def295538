//! Resolve-once holder for the server configuration.
//!
//! The startup sequence builds one [`ConfigRegistry`] and passes it by
//! reference to whatever needs configuration. The first successful
//! [`ConfigRegistry::get`] resolves and caches the value; every later call
//! returns the same reference. A failed resolution is not cached, so the
//! next call tries again.

use once_cell::sync::OnceCell;
use tracing::debug;

use super::loader::{ConfigError, ResolvedConfig};
use crate::env::Env;

/// Lifecycle of a [`ConfigRegistry`]. There is no way back to `Unresolved`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryState {
    Unresolved,
    Resolved,
}

#[derive(Debug)]
pub struct ConfigRegistry {
    env: Env,
    resolved: OnceCell<ResolvedConfig>,
}

impl ConfigRegistry {
    /// Create a registry that resolves from `env` on first access.
    pub fn new(env: Env) -> Self {
        Self {
            env,
            resolved: OnceCell::new(),
        }
    }

    /// Create a registry backed by the real process environment.
    pub fn from_process_env() -> Self {
        Self::new(Env::real())
    }

    /// Return the resolved configuration, resolving it on first use.
    pub fn get(&self) -> Result<&ResolvedConfig, ConfigError> {
        self.resolved.get_or_try_init(|| {
            debug!("Resolving configuration from environment");
            ResolvedConfig::resolve(&self.env)
        })
    }

    /// The environment this registry resolves from.
    pub fn env(&self) -> &Env {
        &self.env
    }

    pub fn state(&self) -> RegistryState {
        if self.resolved.get().is_some() {
            RegistryState::Resolved
        } else {
            RegistryState::Unresolved
        }
    }
}
