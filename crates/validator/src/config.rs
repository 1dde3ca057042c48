//! Configuration types for validation

use serde::{Deserialize, Serialize};

/// Errors raised while loading a [`ValidatorConfig`].
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The configuration text is not valid JSON or has the wrong shape.
    #[error("invalid validator configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// How the [`Type`](crate::validators::Type) validator converts values of
/// another kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoercionPolicy {
    /// Apply coercion rules at all. When false only exact kinds pass.
    pub coerce: bool,
    /// Reject boolean text that is neither truthy nor falsy instead of
    /// reading it as `false`.
    pub strict_booleans: bool,
}

impl Default for CoercionPolicy {
    fn default() -> Self {
        Self {
            coerce: true,
            strict_booleans: false,
        }
    }
}

impl CoercionPolicy {
    /// Exact-kind checks only.
    pub const fn exact() -> Self {
        Self {
            coerce: false,
            strict_booleans: false,
        }
    }

    /// Coercion with strict boolean parsing.
    pub const fn strict() -> Self {
        Self {
            coerce: true,
            strict_booleans: true,
        }
    }
}

/// Schema-wide settings.
///
/// # Examples
///
/// ```rust
/// use sift_validator::config::ValidatorConfig;
///
/// let config = ValidatorConfig::from_json_str(r#"{"ignore_unknown_keys": true}"#).unwrap();
/// assert!(config.ignore_unknown_keys);
/// assert!(config.coercion.coerce);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// Coercion policy for type checks.
    pub coercion: CoercionPolicy,
    /// Let keyed maps accept keys their schema does not declare.
    pub ignore_unknown_keys: bool,
}

impl ValidatorConfig {
    /// Create a new configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a configuration from JSON text. Missing fields take defaults.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_coercion(mut self, coercion: CoercionPolicy) -> Self {
        self.coercion = coercion;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_ignore_unknown_keys(mut self, ignore: bool) -> Self {
        self.ignore_unknown_keys = ignore;
        self
    }
}
