//! Pool configuration structures.

use serde::{Deserialize, Serialize};

/// What to do with a spawned process's stdout and stderr.
///
/// The choice is deliberately binary. Capturing a pipe that nobody drains
/// blocks the child once the pipe buffer fills, so captured streams are not
/// offered; a caller that wants the output redirects it inside the command
/// itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StdioPolicy {
    /// Children write to the driving process's own stdout/stderr.
    #[default]
    Inherit,
    /// Children write to the null device.
    Discard,
}

/// Pool configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoolConfig {
    /// Maximum number of concurrently running processes.
    pub max_concurrent: usize,
    /// Output stream policy for spawned processes.
    #[serde(default)]
    pub stdio: StdioPolicy,
}

impl PoolConfig {
    /// Create a configuration with the given ceiling and default stdio
    /// policy.
    pub const fn new(max_concurrent: usize) -> Self {
        Self {
            max_concurrent,
            stdio: StdioPolicy::Inherit,
        }
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns a message describing the first invalid field.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_concurrent == 0 {
            return Err("max_concurrent must be greater than 0".into());
        }
        Ok(())
    }

    /// Parse a pool configuration from a JSON string and validate it.
    ///
    /// # Errors
    ///
    /// Returns a message for malformed JSON or invalid values.
    pub fn from_json_str(input: &str) -> Result<Self, String> {
        let cfg: Self = serde_json::from_str(input).map_err(|e| format!("parse error: {e}"))?;
        cfg.validate()?;
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_ceiling() {
        assert!(PoolConfig::new(0).validate().is_err());
        assert!(PoolConfig::new(1).validate().is_ok());
    }

    #[test]
    fn parses_json_with_default_stdio() {
        let cfg = PoolConfig::from_json_str(r#"{"max_concurrent": 4}"#).unwrap();
        assert_eq!(cfg.max_concurrent, 4);
        assert_eq!(cfg.stdio, StdioPolicy::Inherit);
    }

    #[test]
    fn parses_explicit_stdio_policy() {
        let cfg =
            PoolConfig::from_json_str(r#"{"max_concurrent": 2, "stdio": "discard"}"#).unwrap();
        assert_eq!(cfg.stdio, StdioPolicy::Discard);
    }

    #[test]
    fn rejects_invalid_json_and_values() {
        assert!(PoolConfig::from_json_str("not json").is_err());
        assert!(PoolConfig::from_json_str(r#"{"max_concurrent": 0}"#).is_err());
    }
}
