//! Configuration error types.

/// Errors that can occur when parsing or validating a scene configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The JSON text could not be parsed into a configuration.
    #[error("failed to parse scene config: {0}")]
    Parse(#[source] serde_json::Error),

    /// The configuration could not be serialized back to JSON.
    #[error("failed to serialize scene config: {0}")]
    Serialize(#[source] serde_json::Error),

    /// A field parsed fine but holds a value the simulation cannot run with.
    #[error("invalid scene config: `{field}` {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}
