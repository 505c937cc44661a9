//! Error types for the scene gateway
//!
//! Every failure a gateway call can produce is one of the [`GatewayError`]
//! variants; nothing is retried or swallowed inside the gateway.

use std::io;
use std::time::Duration;
use thiserror::Error;

/// Typed failure of a single gateway call
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Caller input was missing, mistyped or out of range. Never reaches the network.
    #[error("validation error: {0}")]
    Validation(String),

    /// The connection could not be established or written to
    #[error("connection error ({addr}): {source}")]
    Connection {
        /// Engine address the call targeted
        addr: String,
        /// Underlying socket error
        #[source]
        source: io::Error,
    },

    /// Connected, but no well-formed newline-terminated reply arrived
    #[error("protocol error: {0}")]
    Protocol(String),

    /// The reply line was not a JSON object carrying a success flag
    #[error("decode error: {0}")]
    Decode(String),

    /// The call exceeded its allotted wait
    #[error("timed out after {}ms", after.as_millis())]
    Timeout {
        /// Budget that was exhausted
        after: Duration,
    },

    /// The engine answered with `success: false`
    #[error("engine rejected {command}: {message}")]
    EngineRejected {
        /// Command the engine refused
        command: String,
        /// Engine error text, unmodified
        message: String,
    },
}

impl GatewayError {
    /// Build a validation error for a named parameter.
    pub fn invalid_param(name: &str, detail: impl std::fmt::Display) -> Self {
        GatewayError::Validation(format!("{name}: {detail}"))
    }

    /// Stable snake_case code for this error class.
    pub fn code(&self) -> &'static str {
        match self {
            GatewayError::Validation(_) => "validation_error",
            GatewayError::Connection { .. } => "connection_error",
            GatewayError::Protocol(_) => "protocol_error",
            GatewayError::Decode(_) => "decode_error",
            GatewayError::Timeout { .. } => "timeout",
            GatewayError::EngineRejected { .. } => "engine_rejected",
        }
    }

    /// Engine error text when the engine rejected the command.
    pub fn engine_message(&self) -> Option<&str> {
        match self {
            GatewayError::EngineRejected { message, .. } => Some(message),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for GatewayError {
    fn from(err: serde_json::Error) -> Self {
        GatewayError::Decode(err.to_string())
    }
}

/// Convenience result alias for gateway calls
pub type GatewayResult<T> = std::result::Result<T, GatewayError>;

/// Invalid configuration values read from the environment
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A variable was set but could not be parsed
    #[error("invalid value for {name}: {value:?} ({detail})")]
    InvalidValue {
        /// Variable name
        name: String,
        /// Raw value as read
        value: String,
        /// Parse failure description
        detail: String,
    },
}
