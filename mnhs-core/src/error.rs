/// Structured error types for mnhs-core.
///
/// Uses `thiserror` so the transports can tell a dead connection from a
/// rejected statement. The CLI still wraps these in `anyhow` for context.
use thiserror::Error;

/// Main error type for data-access operations
#[derive(Error, Debug)]
pub enum MnhsError {
    /// Opening the database connection failed
    #[error("database connection failed: {source}")]
    Connect {
        #[source]
        source: sqlx::Error,
    },

    /// A statement, constraint, or transaction failed
    #[error("{source}")]
    Query {
        #[from]
        source: sqlx::Error,
    },

    /// A derived column held a value we do not understand
    #[error("unexpected value '{value}' in column {column}")]
    Decode { column: &'static str, value: String },

    /// Configuration error
    #[error("configuration error: {reason}")]
    Config { reason: String },
}

/// Result type alias for mnhs-core operations
pub type Result<T> = std::result::Result<T, MnhsError>;

impl MnhsError {
    /// Wrap a failure that happened while connecting
    pub fn connect(source: sqlx::Error) -> Self {
        Self::Connect { source }
    }

    /// Create a decode error
    pub fn decode(column: &'static str, value: impl Into<String>) -> Self {
        Self::Decode {
            column,
            value: value.into(),
        }
    }

    /// Create a config error
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }

    /// True when the database could not be reached at all.
    pub fn is_connection(&self) -> bool {
        matches!(self, Self::Connect { .. })
    }
}
