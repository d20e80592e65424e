use thiserror::Error;

#[derive(Debug, Error)]
pub enum SormError {
    /// A generator was called with an empty table name
    #[error("Missing table name")]
    MissingTable,

    /// A record id or other structural identifier was empty
    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(String),

    /// No client is attached
    #[error("Not connected")]
    NotConnected,

    /// Error establishing a connection
    #[error("Connection error: {0}")]
    Connection(String),

    /// The server rejected a statement
    #[error("Execution error: {0}")]
    Execution(String),

    /// Error raised by the client implementation
    #[error("Client error: {0}")]
    Client(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Error mapping a response into typed rows
    #[error("Mapping error: {0}")]
    Mapping(String),

    /// Error loading configuration
    #[error("Config error: {0}")]
    Config(String),

    /// IO error (config files)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SormError {
    /// Wraps an arbitrary client error.
    pub fn client<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Client(Box::new(err))
    }

    /// Renders the error as the tagged failure object
    /// `{ "error": { "status": false, "message": ... } }`.
    pub fn to_status_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "status": false,
                "message": self.to_string(),
            }
        })
    }
}

/// Result type for sorm operations
pub type Result<T> = std::result::Result<T, SormError>;
