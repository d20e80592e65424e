//! Configuration for sorm
//!
//! Handles loading `sorm.config.toml`: connection target plus query defaults.

use serde::Deserialize;
use std::path::Path;

use sorm_core::{ResultShape, SormError};

pub const CONFIG_FILE: &str = "sorm.config.toml";

// ============================================================================
// Config types
// ============================================================================

/// Connection target and defaults.
///
/// ```toml
/// endpoint = "ws://localhost:8000"
/// namespace = "app"
/// database = "main"
///
/// [credentials]
/// username = "root"
/// password = "root"
///
/// [query]
/// shape = "raw"
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SormConfig {
    pub endpoint: String,
    #[serde(default, alias = "ns")]
    pub namespace: Option<String>,
    #[serde(default, alias = "db")]
    pub database: Option<String>,
    #[serde(default)]
    pub credentials: Option<Credentials>,
    #[serde(default)]
    pub query: QueryDefaults,
}

/// Sign-in credentials, handed to the connector as-is.
#[derive(Clone, PartialEq, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// Defaults applied when an options struct leaves a setting unset.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct QueryDefaults {
    #[serde(default)]
    pub shape: ResultShape,
}

// ============================================================================
// Config implementation
// ============================================================================

impl SormConfig {
    /// Config for `endpoint` with no namespace, database or credentials.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            namespace: None,
            database: None,
            credentials: None,
            query: QueryDefaults::default(),
        }
    }

    /// Load from default config file
    pub fn load() -> Result<Self, SormError> {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    /// Load from specific path
    pub fn load_from(path: &Path) -> Result<Self, SormError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                SormError::Config(format!("config file not found: {}", path.display()))
            } else {
                SormError::Io(e)
            }
        })?;
        Self::from_toml_str(&content).map_err(|e| match e {
            SormError::Config(msg) => SormError::Config(format!("{}: {msg}", path.display())),
            other => other,
        })
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self, SormError> {
        let config: Self =
            toml::from_str(content).map_err(|e| SormError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), SormError> {
        if self.endpoint.trim().is_empty() {
            return Err(SormError::Config("endpoint must not be empty".into()));
        }
        if self.database.is_some() && self.namespace.is_none() {
            return Err(SormError::Config("database requires a namespace".into()));
        }
        if let Some(creds) = &self.credentials
            && creds.username.is_empty()
        {
            return Err(SormError::Config("credentials require a username".into()));
        }
        Ok(())
    }

    #[must_use]
    pub fn namespace(mut self, ns: impl Into<String>) -> Self {
        self.namespace = Some(ns.into());
        self
    }

    #[must_use]
    pub fn database(mut self, db: impl Into<String>) -> Self {
        self.database = Some(db.into());
        self
    }

    #[must_use]
    pub fn credentials(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.credentials = Some(Credentials {
            username: username.into(),
            password: password.into(),
        });
        self
    }

    #[must_use]
    pub fn shape(mut self, shape: ResultShape) -> Self {
        self.query.shape = shape;
        self
    }
}

// ============================================================================
// Tests
// ============================================================================
