//! `table:key` record references.

use core::fmt;
use core::str::FromStr;

/// A reference to a record, rendered as `table:key`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordId {
    table: String,
    key: String,
}

/// Error returned when a string is not of the form `table:key`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordIdError(pub String);

impl fmt::Display for RecordIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid record id `{}`: expected `table:key`", self.0)
    }
}

impl std::error::Error for RecordIdError {}

impl RecordId {
    pub fn new(table: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            key: key.into(),
        }
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

impl FromStr for RecordId {
    type Err = RecordIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(':') {
            Some((table, key)) if !table.is_empty() && !key.is_empty() => {
                Ok(Self::new(table, key))
            }
            _ => Err(RecordIdError(s.to_string())),
        }
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.table, self.key)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for RecordId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for RecordId {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_table_and_key() {
        let id: RecordId = "user:tobie".parse().unwrap();
        assert_eq!(id.table(), "user");
        assert_eq!(id.key(), "tobie");
        assert_eq!(id.to_string(), "user:tobie");
    }

    #[test]
    fn rejects_missing_parts() {
        assert!("user".parse::<RecordId>().is_err());
        assert!(":tobie".parse::<RecordId>().is_err());
        assert!("user:".parse::<RecordId>().is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserializes_from_string() {
        let id: RecordId = serde_json::from_str("\"post:1\"").unwrap();
        assert_eq!(id, RecordId::new("post", "1"));
    }
}
