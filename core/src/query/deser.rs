//! Row decoding for the typed relational API.
//!
//! Included relations are removed from the row, decoded into the store and
//! replaced by a reference, so the base record always deserializes with its
//! relation attributes in reference form.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value as Json};

use crate::error::{Result, SormError};
use crate::relation::RelationDef;

use super::row::Fetched;
use super::store::RelEntry;

/// Decodes a value from a JSON result.
pub trait FromJsonValue: Sized {
    fn from_json_value(value: Json) -> Result<Self>;
}

impl<Base, Store> FromJsonValue for Fetched<Base, Store>
where
    Base: DeserializeOwned,
    Store: DeserializeStore,
{
    fn from_json_value(mut value: Json) -> Result<Self> {
        let Json::Object(row) = &mut value else {
            return Err(SormError::Mapping(format!(
                "expected a record object, found {}",
                json_kind(&value)
            )));
        };
        let store = Store::take_from(row)?;
        let base = serde_json::from_value(value).map_err(|e| SormError::Mapping(e.to_string()))?;
        Ok(Fetched::new(base, store))
    }
}

impl<T: FromJsonValue> FromJsonValue for Option<T> {
    fn from_json_value(value: Json) -> Result<Self> {
        match value {
            Json::Null => Ok(None),
            value => T::from_json_value(value).map(Some),
        }
    }
}

impl<T: FromJsonValue> FromJsonValue for Vec<T> {
    fn from_json_value(value: Json) -> Result<Self> {
        match value {
            Json::Null => Ok(Vec::new()),
            Json::Array(items) => items.into_iter().map(T::from_json_value).collect(),
            other => Err(SormError::Mapping(format!(
                "expected an array, found {}",
                json_kind(&other)
            ))),
        }
    }
}

/// Extracts the included relation data of a `RelEntry` chain from a row.
pub trait DeserializeStore: Sized {
    fn take_from(row: &mut Map<String, Json>) -> Result<Self>;
}

impl DeserializeStore for () {
    fn take_from(_row: &mut Map<String, Json>) -> Result<Self> {
        Ok(())
    }
}

impl<R, Data, Rest> DeserializeStore for RelEntry<R, Data, Rest>
where
    R: RelationDef,
    Data: FromJsonValue,
    Rest: DeserializeStore,
{
    fn take_from(row: &mut Map<String, Json>) -> Result<Self> {
        let rest = Rest::take_from(row)?;
        let raw = row.remove(R::NAME);
        let reference = raw.as_ref().map(collapse_to_reference);
        let data = Data::from_json_value(raw.unwrap_or(Json::Null)).map_err(|e| match e {
            SormError::Mapping(msg) => SormError::Mapping(format!("relation `{}`: {msg}", R::NAME)),
            other => other,
        })?;
        if let Some(reference) = reference {
            row.insert(R::NAME.to_string(), reference);
        }
        Ok(RelEntry::new(data, rest))
    }
}

/// Reduces a fetched relation value to its reference form.
///
/// Records become their `id`, arrays collapse element-wise and anything else
/// (already a reference, or null) is kept.
pub fn collapse_to_reference(value: &Json) -> Json {
    match value {
        Json::Object(record) => record.get("id").cloned().unwrap_or(Json::Null),
        Json::Array(items) => Json::Array(items.iter().map(collapse_to_reference).collect()),
        other => other.clone(),
    }
}

fn json_kind(value: &Json) -> &'static str {
    match value {
        Json::Null => "null",
        Json::Bool(_) => "a boolean",
        Json::Number(_) => "a number",
        Json::String(_) => "a string",
        Json::Array(_) => "an array",
        Json::Object(_) => "an object",
    }
}
