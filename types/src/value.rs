//! Caster input values.

use crate::{Object, RecordId, TagRef, Temporal, TypeTag};

/// A raw value handed to the caster.
///
/// `Value::None` is the explicit absence form. [`Value::Tagged`] carries an
/// explicit coercion request (`{ data, as, dataAs }`).
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
    #[default]
    None,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Bytes(Vec<u8>),
    Array(Vec<Value>),
    Object(Object),
    /// An ISO-8601 datetime produced by a [`Temporal`] value.
    Datetime(String),
    Record(RecordId),
    Tagged(Box<Tagged>),
}

/// An explicit coercion request.
#[derive(Debug, Clone, PartialEq)]
pub struct Tagged {
    pub data: Value,
    /// The tag to coerce `data` to. `None` infers it from `data`.
    pub as_tag: Option<TagRef>,
    /// Element tag applied to each item when `as_tag` is `array`.
    pub data_as: Option<TagRef>,
}

impl Value {
    /// Wraps `data` in an explicit coercion to `tag`.
    ///
    /// ```
    /// use sorm_types::{TypeTag, Value};
    ///
    /// let v = Value::cast_as("42", TypeTag::Int);
    /// assert!(matches!(v, Value::Tagged(_)));
    /// ```
    pub fn cast_as(data: impl Into<Value>, tag: impl Into<TagRef>) -> Self {
        Self::Tagged(Box::new(Tagged {
            data: data.into(),
            as_tag: Some(tag.into()),
            data_as: None,
        }))
    }

    /// Wraps `data` as an array whose elements are each coerced to `element`.
    pub fn array_of(data: impl Into<Value>, element: impl Into<TagRef>) -> Self {
        Self::Tagged(Box::new(Tagged {
            data: data.into(),
            as_tag: Some(TypeTag::Array.into()),
            data_as: Some(element.into()),
        }))
    }

    /// Converts a [`Temporal`] into a datetime value.
    pub fn temporal<T: Temporal + ?Sized>(value: &T) -> Self {
        Self::Datetime(value.to_iso_string())
    }

    pub fn object<K: Into<String>, V: Into<Value>>(
        entries: impl IntoIterator<Item = (K, V)>,
    ) -> Self {
        Self::Object(entries.into_iter().collect())
    }

    /// `true` for the explicit absence form and for the empty string.
    pub fn is_absent(&self) -> bool {
        match self {
            Self::None => true,
            Self::String(s) => s.is_empty(),
            _ => false,
        }
    }

    /// A short name for the runtime kind, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::String(_) => "string",
            Self::Bytes(_) => "bytes",
            Self::Array(_) => "array",
            Self::Object(_) => "object",
            Self::Datetime(_) => "datetime",
            Self::Record(_) => "record",
            Self::Tagged(_) => "tagged",
        }
    }
}

macro_rules! impl_from_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Value::Int(i64::from(v))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        match i64::try_from(v) {
            Ok(i) => Value::Int(i),
            Err(_) => Value::Float(v as f64),
        }
    }
}

impl From<usize> for Value {
    fn from(v: usize) -> Self {
        Value::from(v as u64)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(f64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&String> for Value {
    fn from(v: &String) -> Self {
        Value::String(v.clone())
    }
}

impl From<RecordId> for Value {
    fn from(v: RecordId) -> Self {
        Value::Record(v)
    }
}

impl From<Object> for Value {
    fn from(v: Object) -> Self {
        Value::Object(v)
    }
}

impl From<Tagged> for Value {
    fn from(v: Tagged) -> Self {
        Value::Tagged(Box::new(v))
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::None, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Value::Array(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Value {
    fn from(v: [T; N]) -> Self {
        Value::Array(v.into_iter().map(Into::into).collect())
    }
}

#[cfg(feature = "chrono")]
impl<Tz: chrono::TimeZone> From<chrono::DateTime<Tz>> for Value {
    fn from(v: chrono::DateTime<Tz>) -> Self {
        Value::temporal(&v)
    }
}

#[cfg(feature = "chrono")]
impl From<chrono::NaiveDateTime> for Value {
    fn from(v: chrono::NaiveDateTime) -> Self {
        Value::temporal(&v)
    }
}

#[cfg(feature = "chrono")]
impl From<chrono::NaiveDate> for Value {
    fn from(v: chrono::NaiveDate) -> Self {
        Value::temporal(&v)
    }
}

#[cfg(feature = "time")]
impl From<time::OffsetDateTime> for Value {
    fn from(v: time::OffsetDateTime) -> Self {
        Value::temporal(&v)
    }
}

#[cfg(feature = "time")]
impl From<time::PrimitiveDateTime> for Value {
    fn from(v: time::PrimitiveDateTime) -> Self {
        Value::temporal(&v)
    }
}

/// Converts untyped JSON input.
///
/// Objects whose keys are exactly `data` and `as` (plus an optional
/// `dataAs`) become [`Value::Tagged`].
#[cfg(feature = "serde")]
impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        use serde_json::Value as Json;

        match v {
            Json::Null => Value::None,
            Json::Bool(b) => Value::Bool(b),
            Json::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            Json::String(s) => Value::String(s),
            Json::Array(items) => Value::Array(items.into_iter().map(Value::from).collect()),
            Json::Object(mut map) => {
                let tagged_shape = map.contains_key("data")
                    && map.contains_key("as")
                    && map
                        .keys()
                        .all(|k| matches!(k.as_str(), "data" | "as" | "dataAs"));
                if !tagged_shape {
                    return Value::Object(map.into_iter().collect());
                }
                let tag_of = |v: Option<Json>| match v {
                    Some(Json::String(s)) => Some(TagRef::from(s)),
                    Some(Json::Null) | None => None,
                    Some(other) => Some(TagRef::from(other.to_string())),
                };
                let data = map.remove("data").map_or(Value::None, Value::from);
                let as_tag = tag_of(map.remove("as"));
                let data_as = tag_of(map.remove("dataAs"));
                Value::Tagged(Box::new(Tagged {
                    data,
                    as_tag,
                    data_as,
                }))
            }
        }
    }
}
