//! SurrealQL literal type tags
//!
//! Tags render as an angle-bracket prefix immediately before a literal,
//! e.g. `<int>1` or `<datetime>"2024-01-01T00:00:00Z"`.

use core::fmt;

/// Enum representing the type tags the caster can emit or coerce to.
///
/// # Examples
///
/// ```
/// use sorm_types::TypeTag;
///
/// assert_eq!(TypeTag::Int.prefix(), "<int>");
/// assert_eq!(TypeTag::from_name("boolean"), Some(TypeTag::Bool));
/// assert_eq!(TypeTag::from_name("geometry"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
    /// `<array>[...]`
    Array,
    /// Object coercion. Objects render as `{ key: value }` and carry no tag.
    Object,
    /// `<bool>true`
    Bool,
    /// `<bytes>[...]`
    Bytes,
    /// `<datetime>"..."`
    Datetime,
    /// `<decimal>...`
    Decimal,
    /// `<duration>"..."`
    Duration,
    /// `<float>...`
    Float,
    /// `<int>...`
    Int,
    /// `<number>...`
    Number,
    /// `<record>"table:key"`
    Record,
    /// `<string>"..."`
    String,
}

impl TypeTag {
    pub const ALL: &'static [TypeTag] = &[
        Self::Array,
        Self::Object,
        Self::Bool,
        Self::Bytes,
        Self::Datetime,
        Self::Decimal,
        Self::Duration,
        Self::Float,
        Self::Int,
        Self::Number,
        Self::Record,
        Self::String,
    ];

    /// Convert from a tag name to the enum variant.
    ///
    /// Accepts the long spellings (`boolean`, `integer`) as aliases.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|tag| name.eq_ignore_ascii_case(tag.as_str()))
            .or_else(|| {
                if name.eq_ignore_ascii_case("boolean") {
                    Some(Self::Bool)
                } else if name.eq_ignore_ascii_case("integer") {
                    Some(Self::Int)
                } else {
                    None
                }
            })
    }

    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Array => "array",
            Self::Object => "object",
            Self::Bool => "bool",
            Self::Bytes => "bytes",
            Self::Datetime => "datetime",
            Self::Decimal => "decimal",
            Self::Duration => "duration",
            Self::Float => "float",
            Self::Int => "int",
            Self::Number => "number",
            Self::Record => "record",
            Self::String => "string",
        }
    }

    /// The literal prefix, e.g. `<int>`.
    #[inline]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Array => "<array>",
            Self::Object => "",
            Self::Bool => "<bool>",
            Self::Bytes => "<bytes>",
            Self::Datetime => "<datetime>",
            Self::Decimal => "<decimal>",
            Self::Duration => "<duration>",
            Self::Float => "<float>",
            Self::Int => "<int>",
            Self::Number => "<number>",
            Self::Record => "<record>",
            Self::String => "<string>",
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A requested tag as supplied by the caller.
///
/// Tags that come from untyped input (JSON objects of the form
/// `{"data": ..., "as": "int"}`) may name a tag the caster does not know;
/// those stay as [`TagRef::Name`] and resolve to `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagRef {
    Tag(TypeTag),
    Name(Box<str>),
}

impl TagRef {
    /// Resolves the reference to a known tag.
    pub fn resolve(&self) -> Option<TypeTag> {
        match self {
            Self::Tag(tag) => Some(*tag),
            Self::Name(name) => TypeTag::from_name(name),
        }
    }
}

impl From<TypeTag> for TagRef {
    fn from(tag: TypeTag) -> Self {
        Self::Tag(tag)
    }
}

impl From<&str> for TagRef {
    fn from(name: &str) -> Self {
        Self::Name(name.into())
    }
}

impl From<String> for TagRef {
    fn from(name: String) -> Self {
        Self::Name(name.into_boxed_str())
    }
}
