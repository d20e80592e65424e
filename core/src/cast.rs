//! Value caster: renders [`Value`]s as type-tagged SurrealQL literals.
//!
//! Every literal that reaches a generated statement goes through [`cast`].
//! Casting never fails; anything that cannot be represented becomes the
//! absence sentinel [`NONE`].

use std::sync::LazyLock;

use regex::Regex;
use sorm_types::{Object, TagRef, TypeTag, Value};

/// The absence sentinel.
pub const NONE: &str = "NONE";

static PARAM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\$[^$\s;]+$").expect("param pattern"));

static DATETIME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d{4}-\d{2}-\d{2}T\d{2}:\d{2}(:\d{2}(\.\d+)?)?(Z|[+-]\d{2}:?\d{2})?$")
        .expect("datetime pattern")
});

static RECORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+:[A-Za-z0-9_-]+$").expect("record pattern"));

static IDENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("ident pattern"));

/// Bound parameter reference: one leading `$`, including field and index
/// access (`$auth.id`, `$items[0]`). Whitespace and `;` never match.
pub fn is_param(s: &str) -> bool {
    PARAM.is_match(s)
}

/// ISO-8601 datetime string.
pub fn is_datetime(s: &str) -> bool {
    DATETIME.is_match(s)
}

/// `table:key` record reference.
pub fn is_record_ref(s: &str) -> bool {
    RECORD.is_match(s)
}

/// Casts a value to a tagged literal, inferring the tag from its runtime kind.
///
/// ```
/// use sorm_core::cast::cast;
/// use sorm_types::Value;
///
/// assert_eq!(cast(&Value::from(1)), "<int>1");
/// assert_eq!(cast(&Value::from("x")), "<string>\"x\"");
/// assert_eq!(cast(&Value::from(true)), "<bool>true");
/// assert_eq!(cast(&Value::None), "NONE");
/// ```
pub fn cast(value: &Value) -> String {
    cast_value(value).unwrap_or_else(|| NONE.to_string())
}

/// Casts `value` with an explicit tag.
pub fn cast_as(value: &Value, tag: TypeTag) -> String {
    cast_tagged(value, Some(&TagRef::Tag(tag)), None).unwrap_or_else(|| NONE.to_string())
}

/// Double-quotes a string with JSON escaping.
pub fn quote(s: &str) -> String {
    serde_json::Value::String(s.to_string()).to_string()
}

fn cast_value(value: &Value) -> Option<String> {
    match value {
        Value::Tagged(tagged) => cast_tagged(
            &tagged.data,
            tagged.as_tag.as_ref(),
            tagged.data_as.as_ref(),
        ),
        other => infer(other),
    }
}

fn infer(value: &Value) -> Option<String> {
    match value {
        Value::None => None,
        Value::Bool(b) => Some(format!("<bool>{b}")),
        Value::Int(i) => Some(format!("<int>{i}")),
        Value::Float(f) => float_literal(*f),
        Value::String(s) => infer_string(s),
        Value::Bytes(bytes) => Some(format!("<bytes>{}", bytes_body(bytes))),
        Value::Array(items) => Some(format!("<array>{}", array_body(items, None))),
        Value::Object(object) => Some(object_literal(object)),
        Value::Datetime(s) if s.is_empty() => None,
        Value::Datetime(s) => Some(format!("<datetime>{}", quote(s))),
        Value::Record(id) => Some(format!("<record>{}", quote(&id.to_string()))),
        Value::Tagged(_) => cast_value(value),
    }
}

fn infer_string(s: &str) -> Option<String> {
    if s.is_empty() {
        None
    } else if is_param(s) {
        Some(s.to_string())
    } else if is_datetime(s) {
        Some(format!("<datetime>{}", quote(s)))
    } else if is_record_ref(s) {
        Some(format!("<record>{}", quote(s)))
    } else {
        Some(format!("<string>{}", quote(s)))
    }
}

fn float_literal(f: f64) -> Option<String> {
    if !f.is_finite() {
        crate::sorm_trace_cast!("non-finite number", "float");
        return None;
    }
    if f.fract() == 0.0 && f.abs() < 9_007_199_254_740_992.0 {
        Some(format!("<int>{}", f as i64))
    } else {
        Some(format!("<float>{f}"))
    }
}

fn cast_tagged(data: &Value, as_tag: Option<&TagRef>, data_as: Option<&TagRef>) -> Option<String> {
    // `bool` reads the empty string as false rather than absent.
    if as_tag.and_then(TagRef::resolve) == Some(TypeTag::Bool) && matches!(data, Value::String(_)) {
        return Some(format!("<bool>{}", truthy(data)));
    }
    if data.is_absent() {
        return None;
    }
    let Some(tag_ref) = as_tag else {
        return cast_value(data);
    };
    let Some(tag) = tag_ref.resolve() else {
        crate::sorm_trace_cast!(format!("unrecognized tag {tag_ref:?}"), data.kind());
        return None;
    };

    match tag {
        TypeTag::Array => match data {
            Value::Array(items) => Some(format!("<array>{}", array_body(items, data_as))),
            other => {
                crate::sorm_trace_cast!("array tag requires an array", other.kind());
                None
            }
        },
        TypeTag::Object => match data {
            Value::Object(object) => Some(object_literal(object)),
            other => {
                crate::sorm_trace_cast!("object tag requires an object", other.kind());
                None
            }
        },
        TypeTag::Bool => Some(format!("<bool>{}", truthy(data))),
        TypeTag::Int => Some(format!("<int>{}", to_int(data))),
        TypeTag::Float => Some(format!("<float>{}", to_float(data))),
        TypeTag::Number => Some(format!("<number>{}", to_number(data))),
        other => bare(data).map(|body| format!("{}{body}", other.prefix())),
    }
}

/// Renders the payload of a value without a tag of its own.
fn bare(value: &Value) -> Option<String> {
    match value {
        Value::None => None,
        Value::Bool(b) => Some(b.to_string()),
        Value::Int(i) => Some(i.to_string()),
        Value::Float(f) if f.is_finite() => Some(f.to_string()),
        Value::Float(_) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) | Value::Datetime(s) => Some(quote(s)),
        Value::Record(id) => Some(quote(&id.to_string())),
        Value::Bytes(bytes) => Some(bytes_body(bytes)),
        Value::Array(items) => Some(array_body(items, None)),
        Value::Object(object) => Some(object_literal(object)),
        Value::Tagged(_) => cast_value(value),
    }
}

fn array_body(items: &[Value], element: Option<&TagRef>) -> String {
    let rendered: Vec<String> = items
        .iter()
        .map(|item| match element {
            Some(tag) => cast_tagged(item, Some(tag), None).unwrap_or_else(|| NONE.to_string()),
            None => cast(item),
        })
        .collect();
    format!("[{}]", rendered.join(", "))
}

fn bytes_body(bytes: &[u8]) -> String {
    let rendered: Vec<String> = bytes.iter().map(u8::to_string).collect();
    format!("[{}]", rendered.join(", "))
}

fn object_literal(object: &Object) -> String {
    if object.is_empty() {
        return "{}".to_string();
    }
    let fields: Vec<String> = object
        .iter()
        .map(|(key, value)| format!("{}: {}", object_key(key), cast(value)))
        .collect();
    format!("{{ {} }}", fields.join(", "))
}

fn object_key(key: &str) -> String {
    if IDENT.is_match(key) {
        key.to_string()
    } else {
        quote(key)
    }
}

/// Permissive truthiness used by the `bool` tag.
fn truthy(value: &Value) -> bool {
    match value {
        Value::None => false,
        Value::Bool(b) => *b,
        Value::Int(i) => *i != 0,
        Value::Float(f) => *f != 0.0 && !f.is_nan(),
        Value::String(s) => match s.trim() {
            "0" | "false" => false,
            "1" | "true" => true,
            _ => !s.is_empty(),
        },
        Value::Bytes(bytes) => !bytes.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(_) | Value::Datetime(_) | Value::Record(_) => true,
        Value::Tagged(tagged) => truthy(&tagged.data),
    }
}

fn to_int(value: &Value) -> i64 {
    match value {
        Value::Int(i) => *i,
        Value::Float(f) if f.is_finite() => f.trunc() as i64,
        Value::Bool(b) => i64::from(*b),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>().ok().unwrap_or_else(|| match s.parse::<f64>() {
                Ok(f) if f.is_finite() => f.trunc() as i64,
                _ => 0,
            })
        }
        Value::Tagged(tagged) => to_int(&tagged.data),
        _ => 0,
    }
}

fn to_float(value: &Value) -> f64 {
    let f = match value {
        Value::Int(i) => *i as f64,
        Value::Float(f) => *f,
        Value::Bool(b) => f64::from(u8::from(*b)),
        Value::String(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        Value::Tagged(tagged) => to_float(&tagged.data),
        _ => 0.0,
    };
    if f.is_finite() { f } else { 0.0 }
}

fn to_number(value: &Value) -> String {
    match value {
        Value::Int(i) => i.to_string(),
        Value::String(s) => match s.trim().parse::<i64>() {
            Ok(i) => i.to_string(),
            Err(_) => to_float(value).to_string(),
        },
        Value::Tagged(tagged) => to_number(&tagged.data),
        other => to_float(other).to_string(),
    }
}
