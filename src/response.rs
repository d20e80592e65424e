//! Response unwrapping.
//!
//! The result envelope differs between client versions. Everything that
//! knows about it lives here.

use serde_json::Value as Json;

use sorm_core::{Result, ResultShape, SormError};

/// Reduces a raw client response to the payload of its first statement.
///
/// Accepted envelopes:
/// - `[{ "status": "OK", "result": payload }, ...]`
/// - `[[rows...], ...]`
/// - `{ "result": payload }`
/// - a bare payload
///
/// A status envelope carries `status` of exactly `"OK"` or `"ERR"` and no
/// keys besides `status`, `result`, `time` and `detail`. Rows with their own
/// `status` or `result` attributes are payload.
///
/// A first statement with `"status": "ERR"` becomes
/// [`SormError::Execution`] in either shape. With [`ResultShape::Raw`] the
/// response is otherwise returned untouched.
pub fn unwrap_response(raw: Json, shape: ResultShape) -> Result<Json> {
    if let Some(message) = statement_error(&raw) {
        return Err(SormError::Execution(message));
    }
    if shape == ResultShape::Raw {
        return Ok(raw);
    }

    Ok(match raw {
        Json::Array(mut statements) if is_envelope(statements.first()) => {
            let first = statements.swap_remove(0);
            payload(first)
        }
        Json::Object(mut map) if map.contains_key("result") && only_envelope_keys(&map) => {
            map.remove("result").unwrap_or(Json::Null)
        }
        other => other,
    })
}

/// The first row of an unwrapped payload, `Null` when there is none.
pub fn first_row(payload: Json) -> Json {
    match payload {
        Json::Array(rows) => rows.into_iter().next().unwrap_or(Json::Null),
        other => other,
    }
}

const ENVELOPE_KEYS: &[&str] = &["status", "result", "time", "detail"];

fn is_envelope(first: Option<&Json>) -> bool {
    match first {
        Some(Json::Array(_)) => true,
        Some(statement) => statement_status(statement).is_some(),
        None => false,
    }
}

/// `"OK"` or `"ERR"` when `statement` is a status envelope. Rows that merely
/// have `status` and `result` attributes are not envelopes.
fn statement_status(statement: &Json) -> Option<&str> {
    let map = statement.as_object()?;
    let status = map.get("status")?.as_str()?;
    let shaped = match status {
        "OK" => map.contains_key("result"),
        "ERR" => true,
        _ => false,
    };
    (shaped && only_envelope_keys(map)).then_some(status)
}

fn only_envelope_keys(map: &serde_json::Map<String, Json>) -> bool {
    map.keys().all(|key| ENVELOPE_KEYS.contains(&key.as_str()))
}

fn payload(statement: Json) -> Json {
    match statement {
        Json::Object(mut map) => map.remove("result").unwrap_or(Json::Null),
        other => other,
    }
}

fn statement_error(raw: &Json) -> Option<String> {
    let first = match raw {
        Json::Array(statements) => statements.first()?,
        other => other,
    };
    if statement_status(first)? != "ERR" {
        return None;
    }
    let map = first.as_object()?;
    let message = match map.get("result").or_else(|| map.get("detail")) {
        Some(Json::String(msg)) => msg.clone(),
        Some(other) => other.to_string(),
        None => "statement failed".to_string(),
    };
    Some(message)
}
