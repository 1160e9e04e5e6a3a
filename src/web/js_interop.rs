//! Helpers for reading dynamically-shaped host values.
//!
//! Host payloads are untyped; every read is presence-checked and a shape
//! mismatch reads as "absent" rather than an error.

use js_sys::{Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};

use crate::user::UserPayload;

/// Field read that treats `undefined`/`null` as absent.
pub(super) fn get(target: &JsValue, key: &str) -> Option<JsValue> {
    let value = Reflect::get(target, &JsValue::from_str(key)).ok()?;
    if value.is_undefined() || value.is_null() {
        None
    } else {
        Some(value)
    }
}

pub(super) fn get_string(target: &JsValue, key: &str) -> Option<String> {
    get(target, key).and_then(|v| v.as_string())
}

pub(super) fn get_i64(target: &JsValue, key: &str) -> Option<i64> {
    let n = get(target, key)?.as_f64()?;
    if n.is_finite() {
        Some(n as i64)
    } else {
        None
    }
}

pub(super) fn get_bool(target: &JsValue, key: &str) -> Option<bool> {
    get(target, key).and_then(|v| v.as_bool())
}

// Note: functions are not `is_object` in JS terms, so this only yields
// plain objects.
pub(super) fn get_object(target: &JsValue, key: &str) -> Option<JsValue> {
    get(target, key).filter(JsValue::is_object)
}

/// Calls `target[name]()`, treating a missing or non-function member as an
/// error.
pub(super) fn call0(target: &JsValue, name: &str) -> Result<JsValue, String> {
    let member = Reflect::get(target, &JsValue::from_str(name)).map_err(|e| describe_error(&e))?;
    let func: Function = member
        .dyn_into()
        .map_err(|_| format!("{name} is not a function"))?;
    func.call0(target).map_err(|e| describe_error(&e))
}

/// Compact JSON rendering of a host value, for display only.
pub(super) fn json_compact(value: &JsValue) -> Option<String> {
    js_sys::JSON::stringify(value).ok().and_then(|s| s.as_string())
}

/// `name: message` plus the stack when the thrown value carries one.
pub(super) fn describe_error(error: &JsValue) -> String {
    if let Some(s) = error.as_string() {
        return s;
    }
    let name = get_string(error, "name").unwrap_or_else(|| "Error".to_string());
    let message = get_string(error, "message").unwrap_or_default();
    match get_string(error, "stack") {
        Some(stack) if !stack.is_empty() => format!("{name}: {message}\n{stack}"),
        _ => format!("{name}: {message}"),
    }
}

/// Field-by-field extraction of the host user shape.
pub(super) fn user_payload_from(value: &JsValue) -> UserPayload {
    UserPayload {
        id: get_i64(value, "id"),
        first_name: get_string(value, "first_name"),
        last_name: get_string(value, "last_name"),
        username: get_string(value, "username"),
        language_code: get_string(value, "language_code"),
        photo_url: get_string(value, "photo_url"),
        is_premium: get_bool(value, "is_premium"),
    }
}
