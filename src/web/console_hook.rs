//! Scoped interception of the global console.
//!
//! `ConsoleCapture::install` swaps the four console methods for wrappers
//! that forward to the original implementation unconditionally and then
//! hand the arguments to a sink. Dropping the guard restores the originals
//! exactly; at most one instance may hold the override at a time.

use js_sys::{Array, Function, Object, Reflect};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

use crate::logbuf::LogLevel;

const HOOKED_METHODS: [(&str, LogLevel); 4] = [
    ("log", LogLevel::Log),
    ("warn", LogLevel::Warn),
    ("error", LogLevel::Error),
    ("info", LogLevel::Info),
];

// Closures exported to JS are fixed-arity; console calls with more
// arguments lose the tail.
type HookFn = dyn FnMut(JsValue, JsValue, JsValue, JsValue, JsValue);

pub(super) struct ConsoleCapture {
    console: Object,
    originals: Vec<(&'static str, Function)>,
    // Kept alive for the lifetime of the override; dropped after restore.
    _hooks: Vec<Closure<HookFn>>,
}

impl ConsoleCapture {
    pub(super) fn install(
        sink: impl Fn(LogLevel, Vec<JsValue>) + Clone + 'static,
    ) -> Result<Self, String> {
        let console: Object = Reflect::get(&js_sys::global(), &JsValue::from_str("console"))
            .ok()
            .and_then(|v| v.dyn_into().ok())
            .ok_or("console: global object missing")?;

        // Validate the whole method set before swapping anything, so a
        // failure here leaves the console untouched.
        let mut originals: Vec<(&'static str, Function)> = Vec::with_capacity(HOOKED_METHODS.len());
        for (name, _) in HOOKED_METHODS {
            let original: Function = Reflect::get(&console, &JsValue::from_str(name))
                .ok()
                .and_then(|v| v.dyn_into().ok())
                .ok_or_else(|| format!("console: {name} is not a function"))?;
            originals.push((name, original));
        }

        let mut hooks = Vec::with_capacity(HOOKED_METHODS.len());
        for ((name, level), (_, original)) in HOOKED_METHODS.iter().copied().zip(&originals) {
            let forward = original.clone();
            let console_this = console.clone();
            let sink = sink.clone();
            let hook = Closure::wrap(Box::new(
                move |a: JsValue, b: JsValue, c: JsValue, d: JsValue, e: JsValue| {
                    let args = trim_undefined_tail(vec![a, b, c, d, e]);
                    let forwarded = Array::new();
                    for arg in &args {
                        forwarded.push(arg);
                    }
                    let _ = forward.apply(&console_this, &forwarded);
                    sink(level, args);
                },
            ) as Box<HookFn>);

            if Reflect::set(&console, &JsValue::from_str(name), hook.as_ref()).is_err() {
                // Roll back the methods already swapped.
                restore(&console, &originals);
                return Err(format!("console: failed to override {name}"));
            }
            hooks.push(hook);
        }

        Ok(Self {
            console,
            originals,
            _hooks: hooks,
        })
    }
}

impl Drop for ConsoleCapture {
    fn drop(&mut self) {
        restore(&self.console, &self.originals);
    }
}

fn restore(console: &Object, originals: &[(&'static str, Function)]) {
    for (name, original) in originals {
        let _ = Reflect::set(console, &JsValue::from_str(name), original);
    }
}

fn trim_undefined_tail(mut args: Vec<JsValue>) -> Vec<JsValue> {
    while matches!(args.last(), Some(v) if v.is_undefined()) {
        args.pop();
    }
    args
}

/// Message text: every argument stringified and space-joined.
pub(super) fn message_from_args(args: &[JsValue]) -> String {
    args.iter().map(stringify_arg).collect::<Vec<_>>().join(" ")
}

/// Arguments beyond the first, pretty-printed as the auxiliary payload.
pub(super) fn payload_from_args(args: &[JsValue]) -> Option<String> {
    if args.len() <= 1 {
        return None;
    }
    let rest = Array::new();
    for arg in &args[1..] {
        rest.push(arg);
    }
    js_sys::JSON::stringify_with_replacer_and_space(&rest, &JsValue::NULL, &JsValue::from_f64(2.0))
        .ok()
        .and_then(|s| s.as_string())
}

pub(super) fn timestamp_now() -> String {
    js_sys::Date::new_0()
        .to_locale_time_string("en-US")
        .into()
}

fn stringify_arg(value: &JsValue) -> String {
    if value.is_undefined() {
        return "undefined".to_string();
    }
    if value.is_null() {
        return "null".to_string();
    }
    if let Some(s) = value.as_string() {
        return s;
    }
    if value.is_object() {
        return js_sys::JSON::stringify_with_replacer_and_space(
            value,
            &JsValue::NULL,
            &JsValue::from_f64(2.0),
        )
        .ok()
        .and_then(|s| s.as_string())
        .unwrap_or_else(|| "[unserializable]".to_string());
    }
    // Remaining primitives (numbers, booleans) serialize exactly; anything
    // else falls back to its type name.
    js_sys::JSON::stringify(value)
        .ok()
        .and_then(|s| s.as_string())
        .unwrap_or_else(|| {
            value
                .js_typeof()
                .as_string()
                .map(|t| format!("[{t}]"))
                .unwrap_or_else(|| "[unknown]".to_string())
        })
}
