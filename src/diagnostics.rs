use std::cmp::Ordering;
use std::sync::atomic::{AtomicU8, Ordering as AtomicOrdering};

use serde_json::{Map, Number, Value};

static LOG_LEVEL: AtomicU8 = AtomicU8::new(LogLevel::Info.rank());

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
}

impl PartialOrd for LogLevel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LogLevel {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl LogLevel {
    const fn rank(self) -> u8 {
        match self {
            Self::Debug => 0,
            Self::Info => 1,
            Self::Warn => 2,
        }
    }

    fn from_rank(rank: u8) -> Self {
        match rank {
            0 => Self::Debug,
            2 => Self::Warn,
            _ => Self::Info,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "debug" => Some(Self::Debug),
            "info" => Some(Self::Info),
            "warn" => Some(Self::Warn),
            _ => None,
        }
    }
}

pub fn set_log_level(level: LogLevel) {
    LOG_LEVEL.store(level.rank(), AtomicOrdering::Relaxed);
}

pub fn log_level() -> LogLevel {
    LogLevel::from_rank(LOG_LEVEL.load(AtomicOrdering::Relaxed))
}

pub fn build_event(ts: u64, level: LogLevel, event: &str, fields: Value) -> Value {
    let mut payload = Map::new();
    payload.insert("ts".to_string(), Value::Number(Number::from(ts)));
    payload.insert("level".to_string(), Value::String(level.as_str().to_string()));
    payload.insert("event".to_string(), Value::String(event.to_string()));

    if let Value::Object(extra) = fields {
        for (key, value) in extra {
            payload.insert(key, value);
        }
    }

    Value::Object(payload)
}

pub fn log_event(level: LogLevel, event: &str, fields: Value) {
    if level < log_level() {
        return;
    }

    let line = build_event(now_unix_millis(), level, event, fields).to_string();
    emit(level, &line);
}

#[cfg(target_arch = "wasm32")]
fn now_unix_millis() -> u64 {
    js_sys::Date::now() as u64
}

#[cfg(not(target_arch = "wasm32"))]
fn now_unix_millis() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_millis() as u64)
        .unwrap_or(0)
}

#[cfg(target_arch = "wasm32")]
fn emit(level: LogLevel, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        LogLevel::Debug => web_sys::console::debug_1(&value),
        LogLevel::Info => web_sys::console::log_1(&value),
        LogLevel::Warn => web_sys::console::warn_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(level: LogLevel, line: &str) {
    match level {
        LogLevel::Warn => eprintln!("{line}"),
        LogLevel::Debug | LogLevel::Info => println!("{line}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn levels_order_by_severity() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Warn);
    }

    #[test]
    fn event_payload_flattens_fields() {
        let payload = build_event(
            1_700_000_000_000,
            LogLevel::Info,
            "contact.submitted",
            json!({ "name": "A", "email": "a@b.com" }),
        );

        assert_eq!(payload["ts"], json!(1_700_000_000_000_u64));
        assert_eq!(payload["level"], json!("info"));
        assert_eq!(payload["event"], json!("contact.submitted"));
        assert_eq!(payload["name"], json!("A"));
        assert_eq!(payload["email"], json!("a@b.com"));
    }

    #[test]
    fn non_object_fields_are_ignored() {
        let payload = build_event(0, LogLevel::Warn, "background.unavailable", json!("oops"));
        let object = payload.as_object().expect("payload is an object");
        assert_eq!(object.len(), 3);
    }

    #[test]
    fn rank_round_trips_through_level() {
        for level in [LogLevel::Debug, LogLevel::Info, LogLevel::Warn] {
            assert_eq!(LogLevel::from_rank(level.rank()), level);
        }
    }
}
