//! Time-ordered trace log
//! Mirrors entries to the browser console and keeps the latest ones in local storage.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

const MAX_LOG_ENTRIES: usize = 200;
const STORAGE_KEY: &str = "portfolio_log_trace";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Info,
    Warn,
    Error,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: String,
    pub level: LogLevel,
    pub category: String, // "storage", "admin", "auth", ...
    pub message: String,
    #[serde(default)]
    pub data: Option<serde_json::Value>,
}

/// Bounded buffer, oldest entries drop first
#[derive(Debug)]
pub struct LogBuffer {
    entries: VecDeque<LogEntry>,
    capacity: usize,
}

impl LogBuffer {
    pub fn new(capacity: usize) -> Self {
        LogBuffer {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, entry: LogEntry) {
        while self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    pub fn extend(&mut self, entries: impl IntoIterator<Item = LogEntry>) {
        for entry in entries {
            self.push(entry);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.entries).unwrap_or_else(|_| "[]".to_string())
    }

    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(&self.entries).unwrap_or_else(|_| "[]".to_string())
    }
}

pub struct LogTrace {
    buffer: LogBuffer,
}

impl LogTrace {
    pub fn new() -> Self {
        let mut trace = LogTrace {
            buffer: LogBuffer::new(MAX_LOG_ENTRIES),
        };
        trace.load_from_storage();
        trace
    }

    pub fn log(&mut self, level: LogLevel, category: &str, message: &str, data: Option<serde_json::Value>) {
        let timestamp = js_sys::Date::new_0().to_iso_string().as_string().unwrap_or_default();

        let line = format!("[{}] {}", category, message);
        match level {
            LogLevel::Error => web_sys::console::error_1(&line.into()),
            LogLevel::Warn => web_sys::console::warn_1(&line.into()),
            LogLevel::Info => web_sys::console::log_1(&line.into()),
        }

        self.buffer.push(LogEntry {
            timestamp,
            level,
            category: category.to_string(),
            message: message.to_string(),
            data,
        });
        self.save_to_storage();
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.save_to_storage();
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }

    fn load_from_storage(&mut self) {
        let Some(storage) = Self::storage() else {
            return;
        };
        if let Ok(Some(json_str)) = storage.get_item(STORAGE_KEY) {
            if let Ok(logs) = serde_json::from_str::<Vec<LogEntry>>(&json_str) {
                self.buffer.extend(logs);
            }
        }
    }

    fn save_to_storage(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(STORAGE_KEY, &self.buffer.to_json());
        }
    }

    pub fn download(&self) -> Result<(), JsValue> {
        let json_str = self.buffer.to_json_pretty();
        let timestamp = js_sys::Date::new_0().to_iso_string().as_string().unwrap_or_default();
        let filename = format!("portfolio_log_{}.json", timestamp.replace([':', '.'], "-"));

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("document is unavailable"))?;

        let blob_parts = js_sys::Array::new();
        blob_parts.push(&JsValue::from_str(&json_str));
        let options = web_sys::BlobPropertyBag::new();
        options.set_type("application/json");

        let blob = web_sys::Blob::new_with_str_sequence_and_options(&blob_parts, &options)?;
        let url = web_sys::Url::create_object_url_with_blob(&blob)?;
        let a = document.create_element("a")?;
        a.set_attribute("href", &url)?;
        a.set_attribute("download", &filename)?;
        if let Some(element) = a.dyn_ref::<web_sys::HtmlElement>() {
            element.click();
        }
        web_sys::Url::revoke_object_url(&url)
    }
}

impl Default for LogTrace {
    fn default() -> Self {
        Self::new()
    }
}

thread_local! {
    static LOG_TRACE: std::cell::RefCell<LogTrace> = std::cell::RefCell::new(LogTrace::new());
}

fn with_trace(f: impl FnOnce(&mut LogTrace)) {
    LOG_TRACE.with(|trace| f(&mut trace.borrow_mut()));
}

pub fn log_info(category: &str, message: &str) {
    with_trace(|t| t.log(LogLevel::Info, category, message, None));
}

pub fn log_info_with_data(category: &str, message: &str, data: serde_json::Value) {
    with_trace(|t| t.log(LogLevel::Info, category, message, Some(data)));
}

pub fn log_warn(category: &str, message: &str) {
    with_trace(|t| t.log(LogLevel::Warn, category, message, None));
}

pub fn log_error(category: &str, message: &str) {
    with_trace(|t| t.log(LogLevel::Error, category, message, None));
}

pub fn log_error_with_data(category: &str, message: &str, data: serde_json::Value) {
    with_trace(|t| t.log(LogLevel::Error, category, message, Some(data)));
}

pub fn download_logs() -> Result<(), JsValue> {
    LOG_TRACE.with(|trace| trace.borrow().download())
}

pub fn clear_logs() {
    with_trace(|t| t.clear());
}

pub fn log_count() -> usize {
    LOG_TRACE.with(|trace| trace.borrow().buffer.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(message: &str) -> LogEntry {
        LogEntry {
            timestamp: "2024-01-01T00:00:00.000Z".to_string(),
            level: LogLevel::Info,
            category: "test".to_string(),
            message: message.to_string(),
            data: None,
        }
    }

    #[test]
    fn test_buffer_drops_oldest_when_full() {
        let mut buffer = LogBuffer::new(3);
        for i in 0..5 {
            buffer.push(entry(&i.to_string()));
        }
        assert_eq!(buffer.len(), 3);
        let messages: Vec<_> = buffer.entries.iter().map(|e| e.message.as_str()).collect();
        assert_eq!(messages, vec!["2", "3", "4"]);
    }

    #[test]
    fn test_buffer_json_uses_lowercase_levels() {
        let mut buffer = LogBuffer::new(2);
        assert!(buffer.is_empty());
        buffer.push(LogEntry { level: LogLevel::Warn, ..entry("careful") });
        let json = buffer.to_json();
        assert!(json.contains("\"level\":\"warn\""));

        let parsed: Vec<LogEntry> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed[0].message, "careful");
    }
}
