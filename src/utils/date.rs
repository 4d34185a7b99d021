//! `YYYY-MM-DD` date helpers for sitemap `<lastmod>` values.

use chrono::{DateTime, Utc};
use regex::Regex;
use serde_json::Value;
use std::{fs, path::Path, sync::LazyLock, time::SystemTime};

/// Calendar date format used by the sitemap protocol's `lastmod` element.
const YMD_FORMAT: &str = "%Y-%m-%d";

/// Extract the first `YYYY-MM-DD` date from a metadata value.
///
/// Values such as `<span class="timeago">2023-05-01</span>` are common in
/// git-date metadata, so markup tags are stripped before searching.
/// Falsy values (null, `false`, `0`, empty strings and containers) yield `None`.
pub fn extract_ymd(value: &Value) -> Option<String> {
    static RE_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").unwrap());
    static RE_YMD: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"[0-9]{4}-[0-9]{2}-[0-9]{2}").unwrap());

    let text = value_text(value)?;
    let text = RE_TAG.replace_all(&text, "");
    RE_YMD.find(&text).map(|m| m.as_str().to_owned())
}

/// String form of a metadata value, or `None` when the value is falsy.
fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::Array(items) if items.is_empty() => None,
        Value::Object(map) if map.is_empty() => None,
        other => Some(other.to_string()),
    }
}

/// Format a timestamp as its UTC calendar date.
pub fn ymd_from_system_time(time: SystemTime) -> String {
    DateTime::<Utc>::from(time).format(YMD_FORMAT).to_string()
}

/// Last modification date of a file, or `None` if it cannot be stat-ed.
pub fn file_modified_ymd(path: &Path) -> Option<String> {
    fs::metadata(path)
        .and_then(|meta| meta.modified())
        .ok()
        .map(ymd_from_system_time)
}

/// Current UTC date.
pub fn today_ymd() -> String {
    Utc::now().format(YMD_FORMAT).to_string()
}
