//! Greeting service backing `GET /api/hello`.

#[cfg(test)]
#[path = "greeting_test.rs"]
mod tests;

use serde::Serialize;
use time::OffsetDateTime;

const DEFAULT_NAME: &str = "World";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Greeting {
    pub message: String,
    /// Creation time in Unix epoch milliseconds.
    pub timestamp: i64,
}

/// `"Hello, <name>!"`, or `"Hello, World!"` when the name is absent or empty.
#[must_use]
pub fn greeting_message(name: Option<&str>) -> String {
    let name = name.filter(|n| !n.is_empty()).unwrap_or(DEFAULT_NAME);
    format!("Hello, {name}!")
}

#[must_use]
pub fn create_greeting(name: Option<&str>) -> Greeting {
    Greeting { message: greeting_message(name), timestamp: now_millis() }
}

fn now_millis() -> i64 {
    let millis = OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000;
    i64::try_from(millis).unwrap_or(i64::MAX)
}
