//! Todo items and id generation

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque item identifier.
///
/// Stored as a string so slots written by older builds (plain millisecond
/// timestamps) still decode.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(String);

impl TodoId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric value of the id, if it is a plain decimal timestamp
    pub fn as_millis(&self) -> Option<u64> {
        self.0.parse().ok()
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single list entry
///
/// Field order matters: it is the order fields are written to storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub text: String,
    #[serde(default)]
    pub completed: bool,
    pub id: TodoId,
}

impl Todo {
    /// Incomplete todo. `text` must already be trimmed and non-empty.
    pub fn new(id: TodoId, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            completed: false,
            id,
        }
    }

    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }
}

/// Wall clock in milliseconds since the Unix epoch
pub trait Clock {
    fn now_ms(&self) -> u64;
}

/// `Date.now()` in the browser, `SystemTime` natively
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[cfg(target_arch = "wasm32")]
    fn now_ms(&self) -> u64 {
        js_sys::Date::now() as u64
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn now_ms(&self) -> u64 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}

/// Largest id taken for a timestamp (9999-12-31T23:59:59.999Z). Bigger
/// numeric ids in a loaded slot are left out of the sequence.
pub const MAX_TIMESTAMP_ID: u64 = 253_402_300_799_999;

/// Hands out timestamp ids that never repeat, even when several are
/// requested within the same millisecond.
#[derive(Debug, Clone)]
pub struct IdGenerator<C = SystemClock> {
    clock: C,
    last: Option<u64>,
}

impl<C: Clock> IdGenerator<C> {
    pub fn new(clock: C) -> Self {
        Self { clock, last: None }
    }

    /// Next id, strictly greater than the previous one. `None` once the
    /// sequence is exhausted.
    pub fn next_id(&mut self) -> Option<TodoId> {
        let now = self.clock.now_ms();
        let next = match self.last {
            Some(last) if now <= last => last.checked_add(1)?,
            _ => now,
        };
        self.last = Some(next);
        Some(TodoId(next.to_string()))
    }

    /// Make sure later ids sort after every timestamp id in `existing`
    pub fn observe<'a>(&mut self, existing: impl IntoIterator<Item = &'a TodoId>) {
        let max = existing
            .into_iter()
            .filter_map(TodoId::as_millis)
            .filter(|&ms| ms <= MAX_TIMESTAMP_ID)
            .max();
        if let Some(max) = max {
            self.last = Some(self.last.map_or(max, |last| last.max(max)));
        }
    }
}
