/// Clock abstraction — isolates the one non-deterministic rendering input.

use chrono::Local;

/// Source of the metadata timestamp.
///
/// Rendering takes the clock as a capability so tests can pin the
/// instant and compare output byte-for-byte.
pub trait Clock {
    /// Human-readable stamp: `YYYY-MM-DD HH:MM` plus the zone when the
    /// platform reports one.
    fn timestamp(&self) -> String;
}

/// Wall clock in the local timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn timestamp(&self) -> String {
        Local::now().format("%Y-%m-%d %H:%M %Z").to_string()
    }
}

/// Clock pinned to a fixed stamp, returned verbatim on every call.
#[derive(Debug, Clone)]
pub struct FixedClock(pub String);

impl Clock for FixedClock {
    fn timestamp(&self) -> String {
        self.0.clone()
    }
}
