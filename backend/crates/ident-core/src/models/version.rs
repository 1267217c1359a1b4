//! Optimistic-concurrency version counter.
//!
//! The version is a concurrency token, not a security value. It is kept a
//! small integer by wrapping back to 0 once the next value would pass
//! [`VERSION_WRAP`].

/// Largest version value before the counter wraps to 0
pub const VERSION_WRAP: i32 = 10_000;

/// Version to write after an update of a row currently at `current`
pub fn next_version(current: i32) -> i32 {
    let next = current.saturating_add(1);
    if next > VERSION_WRAP { 0 } else { next }
}
