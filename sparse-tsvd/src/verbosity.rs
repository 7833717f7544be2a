//! Process-wide default verbosity
//!
//! Calls carry their own level in [`SolverConfig`](crate::SolverConfig);
//! this value is only the fallback used when a call does not set one.
//!
//! Levels: `<= 0` silent, `1` summary, `>= 2` detailed.

use once_cell::sync::Lazy;
use std::sync::RwLock;

/// Level used by the legacy solver when nothing else is configured
pub const INITIAL_VERBOSITY: i64 = 1;

static DEFAULT_VERBOSITY: Lazy<RwLock<i64>> = Lazy::new(|| RwLock::new(INITIAL_VERBOSITY));

/// Current default level
pub fn default_verbosity() -> i64 {
    match DEFAULT_VERBOSITY.read() {
        Ok(level) => *level,
        Err(poisoned) => *poisoned.into_inner(),
    }
}

/// Replace the default level, returning the previous one
pub fn set_default_verbosity(level: i64) -> i64 {
    let mut guard = match DEFAULT_VERBOSITY.write() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    };
    std::mem::replace(&mut *guard, level)
}

/// Held by unit tests that change or assert on the default level
#[cfg(test)]
pub(crate) static TEST_MUTEX: Lazy<std::sync::Mutex<()>> =
    Lazy::new(|| std::sync::Mutex::new(()));
