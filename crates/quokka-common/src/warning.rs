//! Runtime warnings with colored terminal output.
//!
//! Deduplicates repeated messages so a hot path (for example a checkpoint
//! that runs every turn) cannot spam the terminal. Repeat occurrences are
//! counted but not reprinted.

use std::collections::HashMap;
use std::sync::{Mutex, OnceLock};

/// ANSI color codes for terminal output
const YELLOW: &str = "\x1b[33m";
const RESET: &str = "\x1b[0m";

/// Occurrence count per unique warning message.
static WARNED: OnceLock<Mutex<HashMap<String, u64>>> = OnceLock::new();

fn warned() -> &'static Mutex<HashMap<String, u64>> {
    WARNED.get_or_init(|| Mutex::new(HashMap::new()))
}

/// Warn about an unexpected runtime condition (prints once per unique message).
///
/// # Example
/// ```ignore
/// warn_once("Fullscreen", "dropped 2 pending tasks for torn-down document");
/// ```
///
/// # Panics
/// Panics if the global warning map mutex is poisoned.
pub fn warn_once(component: &str, message: &str) {
    let key = format!("[{component}] {message}");
    let mut map = warned().lock().unwrap();
    let count = map.entry(key).or_insert(0);
    *count += 1;

    if *count == 1 {
        eprintln!("{YELLOW}[Quokka {component}] ⚠ {message}{RESET}");
    }
}

/// Total number of warning occurrences recorded so far, including
/// deduplicated repeats.
///
/// # Panics
/// Panics if the global warning map mutex is poisoned.
#[must_use]
pub fn warning_count() -> u64 {
    warned().lock().unwrap().values().sum()
}

/// Clear all recorded warnings (call when tearing down a runtime).
///
/// # Panics
/// Panics if the global warning map mutex is poisoned.
pub fn clear_warnings() {
    warned().lock().unwrap().clear();
}
