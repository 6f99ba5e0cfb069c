//! Warnings with colored terminal output.
//!
//! Provides deduplication so the same warning is only printed once per
//! process (or until [`clear_warnings`] is called). Used by the selector and
//! record crates to report input that is accepted but probably unintended.

use std::collections::BTreeSet;
use std::sync::{Mutex, MutexGuard, PoisonError};

use owo_colors::OwoColorize;

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: Mutex<BTreeSet<String>> = Mutex::new(BTreeSet::new());

/// A poisoned lock only means another thread panicked mid-insert; the set
/// itself is still usable.
fn warned() -> MutexGuard<'static, BTreeSet<String>> {
    WARNED.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Warn about unusual input (prints once per unique message)
///
/// # Example
/// ```
/// objkit_common::warning::warn_once("Selector", "unknown combinator '>>'");
/// ```
pub fn warn_once(component: &str, message: &str) {
    let key = format!("[{component}] {message}");
    let should_print = warned().insert(key);

    if should_print {
        eprintln!("{}", format!("[objkit {component}] ⚠ {message}").yellow());
    }
}

/// Snapshot of every warning recorded so far, as `[component] message`
/// strings in sorted order.
#[must_use]
pub fn recorded_warnings() -> Vec<String> {
    warned().iter().cloned().collect()
}

/// Forget all recorded warnings so they can be printed again.
pub fn clear_warnings() {
    warned().clear();
}
