//! `clear_warnings` wipes the global set, so it gets a process of its own.

use objkit_common::warning::{clear_warnings, recorded_warnings, warn_once};

#[test]
fn test_clear_warnings_allows_reprint() {
    warn_once("ClearTest", "printed twice");
    assert_eq!(recorded_warnings(), vec!["[ClearTest] printed twice"]);

    clear_warnings();
    assert!(recorded_warnings().is_empty());

    warn_once("ClearTest", "printed twice");
    assert_eq!(recorded_warnings(), vec!["[ClearTest] printed twice"]);
}
