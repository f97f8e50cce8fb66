//! Terminal logging.
//!
//! Messages are colored and gated by a global print flag, so a front-end
//! that owns the terminal can silence them.

use std::sync::atomic::{AtomicBool, Ordering};

mod macros;

/// Whether log messages are printed to the terminal.
static IS_PRINT: AtomicBool = AtomicBool::new(true);

/// Enable or disable printing of log messages to the terminal.
pub fn set_print(enable: bool) {
    IS_PRINT.store(enable, Ordering::SeqCst);
}

#[must_use]
pub fn is_print() -> bool {
    IS_PRINT.load(Ordering::SeqCst)
}
