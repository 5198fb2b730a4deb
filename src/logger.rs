// Logging for opsdev.
// Provides macros for the INFO, WARN, ERROR and DEBUG levels. Every message goes
// to stderr with a colored tag so it never mixes with the interactive prompts on stdout.

use std::sync::OnceLock; // Ensures the DEBUG_ENABLED flag is initialized exactly once.
use std::sync::atomic::{AtomicBool, Ordering};

// `log_info!` for workflow progress.
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => (eprintln!("{} {}", ::colored::Colorize::bright_green("[INFO]"), format!($($arg)*)));
}

// `log_warn!` for conditions that do not stop the run (e.g. a tool with no installer).
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => (eprintln!("{} {}", ::colored::Colorize::bright_yellow("[WARN]"), format!($($arg)*)));
}

// `log_error!` for failures that end the current tool or the whole run.
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => (eprintln!("{} {}", ::colored::Colorize::bright_red("[ERROR]"), format!($($arg)*)));
}

// `log_debug!` is only printed once `init(true)` has been called.
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        if $crate::logger::is_debug_enabled() {
           eprintln!("{} {}", ::colored::Colorize::dimmed("[DEBUG]"), format!($($arg)*));
        }
    };
}

static DEBUG_ENABLED: OnceLock<AtomicBool> = OnceLock::new();

/// Initializes the logger and sets the global debug mode.
/// Call once at startup, before the first prompt is printed.
pub fn init(debug: bool) {
    DEBUG_ENABLED
        .get_or_init(|| AtomicBool::new(debug))
        .store(debug, Ordering::Relaxed);

    log_debug!("Logger initialized in DEBUG mode");
}

/// Checks if debug logging is currently enabled.
/// Returns `false` when `init` was never called (e.g. in unit tests).
pub fn is_debug_enabled() -> bool {
    DEBUG_ENABLED
        .get()
        .map(|f| f.load(Ordering::Relaxed))
        .unwrap_or(false)
}
