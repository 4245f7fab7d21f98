#![deny(missing_docs)]
//! Shared logging macros for the leadcard workspace.
//!
//! Every crate logs through the `lead_*` macros so the backend (currently the
//! `log` facade) can be swapped in one place. Tests call
//! [`initialize_for_tests`] to get readable output.

#[doc(hidden)]
pub use log as __log;

/// Logs a trace-level message under the `leadcard` target.
#[macro_export]
macro_rules! lead_trace {
    ($($arg:tt)*) => {{
        $crate::__log::trace!(target: "leadcard", $($arg)*);
    }};
}

/// Logs a debug-level message under the `leadcard` target.
#[macro_export]
macro_rules! lead_debug {
    ($($arg:tt)*) => {{
        $crate::__log::debug!(target: "leadcard", $($arg)*);
    }};
}

/// Logs an info-level message under the `leadcard` target.
#[macro_export]
macro_rules! lead_info {
    ($($arg:tt)*) => {{
        $crate::__log::info!(target: "leadcard", $($arg)*);
    }};
}

/// Logs a warn-level message under the `leadcard` target.
#[macro_export]
macro_rules! lead_warn {
    ($($arg:tt)*) => {{
        $crate::__log::warn!(target: "leadcard", $($arg)*);
    }};
}

/// Logs an error-level message under the `leadcard` target.
#[macro_export]
macro_rules! lead_error {
    ($($arg:tt)*) => {{
        $crate::__log::error!(target: "leadcard", $($arg)*);
    }};
}

/// Initializes a terminal logger for tests.
///
/// Safe to call from every test: a second initialization is ignored.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    let _ = TermLogger::init(level, Config::default(), TerminalMode::Mixed, ColorChoice::Never);
}
