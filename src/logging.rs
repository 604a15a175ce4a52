//! Logging abstraction
//!
//! - Embedded (`target_os = "none"`): defmt over RTT
//! - Host tests: `println!`, and the line is kept for `take_captured`
//! - Host non-test: arguments are type-checked but nothing is written

#[cfg(test)]
use std::{cell::RefCell, string::String, vec::Vec};

#[cfg(test)]
std::thread_local! {
    static CAPTURED: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
}

/// Print and keep a formatted log line (host tests only)
#[cfg(test)]
pub fn capture(line: String) {
    println!("{}", line);
    CAPTURED.with(|captured| captured.borrow_mut().push(line));
}

/// Drain the lines logged so far on this test thread
#[cfg(test)]
pub fn take_captured() -> Vec<String> {
    CAPTURED.with(|captured| captured.take())
}

/// Log informational message
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {{
        #[cfg(target_os = "none")]
        ::defmt::info!($($arg)*);

        #[cfg(all(not(target_os = "none"), test))]
        $crate::logging::capture(format!("[INFO] {}", format!($($arg)*)));

        #[cfg(all(not(target_os = "none"), not(test)))]
        let _ = format_args!($($arg)*);
    }};
}

/// Log error message
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {{
        #[cfg(target_os = "none")]
        ::defmt::error!($($arg)*);

        #[cfg(all(not(target_os = "none"), test))]
        $crate::logging::capture(format!("[ERROR] {}", format!($($arg)*)));

        #[cfg(all(not(target_os = "none"), not(test)))]
        let _ = format_args!($($arg)*);
    }};
}

/// Log debug message
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {{
        #[cfg(target_os = "none")]
        ::defmt::debug!($($arg)*);

        #[cfg(all(not(target_os = "none"), test))]
        $crate::logging::capture(format!("[DEBUG] {}", format!($($arg)*)));

        #[cfg(all(not(target_os = "none"), not(test)))]
        let _ = format_args!($($arg)*);
    }};
}
