//! crates/logz/src/macros.rs
//! Variadic emit macros.
//!
//! Each macro takes any number of [`Display`](std::fmt::Display) arguments and
//! forwards them to the matching emit method. Without a `logger:` prefix the
//! process-wide default logger is used.
//!
//! ```
//! use logz::{CaptureBuffer, ColorChoice, Level, Logger, LoggerConfig};
//!
//! let capture = CaptureBuffer::new();
//! let logger = Logger::with_writer(
//!     LoggerConfig::new().with_colors(ColorChoice::Never),
//!     capture.clone(),
//! );
//!
//! let worker = 3;
//! logz::debug!(logger: &logger, "Worker", worker, "iteration", 7);
//! logz::info_success!(logger: &logger, "saved", 2, "files");
//!
//! assert_eq!(
//!     capture.lines(),
//!     vec!["[DEBUG] Worker 3 iteration 7", "[INFO] Success: saved 2 files"]
//! );
//! ```

/// Builds the argument slice passed to the emit methods.
#[doc(hidden)]
#[macro_export]
macro_rules! __logz_args {
    ($($arg:expr),*) => {
        &[$(&$arg as &dyn ::std::fmt::Display),*]
    };
}

/// Emits at TRACE.
///
/// ```
/// logz::trace!("entering", "parse");
/// ```
#[macro_export]
macro_rules! trace {
    (logger: $logger:expr $(, $arg:expr)* $(,)?) => {
        $logger.trace($crate::__logz_args!($($arg),*))
    };
    ($($arg:expr),* $(,)?) => {
        $crate::logger().trace($crate::__logz_args!($($arg),*))
    };
}

/// Emits at DEBUG.
///
/// ```
/// logz::debug!("cache size", 42);
/// ```
#[macro_export]
macro_rules! debug {
    (logger: $logger:expr $(, $arg:expr)* $(,)?) => {
        $logger.debug($crate::__logz_args!($($arg),*))
    };
    ($($arg:expr),* $(,)?) => {
        $crate::logger().debug($crate::__logz_args!($($arg),*))
    };
}

/// Emits at INFO.
///
/// ```
/// logz::info!("Test", "message", 123);
/// ```
#[macro_export]
macro_rules! info {
    (logger: $logger:expr $(, $arg:expr)* $(,)?) => {
        $logger.info($crate::__logz_args!($($arg),*))
    };
    ($($arg:expr),* $(,)?) => {
        $crate::logger().info($crate::__logz_args!($($arg),*))
    };
}

/// Emits at WARN.
///
/// ```
/// logz::warn!("disk usage at", 91, "percent");
/// ```
#[macro_export]
macro_rules! warn {
    (logger: $logger:expr $(, $arg:expr)* $(,)?) => {
        $logger.warn($crate::__logz_args!($($arg),*))
    };
    ($($arg:expr),* $(,)?) => {
        $crate::logger().warn($crate::__logz_args!($($arg),*))
    };
}

/// Emits at ERROR.
///
/// ```
/// logz::error!("request failed:", "timeout");
/// ```
#[macro_export]
macro_rules! error {
    (logger: $logger:expr $(, $arg:expr)* $(,)?) => {
        $logger.error($crate::__logz_args!($($arg),*))
    };
    ($($arg:expr),* $(,)?) => {
        $crate::logger().error($crate::__logz_args!($($arg),*))
    };
}

/// Emits at INFO with a green `Success:` marker.
///
/// ```
/// logz::info_success!("Operation completed");
/// ```
#[macro_export]
macro_rules! info_success {
    (logger: $logger:expr $(, $arg:expr)* $(,)?) => {
        $logger.info_with_success($crate::__logz_args!($($arg),*))
    };
    ($($arg:expr),* $(,)?) => {
        $crate::logger().info_with_success($crate::__logz_args!($($arg),*))
    };
}
