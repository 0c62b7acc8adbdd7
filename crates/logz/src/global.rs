//! crates/logz/src/global.rs
//! Process-wide default logger and free-function front end.
//!
//! The default logger is created lazily on first use with
//! [`LoggerConfig::new`](crate::LoggerConfig::new) and standard output as its
//! sink. It lives for the remainder of the process; tests that need isolation
//! redirect its output with [`redirect`] and restore its settings with
//! [`Logger::reset`].

use std::fmt::Display;
use std::io::Write;
use std::sync::OnceLock;

use logz_sink::BoxedWriter;

use crate::guard::OutputGuard;
use crate::level::{Level, ParseLevelError};
use crate::logger::Logger;

static DEFAULT_LOGGER: OnceLock<Logger> = OnceLock::new();

/// Returns the process-wide default logger.
pub fn logger() -> &'static Logger {
    DEFAULT_LOGGER.get_or_init(Logger::new)
}

/// Sets the default logger's threshold from a case-insensitive level name.
///
/// An unrecognised name leaves the threshold unchanged and writes
/// `Invalid level: <name>` to the current output.
pub fn set_level(name: &str) {
    logger().set_level(name);
}

/// Sets the default logger's threshold, returning an error for unknown names.
pub fn try_set_level(name: &str) -> Result<Level, ParseLevelError> {
    logger().try_set_level(name)
}

/// Disables colors on the default logger for the rest of the process.
pub fn disable_colors() {
    logger().disable_colors();
}

/// Replaces the default logger's output and returns the previous writer.
pub fn set_output<W>(writer: W) -> BoxedWriter
where
    W: Write + Send + 'static,
{
    logger().set_output(writer)
}

/// Redirects the default logger's output until the guard is dropped.
pub fn redirect<W>(writer: W) -> OutputGuard<'static>
where
    W: Write + Send + 'static,
{
    logger().redirect(writer)
}

/// Emits at TRACE through the default logger.
pub fn trace(args: &[&dyn Display]) {
    logger().trace(args);
}

/// Emits at DEBUG through the default logger.
pub fn debug(args: &[&dyn Display]) {
    logger().debug(args);
}

/// Emits at INFO through the default logger.
pub fn info(args: &[&dyn Display]) {
    logger().info(args);
}

/// Emits at WARN through the default logger.
pub fn warn(args: &[&dyn Display]) {
    logger().warn(args);
}

/// Emits at ERROR through the default logger.
pub fn error(args: &[&dyn Display]) {
    logger().error(args);
}

/// Emits an INFO line with the `Success:` marker through the default logger.
pub fn info_with_success(args: &[&dyn Display]) {
    logger().info_with_success(args);
}
