//! crates/logz/src/logger.rs
//! The logger instance: threshold, color flag, and sink behind one lock.

use std::fmt::{self, Display};
use std::io::{self, Write};
use std::sync::{Mutex, MutexGuard};

use logz_sink::{BoxedWriter, LineSink};

use crate::config::LoggerConfig;
use crate::guard::OutputGuard;
use crate::level::{Level, ParseLevelError};
use crate::render::render_line;

struct State {
    threshold: Level,
    colors: bool,
    sink: LineSink<BoxedWriter>,
}

/// Leveled console logger writing colorized lines to a replaceable sink.
///
/// The threshold, the color flag, and the sink share a single mutex. An emit
/// call reads the threshold and color flag under it, renders the line with the
/// lock released, then takes it again to check the threshold once more and
/// hand the finished line to the sink in one write. Concurrent callers never
/// interleave partial lines.
///
/// Write failures are dropped by the infallible emit methods
/// ([`info`](Self::info) and friends). Use [`try_log`](Self::try_log) to
/// observe them.
///
/// # Re-entrancy
///
/// Arguments are formatted without holding the lock, so a [`Display`]
/// implementation may itself log through the same logger. Its line is
/// written before the line of the call that formats it.
///
/// # Examples
///
/// ```
/// use logz::{CaptureBuffer, ColorChoice, Level, Logger, LoggerConfig};
///
/// let capture = CaptureBuffer::new();
/// let config = LoggerConfig::new()
///     .with_level(Level::Info)
///     .with_colors(ColorChoice::Never);
/// let logger = Logger::with_writer(config, capture.clone());
///
/// logger.debug(&[&"hidden"]);
/// logger.info(&[&"Test", &"message", &123]);
/// logger.info_with_success(&[&"Operation completed"]);
///
/// assert_eq!(
///     capture.contents(),
///     "[INFO] Test message 123\n[INFO] Success: Operation completed\n"
/// );
/// ```
pub struct Logger {
    state: Mutex<State>,
}

impl Logger {
    /// Creates a logger with the default configuration writing to standard output.
    pub fn new() -> Self {
        Self::with_config(LoggerConfig::new())
    }

    /// Creates a logger writing to standard output.
    pub fn with_config(config: LoggerConfig) -> Self {
        Self::from_sink(config, LineSink::stdout())
    }

    /// Creates a logger writing to `writer`.
    pub fn with_writer<W>(config: LoggerConfig, writer: W) -> Self
    where
        W: Write + Send + 'static,
    {
        Self::from_sink(config, LineSink::boxed(writer))
    }

    fn from_sink(config: LoggerConfig, sink: LineSink<BoxedWriter>) -> Self {
        Self {
            state: Mutex::new(State {
                threshold: config.level,
                colors: config.colors_enabled(),
                sink,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state
            .lock()
            .unwrap_or_else(|poison| poison.into_inner())
    }

    /// Returns the current threshold.
    pub fn level(&self) -> Level {
        self.lock().threshold
    }

    /// Reports whether tags are currently colorized.
    pub fn colors_enabled(&self) -> bool {
        self.lock().colors
    }

    /// Reports whether a call at `level` would produce output.
    pub fn enabled(&self, level: Level) -> bool {
        self.lock().threshold.allows(level)
    }

    /// Replaces the threshold.
    pub fn set_threshold(&self, level: Level) {
        self.lock().threshold = level;
    }

    /// Sets the threshold from a case-insensitive level name.
    ///
    /// On failure the threshold is left unchanged and nothing is written.
    pub fn try_set_level(&self, name: &str) -> Result<Level, ParseLevelError> {
        let level = name.parse()?;
        self.set_threshold(level);
        Ok(level)
    }

    /// Sets the threshold from a case-insensitive level name.
    ///
    /// An unrecognised name leaves the threshold unchanged and writes
    /// `Invalid level: <name>` to the sink, uncolored.
    pub fn set_level(&self, name: &str) {
        if let Err(err) = self.try_set_level(name) {
            let _ = self.lock().sink.write_str_line(&err.to_string());
        }
    }

    /// Stops colorizing tags. Calling it again has no further effect.
    pub fn disable_colors(&self) {
        self.set_colors(false);
    }

    /// Turns tag colorization on or off.
    pub fn set_colors(&self, enabled: bool) {
        self.lock().colors = enabled;
    }

    /// Restores the threshold and color flag from `config`, keeping the sink.
    pub fn reset(&self, config: LoggerConfig) {
        let colors = config.colors_enabled();
        let mut state = self.lock();
        state.threshold = config.level;
        state.colors = colors;
    }

    /// Replaces the output and returns the previous writer.
    pub fn set_output<W>(&self, writer: W) -> BoxedWriter
    where
        W: Write + Send + 'static,
    {
        self.replace_output(Box::new(writer))
    }

    pub(crate) fn replace_output(&self, writer: BoxedWriter) -> BoxedWriter {
        self.lock().sink.replace_writer(writer)
    }

    /// Sends output to `writer` until the returned guard is dropped.
    ///
    /// ```
    /// use logz::{CaptureBuffer, ColorChoice, Logger, LoggerConfig};
    ///
    /// let logger = Logger::with_config(LoggerConfig::new().with_colors(ColorChoice::Never));
    /// let capture = CaptureBuffer::new();
    /// {
    ///     let _guard = logger.redirect(capture.clone());
    ///     logger.warn(&[&"captured"]);
    /// }
    /// assert_eq!(capture.contents(), "[WARN] captured\n");
    /// ```
    pub fn redirect<W>(&self, writer: W) -> OutputGuard<'_>
    where
        W: Write + Send + 'static,
    {
        let previous = self.set_output(writer);
        OutputGuard::new(self, previous)
    }

    /// Flushes the current output.
    pub fn flush(&self) -> io::Result<()> {
        self.lock().sink.flush()
    }

    /// Emits `args` at `level`, reporting whether a line was written.
    ///
    /// Returns `Ok(false)` when the threshold filters the call out and the
    /// writer's error when the write fails.
    pub fn try_log(&self, level: Level, args: &[&dyn Display]) -> io::Result<bool> {
        self.emit(level, false, args)
    }

    /// Emits an INFO line carrying the `Success` marker, reporting whether it was written.
    pub fn try_log_success(&self, args: &[&dyn Display]) -> io::Result<bool> {
        self.emit(Level::Info, true, args)
    }

    fn emit(&self, level: Level, success: bool, args: &[&dyn Display]) -> io::Result<bool> {
        let colors = {
            let state = self.lock();
            if !state.threshold.allows(level) {
                return Ok(false);
            }
            state.colors
        };

        let mut line = Vec::new();
        render_line(&mut line, level, success, args, colors)?;

        let mut state = self.lock();
        if !state.threshold.allows(level) {
            return Ok(false);
        }
        state.sink.write_bytes_line(&line)?;
        Ok(true)
    }

    /// Emits `args` at `level`, ignoring write failures.
    pub fn log(&self, level: Level, args: &[&dyn Display]) {
        let _ = self.try_log(level, args);
    }

    /// Emits at TRACE.
    pub fn trace(&self, args: &[&dyn Display]) {
        self.log(Level::Trace, args);
    }

    /// Emits at DEBUG.
    pub fn debug(&self, args: &[&dyn Display]) {
        self.log(Level::Debug, args);
    }

    /// Emits at INFO.
    pub fn info(&self, args: &[&dyn Display]) {
        self.log(Level::Info, args);
    }

    /// Emits at WARN.
    pub fn warn(&self, args: &[&dyn Display]) {
        self.log(Level::Warn, args);
    }

    /// Emits at ERROR.
    pub fn error(&self, args: &[&dyn Display]) {
        self.log(Level::Error, args);
    }

    /// Emits at INFO with a green `Success:` marker before the message.
    pub fn info_with_success(&self, args: &[&dyn Display]) {
        let _ = self.try_log_success(args);
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.lock();
        f.debug_struct("Logger")
            .field("threshold", &state.threshold)
            .field("colors", &state.colors)
            .finish_non_exhaustive()
    }
}
