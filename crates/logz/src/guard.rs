//! crates/logz/src/guard.rs
//! Scoped output redirection.

use logz_sink::BoxedWriter;

use crate::logger::Logger;

/// RAII guard that temporarily redirects a [`Logger`]'s output.
///
/// Instances are created by [`Logger::redirect`] and [`crate::redirect`].
/// While the guard is alive every line goes to the writer passed to
/// `redirect`. Dropping the guard reinstates the writer that was active
/// before, which is how tests isolate the output of the shared process-wide
/// logger.
#[must_use = "dropping the guard immediately restores the previous output"]
pub struct OutputGuard<'a> {
    logger: &'a Logger,
    previous: Option<BoxedWriter>,
}

impl<'a> OutputGuard<'a> {
    pub(crate) fn new(logger: &'a Logger, previous: BoxedWriter) -> Self {
        Self {
            logger,
            previous: Some(previous),
        }
    }

    /// Returns the logger whose output is redirected.
    pub const fn logger(&self) -> &'a Logger {
        self.logger
    }

    /// Consumes the guard without restoring the previous output.
    ///
    /// The redirected writer becomes the logger's permanent output and the
    /// writer that was replaced is handed back to the caller.
    ///
    /// ```
    /// use logz::{CaptureBuffer, ColorChoice, Logger, LoggerConfig};
    ///
    /// let logger = Logger::with_config(LoggerConfig::new().with_colors(ColorChoice::Never));
    /// let capture = CaptureBuffer::new();
    /// let stdout = logger.redirect(capture.clone()).keep();
    /// drop(stdout);
    ///
    /// logger.info(&[&"still captured"]);
    /// assert_eq!(capture.contents(), "[INFO] still captured\n");
    /// ```
    pub fn keep(mut self) -> BoxedWriter {
        self.previous
            .take()
            .expect("output guard must own the previous writer")
    }
}

impl Drop for OutputGuard<'_> {
    fn drop(&mut self) {
        if let Some(previous) = self.previous.take() {
            drop(self.logger.replace_output(previous));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::ColorChoice;
    use crate::config::LoggerConfig;
    use logz_sink::CaptureBuffer;

    fn logger_over(capture: &CaptureBuffer) -> Logger {
        Logger::with_writer(
            LoggerConfig::new().with_colors(ColorChoice::Never),
            capture.clone(),
        )
    }

    #[test]
    fn drop_restores_previous_output() {
        let base = CaptureBuffer::new();
        let logger = logger_over(&base);
        let scoped = CaptureBuffer::new();
        {
            let _guard = logger.redirect(scoped.clone());
            logger.info(&[&"inside"]);
        }
        logger.info(&[&"outside"]);

        assert_eq!(scoped.contents(), "[INFO] inside\n");
        assert_eq!(base.contents(), "[INFO] outside\n");
    }

    #[test]
    fn nested_guards_unwind_in_order() {
        let base = CaptureBuffer::new();
        let logger = logger_over(&base);
        let outer = CaptureBuffer::new();
        let inner = CaptureBuffer::new();
        {
            let _outer = logger.redirect(outer.clone());
            logger.info(&[&1]);
            {
                let _inner = logger.redirect(inner.clone());
                logger.info(&[&2]);
            }
            logger.info(&[&3]);
        }
        logger.info(&[&4]);

        assert_eq!(outer.lines(), vec!["[INFO] 1", "[INFO] 3"]);
        assert_eq!(inner.lines(), vec!["[INFO] 2"]);
        assert_eq!(base.lines(), vec!["[INFO] 4"]);
    }

    #[test]
    fn keep_skips_restoration() {
        let base = CaptureBuffer::new();
        let logger = logger_over(&base);
        let scoped = CaptureBuffer::new();
        let previous = logger.redirect(scoped.clone()).keep();
        drop(previous);
        logger.info(&[&"kept"]);

        assert!(base.is_empty());
        assert_eq!(scoped.contents(), "[INFO] kept\n");
    }

    #[test]
    fn guard_exposes_logger() {
        let base = CaptureBuffer::new();
        let logger = logger_over(&base);
        let guard = logger.redirect(CaptureBuffer::new());
        assert!(std::ptr::eq(guard.logger(), &logger));
    }
}
