use super::{BoxedWriter, LineSink};
use std::io;
use std::mem;

impl<W> LineSink<W> {
    /// Creates a sink over `writer` with an empty scratch buffer.
    #[must_use]
    pub const fn new(writer: W) -> Self {
        Self {
            writer,
            scratch: Vec::new(),
        }
    }

    /// Returns a shared reference to the wrapped writer.
    pub const fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Consumes the sink and returns the wrapped writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Replaces the underlying writer and returns the previous one.
    ///
    /// The caller receives the old writer so anything it buffered can be
    /// inspected or flushed before it is dropped.
    #[must_use = "the returned writer holds output produced before the replacement"]
    pub fn replace_writer(&mut self, mut writer: W) -> W {
        mem::swap(&mut self.writer, &mut writer);
        writer
    }
}

impl LineSink<BoxedWriter> {
    /// Creates a boxed sink over the process's standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(Box::new(io::stdout()))
    }

    /// Creates a boxed sink from any sendable writer.
    #[must_use]
    pub fn boxed<W>(writer: W) -> Self
    where
        W: io::Write + Send + 'static,
    {
        Self::new(Box::new(writer))
    }
}
