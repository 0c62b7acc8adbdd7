use super::{LineSink, SCRATCH_RETAIN_LIMIT};
use std::io::{self, Write};

impl<W> LineSink<W>
where
    W: Write,
{
    /// Renders one line through `render` and writes it, newline included, in a single call.
    ///
    /// The closure receives the cleared scratch buffer and appends the line
    /// body without a terminator. When the closure fails nothing reaches the
    /// writer and its error is returned unchanged.
    pub fn write_line<F>(&mut self, render: F) -> io::Result<()>
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        self.scratch.clear();
        let result = render(&mut self.scratch).and_then(|()| {
            self.scratch.push(b'\n');
            self.writer.write_all(&self.scratch)?;
            self.writer.flush()
        });

        self.scratch.clear();
        if self.scratch.capacity() > SCRATCH_RETAIN_LIMIT {
            self.scratch.shrink_to(SCRATCH_RETAIN_LIMIT);
        }
        result
    }

    /// Writes an already rendered `line` followed by a newline, in a single call.
    pub fn write_bytes_line(&mut self, line: &[u8]) -> io::Result<()> {
        self.write_line(|buf| {
            buf.extend_from_slice(line);
            Ok(())
        })
    }

    /// Writes `line` followed by a newline.
    pub fn write_str_line(&mut self, line: &str) -> io::Result<()> {
        self.write_bytes_line(line.as_bytes())
    }

    /// Flushes the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
