use std::fmt;
use std::io::Write;

mod constructors;
mod writing;

/// Boxed writer type stored by loggers whose destination can change at runtime.
pub type BoxedWriter = Box<dyn Write + Send>;

/// Largest scratch capacity, in bytes, retained between writes.
///
/// Lines longer than this still render normally; the buffer is shrunk back
/// afterwards so one oversized line does not pin memory for the rest of the
/// process.
pub const SCRATCH_RETAIN_LIMIT: usize = 4096;

/// Streaming sink that writes complete, newline-terminated lines into an
/// [`std::io::Write`] target.
///
/// The sink owns the underlying writer together with a reusable scratch
/// buffer. Each call to [`write_line`](Self::write_line) renders into the
/// scratch buffer, appends `\n`, and forwards the finished line with a single
/// `write_all`.
///
/// # Examples
///
/// Collect lines into a [`Vec<u8>`]:
///
/// ```
/// use logz_sink::LineSink;
///
/// let mut sink = LineSink::new(Vec::new());
/// sink.write_str_line("ready")?;
/// sink.write_str_line("steady")?;
///
/// assert_eq!(sink.into_inner(), b"ready\nsteady\n".to_vec());
/// # Ok::<(), std::io::Error>(())
/// ```
///
/// Swap the destination while keeping the scratch allocation:
///
/// ```
/// use logz_sink::LineSink;
///
/// let mut sink = LineSink::new(Vec::new());
/// sink.write_str_line("phase one")?;
///
/// let previous = sink.replace_writer(Vec::new());
/// sink.write_str_line("phase two")?;
///
/// assert_eq!(previous, b"phase one\n".to_vec());
/// assert_eq!(sink.into_inner(), b"phase two\n".to_vec());
/// # Ok::<(), std::io::Error>(())
/// ```
pub struct LineSink<W> {
    writer: W,
    scratch: Vec<u8>,
}

impl<W> fmt::Debug for LineSink<W>
where
    W: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LineSink")
            .field("writer", &self.writer)
            .field("scratch_capacity", &self.scratch.capacity())
            .finish()
    }
}
