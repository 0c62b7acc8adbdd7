#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/logz-sink/src/lib.rs
//!
//! # Overview
//!
//! `logz-sink` provides the output primitives used by the `logz` console
//! logger. The focus is on handing each rendered log line to an arbitrary
//! [`std::io::Write`] implementor in one piece, while reusing a scratch buffer
//! so repeated lines do not allocate.
//!
//! # Design
//!
//! The crate exposes [`LineSink`], a lightweight wrapper around a writer. A
//! caller renders the body of a line into the sink's scratch buffer through a
//! closure; the sink appends the newline terminator and forwards the complete
//! line with a single [`write_all`](std::io::Write::write_all) followed by a
//! flush. [`CaptureBuffer`] is a cloneable in-memory writer that collects
//! lines for assertions and for embedding the logger into programs that
//! post-process output.
//!
//! # Invariants
//!
//! - Every line handed to the writer ends with exactly one `\n` appended by the
//!   sink.
//! - A line is never split across multiple `write_all` calls, so writers that
//!   serialise individual writes never interleave partial lines.
//! - The scratch buffer is cleared before every render. Its capacity is kept
//!   for reuse up to [`SCRATCH_RETAIN_LIMIT`] bytes.
//!
//! # Errors
//!
//! All operations surface [`std::io::Error`] values originating from the
//! underlying writer or from the render closure. A failed render writes
//! nothing.
//!
//! # Examples
//!
//! ```
//! use logz_sink::{CaptureBuffer, LineSink};
//!
//! let capture = CaptureBuffer::new();
//! let mut sink = LineSink::new(capture.clone());
//!
//! sink.write_str_line("first")?;
//! sink.write_line(|buf| {
//!     buf.extend_from_slice(b"second");
//!     Ok(())
//! })?;
//!
//! assert_eq!(capture.contents(), "first\nsecond\n");
//! # Ok::<(), std::io::Error>(())
//! ```

mod capture;
mod sink;

pub use capture::CaptureBuffer;
pub use sink::{BoxedWriter, LineSink, SCRATCH_RETAIN_LIMIT};
