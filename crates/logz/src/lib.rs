#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logz` is a leveled, colorized console logger. Each call is filtered
//! against a severity threshold and, when it passes, written as one line of
//! the form `[LEVEL] arg1 arg2 ...` to a replaceable output stream that
//! defaults to standard output.
//!
//! # Design
//!
//! - [`Level`] orders severities `Trace < Debug < Info < Warn < Error`.
//!   Level names parse case-insensitively.
//! - [`Logger`] owns the threshold, the color flag, and a
//!   [`LineSink`](logz_sink::LineSink) behind one mutex. Lines are rendered
//!   outside it and written under it in a single call, so concurrent callers
//!   never interleave partial lines and a `Display` argument may log itself.
//! - A lazily created process-wide [`Logger`] backs the free functions
//!   ([`info()`], [`set_level`], ...) and the variadic macros ([`info!`], ...).
//!   Independent loggers can be built with [`Logger::with_writer`].
//! - Tags are colorized with fixed ANSI foreground colors: TRACE white,
//!   DEBUG magenta, INFO cyan, WARN yellow, ERROR red, and a green
//!   `Success` marker for [`info_with_success`].
//!
//! # Errors
//!
//! Emitting never fails from the caller's point of view: write errors are
//! dropped unless the fallible [`Logger::try_log`] is used. An unknown level
//! name passed to [`set_level`] is reported on the output stream itself as
//! `Invalid level: <name>`; [`try_set_level`] returns a [`ParseLevelError`]
//! instead.
//!
//! # Examples
//!
//! ```
//! use logz::{CaptureBuffer, Level};
//!
//! let capture = CaptureBuffer::new();
//! let _guard = logz::redirect(capture.clone());
//! logz::disable_colors();
//! logz::set_level("info");
//!
//! logz::debug!("not shown");
//! logz::info!("Test", "message", 123);
//! logz::info_success!("Operation completed");
//! logz::set_level("loud");
//!
//! assert_eq!(logz::logger().level(), Level::Info);
//! assert_eq!(
//!     capture.contents(),
//!     "[INFO] Test message 123\n[INFO] Success: Operation completed\nInvalid level: loud\n"
//! );
//! ```
//!
//! # Feature flags
//!
//! - `serde`: `Serialize`/`Deserialize` for [`Level`], [`ColorChoice`], and
//!   [`LoggerConfig`].
//! - `tracing`: `LogzLayer`, a `tracing-subscriber` layer that prints tracing
//!   events through a [`Logger`].

mod color;
mod config;
mod global;
mod guard;
mod level;
mod logger;
mod macros;
mod render;
#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use color::{ColorChoice, ParseColorChoiceError, SUCCESS_STYLE};
pub use config::LoggerConfig;
pub use global::{
    debug, disable_colors, error, info, info_with_success, logger, redirect, set_level, set_output,
    trace, try_set_level, warn,
};
pub use guard::OutputGuard;
pub use level::{Level, ParseLevelError};
pub use logger::Logger;
pub use logz_sink::{BoxedWriter, CaptureBuffer};
pub use render::{Joined, join_args};
#[cfg(feature = "tracing")]
pub use tracing_bridge::{LogzLayer, init_tracing, init_tracing_with};
