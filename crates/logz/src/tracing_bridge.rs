//! crates/logz/src/tracing_bridge.rs
//! Bridge between the tracing crate and a logz [`Logger`].
//!
//! [`LogzLayer`] is a `tracing-subscriber` layer that prints every tracing
//! event through a logz logger. The tracing level maps one-to-one onto
//! [`Level`], and the logger's own threshold decides what is written, so
//! [`Logger::set_level`] keeps working after the bridge is installed.
//!
//! # Usage
//!
//! ```rust,ignore
//! logz::init_tracing().expect("no other global subscriber");
//!
//! tracing::info!(attempt = 2, "connecting");
//! // [INFO] connecting attempt=2
//! ```

use std::fmt::{self, Display};

use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};

use crate::global::logger;
use crate::level::Level;
use crate::logger::Logger;

/// A tracing layer that writes events through a [`Logger`].
pub struct LogzLayer {
    logger: &'static Logger,
}

impl LogzLayer {
    /// Creates a layer writing through `logger`.
    #[must_use]
    pub const fn new(logger: &'static Logger) -> Self {
        Self { logger }
    }

    /// Creates a layer writing through the process-wide default logger.
    #[must_use]
    pub fn global() -> Self {
        Self::new(logger())
    }

    /// Maps a tracing level onto the logz level of the same name.
    pub fn map_level(level: tracing::Level) -> Level {
        if level == tracing::Level::TRACE {
            Level::Trace
        } else if level == tracing::Level::DEBUG {
            Level::Debug
        } else if level == tracing::Level::INFO {
            Level::Info
        } else if level == tracing::Level::WARN {
            Level::Warn
        } else {
            Level::Error
        }
    }
}

impl fmt::Debug for LogzLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogzLayer")
            .field("logger", self.logger)
            .finish()
    }
}

/// Collects the `message` field first, then every other field as `name=value`.
#[derive(Default)]
struct EventVisitor {
    message: Option<String>,
    fields: Vec<String>,
}

impl EventVisitor {
    fn into_args(self) -> Vec<String> {
        self.message.into_iter().chain(self.fields).collect()
    }
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{value:?}"));
        } else {
            self.fields.push(format!("{}={value:?}", field.name()));
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_owned());
        } else {
            self.fields.push(format!("{}={value}", field.name()));
        }
    }
}

impl<S> Layer<S> for LogzLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let level = Self::map_level(*event.metadata().level());
        if !self.logger.enabled(level) {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);
        let args = visitor.into_args();
        let refs: Vec<&dyn Display> = args.iter().map(|arg| arg as &dyn Display).collect();
        self.logger.log(level, &refs);
    }
}

/// Installs a [`LogzLayer`] over the default logger as the global tracing subscriber.
pub fn init_tracing() -> Result<(), TryInitError> {
    init_tracing_with(logger())
}

/// Installs a [`LogzLayer`] over `logger` as the global tracing subscriber.
pub fn init_tracing_with(logger: &'static Logger) -> Result<(), TryInitError> {
    tracing_subscriber::registry()
        .with(LogzLayer::new(logger))
        .try_init()
}
