//! crates/logz/src/config.rs
//! Logger configuration: threshold and color selection.

use crate::color::ColorChoice;
use crate::level::{Level, ParseLevelError};

/// Settings applied when a [`Logger`](crate::Logger) is built or reset.
///
/// The defaults mirror a fresh process: a `Debug` threshold with colors
/// enabled.
///
/// ```
/// use logz::{ColorChoice, Level, LoggerConfig};
///
/// let config = LoggerConfig::new()
///     .with_level(Level::Warn)
///     .with_colors(ColorChoice::Never);
/// assert_eq!(config.level, Level::Warn);
/// assert!(!config.colors_enabled());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LoggerConfig {
    /// Minimum severity that produces output.
    pub level: Level,
    /// Color selection for level tags.
    pub colors: ColorChoice,
}

impl LoggerConfig {
    /// Returns the default configuration.
    pub const fn new() -> Self {
        Self {
            level: Level::Debug,
            colors: ColorChoice::Always,
        }
    }

    /// Sets the threshold.
    pub const fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Sets the threshold from a case-insensitive level name.
    pub fn with_level_name(self, name: &str) -> Result<Self, ParseLevelError> {
        Ok(self.with_level(name.parse()?))
    }

    /// Sets the color selection.
    pub const fn with_colors(mut self, colors: ColorChoice) -> Self {
        self.colors = colors;
        self
    }

    /// Resolves [`colors`](Self::colors) into an on/off flag.
    pub fn colors_enabled(&self) -> bool {
        self.colors.resolve()
    }
}
