//! crates/logz/src/color.rs
//! Color selection and the fixed level palette.

use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

use anstyle::{AnsiColor, Color, Style};
use is_terminal::IsTerminal;
use thiserror::Error;

use crate::level::Level;

/// Style applied to the `Success` token emitted by
/// [`Logger::info_with_success`](crate::Logger::info_with_success).
pub const SUCCESS_STYLE: Style = fg(AnsiColor::Green);

const fn fg(color: AnsiColor) -> Style {
    Style::new().fg_color(Some(Color::Ansi(color)))
}

impl Level {
    /// Returns the style used for this level's tag.
    pub const fn style(self) -> Style {
        match self {
            Self::Trace => fg(AnsiColor::White),
            Self::Debug => fg(AnsiColor::Magenta),
            Self::Info => fg(AnsiColor::Cyan),
            Self::Warn => fg(AnsiColor::Yellow),
            Self::Error => fg(AnsiColor::Red),
        }
    }
}

/// Whether a logger decorates its tags with ANSI colors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ColorChoice {
    /// Always emit color sequences.
    #[default]
    Always,
    /// Never emit color sequences.
    Never,
    /// Emit color sequences only when standard output is a terminal.
    Auto,
}

impl ColorChoice {
    /// Resolves the choice into an on/off flag.
    ///
    /// `Auto` inspects the process's standard output once, at the time of the
    /// call.
    pub fn resolve(self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => io::stdout().is_terminal(),
        }
    }

    /// Returns the lower-case name accepted by [`FromStr`].
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Always => "always",
            Self::Never => "never",
            Self::Auto => "auto",
        }
    }
}

impl fmt::Display for ColorChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string does not name a [`ColorChoice`].
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("invalid color choice '{input}': expected always, never, or auto")]
pub struct ParseColorChoiceError {
    input: String,
}

impl ParseColorChoiceError {
    /// Returns the rejected input.
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl FromStr for ColorChoice {
    type Err = ParseColorChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "always" => Ok(Self::Always),
            "never" => Ok(Self::Never),
            "auto" => Ok(Self::Auto),
            _ => Err(ParseColorChoiceError {
                input: s.to_owned(),
            }),
        }
    }
}

/// Appends `text` to `buf`, wrapped in `style` when `enabled` is set.
pub(crate) fn paint(buf: &mut Vec<u8>, text: &str, style: Style, enabled: bool) -> io::Result<()> {
    if enabled {
        write!(buf, "{}{text}{}", style.render(), style.render_reset())
    } else {
        buf.extend_from_slice(text.as_bytes());
        Ok(())
    }
}
