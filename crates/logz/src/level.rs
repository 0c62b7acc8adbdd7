//! crates/logz/src/level.rs
//! Severity levels and level-name parsing.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Severity of a log call, ordered from most to least verbose.
///
/// The discriminant doubles as the level's rank: `Trace` is 0 and `Error` is
/// 4. A logger emits a call when the call's rank is greater than or equal to
/// the rank of the configured threshold.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum Level {
    /// Very fine-grained diagnostics.
    Trace = 0,
    /// Diagnostics useful while developing. The default threshold.
    #[default]
    Debug = 1,
    /// Progress of the application at a coarse-grained level.
    Info = 2,
    /// Potentially harmful situations.
    Warn = 3,
    /// Failures the application may still recover from.
    Error = 4,
}

impl Level {
    /// All levels in rank order.
    pub const ALL: [Self; 5] = [Self::Trace, Self::Debug, Self::Info, Self::Warn, Self::Error];

    /// Returns the numeric rank used for threshold comparisons.
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// Returns the level with the given rank, if any.
    pub const fn from_rank(rank: u8) -> Option<Self> {
        match rank {
            0 => Some(Self::Trace),
            1 => Some(Self::Debug),
            2 => Some(Self::Info),
            3 => Some(Self::Warn),
            4 => Some(Self::Error),
            _ => None,
        }
    }

    /// Returns the upper-case name printed inside the line tag.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "TRACE",
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
        }
    }

    /// Reports whether a call at `level` passes when `self` is the threshold.
    pub const fn allows(self, level: Self) -> bool {
        level.rank() >= self.rank()
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Error returned when a string does not name a [`Level`].
///
/// The display form, `Invalid level: <input>`, is the diagnostic line
/// [`Logger::set_level`](crate::Logger::set_level) writes to the sink.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("Invalid level: {input}")]
pub struct ParseLevelError {
    input: String,
}

impl ParseLevelError {
    pub(crate) fn new(input: &str) -> Self {
        Self {
            input: input.to_owned(),
        }
    }

    /// Returns the rejected input exactly as supplied.
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl FromStr for Level {
    type Err = ParseLevelError;

    /// Parses a level name, ignoring ASCII case.
    ///
    /// Surrounding whitespace is significant: `" info"` is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "TRACE" => Ok(Self::Trace),
            "DEBUG" => Ok(Self::Debug),
            "INFO" => Ok(Self::Info),
            "WARN" => Ok(Self::Warn),
            "ERROR" => Ok(Self::Error),
            _ => Err(ParseLevelError::new(s)),
        }
    }
}

impl TryFrom<&str> for Level {
    type Error = ParseLevelError;

    fn try_from(value: &str) -> Result<Self, ParseLevelError> {
        value.parse()
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Level {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}
