//! crates/logz/src/render.rs
//! Line construction: argument joining and tag decoration.

use std::fmt::{self, Display};
use std::io::{self, Write};

use crate::color::{SUCCESS_STYLE, paint};
use crate::level::Level;

/// Displays a slice of arguments separated by single ASCII spaces.
///
/// Each argument uses its own [`Display`] implementation; nothing is quoted,
/// escaped, or truncated.
///
/// ```
/// use std::fmt::Display;
/// use logz::Joined;
///
/// let args: [&dyn Display; 3] = [&"Test", &"message", &123];
/// assert_eq!(Joined(&args).to_string(), "Test message 123");
/// ```
#[derive(Clone, Copy)]
pub struct Joined<'a>(pub &'a [&'a dyn Display]);

impl Display for Joined<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut args = self.0.iter();
        if let Some(first) = args.next() {
            first.fmt(f)?;
            for arg in args {
                f.write_str(" ")?;
                arg.fmt(f)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Joined<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Joined").field(&self.to_string()).finish()
    }
}

/// Joins `args` into one message string.
pub fn join_args(args: &[&dyn Display]) -> String {
    Joined(args).to_string()
}

/// Renders a line body, without the trailing newline, into `buf`.
///
/// `[TAG] message`, or `[INFO] Success: message` when `success` is set.
pub(crate) fn render_line(
    buf: &mut Vec<u8>,
    level: Level,
    success: bool,
    args: &[&dyn Display],
    colors: bool,
) -> io::Result<()> {
    buf.push(b'[');
    paint(buf, level.as_str(), level.style(), colors)?;
    buf.extend_from_slice(b"] ");
    if success {
        paint(buf, "Success", SUCCESS_STYLE, colors)?;
        buf.extend_from_slice(b": ");
    }
    write!(buf, "{}", Joined(args))
}
