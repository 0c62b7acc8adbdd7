//! Integration tests for line construction.

use std::fmt;

use logz::{CaptureBuffer, ColorChoice, Level, Logger, LoggerConfig};

fn logger(colors: ColorChoice) -> (Logger, CaptureBuffer) {
    let capture = CaptureBuffer::new();
    let config = LoggerConfig::new()
        .with_level(Level::Trace)
        .with_colors(colors);
    (Logger::with_writer(config, capture.clone()), capture)
}

struct Point {
    x: i32,
    y: i32,
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[test]
fn multiple_arguments_are_space_joined() {
    let (logger, capture) = logger(ColorChoice::Never);
    logger.info(&[&"Test", &"message", &123]);
    assert_eq!(capture.contents(), "[INFO] Test message 123\n");
}

#[test]
fn custom_display_types_render_with_their_own_format() {
    let (logger, capture) = logger(ColorChoice::Never);
    let origin = Point { x: 0, y: -1 };
    logger.warn(&[&"moved to", &origin, &2.5]);
    assert_eq!(capture.contents(), "[WARN] moved to (0, -1) 2.5\n");
}

#[test]
fn no_arguments_render_an_empty_message() {
    let (logger, capture) = logger(ColorChoice::Never);
    logger.error(&[]);
    assert_eq!(capture.contents(), "[ERROR] \n");
}

#[test]
fn embedded_newlines_are_not_escaped() {
    let (logger, capture) = logger(ColorChoice::Never);
    logger.debug(&[&"two\nlines"]);
    assert_eq!(capture.contents(), "[DEBUG] two\nlines\n");
}

#[test]
fn success_variant_layout_without_colors() {
    let (logger, capture) = logger(ColorChoice::Never);
    logger.info_with_success(&[&"Operation completed"]);
    assert_eq!(capture.contents(), "[INFO] Success: Operation completed\n");
}

#[test]
fn success_variant_colors_tag_and_marker_independently() {
    let (logger, capture) = logger(ColorChoice::Always);
    logger.info_with_success(&[&"Operation completed"]);
    assert_eq!(
        capture.contents(),
        "[\x1b[36mINFO\x1b[0m] \x1b[32mSuccess\x1b[0m: Operation completed\n"
    );
}

#[test]
fn colored_tags_use_the_level_palette() {
    let (logger, capture) = logger(ColorChoice::Always);
    logger.trace(&[&"t"]);
    logger.debug(&[&"d"]);
    logger.info(&[&"i"]);
    logger.warn(&[&"w"]);
    logger.error(&[&"e"]);

    assert_eq!(
        capture.lines(),
        vec![
            "[\x1b[37mTRACE\x1b[0m] t",
            "[\x1b[35mDEBUG\x1b[0m] d",
            "[\x1b[36mINFO\x1b[0m] i",
            "[\x1b[33mWARN\x1b[0m] w",
            "[\x1b[31mERROR\x1b[0m] e",
        ]
    );
}

#[test]
fn message_text_is_never_colored() {
    let (logger, capture) = logger(ColorChoice::Always);
    logger.info(&[&"plain", &"words"]);
    assert!(capture.contents().ends_with("] plain words\n"));
}

#[test]
fn macros_accept_an_explicit_logger() {
    let (logger, capture) = logger(ColorChoice::Never);
    let count = 3;
    let name = String::from("cache");

    logz::trace!(logger: &logger, "t");
    logz::debug!(logger: &logger, name, "size", count);
    logz::info!(logger: &logger, "Test", "message", 123);
    logz::warn!(logger: &logger, format!("{count} retries"));
    logz::error!(logger: &logger);
    logz::info_success!(logger: &logger, "done",);

    assert_eq!(
        capture.lines(),
        vec![
            "[TRACE] t",
            "[DEBUG] cache size 3",
            "[INFO] Test message 123",
            "[WARN] 3 retries",
            "[ERROR] ",
            "[INFO] Success: done",
        ]
    );
}
