//! Integration tests for color control.

use logz::{CaptureBuffer, ColorChoice, Level, Logger, LoggerConfig};

fn colored_logger() -> (Logger, CaptureBuffer) {
    let capture = CaptureBuffer::new();
    let config = LoggerConfig::new()
        .with_level(Level::Trace)
        .with_colors(ColorChoice::Always);
    (Logger::with_writer(config, capture.clone()), capture)
}

fn emit_everything(logger: &Logger) {
    logger.trace(&[&"t"]);
    logger.debug(&[&"d"]);
    logger.info(&[&"i"]);
    logger.warn(&[&"w"]);
    logger.error(&[&"e"]);
    logger.info_with_success(&[&"s"]);
}

#[test]
fn colors_are_on_by_default() {
    let logger = Logger::with_writer(LoggerConfig::default(), CaptureBuffer::new());
    assert!(logger.colors_enabled());
}

#[test]
fn disabled_colors_emit_no_escape_bytes() {
    let (logger, capture) = colored_logger();
    logger.disable_colors();
    emit_everything(&logger);

    let contents = capture.contents();
    assert!(!contents.contains('\x1b'), "{contents:?}");
    assert_eq!(capture.lines().len(), 6);
    assert_eq!(capture.lines()[5], "[INFO] Success: s");
}

#[test]
fn disabling_twice_is_harmless() {
    let (logger, capture) = colored_logger();
    logger.disable_colors();
    logger.disable_colors();
    assert!(!logger.colors_enabled());

    logger.warn(&[&"still plain"]);
    assert_eq!(capture.contents(), "[WARN] still plain\n");
}

#[test]
fn set_colors_turns_colors_back_on() {
    let (logger, capture) = colored_logger();
    logger.disable_colors();
    logger.info(&[&"plain"]);

    logger.set_colors(true);
    logger.info(&[&"painted"]);

    assert_eq!(
        capture.lines(),
        vec!["[INFO] plain", "[\x1b[36mINFO\x1b[0m] painted"]
    );
}

#[test]
fn never_choice_starts_uncolored() {
    let capture = CaptureBuffer::new();
    let config = LoggerConfig::new().with_colors(ColorChoice::Never);
    let logger = Logger::with_writer(config, capture.clone());
    assert!(!logger.colors_enabled());

    logger.error(&[&"boom"]);
    assert_eq!(capture.contents(), "[ERROR] boom\n");
}

#[test]
fn every_colored_line_resets_after_each_painted_token() {
    let (logger, capture) = colored_logger();
    emit_everything(&logger);

    for line in capture.lines() {
        let opens = line.matches("\x1b[3").count();
        let resets = line.matches("\x1b[0m").count();
        assert!(opens >= 1, "{line:?}");
        assert_eq!(opens, resets, "{line:?}");
    }
}

#[test]
fn reset_restores_configured_colors() {
    let (logger, capture) = colored_logger();
    logger.disable_colors();
    logger.reset(LoggerConfig::new());
    assert!(logger.colors_enabled());

    logger.info(&[&"again"]);
    assert_eq!(capture.contents(), "[\x1b[36mINFO\x1b[0m] again\n");
}
