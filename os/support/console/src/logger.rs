use crate::sink::{CharSink, write_to};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

const RESET: &str = "\x1b[0m";

/// `log` backend writing `[L/target] message` lines to a [`CharSink`].
pub struct ConsoleLogger<S> {
    sink: S,
    max_level: LevelFilter,
    color: bool,
}

impl<S> ConsoleLogger<S> {
    #[must_use]
    pub const fn new(sink: S, max_level: LevelFilter) -> Self {
        Self {
            sink,
            max_level,
            color: cfg!(feature = "color"),
        }
    }

    /// Wrap each line in ANSI colors keyed by level.
    #[must_use]
    pub const fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    #[must_use]
    pub const fn sink(&self) -> &S {
        &self.sink
    }
}

impl<S: CharSink + Send + Sync> ConsoleLogger<S> {
    /// Install as the global logger. Call once during early init.
    #[allow(clippy::missing_errors_doc)]
    pub fn init(&'static self) -> Result<(), SetLoggerError> {
        log::set_logger(self)?;
        log::set_max_level(self.max_level);
        Ok(())
    }
}

/// Single-letter tag and ANSI color for a level.
#[must_use]
pub const fn level_style(level: Level) -> (char, &'static str) {
    match level {
        Level::Error => ('E', "\x1b[31m"),
        Level::Warn => ('W', "\x1b[33m"),
        Level::Info => ('I', "\x1b[32m"),
        Level::Debug => ('D', "\x1b[34m"),
        Level::Trace => ('T', "\x1b[0m"),
    }
}

impl<S: CharSink + Send + Sync> Log for ConsoleLogger<S> {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.max_level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let (tag, color) = level_style(record.level());
        let (open, close) = if self.color { (color, RESET) } else { ("", "") };

        // Format: "[L/target] message\n"
        write_to(
            &self.sink,
            format_args!(
                "{open}[{tag}/{}] {}{close}\n",
                record.target(),
                record.args()
            ),
        );
    }

    fn flush(&self) {
        // unbuffered
    }
}

#[cfg(all(test, feature = "enabled"))]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Capture(Mutex<Vec<u8>>);

    impl CharSink for Capture {
        fn put_byte(&self, byte: u8) {
            self.0.lock().unwrap().push(byte);
        }
    }

    impl Capture {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    fn emit(logger: &ConsoleLogger<Capture>, level: Level, msg: &str) {
        logger.log(
            &Record::builder()
                .level(level)
                .target("boot")
                .args(format_args!("{msg}"))
                .build(),
        );
    }

    #[test]
    fn plain_header_carries_level_and_target() {
        let logger = ConsoleLogger::new(Capture::default(), LevelFilter::Info).with_color(false);
        emit(&logger, Level::Warn, "clock fallback");
        emit(&logger, Level::Info, "ready");
        assert_eq!(logger.sink().text(), "[W/boot] clock fallback\n[I/boot] ready\n");
    }

    #[test]
    fn levels_above_threshold_are_dropped() {
        let logger = ConsoleLogger::new(Capture::default(), LevelFilter::Warn).with_color(false);
        emit(&logger, Level::Debug, "noise");
        emit(&logger, Level::Error, "fault");
        assert_eq!(logger.sink().text(), "[E/boot] fault\n");
    }

    #[test]
    fn colored_lines_are_reset() {
        let logger = ConsoleLogger::new(Capture::default(), LevelFilter::Trace).with_color(true);
        emit(&logger, Level::Error, "x");
        assert_eq!(logger.sink().text(), "\x1b[31m[E/boot] x\x1b[0m\n");
    }
}
