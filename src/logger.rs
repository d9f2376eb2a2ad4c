//! Line logger over a console backend

use std::io::{self, Write as _};
use std::sync::{Mutex, OnceLock};

use crate::buffer::LineBuffer;
use crate::console::{default_console, Console, DefaultConsole};
use crate::level::{enabled, Level};
use crate::render::{render_values, Render};

/// Writes severity-prefixed, colorized log lines to a [`Console`].
///
/// The logger owns one [`LineBuffer`] and reuses it for every line, so the
/// steady-state path performs no allocation. The rendered line is consumed
/// by the console immediately; it is not retained across calls.
pub struct Logger<C: Console> {
    console: C,
    line: LineBuffer,
}

impl<C: Console> Logger<C> {
    /// Create a logger over a console backend.
    pub fn new(console: C) -> Self {
        Self {
            console,
            line: LineBuffer::new(),
        }
    }

    /// Render `values` and write them as one line at `level`.
    ///
    /// The line carries the severity prefix, ends with a newline when
    /// `newline` is set, and is written colorized for `level` with the
    /// console restored to its default appearance afterwards. Levels
    /// compiled out of this build write nothing and never invoke the
    /// formatter.
    pub fn log(&mut self, level: Level, newline: bool, values: &[&dyn Render]) -> io::Result<()> {
        if !enabled(level) {
            return Ok(());
        }

        self.line.clear();
        self.line.push_str(level.prefix());
        render_values(&mut self.line, values);
        if newline {
            self.line.push_char('\n');
        }

        self.console.set_severity_color(level)?;
        self.console.write_all(self.line.as_str().as_bytes())?;
        self.console.flush()?;
        self.console.reset_color()?;
        Ok(())
    }

    /// Borrow the console backend.
    pub fn console(&self) -> &C {
        &self.console
    }

    /// Unwrap the console backend.
    pub fn into_console(self) -> C {
        self.console
    }
}

static GLOBAL: OnceLock<Mutex<Logger<DefaultConsole>>> = OnceLock::new();

fn global() -> &'static Mutex<Logger<DefaultConsole>> {
    GLOBAL.get_or_init(|| Mutex::new(Logger::new(default_console())))
}

/// Run `f` against the process-wide logger, skipping if it is poisoned.
pub(crate) fn with_global<F>(f: F)
where
    F: FnOnce(&mut Logger<DefaultConsole>),
{
    if let Ok(mut logger) = global().lock() {
        f(&mut logger);
    }
}

/// Entry point for the level macros. Not public API.
///
/// Logging must not fail the caller, so write errors are swallowed here;
/// use [`Logger::log`] directly to observe them.
#[doc(hidden)]
pub fn __log(level: Level, newline: bool, values: &[&dyn Render]) {
    if !enabled(level) {
        return;
    }
    with_global(|logger| {
        let _ = logger.log(level, newline, values);
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::AnsiConsole;

    fn capture_logger() -> Logger<AnsiConsole<Vec<u8>>> {
        Logger::new(AnsiConsole::new(Vec::new()))
    }

    fn output(logger: Logger<AnsiConsole<Vec<u8>>>) -> String {
        String::from_utf8(logger.into_console().into_inner()).unwrap()
    }

    #[test]
    fn test_line_has_prefix_and_newline() {
        let mut logger = capture_logger();
        logger.log(Level::Info, true, &[&"engine started"]).unwrap();
        assert_eq!(output(logger), "INFO:  engine started\n\x1b[0m");
    }

    #[test]
    fn test_newline_flag_off() {
        let mut logger = capture_logger();
        logger.log(Level::Info, false, &[&"partial"]).unwrap();
        assert_eq!(output(logger), "INFO:  partial\x1b[0m");
    }

    #[test]
    fn test_heterogeneous_values_concatenate() {
        let mut logger = capture_logger();
        logger
            .log(Level::Warn, true, &[&"loaded ", &3, &" chunks"])
            .unwrap();
        assert_eq!(
            output(logger),
            "\x1b[1;33mWARN:  loaded 3 chunks\n\x1b[0m"
        );
    }

    #[test]
    fn test_line_buffer_is_reset_between_calls() {
        let mut logger = capture_logger();
        logger.log(Level::Info, true, &[&"first"]).unwrap();
        logger.log(Level::Info, true, &[&"second"]).unwrap();
        let text = output(logger);
        // The second line does not carry leftovers from the first
        assert_eq!(
            text,
            "INFO:  first\n\x1b[0mINFO:  second\n\x1b[0m"
        );
    }

    #[test]
    fn test_fatal_is_colorized_and_reset() {
        let mut logger = capture_logger();
        logger.log(Level::Fatal, true, &[&"boom"]).unwrap();
        let text = output(logger);
        assert!(text.starts_with("\x1b[1;97;41m"));
        assert!(text.ends_with("\x1b[0m"));
    }

    // Only meaningful when a restriction feature is on; verifies that a
    // compiled-out level produces no console traffic at all.
    #[cfg(feature = "max-level-error")]
    #[test]
    fn test_disabled_level_writes_nothing() {
        let mut logger = capture_logger();
        logger.log(Level::Warn, true, &[&"dropped"]).unwrap();
        logger.log(Level::Info, true, &[&"dropped"]).unwrap();
        assert_eq!(output(logger), "");
    }
}
