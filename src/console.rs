//! Console color backends
//!
//! Severity coloring sits behind the [`Console`] trait so the logger never
//! touches platform escape codes directly. Two backends exist, selected at
//! build time by target: [`AnsiConsole`] for native terminals and
//! [`WebConsole`] for wasm32, where lines go to the browser console with CSS
//! styling.

use std::io::{self, Write};

use crate::level::Level;

/// Sink for log lines with a set-color / reset-color capability.
///
/// The logger brackets each line: `set_severity_color`, write the line,
/// `reset_color`. Backends that cannot stream (the web console is
/// line-oriented) may buffer writes and emit on `reset_color`.
pub trait Console: Write {
    /// Switch the console to the visual style for `level`.
    fn set_severity_color(&mut self, level: Level) -> io::Result<()>;

    /// Restore the default console appearance.
    fn reset_color(&mut self) -> io::Result<()>;
}

/// Console backend for ANSI terminals.
///
/// Generic over the inner writer so tests can capture the exact byte
/// sequence written.
pub struct AnsiConsole<W: Write> {
    out: W,
}

// SGR sequences per severity; info keeps the default color.
const SGR_FATAL: &[u8] = b"\x1b[1;97;41m";
const SGR_ERROR: &[u8] = b"\x1b[1;31m";
const SGR_WARN: &[u8] = b"\x1b[1;33m";
const SGR_RESET: &[u8] = b"\x1b[0m";

impl AnsiConsole<io::Stdout> {
    /// Backend over the process's stdout.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> AnsiConsole<W> {
    /// Wrap an arbitrary writer.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Borrow the inner writer.
    pub fn get_ref(&self) -> &W {
        &self.out
    }

    /// Unwrap the inner writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Write for AnsiConsole<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.out.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

impl<W: Write> Console for AnsiConsole<W> {
    fn set_severity_color(&mut self, level: Level) -> io::Result<()> {
        let sgr = match level {
            Level::Fatal => SGR_FATAL,
            Level::Error => SGR_ERROR,
            Level::Warn => SGR_WARN,
            Level::Info => return Ok(()),
        };
        self.out.write_all(sgr)
    }

    fn reset_color(&mut self) -> io::Result<()> {
        self.out.write_all(SGR_RESET)
    }
}

/// Console backend for wasm32 builds: buffers the line and hands it to the
/// browser console with a `%c` CSS style per severity.
#[cfg(target_arch = "wasm32")]
pub struct WebConsole {
    line: String,
    level: Level,
}

#[cfg(target_arch = "wasm32")]
impl WebConsole {
    pub fn new() -> Self {
        Self {
            line: String::new(),
            level: Level::Info,
        }
    }

    fn css_style(level: Level) -> &'static str {
        match level {
            Level::Fatal => "background: red; color: white",
            Level::Error => "color: red",
            Level::Warn => "color: yellow",
            Level::Info => "",
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl Default for WebConsole {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(target_arch = "wasm32")]
impl Write for WebConsole {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.line.push_str(&String::from_utf8_lossy(buf));
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
impl Console for WebConsole {
    fn set_severity_color(&mut self, level: Level) -> io::Result<()> {
        self.level = level;
        Ok(())
    }

    fn reset_color(&mut self) -> io::Result<()> {
        // console.log is line-oriented; emit the buffered line now
        let text = self.line.trim_end_matches('\n');
        let styled = format!("%c{}", text);
        web_sys::console::log_2(
            &wasm_bindgen::JsValue::from_str(&styled),
            &wasm_bindgen::JsValue::from_str(Self::css_style(self.level)),
        );
        self.line.clear();
        self.level = Level::Info;
        Ok(())
    }
}

/// Backend for the build target: ANSI stdout natively, browser console on
/// wasm32.
#[cfg(not(target_arch = "wasm32"))]
pub type DefaultConsole = AnsiConsole<io::Stdout>;

#[cfg(target_arch = "wasm32")]
pub type DefaultConsole = WebConsole;

/// Construct the default backend for this target.
pub fn default_console() -> DefaultConsole {
    #[cfg(not(target_arch = "wasm32"))]
    {
        AnsiConsole::stdout()
    }
    #[cfg(target_arch = "wasm32")]
    {
        WebConsole::new()
    }
}
