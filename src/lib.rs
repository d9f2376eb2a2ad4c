//! Emberlog - colorized console logging, variadic line formatting, and
//! crash-on-failure assertions
//!
//! Log statements take any number of heterogeneous values and render them
//! into one line, colorized by severity:
//! ```
//! let chunks = vec![(0, 0), (0, 1)];
//! emberlog::info!("loaded ", 2, " chunks: ", chunks);
//! emberlog::ember_assert!(1 + 1 == 2, "arithmetic is broken");
//! ```
//!
//! Severities below the compile-time maximum (the `max-level-*` cargo
//! features) cost nothing: the calls fold away and their arguments are
//! never evaluated.

pub mod bridge;
pub mod buffer;
pub mod console;
pub mod level;
pub mod logger;
pub mod macros;
pub mod render;

pub use bridge::init;
pub use buffer::{LineBuffer, DEFAULT_CAPACITY};
#[cfg(target_arch = "wasm32")]
pub use console::WebConsole;
pub use console::{default_console, AnsiConsole, Console, DefaultConsole};
pub use level::{enabled, Level, ParseLevelError, MAX_LEVEL};
pub use logger::Logger;
pub use macros::{report_assertion, trim_source_file};
pub use render::{render_to_string, render_values, Render, Unsupported};

// Macro plumbing, not public API
#[doc(hidden)]
pub use logger::__log;
#[doc(hidden)]
pub use macros::__assert_fail;
