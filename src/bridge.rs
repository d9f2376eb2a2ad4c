//! `log` facade bridge
//!
//! Routes records from the `log` crate (used by most of the ecosystem's
//! libraries) through this crate's console logger, so dependency output
//! shares the same coloring and prefixes.

use crate::level::{enabled, Level, MAX_LEVEL};
use crate::logger::__log;
use crate::render::Render;

/// Map a `log` facade level onto a severity. The facade has no fatal; its
/// sub-info levels collapse into info.
pub fn map_level(level: log::Level) -> Level {
    match level {
        log::Level::Error => Level::Error,
        log::Level::Warn => Level::Warn,
        log::Level::Info | log::Level::Debug | log::Level::Trace => Level::Info,
    }
}

fn facade_filter(level: Level) -> log::LevelFilter {
    match level {
        Level::Fatal | Level::Error => log::LevelFilter::Error,
        Level::Warn => log::LevelFilter::Warn,
        Level::Info => log::LevelFilter::Info,
    }
}

struct Bridge;

static BRIDGE: Bridge = Bridge;

impl log::Log for Bridge {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        enabled(map_level(metadata.level()))
    }

    fn log(&self, record: &log::Record<'_>) {
        let level = map_level(record.level());
        if !enabled(level) {
            return;
        }
        let text = record.args().to_string();
        __log(level, true, &[&text.as_str() as &dyn Render]);
    }

    fn flush(&self) {}
}

/// Initialize the logging system
///
/// Installs this crate's logger behind the `log` facade. The facade filter
/// follows the compile-time maximum level; set the `EMBER_LOG` environment
/// variable to one of `fatal`, `error`, `warn`, `info` to restrict it
/// further at startup.
///
/// # Example
/// ```
/// emberlog::init();
/// log::info!("Engine started");
/// ```
pub fn init() {
    let env_level = std::env::var("EMBER_LOG")
        .ok()
        .and_then(|s| s.parse::<Level>().ok());
    let level = match env_level {
        // The compile-time gate still wins over a looser env setting
        Some(requested) if requested.is_enabled_at(MAX_LEVEL) => requested,
        _ => MAX_LEVEL,
    };

    // Ignore the error if a logger is already installed
    if log::set_logger(&BRIDGE).is_ok() {
        log::set_max_level(facade_filter(level));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_facade_levels_map_onto_severities() {
        assert_eq!(map_level(log::Level::Error), Level::Error);
        assert_eq!(map_level(log::Level::Warn), Level::Warn);
        assert_eq!(map_level(log::Level::Info), Level::Info);
        assert_eq!(map_level(log::Level::Debug), Level::Info);
        assert_eq!(map_level(log::Level::Trace), Level::Info);
    }

    #[test]
    fn test_facade_filter_tracks_max_level() {
        assert_eq!(facade_filter(Level::Fatal), log::LevelFilter::Error);
        assert_eq!(facade_filter(Level::Error), log::LevelFilter::Error);
        assert_eq!(facade_filter(Level::Warn), log::LevelFilter::Warn);
        assert_eq!(facade_filter(Level::Info), log::LevelFilter::Info);
    }
}
