//! Log severity levels and compile-time gating

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Log severity, most severe first.
///
/// The discriminant is the severity rank: lower means more severe. A level
/// compiles in when its rank is at most [`MAX_LEVEL`]'s rank, so enabling a
/// level always enables everything more severe than it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[repr(u8)]
pub enum Level {
    Fatal = 0,
    Error = 1,
    Warn = 2,
    Info = 3,
}

/// Most verbose severity compiled into this build.
///
/// Resolved from the `max-level-*` cargo features; with none enabled, all
/// four levels are active. When several are enabled the most restrictive
/// wins.
pub const MAX_LEVEL: Level = if cfg!(feature = "max-level-fatal") {
    Level::Fatal
} else if cfg!(feature = "max-level-error") {
    Level::Error
} else if cfg!(feature = "max-level-warn") {
    Level::Warn
} else {
    Level::Info
};

/// Whether `level` is compiled into this build.
///
/// Const so the level macros fold disabled calls away entirely -- their
/// arguments are never evaluated and the formatter is never invoked.
#[inline]
pub const fn enabled(level: Level) -> bool {
    level.is_enabled_at(MAX_LEVEL)
}

impl Level {
    /// Whether this level is active when `max` is the most verbose
    /// severity compiled in.
    #[inline]
    pub const fn is_enabled_at(self, max: Level) -> bool {
        self as u8 <= max as u8
    }

    /// Lowercase level name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Level::Fatal => "fatal",
            Level::Error => "error",
            Level::Warn => "warn",
            Level::Info => "info",
        }
    }

    /// Tag prepended to every log line, padded to a uniform width.
    pub const fn prefix(self) -> &'static str {
        match self {
            Level::Fatal => "FATAL: ",
            Level::Error => "ERROR: ",
            Level::Warn => "WARN:  ",
            Level::Info => "INFO:  ",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error parsing a [`Level`] from a string.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown log level: {0:?}")]
pub struct ParseLevelError(pub String);

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("fatal") {
            Ok(Level::Fatal)
        } else if s.eq_ignore_ascii_case("error") {
            Ok(Level::Error)
        } else if s.eq_ignore_ascii_case("warn") {
            Ok(Level::Warn)
        } else if s.eq_ignore_ascii_case("info") {
            Ok(Level::Info)
        } else {
            Err(ParseLevelError(s.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gating_enables_itself_and_more_severe() {
        // Each max level enables itself and everything above it
        assert!(Level::Fatal.is_enabled_at(Level::Fatal));
        assert!(!Level::Error.is_enabled_at(Level::Fatal));
        assert!(!Level::Warn.is_enabled_at(Level::Fatal));
        assert!(!Level::Info.is_enabled_at(Level::Fatal));

        assert!(Level::Fatal.is_enabled_at(Level::Error));
        assert!(Level::Error.is_enabled_at(Level::Error));
        assert!(!Level::Warn.is_enabled_at(Level::Error));

        assert!(Level::Fatal.is_enabled_at(Level::Warn));
        assert!(Level::Warn.is_enabled_at(Level::Warn));
        assert!(!Level::Info.is_enabled_at(Level::Warn));

        assert!(Level::Fatal.is_enabled_at(Level::Info));
        assert!(Level::Info.is_enabled_at(Level::Info));
    }

    #[test]
    fn test_default_build_enables_everything() {
        #[cfg(not(any(
            feature = "max-level-fatal",
            feature = "max-level-error",
            feature = "max-level-warn"
        )))]
        {
            assert_eq!(MAX_LEVEL, Level::Info);
            assert!(enabled(Level::Fatal));
            assert!(enabled(Level::Error));
            assert!(enabled(Level::Warn));
            assert!(enabled(Level::Info));
        }
    }

    #[test]
    fn test_parse_level() {
        assert_eq!("fatal".parse::<Level>().unwrap(), Level::Fatal);
        assert_eq!("ERROR".parse::<Level>().unwrap(), Level::Error);
        assert_eq!("Warn".parse::<Level>().unwrap(), Level::Warn);
        assert_eq!("info".parse::<Level>().unwrap(), Level::Info);
        assert!("debug".parse::<Level>().is_err());
        assert!("".parse::<Level>().is_err());
    }

    #[test]
    fn test_prefix_width_is_uniform() {
        for level in [Level::Fatal, Level::Error, Level::Warn, Level::Info] {
            assert_eq!(level.prefix().len(), 7, "prefix for {}", level);
        }
    }
}
