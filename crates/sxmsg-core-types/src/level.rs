//! Severity levels carried by stylesheet messages

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Severity of a dispatched message.
///
/// Parsed from the exact lowercase keywords `trace`, `debug`, `info`,
/// `warn` and `error`. Matching is case-sensitive and performs no trimming.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub const ALL: [LogLevel; 5] = [
        LogLevel::Trace,
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
    ];

    /// The keyword this level is written as in a `level` attribute
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A `level` keyword that is not one of the five recognised severities
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized severity level: {0:?}")]
pub struct UnknownLevel(pub String);

impl FromStr for LogLevel {
    type Err = UnknownLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            other => Err(UnknownLevel(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_keywords() {
        for level in LogLevel::ALL {
            assert_eq!(level.as_str().parse::<LogLevel>(), Ok(level));
        }
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!("ERROR".parse::<LogLevel>().is_err());
        assert!("Warn".parse::<LogLevel>().is_err());
    }

    #[test]
    fn test_parse_does_not_trim() {
        assert!(" info".parse::<LogLevel>().is_err());
        assert!("info ".parse::<LogLevel>().is_err());
    }

    #[test]
    fn test_unknown_level_keeps_raw_value() {
        let err = "critical".parse::<LogLevel>().unwrap_err();
        assert_eq!(err, UnknownLevel("critical".to_string()));
        assert!(err.to_string().contains("critical"));
    }

    #[test]
    fn test_ordering_follows_severity() {
        assert!(LogLevel::Trace < LogLevel::Debug);
        assert!(LogLevel::Warn < LogLevel::Error);
    }

    #[test]
    fn test_serde_uses_keywords() {
        let json = serde_json::to_string(&LogLevel::Warn).unwrap();
        assert_eq!(json, "\"warn\"");
        let back: LogLevel = serde_json::from_str("\"debug\"").unwrap();
        assert_eq!(back, LogLevel::Debug);
    }
}
