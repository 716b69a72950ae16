//! Global disable threshold

use super::log_level::LogLevel;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Hierarchy-wide severity floor, checked before any logger's own level.
///
/// `Override` is a latch: once set, every `disable*` request is ignored
/// until `enable_all` (or `reset_configuration`) puts the threshold back to `Off`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DisableThreshold {
    /// Nothing is suppressed
    #[default]
    Off,
    /// An unrecognized level name was requested; suppresses nothing
    NotSet,
    /// Events at or below this level are suppressed
    Level(LogLevel),
    /// Latched; `disable*` calls become no-ops
    Override,
}

impl DisableThreshold {
    /// True when an event at `level` is suppressed by this threshold.
    pub fn suppresses(&self, level: LogLevel) -> bool {
        match self {
            DisableThreshold::Level(floor) => level <= *floor,
            DisableThreshold::Off | DisableThreshold::NotSet | DisableThreshold::Override => false,
        }
    }

    pub fn is_latched(&self) -> bool {
        matches!(self, DisableThreshold::Override)
    }

    /// Resolve a level name the way `disable(level_str)` does.
    pub fn from_level_name(name: &str) -> Self {
        match LogLevel::from_name(name) {
            Some(level) => DisableThreshold::Level(level),
            None => DisableThreshold::NotSet,
        }
    }
}

impl From<LogLevel> for DisableThreshold {
    fn from(level: LogLevel) -> Self {
        DisableThreshold::Level(level)
    }
}

impl fmt::Display for DisableThreshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisableThreshold::Off => write!(f, "OFF"),
            DisableThreshold::NotSet => write!(f, "NOT_SET"),
            DisableThreshold::Level(level) => write!(f, "{}", level),
            DisableThreshold::Override => write!(f, "OVERRIDE"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_threshold_is_inclusive() {
        let threshold = DisableThreshold::Level(LogLevel::Info);
        assert!(threshold.suppresses(LogLevel::Debug));
        assert!(threshold.suppresses(LogLevel::Info));
        assert!(!threshold.suppresses(LogLevel::Warn));
    }

    #[test]
    fn test_non_level_thresholds_suppress_nothing() {
        for threshold in [
            DisableThreshold::Off,
            DisableThreshold::NotSet,
            DisableThreshold::Override,
        ] {
            for level in LogLevel::ALL {
                assert!(!threshold.suppresses(level), "{} suppressed {}", threshold, level);
            }
        }
    }

    #[test]
    fn test_from_level_name() {
        assert_eq!(
            DisableThreshold::from_level_name("error"),
            DisableThreshold::Level(LogLevel::Error)
        );
        assert_eq!(DisableThreshold::from_level_name("loud"), DisableThreshold::NotSet);
    }

    #[test]
    fn test_threshold_config_serialization() {
        let json = serde_json::to_string(&DisableThreshold::Level(LogLevel::Warn)).unwrap();
        assert_eq!(json, r#"{"Level":"Warn"}"#);

        let loaded: DisableThreshold = serde_json::from_str(r#""Override""#).unwrap();
        assert!(loaded.is_latched());
        let loaded: DisableThreshold = serde_json::from_str(r#"{"Level":"Debug"}"#).unwrap();
        assert!(loaded.suppresses(LogLevel::Debug));
    }
}
