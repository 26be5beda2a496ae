//! textscan Config - Pure configuration data structures
//!
//! This crate contains only data structures, no logic or global state.
//! It serves as the shared configuration vocabulary for the textscan crates.

use serde::{Deserialize, Serialize};

/// Component that emits log records
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Position arithmetic on the source text
    Source,
    /// Cursor read/peek/skip operations
    Cursor,
}

impl Phase {
    /// Get the string name of the phase
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Source => "source",
            Phase::Cursor => "cursor",
        }
    }

    /// Get the log target name for this phase
    pub fn target(&self) -> String {
        format!("textscan::{}", self.as_str())
    }
}

/// Log level, independent of any logging backend
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

/// Log settings as written in a configuration file
///
/// ```json
/// { "global": "warn", "cursor": "trace" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// Default level for every target
    pub global: LogLevel,
    /// Override for `textscan::source`
    pub source: Option<LogLevel>,
    /// Override for `textscan::cursor`
    pub cursor: Option<LogLevel>,
}

impl LogSettings {
    /// Parse settings from a JSON document
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Effective level for a phase, falling back to `global`
    pub fn level_for(&self, phase: Phase) -> LogLevel {
        let specific = match phase {
            Phase::Source => self.source,
            Phase::Cursor => self.cursor,
        };
        specific.unwrap_or(self.global)
    }
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            global: LogLevel::Info,
            source: None,
            cursor: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_log_settings() {
        let cfg = LogSettings::default();
        assert_eq!(cfg.global, LogLevel::Info);
        assert_eq!(cfg.level_for(Phase::Cursor), LogLevel::Info);
    }

    #[test]
    fn test_phase_as_str() {
        assert_eq!(Phase::Source.as_str(), "source");
        assert_eq!(Phase::Cursor.target(), "textscan::cursor");
    }

    #[test]
    fn test_from_json_with_override() {
        let cfg = LogSettings::from_json(r#"{ "global": "warn", "cursor": "trace" }"#).unwrap();
        assert_eq!(cfg.level_for(Phase::Cursor), LogLevel::Trace);
        assert_eq!(cfg.level_for(Phase::Source), LogLevel::Warn);
    }

    #[test]
    fn test_from_json_missing_fields_use_defaults() {
        let cfg = LogSettings::from_json("{}").unwrap();
        assert_eq!(cfg, LogSettings::default());
    }

    #[test]
    fn test_from_json_rejects_unknown_level() {
        assert!(LogSettings::from_json(r#"{ "global": "loud" }"#).is_err());
    }

    #[test]
    fn test_level_ordering() {
        assert!(LogLevel::Trace < LogLevel::Debug);
        assert!(LogLevel::Error > LogLevel::Warn);
    }
}
