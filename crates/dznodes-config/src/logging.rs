//! Output settings for the pack's log subscriber.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Line layout of log events written to standard error.
#[derive(
    Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq, Hash, EnumString, Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum LogFormat {
    /// One flattened JSON object per event.
    #[default]
    Json,
    /// One terse line per event.
    Compact,
    /// Multi-line events with source locations, for local debugging.
    Pretty,
}

impl LogFormat {
    /// Returns `true` when events are meant for log shippers.
    #[must_use]
    pub const fn is_structured(self) -> bool {
        matches!(self, Self::Json)
    }
}

/// When ANSI colour codes are written into human-readable log lines.
#[derive(
    Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq, Hash, EnumString, Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum LogColor {
    /// Colour only when standard error is a terminal.
    #[default]
    Auto,
    /// Always colour.
    Always,
    /// Never colour.
    Never,
}

impl LogColor {
    /// Resolves the policy for a stream; JSON output is never coloured.
    ///
    /// ```
    /// use dznodes_config::{LogColor, LogFormat};
    ///
    /// assert!(LogColor::Auto.enabled(LogFormat::Compact, true));
    /// assert!(!LogColor::Always.enabled(LogFormat::Json, true));
    /// ```
    #[must_use]
    pub const fn enabled(self, format: LogFormat, terminal: bool) -> bool {
        if format.is_structured() {
            return false;
        }
        match self {
            Self::Auto => terminal,
            Self::Always => true,
            Self::Never => false,
        }
    }
}
