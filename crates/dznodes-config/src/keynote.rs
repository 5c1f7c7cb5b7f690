//! How keynote weights are derived from the frequency map.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Selects when the frequency maximum is sampled during keynote injection.
///
/// Every keynote term receives `keynote_weight + max`. With
/// [`KeynoteStrategy::MaxOnce`] the maximum is read once before any term is
/// inserted, so all keynote terms share one weight. With
/// [`KeynoteStrategy::MaxPerTerm`] the maximum is re-read before each
/// insertion and therefore grows with every boosted term.
#[derive(
    Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq, Hash, EnumString, Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum KeynoteStrategy {
    /// Sample the maximum once before inserting any keynote term.
    #[default]
    MaxOnce,
    /// Re-sample the maximum before inserting each keynote term.
    MaxPerTerm,
}

/// Errors encountered while parsing a [`KeynoteStrategy`] from text.
pub type KeynoteStrategyParseError = strum::ParseError;
