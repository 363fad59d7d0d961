//! # Core Type Definitions
//!
//! - Raw enumeration value (`SeasonValue`)
//! - Typed season (`Season`)
//! - Error types (`SeasonError`)
//!
//! `SeasonValue` is what gets converted: it is an unchecked integer.
//! `Season` is the closed set of the four named constants.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::mapping::Mapping;

// =============================================================================
// SEASON VALUE
// =============================================================================

/// An enumeration value as a plain integer.
///
/// There is no range enforcement: any `i64` can be held, converted and
/// printed. Values outside the four defined seasons convert to the fallback
/// name.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct SeasonValue(pub i64);

impl SeasonValue {
    /// Wrap a raw integer.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Get the raw integer.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }

    /// Convert to a display name under the given mapping.
    #[must_use]
    pub fn name(self, mapping: Mapping) -> &'static str {
        mapping.name(self)
    }
}

impl From<i64> for SeasonValue {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<Season> for SeasonValue {
    fn from(season: Season) -> Self {
        season.value()
    }
}

/// Printing a raw value uses the full mapping.
impl fmt::Display for SeasonValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(Mapping::Full.name(*self))
    }
}

// =============================================================================
// SEASON
// =============================================================================

/// The four named seasons, in insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(i64)]
pub enum Season {
    Summer = 0,
    Autumn = 1,
    Winter = 2,
    Spring = 3,
}

impl Season {
    /// Every season, in insertion order.
    pub const ALL: [Season; 4] = [Season::Summer, Season::Autumn, Season::Winter, Season::Spring];

    /// Get the proper name of this season.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Season::Summer => "summer",
            Season::Autumn => "autumn",
            Season::Winter => "winter",
            Season::Spring => "spring",
        }
    }

    /// Get the raw enumeration value.
    #[must_use]
    pub const fn value(self) -> SeasonValue {
        SeasonValue(self as i64)
    }

    /// Look up the season for a raw integer.
    pub fn from_value(value: i64) -> Result<Season, SeasonError> {
        match value {
            0 => Ok(Season::Summer),
            1 => Ok(Season::Autumn),
            2 => Ok(Season::Winter),
            3 => Ok(Season::Spring),
            other => Err(SeasonError::OutOfRange(other)),
        }
    }

    /// Get the next season in insertion order, if any.
    #[must_use]
    pub const fn next(self) -> Option<Season> {
        match self {
            Season::Summer => Some(Season::Autumn),
            Season::Autumn => Some(Season::Winter),
            Season::Winter => Some(Season::Spring),
            Season::Spring => None,
        }
    }

    /// Get the previous season in insertion order, if any.
    #[must_use]
    pub const fn previous(self) -> Option<Season> {
        match self {
            Season::Summer => None,
            Season::Autumn => Some(Season::Summer),
            Season::Winter => Some(Season::Autumn),
            Season::Spring => Some(Season::Winter),
        }
    }
}

impl TryFrom<SeasonValue> for Season {
    type Error = SeasonError;

    fn try_from(value: SeasonValue) -> Result<Self, Self::Error> {
        Season::from_value(value.get())
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parses a season name, ignoring case and surrounding whitespace.
impl FromStr for Season {
    type Err = SeasonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Season::ALL
            .into_iter()
            .find(|season| season.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| SeasonError::UnknownName(s.to_string()))
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors from the checked conversions.
///
/// Name conversion itself never fails; these only come from turning raw input
/// into a typed [`Season`] or [`Mapping`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SeasonError {
    /// The integer is not one of the four defined values.
    #[error("Season value out of range: {0}")]
    OutOfRange(i64),

    /// The string is not a season name.
    #[error("Unknown season name: {0:?}")]
    UnknownName(String),

    /// The string is not a mapping name.
    #[error("Unknown mapping: {0:?} (expected \"partial\" or \"full\")")]
    UnknownMapping(String),
}

// =============================================================================
// TESTS
// =============================================================================
