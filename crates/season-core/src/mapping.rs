//! # Name Mappings
//!
//! Converts a raw [`SeasonValue`] to its display name.
//!
//! Both mappings dispatch on exact matches in insertion order and end with a
//! default arm returning [`FALLBACK_NAME`]. They differ only in whether Spring
//! has a case:
//!
//! | Value | Partial | Full |
//! |-------|---------|------|
//! | 0 | `summer` | `summer` |
//! | 1 | `autumn` | `autumn` |
//! | 2 | `winter` | `winter` |
//! | 3 | `unknown` | `spring` |
//! | other | `unknown` | `unknown` |
//!
//! The Partial table is a known-incomplete mapping. Selecting it is explicit;
//! nothing upgrades it to Full.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::primitives::FALLBACK_NAME;
use crate::types::{Season, SeasonError, SeasonValue};

/// Which case table converts values to names.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Mapping {
    /// Cases for Summer, Autumn and Winter. Spring falls through.
    Partial,
    /// Cases for all four seasons.
    #[default]
    Full,
}

impl Mapping {
    /// Both mappings, Partial first.
    pub const ALL: [Mapping; 2] = [Mapping::Partial, Mapping::Full];

    /// Convert a value to its name. Never fails.
    #[must_use]
    pub fn name(self, value: SeasonValue) -> &'static str {
        match self {
            Mapping::Partial => partial_name(value),
            Mapping::Full => full_name(value),
        }
    }

    /// Check whether this mapping has an explicit case for the value.
    #[must_use]
    pub fn covers(self, value: SeasonValue) -> bool {
        self.name(value) != FALLBACK_NAME
    }

    /// Get the mapping identifier used on the command line and in config.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Mapping::Partial => "partial",
            Mapping::Full => "full",
        }
    }
}

fn partial_name(value: SeasonValue) -> &'static str {
    match Season::try_from(value) {
        Ok(Season::Summer) => "summer",
        Ok(Season::Autumn) => "autumn",
        Ok(Season::Winter) => "winter",
        _ => FALLBACK_NAME,
    }
}

fn full_name(value: SeasonValue) -> &'static str {
    match Season::try_from(value) {
        Ok(Season::Summer) => "summer",
        Ok(Season::Autumn) => "autumn",
        Ok(Season::Winter) => "winter",
        Ok(Season::Spring) => "spring",
        Err(_) => FALLBACK_NAME,
    }
}

impl fmt::Display for Mapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mapping {
    type Err = SeasonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Mapping::ALL
            .into_iter()
            .find(|mapping| mapping.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| SeasonError::UnknownMapping(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_falls_through_on_spring() {
        assert_eq!(Mapping::Partial.name(Season::Spring.value()), FALLBACK_NAME);
        assert!(!Mapping::Partial.covers(Season::Spring.value()));
    }

    #[test]
    fn full_names_spring() {
        assert_eq!(Mapping::Full.name(Season::Spring.value()), "spring");
        assert!(Mapping::Full.covers(Season::Spring.value()));
    }

    #[test]
    fn first_three_agree_across_mappings() {
        for season in [Season::Summer, Season::Autumn, Season::Winter] {
            assert_eq!(Mapping::Partial.name(season.value()), season.name());
            assert_eq!(Mapping::Full.name(season.value()), season.name());
        }
    }

    #[test]
    fn full_agrees_with_season_name() {
        for season in Season::ALL {
            assert_eq!(Mapping::Full.name(season.value()), season.name());
        }
    }

    #[test]
    fn beyond_the_fourth_value_is_unknown() {
        for mapping in Mapping::ALL {
            assert_eq!(mapping.name(SeasonValue(4)), FALLBACK_NAME);
            assert_eq!(mapping.name(SeasonValue(-1)), FALLBACK_NAME);
            assert_eq!(mapping.name(SeasonValue(i64::MAX)), FALLBACK_NAME);
            assert_eq!(mapping.name(SeasonValue(i64::MIN)), FALLBACK_NAME);
        }
    }

    #[test]
    fn default_is_full() {
        assert_eq!(Mapping::default(), Mapping::Full);
    }

    #[test]
    fn parse_mapping() {
        assert_eq!("partial".parse::<Mapping>(), Ok(Mapping::Partial));
        assert_eq!("FULL".parse::<Mapping>(), Ok(Mapping::Full));
        assert!(matches!(
            "complete".parse::<Mapping>(),
            Err(SeasonError::UnknownMapping(_))
        ));
    }
}
