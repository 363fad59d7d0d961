//! # Primitives
//!
//! Fixed constants shared by the conversion and by the binary.
//! These are compiled in and never change at runtime.

use crate::types::Season;

/// Name returned for any value that has no explicit case in a mapping.
pub const FALLBACK_NAME: &str = "unknown";

/// Number of defined seasons.
pub const SEASON_COUNT: usize = 4;

/// The constant converted by a bare run of the binary.
pub const DEFAULT_SEASON: Season = Season::Spring;
