//! # season-core
//!
//! Season enumeration and its integer-to-name conversion - THE LOGIC.
//!
//! A season is a plain integer. Four values carry names:
//!
//! | Value | Season | Name |
//! |-------|--------|------|
//! | 0 | Summer | `summer` |
//! | 1 | Autumn | `autumn` |
//! | 2 | Winter | `winter` |
//! | 3 | Spring | `spring` |
//!
//! Conversion never fails. Any value without an explicit case in the selected
//! [`Mapping`] resolves to [`FALLBACK_NAME`].
//!
//! ## Mappings
//!
//! - [`Mapping::Partial`] has cases for Summer, Autumn and Winter only, so
//!   Spring resolves to the fallback name. It is kept as is.
//! - [`Mapping::Full`] has a case for every season.
//!
//! ```
//! use season_core::{Mapping, Season};
//!
//! let spring = Season::Spring.value();
//! assert_eq!(Mapping::Full.name(spring), "spring");
//! assert_eq!(Mapping::Partial.name(spring), "unknown");
//! ```
//!
//! This crate has NO I/O and NO logging.

// =============================================================================
// MODULES
// =============================================================================

pub mod mapping;
pub mod primitives;
pub mod types;

// =============================================================================
// RE-EXPORTS
// =============================================================================

pub use mapping::Mapping;
pub use primitives::{DEFAULT_SEASON, FALLBACK_NAME, SEASON_COUNT};
pub use types::{Season, SeasonError, SeasonValue};
