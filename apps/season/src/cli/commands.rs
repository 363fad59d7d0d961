//! # CLI Command Implementations
//!
//! Each command has a `render_*` function that builds its output lines and a
//! `cmd_*` function that prints them.

use season_core::{Mapping, Season, SeasonValue};

use crate::AppError;

fn to_json_line(output: &serde_json::Value) -> Result<String, AppError> {
    serde_json::to_string(output).map_err(|e| AppError::Output(e.to_string()))
}

// =============================================================================
// NAME COMMAND
// =============================================================================

/// Render the name of a single value.
pub fn render_name(
    value: SeasonValue,
    mapping: Mapping,
    json_mode: bool,
) -> Result<String, AppError> {
    let name = mapping.name(value);
    if !mapping.covers(value) {
        tracing::debug!(value = value.get(), %mapping, "no explicit case, using fallback name");
    }

    if json_mode {
        return to_json_line(&serde_json::json!({
            "value": value,
            "mapping": mapping,
            "name": name,
        }));
    }

    Ok(name.to_string())
}

/// Print the name of a single value.
pub fn cmd_name(value: SeasonValue, mapping: Mapping, json_mode: bool) -> Result<(), AppError> {
    println!("{}", render_name(value, mapping, json_mode)?);
    Ok(())
}

// =============================================================================
// LIST COMMAND
// =============================================================================

/// Render one line per season, in insertion order.
pub fn render_list(mapping: Mapping, json_mode: bool) -> Result<Vec<String>, AppError> {
    Season::ALL
        .into_iter()
        .map(|season| {
            let value = season.value();
            if json_mode {
                render_name(value, mapping, true)
            } else {
                Ok(format!("{} {}", value.get(), mapping.name(value)))
            }
        })
        .collect()
}

/// Print every season with its name.
pub fn cmd_list(mapping: Mapping, json_mode: bool) -> Result<(), AppError> {
    for line in render_list(mapping, json_mode)? {
        println!("{}", line);
    }
    Ok(())
}

// =============================================================================
// PARSE COMMAND
// =============================================================================

/// Render the integer value of a season name.
pub fn render_parse(name: &str, json_mode: bool) -> Result<String, AppError> {
    let season: Season = name.parse()?;

    if json_mode {
        return to_json_line(&serde_json::json!({
            "name": season,
            "value": season.value(),
        }));
    }

    Ok(season.value().get().to_string())
}

/// Print the integer value of a season name.
pub fn cmd_parse(name: &str, json_mode: bool) -> Result<(), AppError> {
    println!("{}", render_parse(name, json_mode)?);
    Ok(())
}
