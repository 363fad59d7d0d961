//! Tests for CLI parsing, output rendering and config loading.

// Allow unwrap and panic in tests - these are standard for test code
#![allow(clippy::unwrap_used, clippy::panic)]

use clap::Parser;
use season::AppError;
use season::cli::{Cli, Commands, render_list, render_name, render_parse};
use season::config::{ConfigError, SeasonConfig};
use season_core::{Mapping, SeasonError, SeasonValue};
use std::io::Write;

// =============================================================================
// ARGUMENT PARSING TESTS
// =============================================================================

#[test]
fn test_bare_run_has_no_subcommand() {
    let cli = Cli::try_parse_from(["season"]).unwrap();
    assert_eq!(cli.command, None);
    assert_eq!(cli.mapping, None);
    assert!(!cli.json_mode);
}

#[test]
fn test_mapping_flag_parses() {
    let cli = Cli::try_parse_from(["season", "--mapping", "partial"]).unwrap();
    assert_eq!(cli.mapping, Some(Mapping::Partial));

    let cli = Cli::try_parse_from(["season", "list", "-m", "full"]).unwrap();
    assert_eq!(cli.mapping, Some(Mapping::Full));
    assert_eq!(cli.command, Some(Commands::List));
}

#[test]
fn test_unknown_mapping_is_rejected() {
    assert!(Cli::try_parse_from(["season", "--mapping", "half"]).is_err());
}

#[test]
fn test_name_accepts_negative_values() {
    let cli = Cli::try_parse_from(["season", "name", "-5"]).unwrap();
    assert_eq!(cli.command, Some(Commands::Name { value: -5 }));
}

#[test]
fn test_parse_subcommand() {
    let cli = Cli::try_parse_from(["season", "parse", "Winter", "--json-mode"]).unwrap();
    assert_eq!(
        cli.command,
        Some(Commands::Parse {
            name: "Winter".to_string()
        })
    );
    assert!(cli.json_mode);
}

// =============================================================================
// RENDERING TESTS
// =============================================================================

#[test]
fn test_default_constant_renders_spring_under_full() {
    let config = SeasonConfig::default();
    let line = render_name(config.value, config.mapping, false).unwrap();
    assert_eq!(line, "spring");
}

#[test]
fn test_default_constant_renders_unknown_under_partial() {
    let config = SeasonConfig::default().with_mapping(Some(Mapping::Partial));
    let line = render_name(config.value, config.mapping, false).unwrap();
    assert_eq!(line, "unknown");
}

#[test]
fn test_out_of_range_renders_unknown() {
    for mapping in Mapping::ALL {
        assert_eq!(render_name(SeasonValue(9), mapping, false).unwrap(), "unknown");
    }
}

#[test]
fn test_name_json_shape() {
    let line = render_name(SeasonValue(3), Mapping::Full, true).unwrap();
    assert_eq!(line, r#"{"value":3,"mapping":"full","name":"spring"}"#);

    let line = render_name(SeasonValue(3), Mapping::Partial, true).unwrap();
    assert_eq!(line, r#"{"value":3,"mapping":"partial","name":"unknown"}"#);
}

#[test]
fn test_list_plain() {
    let lines = render_list(Mapping::Partial, false).unwrap();
    assert_eq!(lines, vec!["0 summer", "1 autumn", "2 winter", "3 unknown"]);

    let lines = render_list(Mapping::Full, false).unwrap();
    assert_eq!(lines.last().map(String::as_str), Some("3 spring"));
}

#[test]
fn test_list_json_one_object_per_season() {
    let lines = render_list(Mapping::Full, true).unwrap();
    assert_eq!(lines.len(), 4);
    for line in &lines {
        let value: serde_json::Value = serde_json::from_str(line).unwrap();
        assert_eq!(value["mapping"], "full");
    }
}

#[test]
fn test_parse_renders_value() {
    assert_eq!(render_parse("autumn", false).unwrap(), "1");
    assert_eq!(
        render_parse("SPRING", true).unwrap(),
        r#"{"name":"spring","value":3}"#
    );
}

#[test]
fn test_parse_unknown_name_fails() {
    let err = render_parse("monsoon", false).unwrap_err();
    assert!(matches!(
        err,
        AppError::Season(SeasonError::UnknownName(ref name)) if name == "monsoon"
    ));
}

// =============================================================================
// CONFIG FILE TESTS
// =============================================================================

#[test]
fn test_config_file_is_loaded() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "mapping = \"partial\"\nvalue = 1").unwrap();

    let config = SeasonConfig::from_file(file.path()).unwrap();
    assert_eq!(config.mapping, Mapping::Partial);
    assert_eq!(config.value, SeasonValue(1));
}

#[test]
fn test_config_file_partial_keys_keep_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "mapping = \"partial\"").unwrap();

    let config = SeasonConfig::from_file(file.path()).unwrap();
    assert_eq!(config.value, SeasonValue(3));
}

#[test]
fn test_missing_config_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = SeasonConfig::from_file(&dir.path().join("absent.toml"));
    assert!(matches!(result, Err(ConfigError::Read { .. })));
}

#[test]
fn test_malformed_config_file_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "mapping = ").unwrap();

    let result = SeasonConfig::from_file(file.path());
    assert!(matches!(result, Err(ConfigError::Parse { .. })));
}

#[test]
fn test_config_mapping_value_must_be_known() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "mapping = \"complete\"").unwrap();

    let result = SeasonConfig::from_file(file.path());
    assert!(matches!(result, Err(ConfigError::Parse { .. })));
}
