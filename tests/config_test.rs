//! Tests for TOML configuration loading.

use std::io::Write;
use std::path::PathBuf;
use strictly_rps::{GameConfig, OutcomePolicy, SymbolStyle};

#[test]
fn test_missing_file_gives_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = GameConfig::load_or_default(dir.path().join("absent.toml")).expect("defaults");
    assert_eq!(config, GameConfig::default());
    assert_eq!(config.outcome_policy(), &OutcomePolicy::Alternate);
    assert_eq!(config.symbols(), &SymbolStyle::Emoji);
    assert_eq!(config.seed(), &None);
}

#[test]
fn test_loads_partial_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "seed = 42").unwrap();
    writeln!(file, "outcome_policy = \"random\"").unwrap();

    let config = GameConfig::from_file(file.path()).expect("valid config");
    assert_eq!(config.seed(), &Some(42));
    assert_eq!(config.outcome_policy(), &OutcomePolicy::Random);
    assert_eq!(config.symbols(), &SymbolStyle::Emoji);
    assert_eq!(config.log_file(), &PathBuf::from("strictly_rps.log"));
}

#[test]
fn test_written_config_reloads() {
    let config = GameConfig::default()
        .with_seed(Some(9))
        .with_symbols(SymbolStyle::Ascii);

    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(file, "{}", config.to_toml().expect("serialize")).unwrap();

    assert_eq!(GameConfig::from_file(file.path()).expect("reload"), config);
}

#[test]
fn test_malformed_file_is_error() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "outcome_policy = \"sometimes\"").unwrap();

    let err = GameConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"));
}
