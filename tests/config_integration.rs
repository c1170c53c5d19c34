//! Config loading integration tests

use spot_deck::core::config::{load_config, DeckConfig};
use spot_deck::DeckError;
use std::fs;

#[test]
fn test_sample_config_loads() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/deck.toml");
    let config = load_config(std::path::Path::new(path)).unwrap();
    assert_eq!(config.order, 7);
    assert!(config.validate().is_ok());
}

#[test]
fn test_load_config_from_file() {
    let path = std::env::temp_dir().join(format!("spot_deck_cfg_{}.toml", std::process::id()));
    fs::write(
        &path,
        "order = 4\nseed = 99\ncard_diameter = 640.0\n\n[layout]\nrotation_jitter = 0.0\n",
    )
    .unwrap();

    let config = load_config(&path).unwrap();
    fs::remove_file(&path).ok();

    assert_eq!(config.order, 4);
    assert_eq!(config.seed, 99);
    assert_eq!(config.card_diameter, 640.0);
    assert_eq!(config.layout.rotation_jitter, 0.0);
    assert_eq!(
        config.layout.max_outer_slots,
        DeckConfig::default().layout.max_outer_slots
    );
}

#[test]
fn test_missing_file_is_io_error() {
    let path = std::env::temp_dir().join("spot_deck_missing_config_does_not_exist.toml");
    assert!(matches!(load_config(&path), Err(DeckError::IoError(_))));
}

#[test]
fn test_malformed_toml_rejected() {
    assert!(matches!(
        DeckConfig::from_toml_str("order = \"seven\""),
        Err(DeckError::TomlError(_))
    ));
}
