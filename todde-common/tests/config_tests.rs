//! Configuration resolution against real files
//!
//! Every test passes an explicit config path so the user's own
//! `~/.config/todde/config.toml` never leaks in.

use std::path::PathBuf;

use tempfile::tempdir;
use todde_common::config::{
    default_database_path, load_toml_config, ConfigOverrides, SiteConfig, DEFAULT_BIND_ADDR,
};
use todde_common::Error;

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let dir = tempdir().unwrap();
    let overrides = ConfigOverrides {
        config_path: Some(dir.path().join("absent.toml")),
        ..Default::default()
    };

    let config = SiteConfig::resolve(&overrides).unwrap();
    assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR);
    assert_eq!(config.database_path, default_database_path());
}

#[test]
fn test_file_values_apply() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
bind_addr = "0.0.0.0:8000"
database_path = "/srv/todde/site.db"
create_database_if_missing = false
"#,
    )
    .unwrap();

    let overrides = ConfigOverrides {
        config_path: Some(path),
        ..Default::default()
    };
    let config = SiteConfig::resolve(&overrides).unwrap();
    assert_eq!(config.bind_addr, "0.0.0.0:8000");
    assert_eq!(config.database_path, PathBuf::from("/srv/todde/site.db"));
    assert!(!config.create_database_if_missing);
    assert_eq!(config.placeholder_image_url, "/static/images/vehicle-placeholder.svg");
}

#[test]
fn test_overrides_beat_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "bind_addr = \"0.0.0.0:8000\"\n").unwrap();

    let overrides = ConfigOverrides {
        config_path: Some(path),
        bind_addr: Some("127.0.0.1:9999".to_string()),
        ..Default::default()
    };
    let config = SiteConfig::resolve(&overrides).unwrap();
    assert_eq!(config.bind_addr, "127.0.0.1:9999");
}

#[test]
fn test_malformed_file_is_config_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "bind_addr = [unterminated").unwrap();

    assert!(matches!(load_toml_config(&path), Err(Error::Config(_))));
    let overrides = ConfigOverrides {
        config_path: Some(path),
        ..Default::default()
    };
    assert!(SiteConfig::resolve(&overrides).is_err());
}
