//! Command-line and environment argument parsing

use clap::Parser;
use serial_test::serial;
use todde_web::cli::Args;

#[test]
#[serial]
fn test_flags_populate_overrides() {
    let args = Args::try_parse_from([
        "todde-web",
        "--bind",
        "0.0.0.0:8080",
        "--database",
        "/tmp/todde.db",
        "--create-database",
        "false",
    ])
    .unwrap();

    let overrides = args.overrides();
    assert_eq!(overrides.bind_addr.as_deref(), Some("0.0.0.0:8080"));
    assert_eq!(
        overrides.database_path.as_deref(),
        Some(std::path::Path::new("/tmp/todde.db"))
    );
    assert_eq!(overrides.create_database_if_missing, Some(false));
    assert!(overrides.config_path.is_none());
}

#[test]
#[serial]
fn test_environment_fills_unset_flags() {
    std::env::set_var("TODDE_BIND_ADDR", "127.0.0.1:6000");
    let args = Args::try_parse_from(["todde-web"]);
    std::env::remove_var("TODDE_BIND_ADDR");

    assert_eq!(args.unwrap().bind.as_deref(), Some("127.0.0.1:6000"));
}

#[test]
#[serial]
fn test_flag_beats_environment() {
    std::env::set_var("TODDE_BIND_ADDR", "127.0.0.1:6000");
    let args = Args::try_parse_from(["todde-web", "-b", "127.0.0.1:7000"]);
    std::env::remove_var("TODDE_BIND_ADDR");

    assert_eq!(args.unwrap().bind.as_deref(), Some("127.0.0.1:7000"));
}
