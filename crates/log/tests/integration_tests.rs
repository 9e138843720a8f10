//! Integration tests for rubyx-log
//!
//! Global subscriber installation is process-wide, so every test that touches
//! it goes through `install_once` and tolerates having lost the race.

use std::sync::{LazyLock, Mutex};

use pretty_assertions::assert_eq;
use rubyx_log::{Config, Fields, Format, LogError, LoggerBuilder, WriterConfig, info, warn};

static TEST_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

fn install_once() {
    let config = Config {
        fields: Fields {
            service: Some("rubyx-tests".into()),
            ..Fields::default()
        },
        ..Config::test()
    };
    if let Ok(guard) = rubyx_log::init_with(config) {
        assert!(guard.has_root_span());
    }
}

#[test]
fn test_second_install_reports_already_initialized() {
    let _lock = TEST_LOCK.lock().unwrap();
    install_once();

    let err = LoggerBuilder::from_config(Config::test()).build().unwrap_err();
    assert!(matches!(err, LogError::AlreadyInitialized(_)));
    assert!(!err.is_client_error());
}

#[test]
fn test_auto_init_after_install_is_noop() {
    let _lock = TEST_LOCK.lock().unwrap();
    install_once();

    let guard = rubyx_log::auto_init().unwrap();
    assert!(!guard.has_root_span());

    info!(target: "rubyx_log::tests", attempt = 1, "still logging");
    warn!("warnings go through the same stack");
}

#[test]
fn test_init_test_never_fails() {
    let _lock = TEST_LOCK.lock().unwrap();
    install_once();

    let guard = rubyx_log::init_test();
    assert!(!guard.has_root_span());
}

#[test]
fn test_log_error_returns_value() {
    let _lock = TEST_LOCK.lock().unwrap();
    install_once();

    let err = rubyx_log::log_error!(LogError::config("missing writer"), stage = "setup");
    assert_eq!(err, LogError::Config("missing writer".into()));
}

#[test]
fn test_config_roundtrips_through_json() {
    let config = Config {
        format: Format::Json,
        writer: WriterConfig::Stdout,
        ..Config::production()
    };
    let json = serde_json::to_string(&config).unwrap();
    let back: Config = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);
}
