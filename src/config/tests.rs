use serial_test::serial;

use super::{Settings, load_config};

#[test]
fn test_default_settings() {
    let settings = Settings::default();
    assert_eq!(settings.server.host, "127.0.0.1");
    assert_eq!(settings.server.port, 4000);
    assert!(settings.server.broadcast);
    assert_eq!(settings.session.idle_timeout_secs, 300);
}

#[test]
#[serial]
fn test_load_config_falls_back_to_defaults() {
    let settings = load_config().expect("load config");
    assert_eq!(settings.server.host, "127.0.0.1");
    assert_eq!(settings.server.port, 4000);
}

#[test]
#[serial]
fn test_environment_overrides_defaults() {
    temp_env::with_vars(
        [
            ("SERVER__PORT", Some("9099")),
            ("SERVER__BROADCAST", Some("false")),
            ("SESSION__IDLE_TIMEOUT_SECS", Some("0")),
        ],
        || {
            let settings = load_config().expect("load config");
            assert_eq!(settings.server.port, 9099);
            assert!(!settings.server.broadcast);
            assert_eq!(settings.session.idle_timeout_secs, 0);
            // Untouched fields keep their defaults.
            assert_eq!(settings.server.host, "127.0.0.1");
        },
    );
}
