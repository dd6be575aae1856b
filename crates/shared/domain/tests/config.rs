use vinewood_domain::config::{AppConfig, LoggingConfig, ServerConfig, SiteSource, StatusConfig};
use serde_json::json;

#[test]
fn config_defaults_are_sane() {
    let server = ServerConfig::default();
    assert_eq!(server.port, 4583);
    assert!(server.address.is_unspecified());

    let site = SiteSource::default();
    assert_eq!(site.path, std::path::PathBuf::from("site.config.json"));

    let status = StatusConfig::default();
    assert_eq!(status.fallback_min, 10);
    assert_eq!(status.fallback_max, 59);
    assert!(status.timeout_ms > 0);

    let logging = LoggingConfig::default();
    assert_eq!(logging.level, "info");
    assert!(!logging.json);
}

#[test]
fn app_config_deserializes() {
    let raw = json!({
        "server": { "address": "::", "port": 8080 },
        "site": { "path": "/srv/site.json" },
        "status": { "timeout_ms": 1500 }
    });

    let cfg: AppConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.server.port, 8080);
    assert_eq!(cfg.site.path, std::path::PathBuf::from("/srv/site.json"));
    assert_eq!(cfg.status.timeout_ms, 1500);
    // Unset leaves keep their defaults.
    assert_eq!(cfg.status.fallback_max, 59);
    assert_eq!(cfg.logging.level, "info");
}

#[test]
fn app_config_is_copy_on_write() {
    let original = AppConfig::default();
    let mut changed = original.clone();
    changed.server.port = 9000;

    assert_eq!(original.server.port, 4583);
    assert_eq!(changed.server.port, 9000);
}
