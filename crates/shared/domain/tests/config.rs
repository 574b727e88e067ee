use regscope_domain::config::{ApiConfig, ComplianceConfig, LogConfig, ServerConfig};
use serde_json::json;

#[test]
fn defaults_are_sane() {
    let server = ServerConfig::default();
    assert_eq!(server.port, 4583);
    assert!(server.ssl.is_none());

    let log = LogConfig::default();
    assert_eq!(log.level, "info");
    assert!(log.path.is_none());
    assert!(!log.json);

    let compliance = ComplianceConfig::default();
    assert!((compliance.reporting_threshold - 10_000.0).abs() < f64::EPSILON);
    assert!(compliance.large_transaction_threshold > compliance.reporting_threshold);
    assert!(compliance.sanctioned_names.is_empty());
}

#[test]
fn partial_document_keeps_defaults() {
    let raw = json!({
        "server": { "address": "::", "port": 8080 },
        "compliance": { "high_risk_jurisdictions": ["ru"], "sanctioned_names": ["Ivan Example"] }
    });

    let cfg: ApiConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.server.port, 8080);
    assert_eq!(cfg.log.level, "info");
    assert!(cfg.compliance.is_high_risk("RU"));
    assert!(!cfg.compliance.is_high_risk("KP"));
    assert!((cfg.compliance.structuring_margin - 0.1).abs() < f64::EPSILON);
}

#[test]
fn mutation_does_not_leak_into_clones() {
    let original = ApiConfig::default();
    let mut changed = original.clone();
    changed.server.port = 9000;

    assert_eq!(original.server.port, 4583);
    assert_eq!(changed.server.port, 9000);
}
