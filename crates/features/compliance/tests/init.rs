use regscope_compliance::{Compliance, ComplianceError, init};
use regscope_domain::config::ComplianceConfig;

#[test]
fn init_creates_slice() {
    let slice = init(&ComplianceConfig::default()).expect("default config is valid");
    assert_eq!(slice.id, std::any::TypeId::of::<Compliance>());

    let compliance = slice.downcast_ref::<Compliance>().expect("slice holds compliance state");
    assert_eq!(compliance.service.analyst_name(), "rule-based");
}

#[test]
fn init_rejects_inconsistent_thresholds() {
    let config = ComplianceConfig { structuring_margin: 1.5, ..ComplianceConfig::default() };
    let err = init(&config).expect_err("margin above 1 is invalid");
    assert!(matches!(err, ComplianceError::Validation { context: Some(_), .. }));

    let config = ComplianceConfig { reporting_threshold: 0.0, ..ComplianceConfig::default() };
    assert!(init(&config).is_err());
}
