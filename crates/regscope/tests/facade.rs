use regscope::domain::config::ApiConfig;
use regscope::features;

#[test]
fn init_builds_every_slice() {
    let slices = regscope::init(&ApiConfig::default()).expect("default config boots");
    assert_eq!(slices.len(), 1);
    assert!(slices[0].downcast_ref::<features::compliance::Compliance>().is_some());
}

#[test]
fn bad_compliance_config_fails_init() {
    let mut config = ApiConfig::default();
    config.compliance.structuring_margin = -0.5;

    let err = regscope::init(&config).expect_err("negative margin is rejected");
    assert!(err.to_string().contains("structuring_margin"));
}

#[test]
fn feature_registry_lists_slices() {
    assert!(features::is_enabled("landing"));
    assert!(features::is_enabled("compliance"));
    assert!(!features::is_enabled("licensing"));
}
