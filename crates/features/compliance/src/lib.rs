//! FinTech compliance feature slice.
//!
//! AML/KYC customer screening, single-transaction risk analysis and
//! keyword-driven policy checks. Risk verdicts come from a pluggable
//! [`RiskAnalyst`](analyst::RiskAnalyst); the default
//! [`RuleBasedAnalyst`](analyst::RuleBasedAnalyst) is driven by
//! [`ComplianceConfig`].

pub mod analyst;
pub mod checks;
mod error;
#[cfg(feature = "server")]
mod handlers;
pub mod models;
#[cfg(feature = "server")]
pub mod router;
pub mod service;

pub use crate::error::{ComplianceError, ComplianceErrorExt};
use crate::analyst::{RiskAnalyst, RuleBasedAnalyst};
use crate::service::AmlService;
use regscope_domain::config::ComplianceConfig;
use regscope_kernel::prelude::InitializedSlice;

/// Compliance feature state
#[regscope_derive::regscope_slice]
pub struct Compliance {
    pub service: AmlService,
}

/// Initializes the slice with the rule-based analyst.
///
/// # Errors
/// [`ComplianceError::Validation`] when the thresholds are inconsistent.
pub fn init(config: &ComplianceConfig) -> Result<InitializedSlice, ComplianceError> {
    init_with(config, RuleBasedAnalyst::new(config.clone()))
}

/// Initializes the slice with a caller-supplied analyst.
///
/// # Errors
/// [`ComplianceError::Validation`] when the thresholds are inconsistent.
pub fn init_with(
    config: &ComplianceConfig,
    analyst: impl RiskAnalyst + 'static,
) -> Result<InitializedSlice, ComplianceError> {
    validate(config).context("Invalid compliance configuration")?;

    let service = AmlService::new(analyst);
    tracing::info!(
        analyst = service.analyst_name(),
        reporting_threshold = config.reporting_threshold,
        high_risk_jurisdictions = config.high_risk_jurisdictions.len(),
        "Compliance slice initialized"
    );

    Ok(InitializedSlice::new(Compliance::new(ComplianceInner { service })))
}

fn validate(config: &ComplianceConfig) -> Result<(), ComplianceError> {
    let positive = |value: f64| value.is_finite() && value > 0.0;

    if !positive(config.reporting_threshold) || !positive(config.large_transaction_threshold) {
        return Err(ComplianceError::validation("thresholds must be positive numbers"));
    }
    if !(0.0..1.0).contains(&config.structuring_margin) {
        return Err(ComplianceError::validation("structuring_margin must be within [0, 1)"));
    }
    Ok(())
}
