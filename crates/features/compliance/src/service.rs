//! AML screening and transaction analysis on top of a [`RiskAnalyst`].

use crate::analyst::{RiskAnalyst, ScreeningVerdict, TransactionVerdict};
use crate::checks;
use crate::error::ComplianceError;
use crate::models::{
    AmlRiskIndicator, AmlScreeningRequest, AmlScreeningResult, ComplianceReport,
    FinTechComplianceCheck, RiskLevel, ScreeningType, TransactionAnalysis, TransactionData,
};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::{info, warn};

const DEFAULT_SCORE: u8 = 50;
const SCREENING_FALLBACK: &str = "Manual review recommended due to incomplete automated screening";
const TRANSACTION_FALLBACK_FLAG: &str = "Unable to complete full analysis";
const TRANSACTION_FALLBACK: &str = "Manual review recommended";

#[derive(Debug, Clone)]
pub struct AmlService {
    analyst: Arc<dyn RiskAnalyst>,
}

impl AmlService {
    pub fn new(analyst: impl RiskAnalyst + 'static) -> Self {
        Self { analyst: Arc::new(analyst) }
    }

    #[must_use]
    pub fn analyst_name(&self) -> &'static str {
        self.analyst.name()
    }

    /// Screens a customer against sanctions, PEP and geographic risk.
    ///
    /// # Errors
    /// [`ComplianceError::Validation`] for an empty name or an invalid attached
    /// transaction, [`ComplianceError::Analyst`] when the analyst fails.
    pub fn screen_customer(
        &self,
        request: &AmlScreeningRequest,
    ) -> Result<AmlScreeningResult, ComplianceError> {
        self.screen_customer_at(request, Utc::now())
    }

    /// [`Self::screen_customer`] with an explicit screening time.
    ///
    /// # Errors
    /// See [`Self::screen_customer`].
    pub fn screen_customer_at(
        &self,
        request: &AmlScreeningRequest,
        now: DateTime<Utc>,
    ) -> Result<AmlScreeningResult, ComplianceError> {
        validate_screening(request)?;
        info!(
            customer = %request.customer_name,
            screening_type = %request.screening_type,
            "Starting AML screening"
        );

        let verdict = self.analyst.screen_customer(request)?;
        let result = screening_result(&verdict, request, now);

        info!(
            screening_id = %result.screening_id,
            risk_level = %result.risk_level,
            score = result.overall_risk_score,
            "AML screening completed"
        );
        Ok(result)
    }

    /// Analyses one transaction for suspicious patterns.
    ///
    /// # Errors
    /// [`ComplianceError::Validation`] for malformed amounts or currencies,
    /// [`ComplianceError::Analyst`] when the analyst fails.
    pub fn analyze_transaction(
        &self,
        transaction: &TransactionData,
    ) -> Result<TransactionAnalysis, ComplianceError> {
        validate_transaction(transaction)?;
        info!(transaction_id = %transaction.transaction_id, "Analyzing transaction");

        let verdict = self.analyst.analyze_transaction(transaction)?;
        Ok(transaction_analysis(&verdict, transaction))
    }

    /// Checks a policy document against the requested regulations.
    ///
    /// # Errors
    /// [`ComplianceError::Validation`] when the entity name is empty.
    pub fn check_compliance(
        &self,
        request: &FinTechComplianceCheck,
    ) -> Result<ComplianceReport, ComplianceError> {
        if request.entity_name.trim().is_empty() {
            return Err(ComplianceError::validation("entity_name must not be empty"));
        }
        info!(entity = %request.entity_name, "Running compliance check");

        let report = checks::check(request);
        info!(
            entity = %report.entity_name,
            score = report.overall_compliance_score,
            status = %report.compliance_status,
            "Compliance check completed"
        );
        Ok(report)
    }
}

/// `AML-YYYYMMDDHHMMSS` in UTC.
#[must_use]
pub fn screening_id(now: DateTime<Utc>) -> String {
    format!("AML-{}", now.format("%Y%m%d%H%M%S"))
}

/// Clamps an analyst score into `0..=100`; non-numbers become the default.
#[must_use]
pub fn clamp_score(raw: f64) -> u8 {
    if raw.is_nan() {
        return DEFAULT_SCORE;
    }
    raw.clamp(0.0, 100.0).round() as u8
}

fn parse_level(raw: Option<&str>, score: u8) -> RiskLevel {
    raw.map_or(RiskLevel::Medium, |level| {
        level.trim().parse().unwrap_or_else(|_| RiskLevel::from_score(score))
    })
}

fn screening_result(
    verdict: &str,
    request: &AmlScreeningRequest,
    now: DateTime<Utc>,
) -> AmlScreeningResult {
    let screening_id = screening_id(now);

    let Ok(parsed) = serde_json::from_str::<ScreeningVerdict>(verdict) else {
        warn!(%screening_id, "Screening verdict is not valid JSON, using fallback");
        return AmlScreeningResult {
            screening_id,
            customer_name: request.customer_name.clone(),
            screening_date: now,
            overall_risk_score: DEFAULT_SCORE,
            risk_level: RiskLevel::Medium,
            sanctions_match: false,
            pep_match: request.is_pep,
            adverse_media: false,
            risk_indicators: Vec::new(),
            requires_enhanced_dd: request.screening_type == ScreeningType::Enhanced,
            recommendations: vec![SCREENING_FALLBACK.to_owned()],
        };
    };

    let score = parsed.risk_score.map_or(DEFAULT_SCORE, clamp_score);
    let risk_indicators = parsed
        .risk_indicators
        .into_iter()
        .map(|indicator| AmlRiskIndicator {
            indicator_type: indicator.kind.unwrap_or_else(|| "unknown".to_owned()),
            severity: indicator
                .severity
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(RiskLevel::Medium),
            description: indicator.description.unwrap_or_default(),
            recommendation: indicator.recommendation.unwrap_or_default(),
        })
        .collect();

    AmlScreeningResult {
        screening_id,
        customer_name: request.customer_name.clone(),
        screening_date: now,
        overall_risk_score: score,
        risk_level: parse_level(parsed.risk_level.as_deref(), score),
        sanctions_match: parsed.sanctions_match.unwrap_or(false),
        pep_match: parsed.pep_match.unwrap_or(request.is_pep),
        adverse_media: parsed.adverse_media.unwrap_or(false),
        risk_indicators,
        requires_enhanced_dd: parsed.enhanced_dd_required.unwrap_or(false),
        recommendations: parsed.recommendations,
    }
}

fn transaction_analysis(verdict: &str, transaction: &TransactionData) -> TransactionAnalysis {
    let transaction_id = transaction.transaction_id.clone();

    let Ok(parsed) = serde_json::from_str::<TransactionVerdict>(verdict) else {
        warn!(%transaction_id, "Transaction verdict is not valid JSON, using fallback");
        return TransactionAnalysis {
            transaction_id,
            risk_score: DEFAULT_SCORE,
            risk_level: RiskLevel::Medium,
            red_flags: vec![TRANSACTION_FALLBACK_FLAG.to_owned()],
            recommendations: vec![TRANSACTION_FALLBACK.to_owned()],
        };
    };

    let score = parsed.risk_score.map_or(DEFAULT_SCORE, clamp_score);
    let recommendations = if parsed.recommendations.is_empty() && parsed.red_flags.is_empty() {
        vec!["No further action required".to_owned()]
    } else {
        parsed.recommendations
    };

    TransactionAnalysis {
        transaction_id,
        risk_score: score,
        risk_level: parse_level(parsed.risk_level.as_deref(), score),
        red_flags: parsed.red_flags,
        recommendations,
    }
}

fn validate_screening(request: &AmlScreeningRequest) -> Result<(), ComplianceError> {
    if request.customer_name.trim().is_empty() {
        return Err(ComplianceError::validation("customer_name must not be empty"));
    }
    if let Some(tx) = &request.transaction_data {
        validate_transaction(tx)?;
    }
    Ok(())
}

fn validate_transaction(tx: &TransactionData) -> Result<(), ComplianceError> {
    if tx.transaction_id.trim().is_empty() {
        return Err(ComplianceError::validation("transaction_id must not be empty"));
    }
    if !tx.amount.is_finite() || tx.amount < 0.0 {
        return Err(ComplianceError::validation(format!(
            "amount must be a non-negative number, got {}",
            tx.amount
        )));
    }
    if tx.currency.len() != 3 || !tx.currency.bytes().all(|b| b.is_ascii_alphabetic()) {
        return Err(ComplianceError::validation(format!(
            "currency must be an ISO 4217 code, got {:?}",
            tx.currency
        )));
    }
    Ok(())
}
