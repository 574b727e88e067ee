//! Risk analysts: engines that turn a request into a JSON verdict.
//!
//! The verdict is plain text so an external model can be plugged in behind
//! [`RiskAnalyst`]; [`crate::service::AmlService`] parses it leniently and
//! falls back to a manual-review result when it cannot.

use crate::error::ComplianceError;
use crate::models::{AmlScreeningRequest, RiskLevel, ScreeningType, TransactionData};
use regscope_domain::config::ComplianceConfig;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Produces JSON verdicts for screenings and transactions.
pub trait RiskAnalyst: Debug + Send + Sync {
    /// Short identifier reported by the health endpoint.
    fn name(&self) -> &'static str;

    /// # Errors
    /// [`ComplianceError::Analyst`] when the engine cannot answer at all.
    fn screen_customer(&self, request: &AmlScreeningRequest) -> Result<String, ComplianceError>;

    /// # Errors
    /// [`ComplianceError::Analyst`] when the engine cannot answer at all.
    fn analyze_transaction(&self, transaction: &TransactionData)
    -> Result<String, ComplianceError>;
}

/// Screening verdict as exchanged with an analyst. Every key is optional.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreeningVerdict {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sanctions_match: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pep_match: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adverse_media: Option<bool>,
    pub risk_indicators: Vec<IndicatorVerdict>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enhanced_dd_required: Option<bool>,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndicatorVerdict {
    #[serde(rename = "type", alias = "indicator_type")]
    pub kind: Option<String>,
    pub severity: Option<String>,
    pub description: Option<String>,
    pub recommendation: Option<String>,
}

/// Transaction verdict as exchanged with an analyst. Every key is optional.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransactionVerdict {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_level: Option<String>,
    pub red_flags: Vec<String>,
    pub recommendations: Vec<String>,
}

const BASE_SCORE: u32 = 10;
const LARGE_AMOUNT: u32 = 30;
const REPORTABLE_AMOUNT: u32 = 15;
const STRUCTURING: u32 = 25;
const HIGH_RISK_COUNTRY: u32 = 30;
const CROSS_BORDER: u32 = 5;
const MISSING_PURPOSE: u32 = 10;
const CASH_LIKE: u32 = 10;

const SANCTIONS_HIT: u32 = 50;
const PEP: u32 = 35;
const GEOGRAPHY: u32 = 30;
const ENHANCED_SCREENING: u32 = 10;
/// An attached transaction contributes a quarter of its own score.
const TRANSACTION_WEIGHT: u32 = 4;

/// Deterministic analyst driven by [`ComplianceConfig`] thresholds and
/// watch lists.
#[derive(Debug, Clone, Default)]
pub struct RuleBasedAnalyst {
    config: ComplianceConfig,
}

impl RuleBasedAnalyst {
    #[must_use]
    pub const fn new(config: ComplianceConfig) -> Self {
        Self { config }
    }

    /// Scores a transaction. Recommendations are left empty when nothing
    /// was flagged.
    #[must_use]
    pub fn assess_transaction(&self, tx: &TransactionData) -> TransactionVerdict {
        let cfg = &self.config;
        let mut score = BASE_SCORE;
        let mut flags = Vec::new();
        let mut advice = Vec::new();

        let structuring_floor = cfg.reporting_threshold * (1.0 - cfg.structuring_margin);

        if tx.amount >= cfg.large_transaction_threshold {
            score += LARGE_AMOUNT;
            flags.push(format!("Large transaction amount: {} {:.2}", tx.currency, tx.amount));
            advice.push("Verify the source of funds".to_owned());
        } else if tx.amount >= cfg.reporting_threshold {
            score += REPORTABLE_AMOUNT;
            flags.push("Amount at or above the reporting threshold".to_owned());
            advice.push("File a currency transaction report where required".to_owned());
        } else if tx.amount >= structuring_floor {
            score += STRUCTURING;
            flags.push("Amount just below the reporting threshold (possible structuring)".to_owned());
            advice.push("Review related transactions for structuring patterns".to_owned());
        }

        let countries = [tx.sender_country.as_deref(), tx.receiver_country.as_deref()];
        let risky: Vec<&str> = countries
            .iter()
            .flatten()
            .copied()
            .filter(|country| cfg.is_high_risk(country))
            .collect();
        if !risky.is_empty() {
            score += HIGH_RISK_COUNTRY;
            flags.push(format!("High-risk jurisdiction involved: {}", risky.join(", ")));
            advice.push("Apply enhanced due diligence to the counterparties".to_owned());
        }

        if let [Some(from), Some(to)] = countries
            && !from.trim().eq_ignore_ascii_case(to.trim())
        {
            score += CROSS_BORDER;
            flags.push(format!("Cross-border transfer: {} -> {}", from.trim(), to.trim()));
        }

        if tx.purpose.as_deref().is_none_or(|purpose| purpose.trim().is_empty()) {
            score += MISSING_PURPOSE;
            flags.push("Transaction purpose not stated".to_owned());
            advice.push("Obtain and document the transaction purpose".to_owned());
        }

        let kind = tx.transaction_type.to_ascii_lowercase();
        if kind.contains("cash") || kind.contains("withdrawal") {
            score += CASH_LIKE;
            flags.push("Cash-intensive transaction type".to_owned());
        }

        let score = score.min(100);
        TransactionVerdict {
            risk_score: Some(f64::from(score)),
            risk_level: Some(level_of(score).to_string()),
            red_flags: flags,
            recommendations: advice,
        }
    }

    #[must_use]
    pub fn assess_customer(&self, request: &AmlScreeningRequest) -> ScreeningVerdict {
        let cfg = &self.config;
        let mut score = BASE_SCORE;
        let mut indicators = Vec::new();

        let sanctions_match = self.on_watch_list(&request.customer_name);
        if sanctions_match {
            score += SANCTIONS_HIT;
            indicators.push(indicator(
                "sanctions",
                RiskLevel::Critical,
                "Customer name matches the sanctions watch list",
                "Block onboarding and escalate to the compliance officer",
            ));
        }

        if request.is_pep {
            score += PEP;
            indicators.push(indicator(
                "pep",
                RiskLevel::High,
                "Customer is a politically exposed person",
                "Obtain senior management approval and establish the source of wealth",
            ));
        }

        let risky_geography = [request.nationality.as_deref(), request.country_of_residence.as_deref()]
            .into_iter()
            .flatten()
            .any(|country| cfg.is_high_risk(country));
        if risky_geography {
            score += GEOGRAPHY;
            indicators.push(indicator(
                "geographic",
                RiskLevel::High,
                "Nationality or residence in a high-risk jurisdiction",
                "Apply enhanced due diligence",
            ));
        }

        if request.screening_type == ScreeningType::Enhanced {
            score += ENHANCED_SCREENING;
        }

        if let Some(tx) = &request.transaction_data {
            let verdict = self.assess_transaction(tx);
            // assess_transaction always sets a whole-number score
            let tx_score = verdict.risk_score.map_or(0, |s| s as u32);
            score += tx_score / TRANSACTION_WEIGHT;
            if tx_score >= 50 {
                indicators.push(indicator(
                    "transaction",
                    RiskLevel::Medium,
                    &format!("Related transaction flagged: {}", verdict.red_flags.join("; ")),
                    "Review the related transaction before approval",
                ));
            }
        }

        let score = score.min(100);
        let mut recommendations: Vec<String> =
            indicators.iter().filter_map(|i| i.recommendation.clone()).collect();
        if recommendations.is_empty() {
            recommendations.push("Standard due diligence is sufficient".to_owned());
        }

        ScreeningVerdict {
            risk_score: Some(f64::from(score)),
            risk_level: Some(level_of(score).to_string()),
            sanctions_match: Some(sanctions_match),
            pep_match: Some(request.is_pep),
            adverse_media: Some(false),
            enhanced_dd_required: Some(
                score >= 50
                    || sanctions_match
                    || request.is_pep
                    || request.screening_type == ScreeningType::Enhanced,
            ),
            risk_indicators: indicators,
            recommendations,
        }
    }

    fn on_watch_list(&self, name: &str) -> bool {
        let name = format!(" {} ", normalize_name(name));
        self.config
            .sanctioned_names
            .iter()
            .map(|listed| normalize_name(listed))
            .filter(|listed| !listed.is_empty())
            .any(|listed| name.contains(&format!(" {listed} ")))
    }
}

impl RiskAnalyst for RuleBasedAnalyst {
    fn name(&self) -> &'static str {
        "rule-based"
    }

    fn screen_customer(&self, request: &AmlScreeningRequest) -> Result<String, ComplianceError> {
        serde_json::to_string(&self.assess_customer(request)).map_err(ComplianceError::from)
    }

    fn analyze_transaction(
        &self,
        transaction: &TransactionData,
    ) -> Result<String, ComplianceError> {
        serde_json::to_string(&self.assess_transaction(transaction)).map_err(ComplianceError::from)
    }
}

fn level_of(score: u32) -> RiskLevel {
    RiskLevel::from_score(u8::try_from(score).unwrap_or(u8::MAX))
}

fn indicator(
    kind: &str,
    severity: RiskLevel,
    description: &str,
    recommendation: &str,
) -> IndicatorVerdict {
    IndicatorVerdict {
        kind: Some(kind.to_owned()),
        severity: Some(severity.to_string()),
        description: Some(description.to_owned()),
        recommendation: Some(recommendation.to_owned()),
    }
}

/// Lowercase, single-spaced, punctuation stripped.
fn normalize_name(name: &str) -> String {
    name.split(|c: char| !c.is_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}
