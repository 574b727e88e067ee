//! Request and response bodies of the compliance API.

use chrono::{DateTime, Utc};
use regscope_derive::api_model;
use regscope_domain::areas::ComplianceAreas;
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Risk classification shared by verdicts and individual indicators.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    /// Classifies a 0-100 score: below 25 low, below 50 medium, below 75 high.
    #[must_use]
    pub const fn from_score(score: u8) -> Self {
        match score {
            0..25 => Self::Low,
            25..50 => Self::Medium,
            50..75 => Self::High,
            _ => Self::Critical,
        }
    }
}

#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::IntoStaticStr,
)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ScreeningType {
    #[default]
    Standard,
    Enhanced,
    Ongoing,
}

#[api_model(rename_all = "snake_case")]
#[derive(Clone, PartialEq)]
pub struct TransactionData {
    pub transaction_id: String,
    /// RFC 3339; any offset is normalised to UTC.
    pub timestamp: DateTime<Utc>,
    pub amount: f64,
    /// ISO 4217 code.
    pub currency: String,
    pub sender_account: String,
    pub receiver_account: String,
    /// `transfer`, `payment`, `withdrawal`, ...
    pub transaction_type: String,
    #[serde(default)]
    pub sender_country: Option<String>,
    #[serde(default)]
    pub receiver_country: Option<String>,
    #[serde(default)]
    pub purpose: Option<String>,
}

#[api_model(rename_all = "snake_case")]
#[derive(Clone, PartialEq)]
pub struct AmlScreeningRequest {
    pub customer_name: String,
    #[serde(default)]
    pub customer_id: Option<String>,
    /// `YYYY-MM-DD`
    #[serde(default)]
    pub date_of_birth: Option<String>,
    #[serde(default)]
    pub nationality: Option<String>,
    #[serde(default)]
    pub country_of_residence: Option<String>,
    /// Politically exposed person.
    #[serde(default)]
    pub is_pep: bool,
    #[serde(default)]
    pub transaction_data: Option<TransactionData>,
    #[serde(default)]
    pub screening_type: ScreeningType,
}

#[api_model(rename_all = "snake_case")]
#[derive(Clone, PartialEq, Eq)]
pub struct AmlRiskIndicator {
    pub indicator_type: String,
    pub severity: RiskLevel,
    pub description: String,
    pub recommendation: String,
}

#[api_model(rename_all = "snake_case")]
#[derive(Clone, PartialEq)]
pub struct AmlScreeningResult {
    /// `AML-YYYYMMDDHHMMSS`
    pub screening_id: String,
    pub customer_name: String,
    pub screening_date: DateTime<Utc>,
    /// 0-100
    pub overall_risk_score: u8,
    pub risk_level: RiskLevel,
    pub sanctions_match: bool,
    pub pep_match: bool,
    pub adverse_media: bool,
    pub risk_indicators: Vec<AmlRiskIndicator>,
    pub requires_enhanced_dd: bool,
    pub recommendations: Vec<String>,
}

#[api_model(rename_all = "snake_case")]
#[derive(Clone, PartialEq, Eq)]
pub struct TransactionAnalysis {
    pub transaction_id: String,
    /// 0-100
    pub risk_score: u8,
    pub risk_level: RiskLevel,
    pub red_flags: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Serde defaults for the `check_*` flags, taken from
/// [`ComplianceAreas::DEFAULT_CHECK`].
mod default_area {
    use regscope_domain::areas::ComplianceAreas;

    pub(super) const fn aml_kyc() -> bool {
        ComplianceAreas::DEFAULT_CHECK.contains(ComplianceAreas::AML_KYC)
    }

    pub(super) const fn payment_security() -> bool {
        ComplianceAreas::DEFAULT_CHECK.contains(ComplianceAreas::PAYMENT_SECURITY)
    }

    pub(super) const fn market_conduct() -> bool {
        ComplianceAreas::DEFAULT_CHECK.contains(ComplianceAreas::MARKET_CONDUCT)
    }

    pub(super) const fn data_protection() -> bool {
        ComplianceAreas::DEFAULT_CHECK.contains(ComplianceAreas::DATA_PROTECTION)
    }
}

#[api_model(rename_all = "snake_case")]
#[derive(Clone, PartialEq, Eq)]
pub struct FinTechComplianceCheck {
    pub entity_name: String,
    /// `bank`, `payment_provider`, `investment_firm`, ...
    pub entity_type: String,
    pub jurisdictions: Vec<String>,
    pub regulations_to_check: Vec<String>,
    /// Policy or procedure text to assess.
    #[serde(default)]
    pub document_text: Option<String>,
    #[serde(default = "default_area::aml_kyc")]
    pub check_aml_kyc: bool,
    #[serde(default = "default_area::payment_security")]
    pub check_payment_security: bool,
    #[serde(default = "default_area::market_conduct")]
    pub check_market_conduct: bool,
    #[serde(default = "default_area::data_protection")]
    pub check_data_protection: bool,
}

impl FinTechComplianceCheck {
    #[must_use]
    pub fn areas(&self) -> ComplianceAreas {
        [
            (self.check_aml_kyc, ComplianceAreas::AML_KYC),
            (self.check_payment_security, ComplianceAreas::PAYMENT_SECURITY),
            (self.check_market_conduct, ComplianceAreas::MARKET_CONDUCT),
            (self.check_data_protection, ComplianceAreas::DATA_PROTECTION),
        ]
        .into_iter()
        .filter(|(on, _)| *on)
        .fold(ComplianceAreas::empty(), |acc, (_, area)| acc | area)
    }
}

/// Compliance areas echoed back in a report.
#[api_model(rename_all = "snake_case")]
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct AreasChecked {
    pub aml_kyc: bool,
    pub payment_security: bool,
    pub market_conduct: bool,
    pub data_protection: bool,
}

impl From<ComplianceAreas> for AreasChecked {
    fn from(areas: ComplianceAreas) -> Self {
        Self {
            aml_kyc: areas.contains(ComplianceAreas::AML_KYC),
            payment_security: areas.contains(ComplianceAreas::PAYMENT_SECURITY),
            market_conduct: areas.contains(ComplianceAreas::MARKET_CONDUCT),
            data_protection: areas.contains(ComplianceAreas::DATA_PROTECTION),
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display, strum::IntoStaticStr,
)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum FindingStatus {
    Compliant,
    Partial,
    NonCompliant,
    /// No document was supplied.
    NotAssessed,
    /// The regulation is not in the rule book.
    Unsupported,
}

#[api_model(rename_all = "snake_case")]
#[derive(Clone, PartialEq, Eq)]
pub struct ComplianceFinding {
    pub regulation: String,
    pub status: FindingStatus,
    pub notes: String,
}

#[api_model(rename_all = "snake_case")]
#[derive(Clone, PartialEq)]
pub struct ComplianceReport {
    pub entity_name: String,
    pub entity_type: String,
    pub jurisdictions: Vec<String>,
    pub regulations_checked: Vec<String>,
    /// 0-100
    pub overall_compliance_score: u8,
    pub compliance_status: String,
    pub areas_checked: AreasChecked,
    pub findings: Vec<ComplianceFinding>,
    pub recommendations: Vec<String>,
}

/// One catalogue entry.
#[api_model(rename_all = "snake_case")]
#[derive(Clone, PartialEq, Eq)]
pub struct RegulationInfo {
    pub id: String,
    pub name: String,
    pub jurisdiction: String,
    pub category: String,
}

impl From<&regscope_domain::regulations::Regulation> for RegulationInfo {
    fn from(regulation: &regscope_domain::regulations::Regulation) -> Self {
        Self {
            id: regulation.id.to_owned(),
            name: regulation.name.to_owned(),
            jurisdiction: regulation.jurisdiction.to_owned(),
            category: regulation.category.to_owned(),
        }
    }
}

#[api_model(rename_all = "snake_case")]
#[derive(Clone, PartialEq, Eq)]
pub struct RegulationCatalogue {
    pub total_regulations: usize,
    /// Category keys in catalogue order.
    pub categories: Vec<String>,
    #[cfg_attr(
        feature = "server",
        schema(value_type = std::collections::BTreeMap<String, Vec<RegulationInfo>>)
    )]
    pub regulations: RegulationsByCategory,
}

/// Regulations keyed by category. Serialized as a JSON object whose keys keep
/// catalogue order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegulationsByCategory(Vec<(String, Vec<RegulationInfo>)>);

impl RegulationsByCategory {
    #[must_use]
    pub fn get(&self, category: &str) -> Option<&[RegulationInfo]> {
        self.0.iter().find(|(key, _)| key == category).map(|(_, regulations)| regulations.as_slice())
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(key, _)| key.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl FromIterator<(String, Vec<RegulationInfo>)> for RegulationsByCategory {
    fn from_iter<I: IntoIterator<Item = (String, Vec<RegulationInfo>)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Serialize for RegulationsByCategory {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(self.0.iter().map(|(key, regulations)| (key, regulations)))
    }
}

impl<'de> Deserialize<'de> for RegulationsByCategory {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct Entries;

        impl<'de> Visitor<'de> for Entries {
            type Value = RegulationsByCategory;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a map of category keys to regulations")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry()? {
                    entries.push(entry);
                }
                Ok(RegulationsByCategory(entries))
            }
        }

        deserializer.deserialize_map(Entries)
    }
}

impl RegulationCatalogue {
    #[must_use]
    pub fn current() -> Self {
        use regscope_domain::regulations::{CATALOGUE, category_keys, total_regulations};

        Self {
            total_regulations: total_regulations(),
            categories: category_keys().map(str::to_owned).collect(),
            regulations: CATALOGUE
                .iter()
                .map(|group| {
                    (group.key.to_owned(), group.regulations.iter().map(RegulationInfo::from).collect())
                })
                .collect(),
        }
    }
}

#[api_model(rename_all = "snake_case")]
#[derive(Clone, PartialEq, Eq)]
pub struct ComplianceHealth {
    pub status: String,
    pub service: String,
    pub version: String,
    /// Name of the active risk analyst.
    pub analyst: String,
    pub aml_service: String,
    pub supported_regulations: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn risk_level_boundaries() {
        assert_eq!(RiskLevel::from_score(0), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(24), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(25), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(49), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(50), RiskLevel::High);
        assert_eq!(RiskLevel::from_score(74), RiskLevel::High);
        assert_eq!(RiskLevel::from_score(75), RiskLevel::Critical);
        assert_eq!(RiskLevel::from_score(100), RiskLevel::Critical);
    }

    #[test]
    fn risk_level_parses_case_insensitively() {
        assert_eq!("HIGH".parse::<RiskLevel>().ok(), Some(RiskLevel::High));
        assert!("severe".parse::<RiskLevel>().is_err());
    }

    #[test]
    fn screening_request_defaults() {
        let request: AmlScreeningRequest =
            serde_json::from_str(r#"{"customer_name":"Jane Doe"}"#).expect("minimal request");
        assert!(!request.is_pep);
        assert_eq!(request.screening_type, ScreeningType::Standard);
        assert!(request.transaction_data.is_none());
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let result = serde_json::from_str::<AmlScreeningRequest>(
            r#"{"customer_name":"Jane Doe","customerName":"x"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn compliance_check_area_defaults() {
        let check: FinTechComplianceCheck = serde_json::from_str(
            r#"{"entity_name":"Acme Pay","entity_type":"payment_provider","jurisdictions":["EU"],"regulations_to_check":["PSD2"]}"#,
        )
        .expect("check parses");
        assert_eq!(check.areas(), ComplianceAreas::DEFAULT_CHECK);
        assert!(!AreasChecked::from(check.areas()).payment_security);
    }

    #[test]
    fn catalogue_keeps_category_order() {
        let catalogue = RegulationCatalogue::current();
        assert_eq!(catalogue.total_regulations, 9);
        assert_eq!(catalogue.categories.first().map(String::as_str), Some("payment_services"));
        assert_eq!(catalogue.regulations.len(), catalogue.categories.len());
        assert!(catalogue.regulations.categories().eq(catalogue.categories.iter().map(String::as_str)));
    }

    #[test]
    fn catalogue_json_keys_follow_category_order() {
        let catalogue = RegulationCatalogue::current();
        let json = serde_json::to_string(&catalogue).expect("catalogue serializes");
        let regulations = &json[json.find("\"regulations\"").expect("regulations key")..];

        let positions: Vec<usize> = catalogue
            .categories
            .iter()
            .map(|key| regulations.find(&format!("\"{key}\":")).expect("category key present"))
            .collect();
        assert!(positions.is_sorted());

        let parsed: RegulationCatalogue = serde_json::from_str(&json).expect("catalogue parses");
        assert_eq!(parsed, catalogue);
    }
}
