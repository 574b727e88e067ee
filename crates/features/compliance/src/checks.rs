//! Keyword-driven policy checks.
//!
//! Each supported regulation lists the controls a policy document must
//! describe. A control counts as documented when any of its phrases appears
//! in the text on word boundaries, ignoring case and punctuation.

use crate::models::{
    AreasChecked, ComplianceFinding, ComplianceReport, FinTechComplianceCheck, FindingStatus,
};
use regscope_domain::areas::ComplianceAreas;
use regscope_domain::regulations;

struct Control {
    name: &'static str,
    phrases: &'static [&'static str],
}

struct Rule {
    regulation: &'static str,
    /// Normalised spellings: uppercase ASCII alphanumerics only.
    aliases: &'static [&'static str],
    controls: &'static [Control],
}

const RULES: &[Rule] = &[
    Rule {
        regulation: "PSD2",
        aliases: &["PSD2", "PSD2EU"],
        controls: &[
            Control {
                name: "Strong Customer Authentication",
                phrases: &["strong customer authentication", "sca", "multi factor authentication"],
            },
            Control {
                name: "Third-party provider access",
                phrases: &["third party provider", "open banking", "tpp", "account information service"],
            },
            Control { name: "Incident reporting", phrases: &["incident reporting", "incident report"] },
        ],
    },
    Rule {
        regulation: "AML/KYC",
        aliases: &["AMLKYC", "AML", "KYC", "AMLKYCGLOBAL", "FATF", "5AMLD", "5AMLDEU"],
        controls: &[
            Control {
                name: "Customer due diligence",
                phrases: &["customer due diligence", "cdd", "know your customer", "kyc"],
            },
            Control { name: "Enhanced due diligence", phrases: &["enhanced due diligence", "edd"] },
            Control { name: "Transaction monitoring", phrases: &["transaction monitoring"] },
            Control {
                name: "Suspicious activity reporting",
                phrases: &["suspicious activity", "suspicious transaction", "sar"],
            },
        ],
    },
    Rule {
        regulation: "PCI-DSS",
        aliases: &["PCIDSS", "PCI", "PCIDSSGLOBAL"],
        controls: &[
            Control {
                name: "Cardholder data encryption",
                phrases: &["encryption", "encrypted", "tokenization", "tokenisation"],
            },
            Control { name: "Access control", phrases: &["access control", "least privilege"] },
            Control {
                name: "Vulnerability management",
                phrases: &["vulnerability", "penetration test", "penetration testing"],
            },
        ],
    },
    Rule {
        regulation: "MiFID II",
        aliases: &["MIFIDII", "MIFID", "MIFIDIIEU"],
        controls: &[
            Control { name: "Best execution", phrases: &["best execution"] },
            Control { name: "Transaction reporting", phrases: &["transaction reporting"] },
            Control { name: "Suitability assessment", phrases: &["suitability", "appropriateness"] },
        ],
    },
    Rule {
        regulation: "GDPR",
        aliases: &["GDPR", "GDPREU"],
        controls: &[
            Control { name: "Lawful basis", phrases: &["lawful basis", "consent"] },
            Control {
                name: "Data subject rights",
                phrases: &["data subject", "right to erasure", "subject access"],
            },
            Control { name: "Breach notification", phrases: &["breach notification", "data breach"] },
        ],
    },
    Rule {
        regulation: "Basel III",
        aliases: &["BASELIII", "BASEL"],
        controls: &[
            Control { name: "Capital adequacy", phrases: &["capital adequacy", "capital ratio", "cet1"] },
            Control { name: "Liquidity coverage", phrases: &["liquidity coverage", "lcr"] },
        ],
    },
];

/// Regulation checked by default for each enabled area.
const AREA_DEFAULTS: [(ComplianceAreas, &str); 4] = [
    (ComplianceAreas::AML_KYC, "AML/KYC"),
    (ComplianceAreas::PAYMENT_SECURITY, "PCI-DSS"),
    (ComplianceAreas::MARKET_CONDUCT, "MiFID II"),
    (ComplianceAreas::DATA_PROTECTION, "GDPR"),
];

const NO_DOCUMENT: &str = "Provide policy documentation to enable automated assessment";
const NO_RULE_SET: &str = "No requested regulation has an automated rule set";

/// Status label for a 0-100 compliance score.
#[must_use]
pub const fn status_label(score: u8) -> &'static str {
    match score {
        90.. => "Compliant",
        70..90 => "Mostly Compliant",
        40..70 => "Partially Compliant",
        _ => "Non-Compliant",
    }
}

/// Looks a regulation up by any of its spellings (`"PSD2"`, `"mifid-ii"`,
/// `"GDPR_EU"`, ...).
fn rule_for(name: &str) -> Option<&'static Rule> {
    let key: String =
        name.chars().filter(char::is_ascii_alphanumeric).map(|c| c.to_ascii_uppercase()).collect();
    RULES.iter().find(|rule| rule.aliases.contains(&key.as_str()))
}

/// `" word word "`: lowercase words separated by single spaces.
fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push(' ');
    for word in text.split(|c: char| !c.is_alphanumeric()).filter(|w| !w.is_empty()) {
        out.push_str(&word.to_lowercase());
        out.push(' ');
    }
    out
}

fn documents(text: &str, control: &Control) -> bool {
    control.phrases.iter().any(|phrase| text.contains(&normalize(phrase)))
}

/// Runs the check. Requested regulations come first, followed by the
/// defaults of enabled areas not already covered.
#[must_use]
pub fn check(request: &FinTechComplianceCheck) -> ComplianceReport {
    let areas = request.areas();
    let document = request
        .document_text
        .as_deref()
        .filter(|text| !text.trim().is_empty())
        .map(normalize);

    let mut targets: Vec<(String, Option<&'static Rule>)> = Vec::new();
    let requested = request.regulations_to_check.iter().map(String::as_str);
    let defaults =
        AREA_DEFAULTS.iter().filter(|(area, _)| areas.contains(*area)).map(|(_, name)| *name);
    for name in requested.chain(defaults) {
        let rule = rule_for(name);
        let label = rule.map_or_else(|| name.trim().to_owned(), |r| r.regulation.to_owned());
        if label.is_empty() || targets.iter().any(|(existing, _)| *existing == label) {
            continue;
        }
        targets.push((label, rule));
    }

    let mut findings = Vec::with_capacity(targets.len());
    let mut recommendations = Vec::new();

    for (regulation, rule) in &targets {
        let finding = match (rule, &document) {
            (None, _) => ComplianceFinding {
                regulation: regulation.clone(),
                status: FindingStatus::Unsupported,
                notes: regulations::find(regulation).map_or_else(
                    || "No automated rule set for this regulation".to_owned(),
                    |known| format!("{} is catalogued but has no automated rule set", known.name),
                ),
            },
            (Some(_), None) => ComplianceFinding {
                regulation: regulation.clone(),
                status: FindingStatus::NotAssessed,
                notes: "No document supplied".to_owned(),
            },
            (Some(rule), Some(text)) => {
                let missing: Vec<&str> = rule
                    .controls
                    .iter()
                    .filter(|control| !documents(text, control))
                    .map(|control| control.name)
                    .collect();

                recommendations.extend(
                    missing.iter().map(|control| format!("{regulation}: document {control}")),
                );

                let (status, notes) = if missing.is_empty() {
                    (FindingStatus::Compliant, "All required controls documented".to_owned())
                } else if missing.len() == rule.controls.len() {
                    (FindingStatus::NonCompliant, format!("Missing controls: {}", missing.join(", ")))
                } else {
                    (FindingStatus::Partial, format!("Missing controls: {}", missing.join(", ")))
                };
                ComplianceFinding { regulation: regulation.clone(), status, notes }
            }
        };
        findings.push(finding);
    }

    let assessed = findings
        .iter()
        .filter(|f| {
            matches!(
                f.status,
                FindingStatus::Compliant | FindingStatus::Partial | FindingStatus::NonCompliant
            )
        })
        .count();
    let compliant = findings.iter().filter(|f| f.status == FindingStatus::Compliant).count();

    let (score, status) = if assessed == 0 {
        let hint = if document.is_none() { NO_DOCUMENT } else { NO_RULE_SET };
        recommendations.push(hint.to_owned());
        (0, "Not Assessed")
    } else {
        let score = u8::try_from(compliant * 100 / assessed).unwrap_or(100);
        (score, status_label(score))
    };

    ComplianceReport {
        entity_name: request.entity_name.clone(),
        entity_type: request.entity_type.clone(),
        jurisdictions: request.jurisdictions.clone(),
        regulations_checked: targets.into_iter().map(|(name, _)| name).collect(),
        overall_compliance_score: score,
        compliance_status: status.to_owned(),
        areas_checked: AreasChecked::from(areas),
        findings,
        recommendations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(regulations: &[&str], document: Option<&str>) -> FinTechComplianceCheck {
        FinTechComplianceCheck {
            entity_name: "Acme Pay".to_owned(),
            entity_type: "payment_provider".to_owned(),
            jurisdictions: vec!["EU".to_owned()],
            regulations_to_check: regulations.iter().map(|r| (*r).to_owned()).collect(),
            document_text: document.map(str::to_owned),
            check_aml_kyc: false,
            check_payment_security: false,
            check_market_conduct: false,
            check_data_protection: false,
        }
    }

    #[test]
    fn labels_follow_thresholds() {
        assert_eq!(status_label(100), "Compliant");
        assert_eq!(status_label(90), "Compliant");
        assert_eq!(status_label(89), "Mostly Compliant");
        assert_eq!(status_label(70), "Mostly Compliant");
        assert_eq!(status_label(69), "Partially Compliant");
        assert_eq!(status_label(40), "Partially Compliant");
        assert_eq!(status_label(39), "Non-Compliant");
        assert_eq!(status_label(0), "Non-Compliant");
    }

    #[test]
    fn catalogued_regulations_without_rules_are_named() {
        let report = check(&request(&["FINRA_US"], Some("anything")));
        assert_eq!(report.findings[0].regulation, "FINRA_US");
        assert_eq!(
            report.findings[0].notes,
            "FINRA Regulations is catalogued but has no automated rule set"
        );
    }

    #[test]
    fn aliases_resolve_to_one_rule() {
        for spelling in ["MiFID II", "mifid-ii", "MiFID_II_EU"] {
            assert_eq!(rule_for(spelling).map(|r| r.regulation), Some("MiFID II"));
        }
        assert!(rule_for("FINRA").is_none());
    }

    #[test]
    fn phrases_match_on_word_boundaries() {
        let text = normalize("We use SCA. Results are sarcastic.");
        let sca = Control { name: "x", phrases: &["sca"] };
        let sar = Control { name: "y", phrases: &["sar"] };
        assert!(documents(&text, &sca));
        assert!(!documents(&text, &sar));
    }

    #[test]
    fn without_document_nothing_is_assessed() {
        let report = check(&request(&["PSD2", "GDPR"], None));

        assert!(report.findings.iter().all(|f| f.status == FindingStatus::NotAssessed));
        assert_eq!(report.overall_compliance_score, 0);
        assert_eq!(report.compliance_status, "Not Assessed");
        assert_eq!(report.recommendations, [NO_DOCUMENT]);
    }

    #[test]
    fn document_with_only_unsupported_regulations_is_not_assessed() {
        let report = check(&request(&["FINRA_US"], Some("Strong customer authentication")));

        assert_eq!(report.findings.len(), 1);
        assert_eq!(report.findings[0].status, FindingStatus::Unsupported);
        assert_eq!(report.overall_compliance_score, 0);
        assert_eq!(report.compliance_status, "Not Assessed");
        assert_eq!(report.recommendations, [NO_RULE_SET]);
    }

    #[test]
    fn document_drives_score_and_status() {
        let policy = "All logins use Strong Customer Authentication. Open banking TPP access is \
                      logged, and every incident report goes to the regulator. Personal data is \
                      processed on a lawful basis; data subject requests and data breach handling \
                      follow our runbook.";
        let report = check(&request(&["PSD2", "GDPR", "AML"], Some(policy)));

        let statuses: Vec<_> = report.findings.iter().map(|f| f.status).collect();
        assert_eq!(
            statuses,
            [FindingStatus::Compliant, FindingStatus::Compliant, FindingStatus::NonCompliant]
        );
        assert_eq!(report.overall_compliance_score, 66);
        assert_eq!(report.compliance_status, "Partially Compliant");
        assert_eq!(report.regulations_checked, ["PSD2", "GDPR", "AML/KYC"]);
        assert_eq!(report.recommendations.len(), 4);
    }

    #[test]
    fn enabled_areas_add_their_default_regulation_once() {
        let mut req = request(&["gdpr"], Some("consent"));
        req.check_data_protection = true;
        req.check_aml_kyc = true;

        let report = check(&req);
        assert_eq!(report.regulations_checked, ["GDPR", "AML/KYC"]);
        assert!(report.areas_checked.aml_kyc);
        assert!(!report.areas_checked.market_conduct);
    }

    #[test]
    fn unknown_regulations_are_reported_but_not_scored() {
        let report =
            check(&request(&["FINRA", "GDPR"], Some("consent, data subject, data breach")));

        assert_eq!(report.findings[0].status, FindingStatus::Unsupported);
        assert_eq!(report.findings[0].notes, "No automated rule set for this regulation");
        assert_eq!(report.findings[1].status, FindingStatus::Compliant);
        assert_eq!(report.overall_compliance_score, 100);
        assert_eq!(report.compliance_status, "Compliant");
    }
}
