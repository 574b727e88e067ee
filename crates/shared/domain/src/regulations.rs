//! The catalogue of financial regulations RegScope covers.

use serde::Serialize;

/// One regulation in the catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Regulation {
    pub id: &'static str,
    pub name: &'static str,
    pub jurisdiction: &'static str,
    pub category: &'static str,
}

/// A category of regulations, keyed by a snake_case identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RegulationGroup {
    pub key: &'static str,
    pub title: &'static str,
    pub regulations: &'static [Regulation],
}

/// Short names advertised by the health endpoint and the compliance page.
pub const SUPPORTED_REGULATIONS: &[&str] =
    &["PSD2", "MiFID II", "AML/KYC", "PCI-DSS", "GDPR", "Basel III", "FATF"];

pub const CATALOGUE: &[RegulationGroup] = &[
    RegulationGroup {
        key: "payment_services",
        title: "Payment Services",
        regulations: &[
            Regulation {
                id: "PSD2_EU",
                name: "Payment Services Directive 2",
                jurisdiction: "European Union",
                category: "Payment Services",
            },
            Regulation {
                id: "PCI_DSS_GLOBAL",
                name: "Payment Card Industry Data Security Standard",
                jurisdiction: "Global",
                category: "Payment Security",
            },
        ],
    },
    RegulationGroup {
        key: "aml_kyc",
        title: "AML / KYC",
        regulations: &[
            Regulation {
                id: "AML_KYC_GLOBAL",
                name: "Anti-Money Laundering & Know Your Customer",
                jurisdiction: "Global (FATF-based)",
                category: "Financial Crime Prevention",
            },
            Regulation {
                id: "5AMLD_EU",
                name: "5th Anti-Money Laundering Directive",
                jurisdiction: "European Union",
                category: "AML/CFT",
            },
        ],
    },
    RegulationGroup {
        key: "securities",
        title: "Securities",
        regulations: &[
            Regulation {
                id: "MiFID_II_EU",
                name: "Markets in Financial Instruments Directive II",
                jurisdiction: "European Union",
                category: "Securities & Markets",
            },
            Regulation {
                id: "FINRA_US",
                name: "FINRA Regulations",
                jurisdiction: "United States",
                category: "Securities",
            },
        ],
    },
    RegulationGroup {
        key: "banking",
        title: "Banking",
        regulations: &[
            Regulation {
                id: "BASEL_III",
                name: "Basel III Capital Requirements",
                jurisdiction: "Global",
                category: "Banking Regulation",
            },
            Regulation {
                id: "DODD_FRANK_US",
                name: "Dodd-Frank Wall Street Reform",
                jurisdiction: "United States",
                category: "Banking & Consumer Protection",
            },
        ],
    },
    RegulationGroup {
        key: "data_protection",
        title: "Data Protection",
        regulations: &[Regulation {
            id: "GDPR_EU",
            name: "General Data Protection Regulation",
            jurisdiction: "European Union",
            category: "Data Protection",
        }],
    },
];

/// Number of regulations across all groups.
#[must_use]
pub fn total_regulations() -> usize {
    CATALOGUE.iter().map(|group| group.regulations.len()).sum()
}

/// Group keys in catalogue order.
pub fn category_keys() -> impl Iterator<Item = &'static str> {
    CATALOGUE.iter().map(|group| group.key)
}

/// Looks a regulation up by its catalogue id, case-insensitively.
#[must_use]
pub fn find(id: &str) -> Option<&'static Regulation> {
    CATALOGUE.iter().flat_map(|group| group.regulations).find(|r| r.id.eq_ignore_ascii_case(id))
}
