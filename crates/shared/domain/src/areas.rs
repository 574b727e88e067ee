use bitflags::bitflags;

pub const AML_KYC: &str = "aml_kyc";
pub const PAYMENT_SECURITY: &str = "payment_security";
pub const MARKET_CONDUCT: &str = "market_conduct";
pub const DATA_PROTECTION: &str = "data_protection";

bitflags! {
    /// Compliance areas a check can cover.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct ComplianceAreas: u8 {
        const AML_KYC = 1 << 0;
        const PAYMENT_SECURITY = 1 << 1;
        const MARKET_CONDUCT = 1 << 2;
        const DATA_PROTECTION = 1 << 3;
    }
}

impl ComplianceAreas {
    /// `(flag, wire name, human label)` in display order.
    pub const LABELS: [(Self, &'static str, &'static str); 4] = [
        (Self::AML_KYC, AML_KYC, "AML/KYC screening"),
        (Self::PAYMENT_SECURITY, PAYMENT_SECURITY, "Payment security (PCI-DSS)"),
        (Self::MARKET_CONDUCT, MARKET_CONDUCT, "Market conduct (MiFID II)"),
        (Self::DATA_PROTECTION, DATA_PROTECTION, "Data protection (GDPR)"),
    ];

    /// The default selection of a compliance check: AML/KYC and data protection.
    pub const DEFAULT_CHECK: Self = Self::AML_KYC.union(Self::DATA_PROTECTION);
}
