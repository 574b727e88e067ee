use chrono::{TimeZone, Utc};
use proptest::prelude::*;
use regscope_compliance::analyst::RuleBasedAnalyst;
use regscope_compliance::models::{
    AmlScreeningRequest, RiskLevel, ScreeningType, TransactionData,
};
use regscope_compliance::service::{AmlService, clamp_score};

fn transaction(amount: f64, from: Option<&str>, to: Option<&str>, kind: &str) -> TransactionData {
    TransactionData {
        transaction_id: "TX-P".to_owned(),
        timestamp: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).single().expect("valid date"),
        amount,
        currency: "USD".to_owned(),
        sender_account: "S".to_owned(),
        receiver_account: "R".to_owned(),
        transaction_type: kind.to_owned(),
        sender_country: from.map(str::to_owned),
        receiver_country: to.map(str::to_owned),
        purpose: None,
    }
}

fn country() -> impl Strategy<Value = Option<&'static str>> {
    prop::option::of(prop::sample::select(vec!["US", "DE", "IR", "KP", "SG"]))
}

proptest! {
    #[test]
    fn transaction_scores_stay_in_range(
        amount in 0.0f64..1_000_000.0,
        from in country(),
        to in country(),
        kind in prop::sample::select(vec!["transfer", "cash_deposit", "withdrawal", "payment"]),
    ) {
        let service = AmlService::new(RuleBasedAnalyst::default());
        let analysis = service
            .analyze_transaction(&transaction(amount, from, to, kind))
            .expect("valid transaction");

        prop_assert!(analysis.risk_score <= 100);
        prop_assert_eq!(analysis.risk_level, RiskLevel::from_score(analysis.risk_score));
        prop_assert!(!analysis.recommendations.is_empty());
    }

    #[test]
    fn screening_scores_stay_in_range(
        is_pep in any::<bool>(),
        nationality in country(),
        enhanced in any::<bool>(),
        amount in prop::option::of(0.0f64..200_000.0),
    ) {
        let request = AmlScreeningRequest {
            customer_name: "Alex Morgan".to_owned(),
            customer_id: None,
            date_of_birth: None,
            nationality: nationality.map(str::to_owned),
            country_of_residence: None,
            is_pep,
            transaction_data: amount.map(|a| transaction(a, Some("US"), Some("IR"), "transfer")),
            screening_type: if enhanced { ScreeningType::Enhanced } else { ScreeningType::Standard },
        };

        let result = AmlService::new(RuleBasedAnalyst::default())
            .screen_customer(&request)
            .expect("valid request");

        prop_assert!(result.overall_risk_score <= 100);
        prop_assert_eq!(result.pep_match, is_pep);
        prop_assert!(result.screening_id.starts_with("AML-"));
        prop_assert_eq!(result.screening_id.len(), 18);
        if is_pep || enhanced {
            prop_assert!(result.requires_enhanced_dd);
        }
    }

    #[test]
    fn clamped_scores_are_bounded(raw in any::<f64>()) {
        prop_assert!(clamp_score(raw) <= 100);
    }
}
