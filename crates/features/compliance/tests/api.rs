#![cfg(feature = "server")]

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use regscope_compliance::models::{
    AmlScreeningResult, ComplianceHealth, ComplianceReport, FindingStatus, RegulationCatalogue,
    RiskLevel, TransactionAnalysis,
};
use regscope_compliance::{init, router::router};
use regscope_domain::config::ApiConfig;
use regscope_kernel::prelude::ApiState;
use serde_json::{Value, json};
use tower::ServiceExt;

fn app() -> Router {
    let config = ApiConfig::default();
    let slice = init(&config.compliance).expect("compliance slice");
    let state =
        ApiState::builder().config(config).register_slice(slice).build().expect("api state");

    let (router, _) = router().split_for_parts();
    router.with_state(state)
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.expect("router responds");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

fn post(path: &str, body: &Value) -> Request<Body> {
    Request::post(path)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

fn get(path: &str) -> Request<Body> {
    Request::get(path).body(Body::empty()).expect("request")
}

#[tokio::test]
async fn screening_returns_verdict() {
    let (status, body) = send(
        app(),
        post(
            "/aml/screen",
            &json!({
                "customer_name": "Jane Doe",
                "nationality": "IR",
                "is_pep": true,
                "screening_type": "enhanced"
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK, "{body}");
    let result: AmlScreeningResult = serde_json::from_value(body).expect("screening result");
    // 10 base + 35 PEP + 30 geography + 10 enhanced
    assert_eq!(result.overall_risk_score, 85);
    assert_eq!(result.risk_level, RiskLevel::Critical);
    assert!(result.pep_match);
    assert!(result.requires_enhanced_dd);
    assert_eq!(result.risk_indicators.len(), 2);
}

#[tokio::test]
async fn empty_customer_name_is_bad_request() {
    let (status, body) =
        send(app(), post("/aml/screen", &json!({ "customer_name": " " }))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].as_str().is_some_and(|d| d.contains("customer_name")));
}

#[tokio::test]
async fn unknown_fields_are_rejected() {
    let (status, _) = send(
        app(),
        post("/aml/screen", &json!({ "customer_name": "Jane Doe", "risk": "none" })),
    )
    .await;

    assert!(status.is_client_error());
}

#[tokio::test]
async fn transaction_analysis_flags_structuring() {
    let (status, body) = send(
        app(),
        post(
            "/transaction/analyze",
            &json!({
                "transaction_id": "TX-100",
                "timestamp": "2024-05-01T10:00:00Z",
                "amount": 9800.0,
                "currency": "USD",
                "sender_account": "ACC-1",
                "receiver_account": "ACC-2",
                "transaction_type": "transfer",
                "purpose": "Consulting fee"
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK, "{body}");
    let analysis: TransactionAnalysis = serde_json::from_value(body).expect("analysis");
    assert_eq!(analysis.transaction_id, "TX-100");
    assert_eq!(analysis.risk_score, 35);
    assert_eq!(analysis.risk_level, RiskLevel::Medium);
    assert!(analysis.red_flags.iter().any(|f| f.contains("structuring")));
}

#[tokio::test]
async fn negative_amount_is_bad_request() {
    let (status, _) = send(
        app(),
        post(
            "/transaction/analyze",
            &json!({
                "transaction_id": "TX-101",
                "timestamp": "2024-05-01T10:00:00Z",
                "amount": -5.0,
                "currency": "USD",
                "sender_account": "ACC-1",
                "receiver_account": "ACC-2",
                "transaction_type": "transfer"
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn compliance_check_reports_findings() {
    let (status, body) = send(
        app(),
        post(
            "/compliance/check",
            &json!({
                "entity_name": "Acme Pay",
                "entity_type": "payment_provider",
                "jurisdictions": ["EU"],
                "regulations_to_check": ["PSD2"],
                "document_text": "Strong Customer Authentication for every payment; open banking access; incident reporting within 4 hours. Consent is our lawful basis; data subject rights and data breach notification are documented.",
                "check_aml_kyc": false
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK, "{body}");
    let report: ComplianceReport = serde_json::from_value(body).expect("report");
    assert_eq!(report.regulations_checked, ["PSD2", "GDPR"]);
    assert!(report.findings.iter().all(|f| f.status == FindingStatus::Compliant));
    assert_eq!(report.overall_compliance_score, 100);
    assert_eq!(report.compliance_status, "Compliant");
    assert!(report.areas_checked.data_protection);
    assert!(!report.areas_checked.aml_kyc);
}

#[tokio::test]
async fn regulation_catalogue_is_listed() {
    let (status, body) = send(app(), get("/regulations/fintech")).await;

    assert_eq!(status, StatusCode::OK);
    let catalogue: RegulationCatalogue = serde_json::from_value(body).expect("catalogue");
    assert_eq!(catalogue.total_regulations, 9);
    assert_eq!(
        catalogue.categories,
        ["payment_services", "aml_kyc", "securities", "banking", "data_protection"]
    );
    assert_eq!(
        catalogue.regulations.get("data_protection").and_then(|r| r.first()).map(|r| r.id.as_str()),
        Some("GDPR_EU")
    );
}

#[tokio::test]
async fn health_reports_analyst() {
    let (status, body) = send(app(), get("/health")).await;

    assert_eq!(status, StatusCode::OK);
    let health: ComplianceHealth = serde_json::from_value(body).expect("health");
    assert_eq!(health.status, "healthy");
    assert_eq!(health.analyst, "rule-based");
    assert_eq!(health.supported_regulations.len(), 7);
}

#[tokio::test]
async fn missing_slice_is_internal_error() {
    let state = ApiState::builder().config(ApiConfig::default()).build().expect("api state");
    let (router, _) = router().split_for_parts();

    let (status, body) = send(router.with_state(state), get("/health")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["detail"], "An internal error occurred");
}
