use crate::Compliance;
use crate::error::{ComplianceError, ComplianceErrorExt};
use crate::models::{
    AmlScreeningRequest, AmlScreeningResult, ComplianceHealth, ComplianceReport,
    FinTechComplianceCheck, RegulationCatalogue, TransactionAnalysis, TransactionData,
};
use axum::Json;
use axum::extract::State;
use regscope_derive::api_handler;
use regscope_domain::constants::{FINTECH_TAG, SERVICE_NAME};
use regscope_domain::regulations::SUPPORTED_REGULATIONS;
use regscope_kernel::prelude::ApiState;

fn slice(state: &ApiState) -> Result<&Compliance, ComplianceError> {
    state.try_get_slice::<Compliance>().context("compliance slice is not registered")
}

#[api_handler(
    post,
    path = "/aml/screen",
    request_body = AmlScreeningRequest,
    responses(
        (status = OK, description = "Screening verdict", body = AmlScreeningResult),
        (status = BAD_REQUEST, description = "Invalid customer data"),
        (status = BAD_GATEWAY, description = "Risk analyst unavailable"),
    ),
    tag = FINTECH_TAG,
)]
pub(crate) async fn screen_customer(
    State(state): State<ApiState>,
    Json(request): Json<AmlScreeningRequest>,
) -> Result<Json<AmlScreeningResult>, ComplianceError> {
    slice(&state)?.service.screen_customer(&request).context("AML screening failed").map(Json)
}

#[api_handler(
    post,
    path = "/transaction/analyze",
    request_body = TransactionData,
    responses(
        (status = OK, description = "Transaction risk analysis", body = TransactionAnalysis),
        (status = BAD_REQUEST, description = "Invalid transaction"),
        (status = BAD_GATEWAY, description = "Risk analyst unavailable"),
    ),
    tag = FINTECH_TAG,
)]
pub(crate) async fn analyze_transaction(
    State(state): State<ApiState>,
    Json(transaction): Json<TransactionData>,
) -> Result<Json<TransactionAnalysis>, ComplianceError> {
    slice(&state)?
        .service
        .analyze_transaction(&transaction)
        .context("Transaction analysis failed")
        .map(Json)
}

#[api_handler(
    post,
    path = "/compliance/check",
    request_body = FinTechComplianceCheck,
    responses(
        (status = OK, description = "Compliance report", body = ComplianceReport),
        (status = BAD_REQUEST, description = "Invalid entity"),
    ),
    tag = FINTECH_TAG,
)]
pub(crate) async fn check_compliance(
    State(state): State<ApiState>,
    Json(request): Json<FinTechComplianceCheck>,
) -> Result<Json<ComplianceReport>, ComplianceError> {
    slice(&state)?.service.check_compliance(&request).context("Compliance check failed").map(Json)
}

#[api_handler(
    get,
    path = "/regulations/fintech",
    responses((status = OK, description = "Supported regulations by category", body = RegulationCatalogue)),
    tag = FINTECH_TAG,
)]
pub(crate) async fn list_regulations() -> Json<RegulationCatalogue> {
    Json(RegulationCatalogue::current())
}

#[api_handler(
    get,
    path = "/health",
    responses((status = OK, description = "Compliance service status", body = ComplianceHealth)),
    tag = FINTECH_TAG,
)]
pub(crate) async fn health(
    State(state): State<ApiState>,
) -> Result<Json<ComplianceHealth>, ComplianceError> {
    let compliance = slice(&state)?;

    Ok(Json(ComplianceHealth {
        status: "healthy".to_owned(),
        service: SERVICE_NAME.to_owned(),
        version: env!("CARGO_PKG_VERSION").to_owned(),
        analyst: compliance.service.analyst_name().to_owned(),
        aml_service: "operational".to_owned(),
        supported_regulations: SUPPORTED_REGULATIONS.iter().map(|r| (*r).to_owned()).collect(),
    }))
}
