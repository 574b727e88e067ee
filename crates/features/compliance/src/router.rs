use crate::handlers;
use regscope_kernel::prelude::ApiState;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

/// Compliance endpoints, relative to the API prefix they get nested under.
pub fn router() -> OpenApiRouter<ApiState> {
    OpenApiRouter::new()
        .routes(routes!(handlers::screen_customer))
        .routes(routes!(handlers::analyze_transaction))
        .routes(routes!(handlers::check_compliance))
        .routes(routes!(handlers::list_regulations))
        .routes(routes!(handlers::health))
}
