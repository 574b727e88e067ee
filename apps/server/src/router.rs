use axum::Router;
use regscope::domain::constants::FINTECH_API_PREFIX;
use regscope::kernel::prelude::ApiState;
use regscope::server::router::{compliance_router, pages_router, system_router};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_scalar::{Scalar, Servable};

#[derive(OpenApi)]
struct ApiDoc;

#[allow(unreachable_pub)]
pub fn init(state: ApiState) -> Router {
    let api = ApiDoc::openapi();

    // Separate the OpenAPI routes and the API documentation object
    let (openapi_routes, api_doc) = OpenApiRouter::with_openapi(api)
        .merge(system_router())
        .nest(FINTECH_API_PREFIX, compliance_router())
        .with_state(state)
        .split_for_parts();

    // Create the Scalar UI routes
    let scalar_routes = Scalar::with_url("/api", api_doc);

    // Public pages carry the 404 fallback, so they are merged last
    Router::new()
        .merge(openapi_routes)
        .merge(scalar_routes)
        .merge(pages_router())
        .layer(TraceLayer::new_for_http())
}
