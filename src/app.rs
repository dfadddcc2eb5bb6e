use crate::state::AppState;
use axum::Router;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

pub fn create_app(state: AppState) -> Router {
    let body_limit = RequestBodyLimitLayer::new(state.config.max_body_bytes);

    crate::routes::configure_routes()
        .layer(TraceLayer::new_for_http())
        .layer(body_limit)
        .with_state(state)
}
