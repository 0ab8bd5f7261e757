use axum::{
    routing::{get, post},
    Router,
};
use tower::limit::GlobalConcurrencyLimitLayer;
use tower_http::trace::{DefaultMakeSpan, TraceLayer};

use user_proto::Method;

use crate::handlers::{health, users};
use crate::state::AppState;

/// Builds the service router. At most `workers` RPCs are processed at once
/// across all methods; the rest wait for a free slot.
pub fn build_router(state: AppState, workers: usize) -> Router {
    let rpc_routes = Router::new()
        .route(Method::CreateUser.path(), post(users::create_user))
        .route(Method::GetUser.path(), post(users::get_user))
        .route(Method::UpdateUser.path(), post(users::update_user))
        .route(Method::DeleteUser.path(), post(users::delete_user))
        .route(Method::ListUsers.path(), post(users::list_users))
        // One semaphore shared by every route, not one per route
        .layer(GlobalConcurrencyLimitLayer::new(workers.max(1)));

    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .merge(rpc_routes)
        .method_not_allowed_fallback(users::method_not_allowed)
        .fallback(users::unknown_method)
        .with_state(state)
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
}
