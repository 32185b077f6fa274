//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    extract::Extension,
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        Method,
    },
    middleware,
    routing::{get, post, put},
    Router,
};
use sqlx::PgPool;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::domains::auth::JwtService;
use crate::server::middleware::jwt_auth_middleware;
use crate::server::routes;

/// Shared application state
#[derive(Clone)]
pub struct AxumAppState {
    pub db_pool: PgPool,
    pub jwt_service: Arc<JwtService>,
}

/// Build the Axum application router
///
/// All API routes live under /api; the health check sits at the root.
/// The JWT middleware is permissive - it attaches the authenticated
/// user to request extensions when a valid token is present, and
/// protected handlers reject requests without one.
pub fn build_app(pool: PgPool, jwt_secret: &str) -> Router {
    let jwt_service = Arc::new(JwtService::new(jwt_secret));

    let app_state = AxumAppState {
        db_pool: pool,
        jwt_service: jwt_service.clone(),
    };

    // CORS configuration for the browser frontend
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE]);

    // Clone jwt_service for middleware closure
    let jwt_service_for_middleware = jwt_service.clone();

    let api = Router::new()
        .route("/", get(routes::index_handler))
        .route("/auth/register", post(routes::register_handler))
        .route("/auth/login", post(routes::login_handler))
        .route(
            "/services",
            get(routes::list_services_handler).post(routes::create_service_handler),
        )
        .route(
            "/services/:id",
            get(routes::get_service_handler)
                .put(routes::update_service_handler)
                .delete(routes::delete_service_handler),
        )
        .route("/requests", post(routes::create_request_handler))
        .route("/requests/:id", get(routes::get_request_handler))
        .route(
            "/requests/:id/status",
            put(routes::update_request_status_handler),
        )
        .route("/reviews", post(routes::create_review_handler))
        .route(
            "/reviews/service/:service_id",
            get(routes::list_service_reviews_handler),
        );

    Router::new()
        .nest("/api", api)
        .route("/health", get(routes::health_handler))
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(middleware::from_fn(move |req, next| {
            jwt_auth_middleware(jwt_service_for_middleware.clone(), req, next)
        }))
        .layer(Extension(app_state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
