use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::Config;
use crate::middleware::{
    metrics_handler, metrics_middleware, require_hotel_auth, security_headers_middleware, trace_id,
};
use crate::routes::{admin, bookings, health, hotels, notify};
use crate::services::{EmailService, Notifier};

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: Arc<Config>,
    pub notifier: Notifier,
}

pub fn create_app(config: Config, pool: PgPool) -> Router {
    let config = Arc::new(config);

    // Notification worker delivering through the configured email provider
    let email = EmailService::new(config.email.clone());
    let notifier = Notifier::spawn(email);

    let state = AppState {
        pool,
        config: config.clone(),
        notifier,
    };

    // Build CORS layer based on configuration
    let cors = if config.security.cors_origins.is_empty() {
        // Default: allow any origin (for development)
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        // Production: only allow specified origins
        use tower_http::cors::AllowOrigin;
        let origins: Vec<_> = config
            .security
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    // Admin routes (require a hotel session token)
    let admin_routes = Router::new()
        .route("/api/v1/admin/bookings", get(admin::list_bookings))
        .route(
            "/api/v1/admin/bookings/:id/respond",
            post(admin::respond_to_booking),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_hotel_auth,
        ));

    // Public API routes (no authentication required)
    let api_routes = Router::new()
        .route("/api/v1/hotels", get(hotels::list_hotels))
        .route("/api/v1/hotels/:code", get(hotels::get_hotel))
        .route("/api/v1/hotels/:code/bookings", post(bookings::create_booking))
        .route("/api/v1/bookings", get(bookings::list_bookings))
        .route("/api/v1/bookings/:id", get(bookings::get_booking))
        .route("/api/v1/admin/login", post(admin::login))
        .route("/api/v1/notify/hotels", post(notify::notify_hotels));

    // Operational routes
    let ops_routes = Router::new()
        .route("/api/health", get(health::health_check))
        .route("/api/health/ready", get(health::ready))
        .route("/api/health/live", get(health::live))
        .route("/metrics", get(metrics_handler));

    // Merge all routes
    Router::new()
        .merge(ops_routes)
        .merge(api_routes)
        .merge(admin_routes)
        // Global middleware (order matters: bottom layers run first)
        .layer(middleware::from_fn(security_headers_middleware))
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(trace_id))
        .layer(cors)
        .with_state(state)
}
