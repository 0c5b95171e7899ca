use axum::{routing::get, Router};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod api;
pub mod auth;
pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod store;

/// Build the application router. Shared between the server binary and the
/// integration tests.
pub fn app() -> Router {
    Router::new()
        // Public
        .route("/", get(root))
        .route("/health", get(health))
        // Authenticated API
        .merge(contact_routes())
        .merge(user_routes())
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

fn contact_routes() -> Router {
    use handlers::contacts;

    Router::new()
        .route("/v1/contacts", get(contacts::list).post(contacts::create))
        .route(
            "/v1/contacts/:contactId",
            get(contacts::get).patch(contacts::update).delete(contacts::remove),
        )
        .layer(axum::middleware::from_fn(middleware::jwt_auth_middleware))
}

fn user_routes() -> Router {
    use handlers::users;

    Router::new()
        .route("/v1/users/profile", get(users::profile))
        .layer(axum::middleware::from_fn(middleware::jwt_auth_middleware))
}

async fn root() -> axum::response::Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    axum::response::Json(json!({
        "code": 200,
        "message": "Success",
        "app_version": version,
        "result": [{
            "name": "Contact API",
            "description": "Contact book REST API with per-user ownership scoping",
            "endpoints": {
                "home": "/ (public)",
                "health": "/health (public)",
                "contacts": "/v1/contacts[/:contactId] (protected)",
                "profile": "/v1/users/profile (protected)",
            }
        }]
    }))
}

async fn health() -> impl axum::response::IntoResponse {
    let now = chrono::Utc::now();

    match database::DatabaseManager::health_check().await {
        Ok(_) => (
            axum::http::StatusCode::OK,
            axum::response::Json(json!({
                "code": 200,
                "message": "Success",
                "app_version": env!("CARGO_PKG_VERSION"),
                "result": [{
                    "status": "ok",
                    "timestamp": now,
                    "database": "ok"
                }]
            })),
        ),
        Err(e) => (
            axum::http::StatusCode::SERVICE_UNAVAILABLE,
            axum::response::Json(json!({
                "code": 503,
                "message": "Database unavailable",
                "app_version": env!("CARGO_PKG_VERSION"),
                "result": [{
                    "status": "degraded",
                    "timestamp": now,
                    "database_error": e.to_string()
                }]
            })),
        ),
    }
}
