use axum::{routing::get, Router};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

mod api;
mod config;
mod database;
mod error;
mod geometry;
mod handlers;

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up DATABASE_URL etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    // Initialize configuration (this loads the config singleton)
    let config = crate::config::config();
    tracing::info!("Starting GeoData API in {:?} mode", config.environment);

    // Bring the schema up to date before accepting traffic. A failure here
    // leaves the server running degraded; /health reports the database state.
    if let Err(e) = crate::database::manager::DatabaseManager::migrate().await {
        tracing::error!("Database migration failed: {}", e);
    }

    let app = app();

    // Allow tests or deployments to override port via env
    let port = std::env::var("GEODATA_API_PORT")
        .ok()
        .or_else(|| std::env::var("PORT").ok())
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(3000);

    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    println!("🚀 GeoData API server listening on http://{}", bind_addr);

    axum::serve(listener, app).await.expect("server");
}

fn app() -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .merge(geo_data_routes())
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

fn geo_data_routes() -> Router {
    use axum::routing::post;
    use handlers::geo_data;

    Router::new()
        .route("/geo-data/create/", post(geo_data::geo_create))
        .route("/geo-data/list/", get(geo_data::geo_list))
        .route(
            "/geo-data/:id",
            get(geo_data::geo_show)
                .put(geo_data::geo_update)
                .delete(geo_data::geo_delete),
        )
}

async fn root() -> axum::response::Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    axum::response::Json(json!({
        "success": true,
        "data": {
            "name": "GeoData API",
            "version": version,
            "description": "Geometry storage API built with Rust (Axum) and PostGIS",
            "endpoints": {
                "home": "/",
                "health": "/health",
                "create": "POST /geo-data/create/",
                "list": "GET /geo-data/list/",
                "show": "GET /geo-data/:id",
                "update": "PUT /geo-data/:id",
                "delete": "DELETE /geo-data/:id",
            }
        }
    }))
}

async fn health() -> impl axum::response::IntoResponse {
    let now = chrono::Utc::now();

    match crate::database::manager::DatabaseManager::health_check().await {
        Ok(_) => (
            axum::http::StatusCode::OK,
            axum::response::Json(json!({
                "success": true,
                "data": {
                    "status": "ok",
                    "timestamp": now,
                    "database": "ok"
                }
            })),
        ),
        Err(e) => (
            axum::http::StatusCode::SERVICE_UNAVAILABLE,
            axum::response::Json(json!({
                "success": false,
                "error": "database unavailable",
                "data": {
                    "status": "degraded",
                    "timestamp": now,
                    "database_error": e.to_string()
                }
            })),
        ),
    }
}
