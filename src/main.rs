use axum::http::{header, HeaderValue, Method};
use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use classroom_api::config::{self, AppConfig};
use classroom_api::handlers::{self, AppState};
use classroom_api::store::Store;

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up DATABASE_URL, FRONTEND_URL, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = config::config();
    tracing::info!("Starting Classroom API in {:?} mode", config.environment);

    // Open the store explicitly at startup; handlers get it via state.
    let store = Store::connect(&config.database)
        .await
        .unwrap_or_else(|e| panic!("failed to connect to database: {}", e));
    store
        .migrate()
        .await
        .unwrap_or_else(|e| panic!("failed to run migrations: {}", e));

    let app = app(AppState { store: store.clone() }, config);

    // Allow tests or deployments to override port via env
    let port = std::env::var("PORT")
        .ok()
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(config.server.port);

    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    println!("🚀 Classroom API server listening on http://{}", bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("server");

    // Explicit lifecycle: close the pool once the server drains.
    store.close().await;
}

fn app(state: AppState, config: &AppConfig) -> Router {
    let router = Router::new()
        // Service endpoints
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        // Resource API
        .merge(subject_routes())
        .merge(department_routes())
        .with_state(state);

    let router = match cors_layer(config) {
        Some(cors) => router.layer(cors),
        None => router,
    };

    router.layer(TraceLayer::new_for_http())
}

fn subject_routes() -> Router<AppState> {
    use handlers::subjects;

    Router::new()
        // Collection operations (no delete: subjects are never removed here)
        .route(
            "/api/subjects",
            get(subjects::subject_list).post(subjects::subject_create),
        )
        // Record operations
        .route(
            "/api/subjects/:id",
            get(subjects::subject_show).put(subjects::subject_update),
        )
}

fn department_routes() -> Router<AppState> {
    use handlers::departments;

    Router::new()
        .route(
            "/api/departments",
            get(departments::department_list).post(departments::department_create),
        )
        .route(
            "/api/departments/:id",
            get(departments::department_show)
                .put(departments::department_update)
                .delete(departments::department_delete),
        )
}

/// Build the CORS layer for the single configured frontend origin. An unset
/// or malformed origin leaves CORS disabled with a warning.
fn cors_layer(config: &AppConfig) -> Option<CorsLayer> {
    let origin = config.security.frontend_url.as_deref()?;

    if !config::is_valid_origin(origin) {
        tracing::warn!("FRONTEND_URL {:?} is not a plain http(s) origin; CORS disabled", origin);
        return None;
    }

    let origin = match origin.parse::<HeaderValue>() {
        Ok(value) => value,
        Err(_) => {
            tracing::warn!("FRONTEND_URL {:?} is not a valid header value; CORS disabled", origin);
            return None;
        }
    };

    Some(
        CorsLayer::new()
            .allow_origin(origin)
            .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
            .allow_headers([header::CONTENT_TYPE])
            .allow_credentials(true),
    )
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", e);
    }
}
