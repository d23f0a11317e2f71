use axum::{extract::State, routing::get, Json, Router};
use estatify_common::error::EstatifyError;
use estatify_config::load_config;
use serde::Serialize;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;

mod app_state;
mod service_factory;

use app_state::AppState;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    database: bool,
}

#[axum::debug_handler]
async fn health_handler(State(state): State<AppState>) -> Result<Json<HealthResponse>, EstatifyError> {
    if let Some(db) = &state.db_client {
        if !db.is_healthy().await {
            return Err(EstatifyError::DatabaseError(
                "database unreachable".to_string(),
            ));
        }
    }
    Ok(Json(HealthResponse {
        status: "ok",
        database: state.db_client.is_some(),
    }))
}

#[tokio::main]
async fn main() {
    estatify_common::logging::init();

    let config = Arc::new(load_config().expect("Failed to load config"));
    let app_state = AppState::new(config.clone()).await;

    let api_router = Router::new()
        .route("/", get(|| async { "Welcome to Estatify API!" }))
        .route("/health", get(health_handler))
        .with_state(app_state.clone());

    let api_router = Router::new().nest("/api", {
        let mut router = api_router;
        if let Some(appointments_state) = app_state.appointments_state.clone() {
            router = router.merge(estatify_appointments::routes::routes(appointments_state));
        }
        router
    });

    let mut app = api_router;

    // Conditionally add Swagger UI and JSON endpoint if openapi feature enabled
    #[cfg(feature = "openapi")]
    {
        use estatify_appointments::doc::AppointmentsApiDoc;
        use utoipa::OpenApi;
        use utoipa_swagger_ui::SwaggerUi;

        // Define the Merged OpenAPI Documentation struct
        #[derive(OpenApi)]
        #[openapi(
            info(
                title = "Estatify API",
                version = "0.1.0",
                description = "Estatify Service API Docs",
                license(name = "MIT", url = "https://opensource.org/licenses/MIT")
            ),
            components(),
            tags( (name = "Estatify", description = "Core service endpoints")),
            servers( (url = "/api", description = "Main API Prefix")),
        )]
        struct ApiDoc;

        let mut openapi_doc = ApiDoc::openapi();
        openapi_doc.merge(AppointmentsApiDoc::openapi());
        println!("📖 Adding Swagger UI at /api/docs");

        let swagger_ui =
            SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", openapi_doc.clone());
        app = app.merge(swagger_ui);
    }

    // Serve static files in dev mode
    if cfg!(debug_assertions) {
        println!("Running in development mode, serving static files from ../../dist");

        let static_router = Router::new().nest_service("/static", ServeDir::new("../../dist"));
        app = app.merge(static_router);

        app = app.fallback_service(ServeDir::new("../dist"));
    }

    // Bind and serve
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await.expect("Failed to bind server address");
    println!("Starting server at http://{}", addr);
    println!("API endpoints available at http://{}/api", addr);

    axum::serve(listener, app.into_make_service())
        .await
        .expect("Server error");
}
