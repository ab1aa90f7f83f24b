// File: crates/services/tourify_backend/src/main.rs
use axum::{routing::get, Router};
use std::sync::Arc;
use tokio::net::TcpListener;
use tourify_config::load_config;
use tourify_tours::routes as tour_routes;
use tower_http::trace::TraceLayer;
use tracing::info;

#[tokio::main]
async fn main() {
    tourify_common::logging::init();

    let config = Arc::new(load_config().expect("Failed to load config"));

    // Tour routes are mounted at the root so the public paths stay
    // /tour/... as clients expect them.
    #[allow(unused_mut)] // mutable only when the openapi feature adds routes
    let mut app = Router::new()
        .route("/", get(|| async { "Welcome to the Tourify API!" }))
        .merge(tour_routes::routes(config.clone()));

    // Conditionally add Swagger UI and JSON endpoint if openapi feature enabled
    #[cfg(feature = "openapi")]
    {
        use tourify_tours::doc::TourApiDoc;
        use utoipa::OpenApi;
        use utoipa_swagger_ui::SwaggerUi;

        info!("Adding Swagger UI at /docs");
        let swagger_ui = SwaggerUi::new("/docs").url("/docs/openapi.json", TourApiDoc::openapi());
        app = app.merge(swagger_ui);
    }

    let app = app.layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr)
        .await
        .expect("Failed to bind server address");
    info!("Starting server at http://{}", addr);

    axum::serve(listener, app.into_make_service())
        .await
        .expect("Server error");
}
