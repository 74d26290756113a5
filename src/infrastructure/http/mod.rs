pub mod extract;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::controllers::{health, recipe::RecipeController};
use crate::infrastructure::auth::request_id_middleware;
use crate::infrastructure::config::Config;
use crate::infrastructure::db::DbPool;

/// Build the application router with every route and layer
pub fn build_router(
    pool: Arc<DbPool>,
    config: &Config,
    recipe_controller: Arc<RecipeController>,
) -> Router {
    let recipe_routes = Router::new()
        .route(
            "/recipes",
            get(RecipeController::list_recipes).post(RecipeController::create_recipe),
        )
        .route(
            "/recipes/:id",
            get(RecipeController::get_recipe)
                .put(RecipeController::update_recipe)
                .delete(RecipeController::delete_recipe),
        )
        .route("/recipes/:id/rating", post(RecipeController::rate_recipe))
        .with_state(recipe_controller);

    let app = Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::health_ready))
        .with_state(pool)
        .merge(recipe_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::from_fn(request_id_middleware)),
        );

    if config.is_development() {
        app.layer(CorsLayer::permissive())
    } else {
        app
    }
}

/// Serve `app` until Ctrl-C or SIGTERM
pub async fn start_http_server(app: Router, config: &Config) -> Result<(), std::io::Error> {
    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
