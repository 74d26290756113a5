use anyhow::Context;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use recipe_catalog::controllers::recipe::RecipeController;
use recipe_catalog::domain::recipe::RecipeService;
use recipe_catalog::infrastructure::config::{Config, LogFormat};
use recipe_catalog::infrastructure::db::{check_connection, create_pool, run_migrations};
use recipe_catalog::infrastructure::http::{build_router, start_http_server};
use recipe_catalog::infrastructure::repositories::RecipeRepository;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()
        .map_err(|err| anyhow::anyhow!("failed to load configuration: {}", err))?;

    init_logging(&config);

    tracing::info!(
        "Starting recipe catalog on {}:{}",
        config.host,
        config.port
    );

    let pool = create_pool(&config.database_url, config.db_max_connections)
        .await
        .context("failed to create database pool")?;
    tracing::info!("Database connection pool created");

    check_connection(&pool)
        .await
        .context("database is not reachable")?;
    tracing::info!("Database connection verified");

    run_migrations(&pool)
        .await
        .context("failed to apply database schema")?;
    tracing::info!("Database schema up to date");

    let pool = Arc::new(pool);

    let recipe_repo = Arc::new(RecipeRepository::new(pool.clone()));
    let recipe_service = Arc::new(RecipeService::new(recipe_repo, config.paging_policy()));
    let recipe_controller = Arc::new(RecipeController::new(recipe_service));

    let app = build_router(pool.clone(), &config, recipe_controller);
    start_http_server(app, &config)
        .await
        .context("HTTP server failed")?;

    pool.close().await;
    tracing::info!("Database pool closed");

    Ok(())
}

fn init_logging(config: &Config) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "recipe_catalog=debug,tower_http=debug".into());

    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
