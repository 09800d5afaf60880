use clap::Parser;
use pantry::{
    api::{self, AppState},
    cli::{commands, Cli, Commands},
    config::Settings,
    dataset::{nutrition, AllergenSearch, RecipeSearch},
    Error, Result,
};
use std::net::SocketAddr;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file if it exists
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,pantry=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let settings = Settings::from_env()?;
    settings.validate()?;

    match cli.command {
        Commands::Serve { port, host } => {
            serve(settings, port, host).await?;
        }
        Commands::Allergens { query } => {
            commands::allergens(&settings.server_url(), &query).await?;
        }
        Commands::Recipes { query, top_n } => {
            commands::recipes(&settings.server_url(), &query, top_n).await?;
        }
        Commands::Nutrition { food } => {
            commands::nutrition(&settings.server_url(), &food).await?;
        }
    }

    Ok(())
}

async fn serve(mut settings: Settings, port: Option<u16>, host: Option<String>) -> Result<()> {
    // Override settings with CLI arguments
    if let Some(port) = port {
        settings.server.port = port;
    }
    if let Some(host) = host {
        settings.server.host = host;
    }
    settings.validate()?;

    info!("Starting Pantry server");
    info!("Loading datasets...");

    let allergens = match AllergenSearch::from_file(&settings.data.allergen_path) {
        Ok(search) => {
            info!("Allergen dataset loaded ({} records)", search.len());
            Some(search)
        }
        Err(e) => {
            warn!(
                "Allergen dataset unavailable ({:?}): {}",
                settings.data.allergen_path, e
            );
            None
        }
    };

    let recipes = match RecipeSearch::from_file_or_placeholder(&settings.data.recipe_path) {
        Ok(search) => {
            info!("Recipe dataset loaded ({} records)", search.len());
            Some(search)
        }
        Err(e) => {
            warn!(
                "Recipe dataset unavailable ({:?}): {}",
                settings.data.recipe_path, e
            );
            None
        }
    };

    info!("Nutrition table ready ({} foods)", nutrition::len());

    let allergen_status = if allergens.is_some() { "Ready" } else { "Unavailable" };
    let recipe_status = if recipes.is_some() { "Ready" } else { "Unavailable" };

    let state = AppState {
        allergens,
        recipes,
        settings: settings.clone(),
    };

    let app = api::create_router(state, &settings)?;

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| Error::Internal(format!("Failed to bind to {addr}: {e}")))?;

    println!("\n========================================");
    println!("Pantry Lookup Server");
    println!("========================================");
    println!("Address: http://{addr}");
    println!("Allergens: {allergen_status}");
    println!("Recipes: {recipe_status}");
    println!("Nutrition: Ready");
    println!("\nAPI Endpoints:");
    println!("  POST /predict_allergen");
    println!("  POST /predict_nutrition");
    println!("  POST /recommend_recipes");
    println!("  GET  /health");
    println!("  GET  /ready");
    println!("\nPress Ctrl+C to stop");
    println!("========================================\n");

    info!("Server listening on {}", addr);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
    .map_err(|e| Error::Internal(format!("Server error: {e}")))?;

    info!("Shutting down...");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to install Ctrl+C handler: {}", e);
        std::future::pending::<()>().await;
    }

    info!("Received Ctrl+C, shutting down");
}
