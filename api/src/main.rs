use posts_api::{AppState, Config, PostStore, create_router};
use std::{error::Error, sync::Arc};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("posts_api=info,tower_http=info")),
        )
        .with_target(false)
        .compact()
        .init();

    let config = Config::from_env()?;

    let store = Arc::new(PostStore::seeded()?);
    info!("Seeded {} posts", store.len());

    let app = create_router(AppState::new(store, &config), &config);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("API Endpoints:");
    info!("  GET    /posts                - List posts with comments");
    info!("  GET    /posts/{{id}}/comments  - List comments of a post");
    info!("  POST   /posts/{{id}}/comments  - Add a comment to a post");

    axum::serve(listener, app).await?;
    Ok(())
}
