use jobmarket_backend::{
    api_router,
    config::{get_config, init_config},
    database::{pool::create_pool, seed},
    middleware::rate_limit::{limit_middleware, RequestLimiter},
    AppState,
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    init_config()?;
    let config = get_config();

    let pool = create_pool().await?;
    sqlx::migrate!("./migrations").run(&pool).await?;

    if let Some(dir) = &config.seed_data_dir {
        info!("Importing seed data from {}", dir);
        seed::import_dir(&pool, std::path::Path::new(dir)).await?;
    }

    let app_state = AppState::new(pool);

    let app = api_router()
        .with_state(app_state)
        .layer(axum::middleware::from_fn_with_state(
            RequestLimiter::per_second(config.api_rps),
            limit_middleware,
        ))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = config.server_address.parse()?;
    info!("Server listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
