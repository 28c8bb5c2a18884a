use report_desk_axum::{AppState, init, report_desk_router, seed_authorities};

mod server;

use server::{init_tracing, serve_http};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    dotenvy::dotenv().ok();
    init_tracing("demo_server");

    init().await?;

    if let Ok(seed) = std::env::var("SEED_AUTHORITIES") {
        let created = seed_authorities(&seed).await?;
        tracing::info!("Seeded {} authorities", created);
    }

    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3001);

    let app = report_desk_router(AppState::default());

    serve_http(port, app).await?;
    Ok(())
}
