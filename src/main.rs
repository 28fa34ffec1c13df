use holocron::server::{config::Config, model::app::AppState, router, startup};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    if let Err(e) = run().await {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), holocron::server::error::Error> {
    let config = Config::from_env()?;
    let addr = config.bind_address()?;

    let db = startup::connect_to_database(&config).await?;

    let app = router::routes()
        .with_state(AppState::from(db))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let listener = TcpListener::bind(addr).await?;

    tracing::info!("Starting server on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
