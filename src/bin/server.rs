use trivia_api::db;
use trivia_api::server::app::run_server;
use trivia_api::telemetry::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    dotenv::dotenv().ok();
    let path = dotenv::var("DB_PATH").unwrap_or_else(|_| "trivia.db".to_owned());
    let addr = dotenv::var("SERVER_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_owned());

    let pool = db::establish_connection(&path).await?;
    tracing::info!("Running db migrations...");
    db::run_migrations(&pool).await?;

    run_server(pool, &addr).await?;
    Ok(())
}
