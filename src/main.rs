use std::io::Write;

use anyhow::Context;
use askboard::{AppState, config::Config, db};
use axum::http::{HeaderValue, Method, header};
use tower_http::cors::CorsLayer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    init_logger();

    let config = Config::from_env()?;

    let db_pool = db::connect(&config.database_url)
        .await
        .context("failed to connect to database")?;
    db::migrate(&db_pool).await.context("failed to run migrations")?;

    let allowed_origin = config
        .client_url
        .parse::<HeaderValue>()
        .context("CLIENT_URL is not a valid origin")?;
    let cors = CorsLayer::new()
        .allow_origin(allowed_origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    let app = askboard::router(AppState { db_pool }).layer(cors);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    log::info!("listening on {addr}");

    axum::serve(listener, app).await?;
    Ok(())
}

fn init_logger() {
    env_logger::builder()
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] [{}]: {}",
                chrono::Local::now().format("%F %T"),
                record.level(),
                record.args()
            )
        })
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
