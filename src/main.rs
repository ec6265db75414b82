mod model;
mod server;

use tokio::net::TcpListener;

use crate::server::{
    config::Config,
    error::AppError,
    service::{cache::AppointmentCache, token::TokenService},
    startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let tokens = TokenService::new(
        &config.jwt_secret,
        &config.jwt_issuer,
        config.jwt_expiration,
    );
    let cache = AppointmentCache::new(config.cache_ttl, config.cache_max_capacity);

    let app = server::router::router().with_state(AppState::new(db, tokens, cache));

    let listener = TcpListener::bind(&config.bind_address).await?;
    tracing::info!("Listening on {}", config.bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
