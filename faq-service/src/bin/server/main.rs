use std::sync::Arc;

use auth::Authenticator;
use auth::InMemoryCredentialDirectory;
use auth::PasswordError;
use auth::PasswordHasher;
use auth::Principal;
use auth::TokenCodec;
use chrono::Duration;
use faq_service::config::Config;
use faq_service::domain::faq::service::FaqService;
use faq_service::inbound::http::router::create_router;
use faq_service::outbound::repositories::PostgresFaqRepository;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "faq_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "faq-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    // Aborts before any socket is bound when the secret key is missing
    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        token_ttl_minutes = config.auth.token_ttl_minutes,
        seed_principals = config.auth.principals.len(),
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = 5,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let password_hasher = PasswordHasher::new();
    let principals = config
        .auth
        .principals
        .iter()
        .map(|seed| {
            Ok(Principal {
                id: seed.id.clone(),
                credential_digest: password_hasher.hash(&seed.password)?,
                algorithm: config.auth.hash_algorithm.clone(),
            })
        })
        .collect::<Result<Vec<_>, PasswordError>>()?;
    let directory = Arc::new(InMemoryCredentialDirectory::new(principals));

    let token_codec = Arc::new(TokenCodec::new(
        config.auth.secret_key.as_bytes(),
        Duration::minutes(config.auth.token_ttl_minutes),
    ));
    let authenticator = Arc::new(Authenticator::new(
        directory,
        password_hasher,
        Arc::clone(&token_codec),
    )?);

    let faq_repository = Arc::new(PostgresFaqRepository::new(pg_pool));
    let faq_service = Arc::new(FaqService::new(faq_repository));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let application = create_router(faq_service, authenticator, token_codec);
    axum::serve(http_listener, application).await?;

    Ok(())
}
