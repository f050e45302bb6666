use articles_api::application::{ports::security::TokenVerifier, services::ApplicationServices};
use articles_api::config::{AppConfig, StorageBackend};
use articles_api::domain::article::ArticleRepository;
use articles_api::infrastructure::{
    database,
    repositories::{InMemoryArticleRepository, PostgresArticleRepository},
    security::JwtTokenVerifier,
};
use articles_api::presentation::http::{
    routes::{RouterOptions, build_router},
    state::HttpState,
};
use anyhow::{Context, Result};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err:#}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let article_repo = build_article_repository(&config).await?;

    let jwt = config.jwt();
    let token_verifier: Arc<dyn TokenVerifier> = Arc::new(JwtTokenVerifier::new(
        jwt.secret(),
        jwt.issuer(),
        jwt.audience(),
    ));

    let services = Arc::new(ApplicationServices::new(
        Arc::clone(&article_repo),
        Arc::clone(&token_verifier),
    ));

    let state = HttpState {
        services: Arc::clone(&services),
    };

    let options = RouterOptions {
        expose_docs: config.expose_docs(),
        allowed_origins: config.allowed_origins().to_vec(),
    };
    let app = build_router(state, &options);

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!(
        environment = config.environment(),
        storage = %config.storage(),
        docs = options.expose_docs,
        "listening on {address}"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn build_article_repository(config: &AppConfig) -> Result<Arc<dyn ArticleRepository>> {
    match config.storage() {
        StorageBackend::Memory => {
            tracing::warn!("using in-memory article storage; data is lost on restart");
            Ok(Arc::new(InMemoryArticleRepository::new()))
        }
        StorageBackend::Postgres => {
            let url = config
                .database_url()
                .context("DATABASE_URL is required for postgres storage")?;
            let pool = database::init_pool(url, config.database_max_connections()).await?;
            database::run_migrations(&pool).await?;
            Ok(Arc::new(PostgresArticleRepository::new(pool)))
        }
    }
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install CTRL+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
