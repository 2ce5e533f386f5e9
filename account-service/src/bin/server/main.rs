use std::sync::Arc;

use account_service::account::ports::AuthGatewayPort;
use account_service::account::service::AccountService;
use account_service::config::Config;
use account_service::config::StoreBackend;
use account_service::inbound::http::router::create_router;
use account_service::outbound::repositories::InMemoryAccountRepository;
use account_service::outbound::repositories::PostgresAccountRepository;
use auth::Authenticator;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tokio::sync::oneshot;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "account_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "account-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        host = %config.server.host,
        port = config.server.port,
        store = ?config.store.backend,
        token_lifetime_hours = config.jwt.expiration_hours,
        argon2_memory_kib = config.password.memory_kib,
        argon2_iterations = config.password.iterations,
        "Configuration loaded"
    );

    let authenticator = Arc::new(
        Authenticator::new(config.jwt.secret.as_bytes(), config.jwt.token_lifetime())
            .with_password_hasher(config.password.hasher()?),
    );

    let mut pg_pool: Option<PgPool> = None;
    let gateway: Arc<dyn AuthGatewayPort> = match config.store.backend {
        StoreBackend::Postgres => {
            let pool = PgPoolOptions::new()
                .max_connections(config.database.max_connections)
                .acquire_timeout(config.database.acquire_timeout())
                .connect(&config.database.url)
                .await?;
            tracing::info!(
                max_connections = config.database.max_connections,
                database = "postgresql",
                "Database connection pool created"
            );

            sqlx::migrate!("./migrations").run(&pool).await?;
            tracing::info!(database = "postgresql", "Database migrations completed");

            pg_pool = Some(pool.clone());
            Arc::new(AccountService::new(
                Arc::new(PostgresAccountRepository::new(pool)),
                Arc::clone(&authenticator),
            ))
        }
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory account store; accounts are lost on exit");
            Arc::new(AccountService::new(
                Arc::new(InMemoryAccountRepository::new()),
                Arc::clone(&authenticator),
            ))
        }
    };

    let http_address = config.server.address();
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.port,
        protocol = "http",
        "Http server listening"
    );

    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
    let http_application = create_router(gateway);
    let mut http_server = tokio::spawn(async move {
        axum::serve(http_listener, http_application)
            .with_graceful_shutdown(async move {
                let _ = shutdown_rx.await;
            })
            .await
    });

    tokio::select! {
        result = &mut http_server => {
            result??;
            tracing::info!("Http server exited");
            return Ok(());
        }
        signal = shutdown_signal() => {
            tracing::info!(signal, "Shutdown signal received");
        }
    }

    let _ = shutdown_tx.send(());
    let timeout = config.server.shutdown_timeout();
    match tokio::time::timeout(timeout, http_server).await {
        Ok(Ok(Ok(()))) => tracing::info!("Http server has shut down"),
        Ok(Ok(Err(e))) => tracing::error!(error = %e, "Http server error during shutdown"),
        Ok(Err(e)) => tracing::error!(error = %e, "Http server task failed"),
        Err(_) => tracing::warn!(
            timeout_secs = timeout.as_secs(),
            "Http server did not shut down within timeout"
        ),
    }

    if let Some(pool) = pg_pool {
        pool.close().await;
        tracing::info!(database = "postgresql", "Database connection pool closed");
    }

    Ok(())
}

/// Resolve when SIGINT or SIGTERM arrives, naming the signal.
async fn shutdown_signal() -> &'static str {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for SIGINT");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => "SIGINT",
        _ = terminate => "SIGTERM",
    }
}
