//! Fest registration HTTP server.

use fest_core::environment::SystemClock;
use fest_registration::providers::{AnyEmailProvider, ConsoleEmailProvider, SmtpEmailProvider};
use fest_registration::stores::PostgresRegistrationRepository;
use fest_registration::{Catalog, RegistrationEnvironment};
use fest_web::{AppState, Config, router};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use std::time::Duration;
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A missing .env is normal in production
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fest_web=info,fest_registration=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting fest registration server");

    let config = Config::from_env();
    info!(
        address = %config.server.address(),
        run_migrations = config.database.run_migrations,
        fest = %config.fest.name,
        "Configuration loaded"
    );

    info!("Connecting to database...");
    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .acquire_timeout(Duration::from_secs(config.database.connect_timeout))
        .connect(&config.database.url)
        .await?;
    let repository = PostgresRegistrationRepository::new(pool);
    info!("Database connected");

    if config.database.run_migrations {
        repository.migrate().await?;
        info!("Migrations applied");
    }

    let mailer: AnyEmailProvider = match config.mail.credentials() {
        Some((user, pass)) => {
            SmtpEmailProvider::with_timeout(
                &config.mail.server,
                config.mail.port,
                user,
                pass,
                config.smtp_timeout(),
            )?
            .into()
        },
        None => {
            warn!("MAIL_USER/MAIL_PASS not set, notification emails will only be logged");
            ConsoleEmailProvider::new().into()
        },
    };
    info!(provider = mailer.kind(), "Email provider ready");

    let environment = RegistrationEnvironment::new(
        repository,
        mailer,
        Arc::new(SystemClock),
        config.notification_config(),
        Arc::new(Catalog::fest_2026()),
    );
    let app = router(AppState::new(environment, config.server.request_timeout()));

    let listener = tokio::net::TcpListener::bind(config.server.address()).await?;
    info!(address = %listener.local_addr()?, "HTTP server listening for requests");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("HTTP server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            },
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C signal");
        }
        () = terminate => {
            info!("Received SIGTERM signal");
        }
    }
}
