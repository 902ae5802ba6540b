mod model;
mod server;

use std::future::Future;

use tokio::{net::TcpListener, signal};
use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config, error::AppError, router, scheduler::event_expiry, startup, state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session = startup::connect_to_session(&db, &config).await?;
    let cors = startup::cors_layer(&config)?;

    startup::check_for_admin(&db, &config).await?;

    // Keep the handle alive for the lifetime of the server
    let _scheduler = event_expiry::start_scheduler(db.clone()).await?;

    let app = router::router()
        .with_state(AppState::new(db, &config))
        .layer(session)
        .layer(cors);

    let listener = TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for terminate signal: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    wait_for_shutdown(signal::ctrl_c(), terminate).await;
}

/// Resolves once either signal arrives. A listener that fails to install
/// never resolves, so the server keeps running on the other one.
async fn wait_for_shutdown(
    ctrl_c: impl Future<Output = std::io::Result<()>>,
    terminate: impl Future<Output = ()>,
) {
    let ctrl_c = async {
        match ctrl_c.await {
            Ok(()) => tracing::info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                tracing::error!("Failed to listen for Ctrl+C: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    let terminate = async {
        terminate.await;
        tracing::info!("Received terminate signal, shutting down");
    };

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

#[cfg(test)]
mod tests {
    use std::{io, time::Duration};

    use super::*;

    /// Tests that a Ctrl+C listener failing to install does not stop the server.
    ///
    /// Expected: still waiting after the failure
    #[tokio::test]
    async fn failed_ctrl_c_keeps_waiting() {
        let ctrl_c = async { Err::<(), _>(io::Error::other("no signal driver")) };

        let result = tokio::time::timeout(
            Duration::from_millis(50),
            wait_for_shutdown(ctrl_c, std::future::pending::<()>()),
        )
        .await;

        assert!(result.is_err());
    }

    /// Tests shutdown on a terminate signal while Ctrl+C never fires.
    ///
    /// Expected: resolves
    #[tokio::test]
    async fn terminate_triggers_shutdown() {
        let result = tokio::time::timeout(
            Duration::from_secs(1),
            wait_for_shutdown(std::future::pending::<io::Result<()>>(), async {}),
        )
        .await;

        assert!(result.is_ok());
    }
}
