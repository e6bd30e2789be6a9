use std::net::SocketAddr;

use crate::env::Env;
use crate::error::ServerError;
use crate::http::router;
use crate::state::AppState;
use log::{info, warn};
use tokio::signal;
use tokio::sync::broadcast;

pub async fn start(config: Env) -> anyhow::Result<()> {
    info!("running server on {} mode", config.mode);

    let (shutdown_tx, _shutdown_rx) = broadcast::channel(1);

    let http_task = start_http_server(config, shutdown_tx.subscribe());

    let shutdown_signal = async {
        if let Err(err) = signal::ctrl_c().await {
            warn!("failed to listen for shutdown signal: {}", err);
        } else {
            info!("ctrl+c pressed, shutting down");
        }
    };

    tokio::select! {
        result = http_task => match result {
            Ok(Ok(())) => warn!("http task ended"),
            Ok(Err(err)) => return Err(err.into()),
            Err(err) => return Err(err.into()),
        },
        _ = shutdown_signal => info!("shutdown signal received"),
    }

    // Tell the http task to shut down if it has not already received the signal.
    let _ = shutdown_tx.send(());

    Ok(())
}

fn start_http_server(
    config: Env,
    mut shutdown: broadcast::Receiver<()>,
) -> tokio::task::JoinHandle<Result<(), ServerError>> {
    let host = format!("{}:{}", config.host, config.port);

    tokio::spawn(async move {
        let state = AppState::new(config)?;
        let app = router(state)?;

        let listener = tokio::net::TcpListener::bind(&host).await?;
        info!("listening on: {}", listener.local_addr()?);

        axum::serve(
            listener,
            app.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .with_graceful_shutdown(async move {
            let _ = shutdown.recv().await;
        })
        .await?;

        Ok::<(), ServerError>(())
    })
}
