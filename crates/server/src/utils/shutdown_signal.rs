use tokio::signal;

/// # Panics
///
/// Panics if the Ctrl+C signal handler fails to install.
pub async fn shutdown_signal() {
  let ctrl_c = async {
    signal::ctrl_c()
      .await
      .expect("failed to install Ctrl+C handler");
  };

  #[cfg(unix)]
  let terminate = async {
    signal::unix::signal(signal::unix::SignalKind::terminate())
      .expect("failed to install signal handler")
      .recv()
      .await;
  };

  #[cfg(not(unix))]
  let terminate = std::future::pending::<()>();

  tokio::select! {
    () = ctrl_c => tracing::info!("received Ctrl+C, shutting down"),
    () = terminate => tracing::info!("received SIGTERM, shutting down"),
  }
}
