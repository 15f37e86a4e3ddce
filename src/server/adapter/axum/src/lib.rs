/* src/server/adapter/axum/src/lib.rs */

mod error;
mod handler;

use pagestat_server::ReportServer;

/// Re-export pagestat-server core for convenience
pub use pagestat_server;

/// Extension trait that converts a `ReportServer` into an Axum router.
pub trait IntoAxumRouter {
  fn into_axum_router(self) -> axum::Router;
  fn serve(
    self,
    addr: &str,
  ) -> impl std::future::Future<Output = Result<(), Box<dyn std::error::Error>>> + Send;
}

impl IntoAxumRouter for ReportServer {
  fn into_axum_router(self) -> axum::Router {
    handler::build_router(self.into_parts())
  }

  async fn serve(self, addr: &str) -> Result<(), Box<dyn std::error::Error>> {
    let router = self.into_axum_router();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    let local_addr = listener.local_addr()?;
    tracing::info!(%local_addr, "pagestat report server listening");
    axum::serve(listener, router).await?;
    Ok(())
  }
}
