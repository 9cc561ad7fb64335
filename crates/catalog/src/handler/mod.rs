mod category;
mod health;
mod product;

use crate::state::AppState;
use anyhow::Result;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};
use tracing::info;

pub use self::category::category_routes;
pub use self::health::health_routes;
pub use self::product::product_routes;

pub struct AppRouter;

impl AppRouter {
    pub fn router(app_state: Arc<AppState>) -> Router {
        Router::new()
            .merge(health_routes())
            .merge(product_routes(app_state.clone()))
            .merge(category_routes(app_state))
            .layer(RequestBodyLimitLayer::new(1024 * 1024))
            .layer(TraceLayer::new_for_http())
    }

    pub async fn serve(port: u16, app_state: AppState) -> Result<()> {
        let app = Self::router(Arc::new(app_state));

        let addr = format!("0.0.0.0:{port}");
        let listener = TcpListener::bind(&addr).await?;

        info!("🚀 Server running on http://{}", listener.local_addr()?);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("🛑 Shutdown signal received (Ctrl+C)");
    }
}
