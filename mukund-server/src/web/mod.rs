//! REST API
//!
//! ## Endpoints
//!
//! - `GET /api/v1/fix?lat=..&lon=..` - Evaluate a fix
//! - `POST /route11` - Evaluate a fix posted as form fields `latt`, `longi`
//! - `GET /api/v1/zones` - List loaded zones
//! - `POST /api/v1/reload` - Re-read the dataset and swap it in

pub mod error;
pub mod handlers;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use miette::{IntoDiagnostic, Result, WrapErr};
use mukund_core::SharedEvaluator;
use tokio::net::TcpListener;
use tokio_graceful_shutdown::SubsystemHandle;

pub use error::{ApiError, ApiResult};

#[derive(Clone)]
pub struct AppState {
    pub evaluator: Arc<SharedEvaluator>,
    /// Manifest to re-read on reload
    pub manifest: Option<PathBuf>,
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/v1/fix", get(handlers::get_fix))
        .route("/route11", post(handlers::legacy_fix))
        .route("/api/v1/zones", get(handlers::list_zones))
        .route("/api/v1/reload", post(handlers::reload))
        .with_state(state)
}

pub struct Web {
    state: AppState,
    addr: SocketAddr,
}

impl Web {
    pub fn new(state: AppState, addr: SocketAddr) -> Self {
        Web { state, addr }
    }

    pub async fn run(self, subsys: SubsystemHandle) -> Result<()> {
        let listener = TcpListener::bind(self.addr)
            .await
            .into_diagnostic()
            .wrap_err_with(|| format!("Cannot listen on {}", self.addr))?;
        log::info!("Listening on http://{}", self.addr);

        axum::serve(listener, create_router(self.state))
            .with_graceful_shutdown(async move { subsys.on_shutdown_requested().await })
            .await
            .into_diagnostic()?;

        log::info!("Web server stopped");
        Ok(())
    }
}
