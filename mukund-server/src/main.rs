use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use miette::Result;
use mukund_core::SharedEvaluator;
use mukund_server::web::{AppState, Web};
use mukund_server::{loader, Cli};
use tokio_graceful_shutdown::{SubsystemBuilder, Toplevel};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.verbose.log_level_filter())
        .init();

    log::info!("Loading reference data from {}", cli.data.display());
    let evaluator = loader::load_evaluator(&cli.data)?;

    let state = AppState {
        evaluator: Arc::new(SharedEvaluator::new(evaluator)),
        manifest: Some(cli.data.clone()),
    };
    let web = Web::new(state, SocketAddr::new(cli.bind, cli.port));

    Toplevel::new(|s| async move {
        s.start(SubsystemBuilder::new("Webserver", |subsys| web.run(subsys)));
    })
    .catch_signals()
    .handle_shutdown_requests(Duration::from_millis(1000))
    .await
    .map_err(Into::into)
}
