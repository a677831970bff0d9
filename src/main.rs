mod cli;
mod cluster;
mod config;
mod crd;
mod errors;
mod labels_and_annotations;
mod logging;
mod utils;
mod vmctl;

use crate::cli::Args;
use crate::cluster::KubeCluster;
use crate::errors::Error;
use crate::utils::strings::get_version_string;
use crate::vmctl::Vmctl;
use clap::Parser;
use tokio::signal::unix::{SignalKind, signal};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

#[tokio::main]
async fn main() -> Result<(), Error> {
    let args = Args::parse();
    let _provider = logging::setup_tracing()?;
    info!("vmctl {}", get_version_string());

    let cluster = KubeCluster::connect(args.kubeconfig.clone()).await?;
    let mut app = Vmctl::new(cluster, args.config());

    if args.dry_run {
        let vm = app.preview().await?;
        print!("{}", serde_yaml::to_string(&vm)?);
        return Ok(());
    }

    let mut sigterm = signal(SignalKind::terminate())?;
    let mut sigint = signal(SignalKind::interrupt())?;
    let stop = CancellationToken::new();
    let token = stop.clone();
    tokio::spawn(async move {
        tokio::select! {
            _ = sigterm.recv() => info!("Received SIGTERM, shutting down"),
            _ = sigint.recv() => info!("Received SIGINT, shutting down"),
        }
        token.cancel();
    });

    let result = app.run(stop).await;
    debug!("vmctl exiting in phase {:?}", app.phase());
    result
}
