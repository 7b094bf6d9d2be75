// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::Result;
use kube::Client;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use k8s_policy::config::Config;
use k8s_policy::constants::CONTROLLER_NAME;
use k8s_policy::reconcilers::NamespaceReconciler;
use k8s_policy::sync::SyncManager;

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr; stdout carries the published profiles
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("Starting {} controller", CONTROLLER_NAME);

    let config = Config::from_env()?;
    info!(
        "Configuration loaded: output_format={:?}, namespace_selector={:?}",
        config.output_format, config.namespace_selector
    );

    let client = Client::try_default().await?;
    info!("Connected to Kubernetes cluster");

    let (sync_manager, sync_handle) =
        SyncManager::new(client.clone(), config.clone(), std::io::stdout());
    let namespace_reconciler = NamespaceReconciler::new(client, config, sync_handle);

    tokio::try_join!(sync_manager.run(), namespace_reconciler.run())?;

    // The reconciler runs until the watch stream ends
    warn!("Controller stopped unexpectedly");
    Ok(())
}
