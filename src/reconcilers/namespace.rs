// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Namespace reconciler - converts watched Namespaces and forwards profiles to the sync manager.

use crate::config::Config;
use crate::converter::{Converter, NamespaceConverter};
use crate::error::{PolicyError, Result};
use crate::sync::{SyncEvent, SyncManagerHandle};
use futures::StreamExt;
use k8s_openapi::api::core::v1::Namespace;
use kube::{
    runtime::{controller::Action, Controller},
    Api, Client, ResourceExt,
};
use kube_runtime::watcher::Config as WatcherConfig;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, warn};

pub struct NamespaceReconciler {
    client: Client,
    config: Config,
    converter: NamespaceConverter,
    sync_handle: SyncManagerHandle,
}

impl NamespaceReconciler {
    pub fn new(client: Client, config: Config, sync_handle: SyncManagerHandle) -> Self {
        Self {
            client,
            config,
            converter: NamespaceConverter::new(),
            sync_handle,
        }
    }

    fn watcher_config(&self) -> WatcherConfig {
        match self.config.namespace_selector.as_deref() {
            Some(selector) => WatcherConfig::default().labels(selector),
            None => WatcherConfig::default(),
        }
    }

    pub async fn run(self) -> anyhow::Result<()> {
        let namespaces: Api<Namespace> = Api::all(self.client.clone());
        let watcher_config = self.watcher_config();
        let context = Arc::new(self);

        info!("Watching namespaces");

        Controller::new(namespaces, watcher_config)
            .run(reconcile, error_policy, context)
            .for_each(|res| async move {
                match res {
                    Ok(o) => debug!("Reconciled namespace: {:?}", o),
                    Err(e) => warn!("Reconciliation error: {:?}", e),
                }
            })
            .await;

        Ok(())
    }
}

async fn reconcile(ns: Arc<Namespace>, ctx: Arc<NamespaceReconciler>) -> Result<Action> {
    debug!("Reconciling namespace: {}", ns.name_any());

    let profile = ctx.converter.convert(Some(ns.as_ref()))?;

    ctx.sync_handle
        .send(SyncEvent::ProfileChanged { profile })
        .await;

    // Deleted namespaces are not reconciled; wait for the next change.
    Ok(Action::await_change())
}

fn error_policy(
    _ns: Arc<Namespace>,
    error: &PolicyError,
    ctx: Arc<NamespaceReconciler>,
) -> Action {
    error!("Reconciliation error: {}", error);
    Action::requeue(Duration::from_secs(ctx.config.requeue_interval_secs))
}
