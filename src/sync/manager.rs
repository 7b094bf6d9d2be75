// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Central coordinator for publishing namespace profiles.

use crate::config::Config;
use crate::constants::SYNC_CHANNEL_CAPACITY;
use crate::converter::NamespaceConverter;
use crate::error::Result;
use crate::kubernetes::list_namespaces;
use crate::sync::writer::ProfileWriter;
use crate::types::profile::Profile;
use kube::Client;
use std::collections::HashMap;
use std::io::Write;
use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument};

/// Events that reconcilers send to the SyncManager
#[derive(Debug, Clone)]
pub enum SyncEvent {
    /// A namespace was created or updated and converted to this profile
    ProfileChanged { profile: Profile },
}

/// Receives profiles from the reconciler and hands them to the policy engine.
/// A profile identical to the last one published under its name is skipped.
pub struct SyncManager<W> {
    client: Client,
    config: Config,
    converter: NamespaceConverter,
    writer: ProfileWriter<W>,
    published: HashMap<String, Profile>,
    event_rx: mpsc::Receiver<SyncEvent>,
}

/// Handle to send events to the SyncManager
#[derive(Clone)]
pub struct SyncManagerHandle {
    event_tx: mpsc::Sender<SyncEvent>,
}

impl SyncManagerHandle {
    pub async fn send(&self, event: SyncEvent) {
        if let Err(e) = self.event_tx.send(event).await {
            error!("Failed to send event to SyncManager: {}", e);
        }
    }
}

pub(crate) fn sync_channel() -> (SyncManagerHandle, mpsc::Receiver<SyncEvent>) {
    let (event_tx, event_rx) = mpsc::channel(SYNC_CHANNEL_CAPACITY);
    (SyncManagerHandle { event_tx }, event_rx)
}

impl<W: Write> SyncManager<W> {
    pub fn new(client: Client, config: Config, out: W) -> (Self, SyncManagerHandle) {
        let (handle, event_rx) = sync_channel();

        let manager = Self {
            client,
            writer: ProfileWriter::new(config.output_format, out),
            config,
            converter: NamespaceConverter::new(),
            published: HashMap::new(),
            event_rx,
        };

        (manager, handle)
    }

    pub async fn run(mut self) -> anyhow::Result<()> {
        info!("SyncManager started, performing initial sync...");
        self.initial_sync().await;
        info!("Initial sync complete, listening for events...");

        while let Some(event) = self.event_rx.recv().await {
            self.handle_event(event);
        }

        info!("Event channel closed, SyncManager stopping");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn initial_sync(&mut self) {
        let selector = self.config.namespace_selector.clone();
        let namespaces = match list_namespaces(&self.client, selector.as_deref()).await {
            Ok(n) => n,
            Err(e) => {
                error!("Failed to list namespaces for initial sync: {}", e);
                return;
            }
        };

        info!("Found {} namespaces", namespaces.len());

        for ns in &namespaces {
            let profile = self.converter.convert_namespace(ns);
            self.publish_logged(profile);
        }
    }

    fn handle_event(&mut self, event: SyncEvent) {
        match event {
            SyncEvent::ProfileChanged { profile } => {
                debug!("Handling profile change: {}", profile.name());
                self.publish_logged(profile);
            }
        }
    }

    fn publish_logged(&mut self, profile: Profile) {
        let name = profile.name().to_string();
        match self.publish(profile) {
            Ok(true) => info!("Published profile {}", name),
            Ok(false) => debug!("Profile {} unchanged, skipping", name),
            Err(e) => error!("Failed to publish profile {}: {}", name, e),
        }
    }

    /// Write the profile unless it matches the last published one.
    /// Returns whether anything was written.
    fn publish(&mut self, profile: Profile) -> Result<bool> {
        if self.published.get(profile.name()) == Some(&profile) {
            return Ok(false);
        }

        self.writer.write_profile(&profile)?;
        self.published.insert(profile.name().to_string(), profile);
        Ok(true)
    }
}
