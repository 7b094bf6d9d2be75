// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Namespace listing utilities

use crate::error::Result;
use k8s_openapi::api::core::v1::Namespace;
use kube::{api::ListParams, Api, Client};
use tracing::{debug, instrument};

/// Build list parameters for an optional label selector
pub fn list_params(selector: Option<&str>) -> ListParams {
    match selector {
        Some(s) => ListParams::default().labels(s),
        None => ListParams::default(),
    }
}

/// List all namespaces in the cluster, optionally filtered by label selector
#[instrument(skip(client))]
pub async fn list_namespaces(client: &Client, selector: Option<&str>) -> Result<Vec<Namespace>> {
    let namespaces: Api<Namespace> = Api::all(client.clone());
    let list = namespaces.list(&list_params(selector)).await?;

    debug!("Listed {} namespaces", list.items.len());
    Ok(list.items)
}
