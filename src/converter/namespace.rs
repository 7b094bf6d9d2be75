// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Namespace to profile conversion

use crate::constants::naming::{NAMESPACE_LABEL_PREFIX, NAMESPACE_PROFILE_PREFIX};
use crate::converter::Converter;
use crate::error::{PolicyError, Result};
use crate::types::profile::{Profile, ProfileMetadata, ProfileSpec, Rule};
use k8s_openapi::api::core::v1::Namespace;
use std::collections::BTreeMap;
use tracing::debug;

/// Builds a default-allow profile for every namespace.
#[derive(Debug, Clone, Copy, Default)]
pub struct NamespaceConverter;

impl NamespaceConverter {
    pub fn new() -> Self {
        NamespaceConverter
    }

    /// Convert a namespace that is known to be present
    pub fn convert_namespace(&self, ns: &Namespace) -> Profile {
        let name = profile_name(ns);
        debug!("Converting namespace to profile {}", name);

        Profile {
            metadata: ProfileMetadata {
                name,
                labels: profile_labels(ns),
                ..Default::default()
            },
            spec: default_rules(),
            ..Default::default()
        }
    }
}

impl Converter for NamespaceConverter {
    type Input = Namespace;
    type Output = Profile;

    fn convert(&self, input: Option<&Namespace>) -> Result<Profile> {
        let ns = input.ok_or_else(|| {
            PolicyError::InvalidArgument("namespace reference is absent".to_string())
        })?;
        Ok(self.convert_namespace(ns))
    }
}

fn profile_name(ns: &Namespace) -> String {
    let name = ns.metadata.name.as_deref().unwrap_or_default();
    format!("{}{}", NAMESPACE_PROFILE_PREFIX, name)
}

fn profile_labels(ns: &Namespace) -> BTreeMap<String, String> {
    ns.metadata
        .labels
        .iter()
        .flatten()
        .map(|(k, v)| (format!("{}{}", NAMESPACE_LABEL_PREFIX, k), v.clone()))
        .collect()
}

// Namespaces carry no policy of their own; more specific policies restrict later.
fn default_rules() -> ProfileSpec {
    ProfileSpec {
        ingress_rules: vec![Rule::allow()],
        egress_rules: vec![Rule::allow()],
    }
}
