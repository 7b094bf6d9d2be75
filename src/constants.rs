// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Naming conventions shared with the policy engine
pub mod naming {
    /// Prepended to a namespace name to form its profile name
    pub const NAMESPACE_PROFILE_PREFIX: &str = "ns.projectcalico.org/";
    /// Prepended to every namespace label key copied onto the profile
    pub const NAMESPACE_LABEL_PREFIX: &str = "k8s_ns/label/";
}

/// Profile document header
pub mod profile {
    pub const API_VERSION: &str = "v1";
    pub const KIND: &str = "profile";
}

/// The controller name reported in logs
pub const CONTROLLER_NAME: &str = "k8s-policy";

/// Default requeue interval in seconds after a failed reconcile
pub const DEFAULT_REQUEUE_INTERVAL_SECS: u64 = 60;

/// Capacity of the reconciler -> sync manager channel
pub const SYNC_CHANNEL_CAPACITY: usize = 256;
