// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Policy engine object model.

pub mod profile;

pub use profile::{Action, EntityRule, Profile, ProfileMetadata, ProfileSpec, Protocol, Rule};
