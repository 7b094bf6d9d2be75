// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Profile publication to the policy engine.

pub mod manager;
pub mod writer;

pub use manager::{SyncEvent, SyncManager, SyncManagerHandle};
pub use writer::ProfileWriter;
