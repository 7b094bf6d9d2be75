// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Conversion of cluster resources into policy engine objects.

pub mod namespace;

pub use namespace::NamespaceConverter;

use crate::error::Result;

/// Maps one kind of cluster resource onto a policy engine object.
///
/// An absent input is rejected with `PolicyError::InvalidArgument`.
pub trait Converter {
    type Input;
    type Output;

    fn convert(&self, input: Option<&Self::Input>) -> Result<Self::Output>;
}
