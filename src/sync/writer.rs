// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Profile serialization to an output stream

use crate::config::OutputFormat;
use crate::error::{PolicyError, Result};
use crate::types::profile::Profile;
use std::io::Write;

/// Writes profiles as `---` separated YAML documents or JSON lines.
pub struct ProfileWriter<W> {
    format: OutputFormat,
    out: W,
}

impl<W: Write> ProfileWriter<W> {
    pub fn new(format: OutputFormat, out: W) -> Self {
        Self { format, out }
    }

    pub fn write_profile(&mut self, profile: &Profile) -> Result<()> {
        match self.format {
            OutputFormat::Yaml => {
                let doc = serde_yaml::to_string(profile)
                    .map_err(|e| PolicyError::SerializationError(e.to_string()))?;
                write!(self.out, "---\n{}", doc)?;
            }
            OutputFormat::Json => {
                serde_json::to_writer(&mut self.out, profile)
                    .map_err(|e| PolicyError::SerializationError(e.to_string()))?;
                writeln!(self.out)?;
            }
        }

        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
