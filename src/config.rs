// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Ermine-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Ermine and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Tunables for the ER to UML conversion.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionConfig {
    /// Width of every generated class table.
    pub table_width: f64,
    /// Height of a table without attribute rows (title bar plus column header).
    pub table_header_height: f64,
    /// Height added per attribute row.
    pub table_row_height: f64,
    /// Distance of begin/end labels from the edge ends, in relative edge units.
    pub label_margin: f64,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            table_width: 200.0,
            table_header_height: 40.0,
            table_row_height: 20.0,
            label_margin: 0.15,
        }
    }
}

impl ConversionConfig {
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn table_height(&self, rows: usize) -> f64 {
        self.table_header_height + self.table_row_height * rows as f64
    }

    pub fn begin_label_offset(&self) -> f64 {
        -1.0 + self.label_margin
    }

    pub fn end_label_offset(&self) -> f64 {
        1.0 - self.label_margin
    }

    pub fn center_label_offset(&self) -> f64 {
        0.0 - self.label_margin * 2.0
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("io error at {path:?}: {source}")]
    Io { path: PathBuf, source: io::Error },
    #[error("invalid config json at {path:?}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}
