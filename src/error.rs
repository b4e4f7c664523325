// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Export errors and the non-fatal warnings collected during an export

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Library-level failures
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse scene {path}: {source}")]
    SceneParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl ExportError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type ExportResult<T> = std::result::Result<T, ExportError>;

/// A macro or scene file that could not be created or written
#[derive(Debug, Error)]
#[error("I/O error on {path}: {source}")]
pub struct WriteError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

impl WriteError {
    pub fn new(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self {
            path: path.into(),
            source,
        }
    }
}

pub type WriteResult<T> = std::result::Result<T, WriteError>;

/// Problems that are recorded but never abort an export
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ExportWarning {
    /// A file could not be opened or written and was skipped
    IoFailure { path: PathBuf, message: String },
    /// An object refers to a mesh that is not part of the scene
    MissingReference { object: String, mesh: String },
    /// A group representative has no vertices or no faces
    EmptyMesh { group: String, mesh: String },
    /// A canonical name was taken by another group and got a suffix
    NameCollision { requested: String, assigned: String },
    /// No exported mesh carries this object's name, so it has no block
    UnboundObject { object: String },
}

impl From<&WriteError> for ExportWarning {
    fn from(err: &WriteError) -> Self {
        ExportWarning::IoFailure {
            path: err.path.clone(),
            message: err.source.to_string(),
        }
    }
}

impl fmt::Display for ExportWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportWarning::IoFailure { path, message } => {
                write!(f, "skipped {}: {}", path.display(), message)
            }
            ExportWarning::MissingReference { object, mesh } => {
                write!(f, "object '{}' references unknown mesh '{}'", object, mesh)
            }
            ExportWarning::EmptyMesh { group, mesh } => {
                write!(f, "mesh '{}' (group '{}') has no vertices or faces", mesh, group)
            }
            ExportWarning::NameCollision { requested, assigned } => {
                write!(f, "canonical name '{}' already in use, using '{}'", requested, assigned)
            }
            ExportWarning::UnboundObject { object } => {
                write!(f, "object '{}' is not bound to any exported mesh", object)
            }
        }
    }
}
