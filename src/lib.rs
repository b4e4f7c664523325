// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Move3D scene exporter
//!
//! Turns a snapshot of meshes and object instances into Move3D scene
//! description files: one `.macro` polyhedron per group of geometrically
//! identical meshes, plus a scene file that loads and places every instance.

pub mod cli;
pub mod config;
pub mod dedup;
pub mod error;
pub mod geometry;
pub mod io;
pub mod pipeline;
pub mod scene;
pub mod utils;

pub use config::ExportConfig;
pub use dedup::{canonical_name, group_meshes, MeshGroup, MeshGroups};
pub use error::{ExportError, ExportWarning, WriteError};
pub use geometry::{meshes_equal, Face, Mesh, Vertex};
pub use io::{import_scene_file, write_mesh, write_scene};
pub use pipeline::{export, export_with_config, ExportReport};
pub use scene::{Material, ObjectInstance, Scene};

use std::path::Path;

/// Load a JSON scene snapshot and export it into `dir`
pub fn export_file(scene_path: impl AsRef<Path>, dir: &Path, filename: &str) -> anyhow::Result<ExportReport> {
    let scene = import_scene_file(scene_path)?;
    Ok(export(&scene, dir, filename))
}
