// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Scene snapshot importer

use crate::error::{ExportError, ExportResult};
use crate::scene::Scene;
use std::fs;
use std::path::Path;

/// Parse a JSON scene snapshot
pub fn parse_scene(source: &str) -> serde_json::Result<Scene> {
    serde_json::from_str(source)
}

/// Load a JSON scene snapshot from disk
pub fn import_scene_file(path: impl AsRef<Path>) -> ExportResult<Scene> {
    let path = path.as_ref();
    let source = fs::read_to_string(path).map_err(|e| ExportError::io(path, e))?;

    let scene = parse_scene(&source).map_err(|source| ExportError::SceneParse {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(
        "Loaded {:?}: {} meshes, {} objects",
        path,
        scene.meshes.len(),
        scene.objects.len()
    );
    Ok(scene)
}
