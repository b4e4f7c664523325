// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Export pipeline: deduplicate, write one macro per group, then the scene file
//!
//! Every write is best-effort. A failed file is recorded in the report and the
//! export carries on with the next one; nothing already written is removed.

use crate::config::ExportConfig;
use crate::dedup::{group_meshes, GroupSummary, MeshGroups};
use crate::error::ExportWarning;
use crate::io::{self, SCENE_EXTENSIONS};
use crate::scene::Scene;
use anyhow::Context;
use serde::Serialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Outcome of one export run
#[derive(Debug, Clone, Default, Serialize)]
pub struct ExportReport {
    /// Macro files written, in group order
    pub macro_files: Vec<PathBuf>,
    /// Scene file, absent if it could not be written
    pub scene_file: Option<PathBuf>,
    /// Object blocks written to the scene file
    pub instances: usize,
    pub groups: Vec<GroupSummary>,
    pub warnings: Vec<ExportWarning>,
}

impl ExportReport {
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }

    fn warn(&mut self, warning: ExportWarning) {
        tracing::warn!("{}", warning);
        self.warnings.push(warning);
    }

    /// Write the report as pretty JSON
    pub fn write_json(&self, path: &Path) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self).context("Failed to serialize report")?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write report: {}", path.display()))?;
        Ok(())
    }
}

/// Export `scene` into `dir`, naming the top-level file `filename`
pub fn export(scene: &Scene, dir: &Path, filename: &str) -> ExportReport {
    let scene_path = dir.join(io::scene_filename(filename));
    export_to(scene, dir, &scene_path)
}

/// Export using the directory and file name from a configuration
pub fn export_with_config(scene: &Scene, config: &ExportConfig) -> ExportReport {
    export_to(scene, &config.output_dir, &config.scene_path())
}

fn export_to(scene: &Scene, dir: &Path, scene_path: &Path) -> ExportReport {
    let mut report = ExportReport::default();

    let known_extension = scene_path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| SCENE_EXTENSIONS.contains(&e));
    if !known_extension {
        tracing::warn!(
            "Scene file {} does not use a .p3d or .macro extension",
            scene_path.display()
        );
    }

    for object in scene.unresolved_objects() {
        report.warn(ExportWarning::MissingReference {
            object: object.name.clone(),
            mesh: object.mesh.clone(),
        });
    }

    let groups = group_meshes(scene);
    for warning in groups.warnings() {
        report.warn(warning.clone());
    }
    tracing::info!(
        "{} meshes deduplicated into {} groups",
        scene.meshes.len(),
        groups.len()
    );

    write_macros(&groups, dir, &mut report);

    match io::write_scene(&groups, &scene.objects, scene_path) {
        Ok(instances) => {
            report.instances = instances;
            report.scene_file = Some(scene_path.to_path_buf());
        }
        Err(err) => report.warn(ExportWarning::from(&err)),
    }

    for object in unbound_objects(scene, &groups) {
        report.warn(ExportWarning::UnboundObject {
            object: object.to_string(),
        });
    }

    report.groups = groups.iter().map(|g| g.summary()).collect();
    tracing::info!(
        "Exported {} macros and {} instances ({} warnings)",
        report.macro_files.len(),
        report.instances,
        report.warnings.len()
    );
    report
}

fn write_macros(groups: &MeshGroups<'_>, dir: &Path, report: &mut ExportReport) {
    for group in groups {
        match io::write_mesh(group, dir) {
            Ok(Some(path)) => report.macro_files.push(path),
            Ok(None) => report.warn(ExportWarning::EmptyMesh {
                group: group.name.clone(),
                mesh: group.representative().name.clone(),
            }),
            Err(err) => report.warn(ExportWarning::from(&err)),
        }
    }
}

/// Objects that no written block refers to
fn unbound_objects<'s>(scene: &'s Scene, groups: &MeshGroups<'_>) -> Vec<&'s str> {
    let bound: HashSet<&str> = groups
        .iter()
        .filter(|g| g.representative().is_emittable())
        .flat_map(|g| g.members.iter().map(|m| m.name.as_str()))
        .collect();

    let mut seen = HashSet::new();
    scene
        .objects
        .iter()
        .map(|o| o.name.as_str())
        .filter(|name| !bound.contains(name) && seen.insert(*name))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Mesh;
    use crate::scene::ObjectInstance;
    use tempfile::TempDir;

    fn cube_scene() -> Scene {
        let mut scene = Scene::new();
        scene.add_mesh(Mesh::unit_cube("Cube"));
        scene.add_mesh(Mesh::unit_cube("Cube.001"));
        scene.add_object(ObjectInstance::new("Cube", "Cube"));
        scene.add_object(ObjectInstance::new("Cube.001", "Cube.001"));
        scene
    }

    #[test]
    fn test_export_clean_scene() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let report = export(&cube_scene(), dir.path(), "scene");

        assert!(report.is_clean(), "unexpected warnings: {:?}", report.warnings);
        assert_eq!(report.macro_files, vec![dir.path().join("cube.macro")]);
        assert_eq!(report.scene_file, Some(dir.path().join("scene.macro")));
        assert_eq!(report.instances, 2);
        assert_eq!(report.groups.len(), 1);
        Ok(())
    }

    #[test]
    fn test_missing_reference_and_unbound_object() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let mut scene = cube_scene();
        scene.add_object(ObjectInstance::new("Ghost", "Nowhere"));

        let report = export(&scene, dir.path(), "scene.p3d");
        assert_eq!(report.instances, 2);
        assert!(report.warnings.contains(&ExportWarning::MissingReference {
            object: "Ghost".to_string(),
            mesh: "Nowhere".to_string(),
        }));
        assert!(report.warnings.contains(&ExportWarning::UnboundObject {
            object: "Ghost".to_string(),
        }));
        Ok(())
    }

    #[test]
    fn test_unwritable_directory_is_not_fatal() {
        let dir = Path::new("/nonexistent/p3d-export");
        let report = export(&cube_scene(), dir, "scene.macro");

        assert!(report.macro_files.is_empty());
        assert!(report.scene_file.is_none());
        assert_eq!(report.warnings.len(), 2);
        assert!(report
            .warnings
            .iter()
            .all(|w| matches!(w, ExportWarning::IoFailure { .. })));
    }

    #[test]
    fn test_export_with_config() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let config = ExportConfig {
            output_dir: dir.path().to_path_buf(),
            scene_filename: "robot.p3d".to_string(),
            verbose: false,
        };

        let report = export_with_config(&cube_scene(), &config);
        assert_eq!(report.scene_file, Some(dir.path().join("robot.p3d")));
        assert!(dir.path().join("robot.p3d").exists());
        Ok(())
    }

    #[test]
    fn test_report_json() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let report = export(&cube_scene(), dir.path(), "scene");
        let path = dir.path().join("report.json");
        report.write_json(&path)?;

        let value: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&path)?)?;
        assert_eq!(value["instances"], 2);
        assert_eq!(value["groups"][0]["name"], "cube");
        Ok(())
    }
}
