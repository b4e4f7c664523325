// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Mesh deduplication
//!
//! Meshes with identical geometry are collected into groups that share a
//! single macro file. Each new mesh is compared against the first member of
//! every existing group, in group order, and joins the first group it matches.
//! Members are never compared with each other, so equality is not closed
//! transitively across a group.

use crate::error::ExportWarning;
use crate::geometry::{meshes_equal, Mesh};
use crate::scene::Scene;
use serde::Serialize;

/// Derive a macro-safe identifier from a mesh name
pub fn canonical_name(mesh_name: &str) -> String {
    mesh_name
        .to_lowercase()
        .chars()
        .map(|c| if c == ' ' || c == '.' { '_' } else { c })
        .collect()
}

/// Geometrically identical meshes sharing one canonical name
#[derive(Debug, Clone)]
pub struct MeshGroup<'a> {
    pub name: String,
    /// Never empty; the first member is the representative
    pub members: Vec<&'a Mesh>,
}

impl<'a> MeshGroup<'a> {
    fn new(name: String, first: &'a Mesh) -> Self {
        Self {
            name,
            members: vec![first],
        }
    }

    /// Mesh whose geometry is written for the whole group
    pub fn representative(&self) -> &'a Mesh {
        self.members[0]
    }

    pub fn macro_filename(&self) -> String {
        format!("{}.macro", self.name)
    }

    pub fn summary(&self) -> GroupSummary {
        let representative = self.representative();
        GroupSummary {
            name: self.name.clone(),
            members: self.members.iter().map(|m| m.name.clone()).collect(),
            vertex_count: representative.vertex_count(),
            face_count: representative.face_count(),
        }
    }
}

/// Owned description of a group, for reports
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupSummary {
    pub name: String,
    pub members: Vec<String>,
    pub vertex_count: usize,
    pub face_count: usize,
}

/// Ordered mapping from canonical name to group
#[derive(Debug, Clone, Default)]
pub struct MeshGroups<'a> {
    groups: Vec<MeshGroup<'a>>,
    warnings: Vec<ExportWarning>,
}

impl<'a> MeshGroups<'a> {
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MeshGroup<'a>> {
        self.groups.iter()
    }

    pub fn get(&self, name: &str) -> Option<&MeshGroup<'a>> {
        self.groups.iter().find(|g| g.name == name)
    }

    pub fn names(&self) -> Vec<&str> {
        self.groups.iter().map(|g| g.name.as_str()).collect()
    }

    /// Name collisions resolved while grouping
    pub fn warnings(&self) -> &[ExportWarning] {
        &self.warnings
    }

    fn contains(&self, name: &str) -> bool {
        self.groups.iter().any(|g| g.name == name)
    }

    /// Return `name` if free, otherwise the first free `name_<n>`
    fn claim(&mut self, name: String) -> String {
        if !self.contains(&name) {
            return name;
        }

        let assigned = (1..)
            .map(|n| format!("{}_{}", name, n))
            .find(|candidate| !self.contains(candidate))
            .unwrap_or_default();

        tracing::warn!("Canonical name '{}' already in use, using '{}'", name, assigned);
        self.warnings.push(ExportWarning::NameCollision {
            requested: name,
            assigned: assigned.clone(),
        });
        assigned
    }

    fn insert(&mut self, mesh: &'a Mesh) {
        let derived = canonical_name(&mesh.name);

        let Some(index) = self
            .groups
            .iter()
            .position(|g| meshes_equal(g.representative(), mesh))
        else {
            let name = self.claim(derived);
            tracing::debug!("New mesh group '{}' from '{}'", name, mesh.name);
            self.groups.push(MeshGroup::new(name, mesh));
            return;
        };

        let shorter = derived.chars().count() < self.groups[index].name.chars().count();
        if shorter && self.contains(&derived) {
            // Another group holds the shorter name, keep the current key
            let kept = self.groups[index].name.clone();
            tracing::warn!("Canonical name '{}' already in use, keeping '{}'", derived, kept);
            self.warnings.push(ExportWarning::NameCollision {
                requested: derived,
                assigned: kept,
            });
            self.groups[index].members.push(mesh);
        } else if shorter {
            // Re-keyed entries move to the end of the ordering
            let mut group = self.groups.remove(index);
            tracing::debug!(
                "Renaming mesh group '{}' to '{}' after '{}'",
                group.name,
                derived,
                mesh.name
            );
            group.name = derived;
            group.members.push(mesh);
            self.groups.push(group);
        } else {
            tracing::debug!("Mesh '{}' joins group '{}'", mesh.name, self.groups[index].name);
            self.groups[index].members.push(mesh);
        }
    }
}

impl<'a, 'g> IntoIterator for &'g MeshGroups<'a> {
    type Item = &'g MeshGroup<'a>;
    type IntoIter = std::slice::Iter<'g, MeshGroup<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

/// Group every mesh of a scene.
///
/// Returns no groups when the scene has no objects, even if it has meshes.
pub fn group_meshes(scene: &Scene) -> MeshGroups<'_> {
    if !scene.has_objects() {
        tracing::debug!("Scene has no objects, skipping deduplication");
        return MeshGroups::default();
    }

    group_all(&scene.meshes)
}

/// Group a list of meshes in order, without the scene-level object check
pub fn group_all(meshes: &[Mesh]) -> MeshGroups<'_> {
    let mut groups = MeshGroups::default();
    for mesh in meshes {
        groups.insert(mesh);
    }

    tracing::debug!("Grouped {} meshes into {} groups", meshes.len(), groups.len());
    groups
}
