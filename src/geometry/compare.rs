// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Structural mesh comparison used for deduplication

use super::Mesh;
use std::ptr;

/// Check whether two meshes describe exactly the same geometry.
///
/// Faces are compared positionally: the same polygons listed in a different
/// order are considered different. Coordinates are compared with exact float
/// equality, no tolerance is applied.
pub fn meshes_equal(mesh_a: &Mesh, mesh_b: &Mesh) -> bool {
    if ptr::eq(mesh_a, mesh_b) {
        return true;
    }

    // Shared storage. Distinct meshes never share a heap buffer, so this only
    // fires for two empty lists, which the checks below also judge equal.
    if ptr::eq(mesh_a.vertices.as_slice(), mesh_b.vertices.as_slice())
        && ptr::eq(mesh_a.faces.as_slice(), mesh_b.faces.as_slice())
    {
        return true;
    }

    if mesh_a.vertex_count() != mesh_b.vertex_count() {
        return false;
    }

    if mesh_a.face_count() != mesh_b.face_count() {
        return false;
    }

    let faces_match = mesh_a
        .faces
        .iter()
        .zip(&mesh_b.faces)
        .all(|(face_a, face_b)| face_a.indices == face_b.indices);
    if !faces_match {
        return false;
    }

    mesh_a
        .vertices
        .iter()
        .zip(&mesh_b.vertices)
        .all(|(a, b)| a.x == b.x && a.y == b.y && a.z == b.z)
}
