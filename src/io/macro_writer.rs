// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Move3D polyhedron macro writer (`.macro`)

use crate::dedup::MeshGroup;
use crate::error::{WriteError, WriteResult};
use crate::geometry::Mesh;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Write the polyhedron description of `mesh` under the name `name`
pub fn write_macro<W: Write>(out: &mut W, name: &str, mesh: &Mesh) -> std::io::Result<()> {
    writeln!(out, "p3d_add_desc_poly {}", name)?;

    for v in &mesh.vertices {
        writeln!(out, "   p3d_add_desc_vert {:.6} {:.6} {:.6}", v.x, v.y, v.z)?;
    }
    writeln!(out)?;

    for face in mesh.faces.iter().filter(|f| !f.is_empty()) {
        write!(out, "   p3d_add_desc_face ")?;
        for index in &face.indices {
            write!(out, "{} ", index + 1)?;
        }
        writeln!(out)?;
    }

    writeln!(out, "p3d_end_desc_poly")?;
    Ok(())
}

/// Render a group's macro to a string, `None` if there is nothing to describe
pub fn macro_to_string(group: &MeshGroup<'_>) -> Option<String> {
    let mesh = group.representative();
    if !mesh.is_emittable() {
        return None;
    }

    let mut buffer = Vec::new();
    write_macro(&mut buffer, &group.name, mesh).ok()?;
    String::from_utf8(buffer).ok()
}

/// Write `<dir>/<group name>.macro` from the group representative.
///
/// Returns `Ok(None)` without touching the filesystem when the representative
/// has no vertices or no faces.
pub fn write_mesh(group: &MeshGroup<'_>, dir: &Path) -> WriteResult<Option<PathBuf>> {
    let mesh = group.representative();
    if !mesh.is_emittable() {
        tracing::debug!("Skipping empty mesh '{}'", mesh.name);
        return Ok(None);
    }

    let path = dir.join(group.macro_filename());
    let file = File::create(&path).map_err(|e| WriteError::new(&path, e))?;

    let mut out = BufWriter::new(file);
    write_macro(&mut out, &group.name, mesh)
        .and_then(|_| out.flush())
        .map_err(|e| WriteError::new(&path, e))?;

    tracing::debug!(
        "Wrote {} ({} vertices, {} faces)",
        path.display(),
        mesh.vertex_count(),
        mesh.face_count()
    );
    Ok(Some(path))
}
