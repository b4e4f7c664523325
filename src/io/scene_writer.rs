// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Move3D scene writer
//!
//! The scene file loads each macro once per bound object and places it with a
//! pose line, optionally followed by a color line.

use crate::dedup::MeshGroups;
use crate::error::{WriteError, WriteResult};
use crate::scene::{object_map, ObjectInstance};
use crate::utils::math::euler_to_degrees;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write the instance block for one object bound to macro `macro_name`
pub fn write_instance<W: Write>(
    out: &mut W,
    macro_name: &str,
    object: &ObjectInstance,
) -> std::io::Result<()> {
    let prim = format!("{}.{}", object.name, macro_name);
    let loc = &object.location;
    let rot = euler_to_degrees(&object.rotation_euler);

    writeln!(out, "p3d_read_macro {}.macro {}", macro_name, object.name)?;
    writeln!(
        out,
        "p3d_set_prim_pos {} {:.6} {:.6} {:.6} {:.6} {:.6} {:.6}",
        prim, loc.x, loc.y, loc.z, rot.x, rot.y, rot.z
    )?;
    if let Some([r, g, b]) = object.diffuse_color() {
        writeln!(out, "p3d_set_prim_color {} Any {:.6} {:.6} {:.6}", prim, r, g, b)?;
    }
    writeln!(out)?;
    Ok(())
}

/// Write every bound instance, group by group, and return the block count.
///
/// Each group member is bound to the object carrying the member mesh's name.
/// Members without such an object, and groups whose representative has no
/// geometry, produce nothing.
pub fn write_blocks<W: Write>(
    out: &mut W,
    groups: &MeshGroups<'_>,
    objects: &HashMap<&str, &ObjectInstance>,
) -> std::io::Result<usize> {
    let mut written = 0;

    for group in groups {
        if !group.representative().is_emittable() {
            continue;
        }

        for member in &group.members {
            let Some(object) = objects.get(member.name.as_str()) else {
                tracing::debug!("No object named '{}', skipping", member.name);
                continue;
            };
            write_instance(out, &group.name, object)?;
            written += 1;
        }
    }

    Ok(written)
}

/// Create (or truncate) the scene file at `path` and fill it.
///
/// The file is created even when nothing gets bound.
pub fn write_scene(
    groups: &MeshGroups<'_>,
    objects: &[ObjectInstance],
    path: &Path,
) -> WriteResult<usize> {
    let file = File::create(path).map_err(|e| WriteError::new(path, e))?;
    let mut out = BufWriter::new(file);

    let lookup = object_map(objects);
    let written = write_blocks(&mut out, groups, &lookup)
        .and_then(|n| out.flush().map(|_| n))
        .map_err(|e| WriteError::new(path, e))?;

    tracing::debug!("Wrote {} ({} instances)", path.display(), written);
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dedup::group_all;
    use crate::geometry::Mesh;
    use crate::scene::Material;
    use nalgebra::Vector3;
    use std::f64::consts::{FRAC_PI_2, PI};
    use tempfile::TempDir;

    fn render(object: &ObjectInstance) -> String {
        let mut buffer = Vec::new();
        write_instance(&mut buffer, "cube", object).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_instance_without_color() {
        let object = ObjectInstance::new("Cube", "Cube").at(Vector3::new(1.0, -2.5, 3.0));
        assert_eq!(
            render(&object),
            "p3d_read_macro cube.macro Cube\n\
             p3d_set_prim_pos Cube.cube 1.000000 -2.500000 3.000000 0.000000 0.000000 0.000000\n\
             \n"
        );
    }

    #[test]
    fn test_instance_with_color() {
        let object = ObjectInstance::new("Cube", "Cube")
            .with_material(Material::with_color(0.8, 0.1, 0.25));
        let text = render(&object);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[2], "p3d_set_prim_color Cube.cube Any 0.800000 0.100000 0.250000");
        assert_eq!(lines[3], "");
    }

    #[test]
    fn test_material_without_color_emits_no_color_line() {
        let object = ObjectInstance::new("Cube", "Cube").with_material(Material::default());
        assert!(!render(&object).contains("p3d_set_prim_color"));
    }

    #[test]
    fn test_rotation_in_degrees() {
        let object = ObjectInstance::new("Arm", "Cube").rotated(Vector3::new(FRAC_PI_2, 0.0, PI));
        let text = render(&object);
        assert!(text.contains("p3d_set_prim_pos Arm.cube 0.000000 0.000000 0.000000 90.000000 0.000000 180.000000\n"));
    }

    #[test]
    fn test_unbound_members_are_skipped() {
        let meshes = vec![Mesh::unit_cube("Cube"), Mesh::unit_cube("Cube.001")];
        let groups = group_all(&meshes);
        let objects = vec![ObjectInstance::new("Cube.001", "Cube.001")];

        let mut buffer = Vec::new();
        let written = write_blocks(&mut buffer, &groups, &object_map(&objects)).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert_eq!(written, 1);
        assert!(text.starts_with("p3d_read_macro cube.macro Cube.001\n"));
    }

    #[test]
    fn test_empty_representative_is_skipped() {
        let meshes = vec![Mesh::new("Empty")];
        let groups = group_all(&meshes);
        let objects = vec![ObjectInstance::new("Empty", "Empty")];

        let mut buffer = Vec::new();
        let written = write_blocks(&mut buffer, &groups, &object_map(&objects)).unwrap();
        assert_eq!(written, 0);
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_write_scene_truncates() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("scene.macro");
        std::fs::write(&path, "stale content")?;

        let written = write_scene(&MeshGroups::default(), &[], &path)?;
        assert_eq!(written, 0);
        assert_eq!(std::fs::metadata(&path)?.len(), 0);
        Ok(())
    }
}
