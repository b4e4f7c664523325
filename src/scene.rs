// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Scene snapshot: mesh definitions and the object instances placing them

use crate::geometry::Mesh;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Surface material, only the diffuse color is exported
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Material {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// RGB in [0, 1]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diffuse_color: Option<[f64; 3]>,
}

impl Material {
    pub fn with_color(r: f64, g: f64, b: f64) -> Self {
        Self {
            name: None,
            diffuse_color: Some([r, g, b]),
        }
    }
}

/// Placed instance of a mesh
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObjectInstance {
    pub name: String,
    /// Name of the mesh datablock this object uses
    pub mesh: String,
    #[serde(default = "Vector3::zeros")]
    pub location: Vector3<f64>,
    /// XYZ Euler angles in radians
    #[serde(default = "Vector3::zeros")]
    pub rotation_euler: Vector3<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material: Option<Material>,
}

impl ObjectInstance {
    pub fn new(name: impl Into<String>, mesh: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mesh: mesh.into(),
            location: Vector3::zeros(),
            rotation_euler: Vector3::zeros(),
            material: None,
        }
    }

    pub fn at(mut self, location: Vector3<f64>) -> Self {
        self.location = location;
        self
    }

    pub fn rotated(mut self, rotation_euler: Vector3<f64>) -> Self {
        self.rotation_euler = rotation_euler;
        self
    }

    pub fn with_material(mut self, material: Material) -> Self {
        self.material = Some(material);
        self
    }

    /// Diffuse color if the object has a material that defines one
    pub fn diffuse_color(&self) -> Option<[f64; 3]> {
        self.material.as_ref().and_then(|m| m.diffuse_color)
    }
}

/// Read-only scene snapshot taken at export time
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scene {
    #[serde(default)]
    pub meshes: Vec<Mesh>,
    #[serde(default)]
    pub objects: Vec<ObjectInstance>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_mesh(&mut self, mesh: Mesh) {
        self.meshes.push(mesh);
    }

    pub fn add_object(&mut self, object: ObjectInstance) {
        self.objects.push(object);
    }

    pub fn has_objects(&self) -> bool {
        !self.objects.is_empty()
    }

    pub fn mesh(&self, name: &str) -> Option<&Mesh> {
        self.meshes.iter().find(|m| m.name == name)
    }

    /// Name lookup table over the objects; the first object wins on duplicate names
    pub fn object_map(&self) -> HashMap<&str, &ObjectInstance> {
        object_map(&self.objects)
    }

    /// Objects whose mesh reference does not resolve against the mesh list
    pub fn unresolved_objects(&self) -> Vec<&ObjectInstance> {
        let mesh_names: HashSet<&str> = self.meshes.iter().map(|m| m.name.as_str()).collect();
        self.objects
            .iter()
            .filter(|o| !mesh_names.contains(o.mesh.as_str()))
            .collect()
    }

    /// Copy of the scene restricted to the named objects.
    ///
    /// Only meshes a selected object can use are kept: those named like a
    /// selected object, and those a selected object references.
    pub fn select(&self, names: &[String]) -> Scene {
        let objects: Vec<ObjectInstance> = self
            .objects
            .iter()
            .filter(|o| names.iter().any(|n| *n == o.name))
            .cloned()
            .collect();

        let used: HashSet<&str> = objects
            .iter()
            .flat_map(|o| [o.name.as_str(), o.mesh.as_str()])
            .collect();

        Scene {
            meshes: self
                .meshes
                .iter()
                .filter(|m| used.contains(m.name.as_str()))
                .cloned()
                .collect(),
            objects,
        }
    }
}

/// Build a name lookup table over a list of objects
pub fn object_map(objects: &[ObjectInstance]) -> HashMap<&str, &ObjectInstance> {
    let mut map = HashMap::with_capacity(objects.len());
    for object in objects {
        map.entry(object.name.as_str()).or_insert(object);
    }
    map
}
