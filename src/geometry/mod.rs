// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Geometry module - mesh representation and comparison

mod compare;
mod mesh;

pub use compare::meshes_equal;
pub use mesh::{Face, Mesh, Vertex};
