// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! I/O module - scene import and Move3D writers

mod importer;
pub mod macro_writer;
pub mod scene_writer;

pub use importer::{import_scene_file, parse_scene};
pub use macro_writer::{macro_to_string, write_macro, write_mesh};
pub use scene_writer::{write_instance, write_scene};

use std::path::{Path, PathBuf};

/// Extensions the Move3D loader accepts for a top-level scene
pub const SCENE_EXTENSIONS: [&str; 2] = ["p3d", "macro"];

/// Append `.macro` to a scene filename that has no extension
pub fn scene_filename(filename: &str) -> PathBuf {
    let path = Path::new(filename);
    match path.extension() {
        Some(_) => path.to_path_buf(),
        None => path.with_extension("macro"),
    }
}
