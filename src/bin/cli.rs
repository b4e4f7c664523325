// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! p3d-export CLI

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use p3d_export::cli::Reporter;
use p3d_export::{export_with_config, group_meshes, import_scene_file, ExportConfig};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "p3d-export")]
#[command(about = "Export mesh scenes to Move3D files (.p3d/.macro)", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file (defaults to ./p3d-export.toml when present)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Export a JSON scene snapshot
    Export {
        /// Input scene snapshot (JSON)
        scene: PathBuf,

        /// Output directory
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Scene file name (.macro is appended when there is no extension)
        #[arg(short = 'n', long)]
        filename: Option<String>,

        /// Only export these objects (repeatable)
        #[arg(long = "object", value_name = "NAME")]
        objects: Vec<String>,

        /// Write the export report as JSON
        #[arg(long, value_name = "FILE")]
        report: Option<PathBuf>,
    },

    /// Show how the scene meshes are deduplicated
    Groups {
        /// Input scene snapshot (JSON)
        scene: PathBuf,
    },

    /// Show version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => ExportConfig::from_file(path)?,
        None => ExportConfig::load()?,
    };
    config.verbose |= cli.verbose;

    let directives = log_directives(std::env::var("RUST_LOG").ok(), config.verbose);
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(directives))
        .init();

    match cli.command {
        Commands::Export {
            scene,
            output,
            filename,
            objects,
            report,
        } => {
            if let Some(output) = output {
                config.output_dir = output;
            }
            if let Some(filename) = filename {
                config.scene_filename = filename;
            }
            export_command(&scene, &config, &objects, report.as_deref())?;
        }
        Commands::Groups { scene } => {
            groups_command(&scene)?;
        }
        Commands::Version => {
            println!("p3d-export v{}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}

/// Filter directives: a non-empty `RUST_LOG` wins over the verbosity flag
fn log_directives(rust_log: Option<String>, verbose: bool) -> String {
    match rust_log {
        Some(directives) if !directives.trim().is_empty() => directives,
        _ if verbose => "debug".to_string(),
        _ => "info".to_string(),
    }
}

fn load_scene(path: &Path) -> p3d_export::Scene {
    match import_scene_file(path) {
        Ok(scene) => scene,
        Err(e) => {
            Reporter::report_error(&e.to_string());
            std::process::exit(1);
        }
    }
}

fn export_command(
    scene_path: &Path,
    config: &ExportConfig,
    objects: &[String],
    report_path: Option<&Path>,
) -> Result<()> {
    let mut scene = load_scene(scene_path);
    if !objects.is_empty() {
        scene = scene.select(objects);
        if config.verbose {
            Reporter::report_info(&format!("Exporting {} selected objects", scene.objects.len()));
        }
    }

    std::fs::create_dir_all(&config.output_dir).with_context(|| {
        format!("Failed to create output directory: {}", config.output_dir.display())
    })?;

    let start = std::time::Instant::now();
    let report = export_with_config(&scene, config);
    let duration = start.elapsed();

    Reporter::report_export(
        &scene_path.display().to_string(),
        &report,
        duration,
        config.verbose,
    );

    if let Some(path) = report_path {
        report.write_json(path)?;
        if config.verbose {
            Reporter::report_info(&format!("Report written to {}", path.display()));
        }
    }

    Ok(())
}

fn groups_command(scene_path: &Path) -> Result<()> {
    let scene = load_scene(scene_path);
    let groups = group_meshes(&scene);

    if groups.is_empty() && !scene.has_objects() {
        Reporter::report_info("Scene has no objects, nothing would be exported");
    }

    let summaries: Vec<_> = groups.iter().map(|g| g.summary()).collect();
    Reporter::report_groups(&summaries);
    Ok(())
}
