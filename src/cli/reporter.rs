// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! CLI output reporter with colored formatting

use crate::dedup::GroupSummary;
use crate::pipeline::ExportReport;
use colored::*;
use std::time::Duration;

/// CLI reporter for formatted output
pub struct Reporter;

impl Reporter {
    /// Report the outcome of an export
    pub fn report_export(scene: &str, report: &ExportReport, duration: Duration, verbose: bool) {
        println!("\n{}", "━".repeat(80).bright_black());
        println!("{} {}", "Exported:".bold(), scene.cyan());
        println!("{}", "━".repeat(80).bright_black());

        if report.is_clean() {
            println!("{} {}", "✅".green(), "Export complete".green().bold());
        } else {
            println!(
                "{} {}",
                "⚠️".yellow(),
                format!("Export complete with {} warnings", report.warnings.len())
                    .yellow()
                    .bold()
            );
        }

        println!(
            "  {} {}",
            "Mesh groups:".bright_black(),
            report.groups.len().to_string().cyan()
        );
        println!(
            "  {} {}",
            "Macro files:".bright_black(),
            report.macro_files.len().to_string().cyan()
        );
        println!(
            "  {} {}",
            "Instances:".bright_black(),
            report.instances.to_string().cyan()
        );
        if let Some(ref scene_file) = report.scene_file {
            println!(
                "  {} {}",
                "Scene file:".bright_black(),
                scene_file.display().to_string().cyan()
            );
        }
        println!(
            "  {} {}",
            "Time:".bright_black(),
            Self::format_duration(duration).yellow()
        );

        if verbose {
            for path in &report.macro_files {
                println!("    {} {}", "•".bright_black(), path.display());
            }
        }

        for warning in &report.warnings {
            println!("  {} {}", "⚠".yellow(), warning.to_string().yellow());
        }

        println!("{}", "━".repeat(80).bright_black());
    }

    /// Print the deduplication result
    pub fn report_groups(groups: &[GroupSummary]) {
        println!("\n{}", "━".repeat(80).bright_black());
        println!("{} {}", "Mesh groups:".bold(), groups.len().to_string().cyan());
        println!("{}", "━".repeat(80).bright_black());

        for group in groups {
            println!(
                "  {} {} {}",
                format!("{}.macro", group.name).cyan(),
                format!("{} verts, {} faces", group.vertex_count, group.face_count).bright_black(),
                Self::format_members(&group.members).bright_black()
            );
        }

        println!("{}", "━".repeat(80).bright_black());
    }

    /// Report error
    pub fn report_error(message: &str) {
        eprintln!("\n{} {}", "❌ Error:".red().bold(), message);
    }

    /// Report info
    pub fn report_info(message: &str) {
        println!("{} {}", "ℹ️".bright_blue(), message);
    }

    fn format_members(members: &[String]) -> String {
        format!("[{}]", members.join(", "))
    }

    /// Format duration for display
    fn format_duration(duration: Duration) -> String {
        let micros = duration.as_micros();

        if micros < 1_000 {
            format!("{}µs", micros)
        } else if micros < 1_000_000 {
            format!("{:.2}ms", micros as f64 / 1_000.0)
        } else {
            format!("{:.2}s", micros as f64 / 1_000_000.0)
        }
    }
}
