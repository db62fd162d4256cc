//! Scene command implementation
//!
//! Emits the drawing plan (skeleton lines, head circle, COM markers, plumb
//! line, zone color) as JSON, to stdout or a file.

use anyhow::{Context, Result};
use colored::Colorize;
use squat_model::{MassProfile, ModelError, Scene};
use std::path::Path;
use std::process::ExitCode;

use super::evaluate::checked_evaluate;
use crate::input::{resolve, PoseArgs};

/// Builds the scene for the resolved inputs.
///
/// Invalid inputs are rejected unless `unchecked` is set. Non-finite inputs
/// built with `unchecked` serialize their coordinates as `null`.
pub fn build_scene(args: &PoseArgs, profile: MassProfile, unchecked: bool) -> Result<Scene> {
    let resolved = resolve(args).context("Failed to load pose inputs")?;
    let (validation, result) = checked_evaluate(&resolved.inputs, profile, unchecked);

    match result {
        Some(result) => {
            for error in &validation.errors {
                tracing::warn!(code = %error.code, "building scene anyway: {}", error);
            }
            Ok(Scene::from_result(&result))
        }
        None => Err(ModelError::Validation(validation.errors.len()))
            .context("Refusing to build a scene; pass --unchecked to build anyway"),
    }
}

/// Run the scene command
///
/// # Arguments
/// * `args` - Pose flags and optional input file
/// * `profile` - Mass-fraction profile
/// * `output` - Optional output file (default: stdout)
/// * `pretty` - Pretty-print the JSON
/// * `unchecked` - Build the scene even if inputs fail validation
pub fn run(
    args: &PoseArgs,
    profile: MassProfile,
    output: Option<&str>,
    pretty: bool,
    unchecked: bool,
) -> Result<ExitCode> {
    let scene = build_scene(args, profile, unchecked)?;
    let json = if pretty {
        scene.to_json_pretty()
    } else {
        serde_json::to_string(&scene)
    }
    .context("Failed to serialize scene")?;

    match output {
        Some(path) => {
            let path = Path::new(path);
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            std::fs::write(path, json)
                .with_context(|| format!("Failed to write scene to {}", path.display()))?;
            tracing::info!(path = %path.display(), zone = %scene.zone, "scene written");
            eprintln!("{} {}", "Wrote:".green().bold(), path.display());
        }
        None => println!("{}", json),
    }

    Ok(ExitCode::SUCCESS)
}
