//! Squat CLI - command-line front end for the squat pose and balance model
//!
//! Evaluates a sagittal-plane squat pose, validates inputs against the
//! nominal slider ranges, and emits drawing plans for renderers.

use clap::{ArgAction, Parser, Subcommand};
use squat_model::MassProfile;
use std::process::ExitCode;

use squat_cli::commands;
use squat_cli::input::PoseArgs;
use squat_cli::logging;

/// Squat - sagittal-plane squat pose and balance model
#[derive(Parser)]
#[command(name = "squat")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a pose and print key points, COMs and the balance zone
    Evaluate {
        #[command(flatten)]
        pose: PoseArgs,

        /// Mass-fraction profile (male, female)
        #[arg(short, long, default_value = "male")]
        profile: MassProfile,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,

        /// Evaluate even when inputs are outside the nominal ranges
        #[arg(long)]
        unchecked: bool,
    },

    /// Validate pose inputs without evaluating
    Validate {
        #[command(flatten)]
        pose: PoseArgs,

        /// Mass-fraction profile for the body COM boundary check (male, female)
        #[arg(short, long, default_value = "male")]
        profile: MassProfile,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Emit the drawing plan for a pose as JSON
    Scene {
        #[command(flatten)]
        pose: PoseArgs,

        /// Mass-fraction profile (male, female)
        #[arg(short, long, default_value = "male")]
        profile: MassProfile,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Pretty-print the output JSON
        #[arg(long)]
        pretty: bool,

        /// Build the scene even when inputs are outside the nominal ranges
        #[arg(long)]
        unchecked: bool,
    },

    /// List the mass-fraction profiles
    Profiles {
        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Evaluate {
            pose,
            profile,
            json,
            pretty,
            unchecked,
        } => commands::evaluate::run(&pose, profile, json, pretty, unchecked),
        Commands::Validate {
            pose,
            profile,
            json,
        } => commands::validate::run(&pose, profile, json),
        Commands::Scene {
            pose,
            profile,
            output,
            pretty,
            unchecked,
        } => commands::scene::run(&pose, profile, output.as_deref(), pretty, unchecked),
        Commands::Profiles { json } => commands::profiles::run(json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
