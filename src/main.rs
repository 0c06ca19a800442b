//! `kubeshark-misc` prints build metadata and the per-user dot folder.
//!
//! # Usage
//!
//! ```text
//! kubeshark-misc <command> [--debug]
//!
//! Commands:
//!   version       print the version (with --debug: every build field)
//!   dot-folder    print ~/.kubeshark (empty line if the home dir is unknown)
//!   config-path   print ~/.kubeshark/config.toml
//!
//! Flags:
//!   --debug       verbose output for `version`
//!   --help, -h    print this help
//! ```
//!
//! Startup sequence:
//!   1. Load .env (if present)
//!   2. Load config from the dot folder
//!   3. Init logger at the configured level
//!   4. Run the command

use std::process;

use kubeshark_misc::{BuildInfo, config, error::AppError, logger};
use tracing::{debug, info};

const USAGE: &str = "\
Usage: kubeshark-misc <command> [--debug]

Commands:
  version       print the version (with --debug: every build field)
  dot-folder    print the per-user dot folder path
  config-path   print the user config file path

Flags:
  --debug       verbose output for `version`
  --help, -h    print this help";

enum Command {
    Version { debug: bool },
    DotFolder,
    ConfigPath,
    Help,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Command, String> {
    let mut debug = false;
    let mut command = None;
    for arg in args {
        match arg.as_str() {
            "--debug" => debug = true,
            "--help" | "-h" => return Ok(Command::Help),
            other if command.is_none() && !other.starts_with('-') => command = Some(arg),
            other => return Err(format!("unexpected argument: {other}")),
        }
    }
    match command.as_deref() {
        Some("version") => Ok(Command::Version { debug }),
        Some("dot-folder") => Ok(Command::DotFolder),
        Some("config-path") => Ok(Command::ConfigPath),
        Some(other) => Err(format!("unknown command: {other}")),
        None => Ok(Command::Help),
    }
}

fn main() {
    let command = match parse_args(std::env::args().skip(1)) {
        Ok(command) => command,
        Err(msg) => {
            eprintln!("error: {msg}\n\n{USAGE}");
            process::exit(2);
        }
    };

    if let Err(e) = run(command) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<(), AppError> {
    // .env is optional.
    let _ = dotenvy::dotenv();

    let build = BuildInfo::compiled();
    let config = config::load(&build)?;
    logger::init(config.log_level)?;

    match &config.config_file {
        Some(path) if config.from_file => debug!(path = %path.display(), "config loaded"),
        Some(path) => debug!(path = %path.display(), "no config file, using defaults"),
        None => debug!("no dot folder, using defaults"),
    }
    debug!(
        version = build.version,
        branch = build.branch,
        commit = build.git_commit_hash,
        dot_folder = %build.dot_folder_path(),
        log_level = %config.log_level,
        "build info"
    );

    match command {
        Command::Help => println!("{USAGE}"),
        Command::Version { debug: false } => println!("{}", build.version()),
        Command::Version { debug: true } => print!("{}", version_report(&build)),
        Command::DotFolder => {
            let path = build.dot_folder_path();
            if path.is_empty() {
                info!("home directory unavailable");
            }
            println!("{path}");
        }
        Command::ConfigPath => {
            let path = config
                .config_file
                .map(|p| p.display().to_string())
                .unwrap_or_default();
            println!("{path}");
        }
    }

    Ok(())
}

fn version_report(build: &BuildInfo) -> String {
    [
        ("version", build.version),
        ("branch", build.branch),
        ("commit", build.git_commit_hash),
        ("built", build.build_timestamp),
        ("rbac", build.rbac_version),
        ("platform", build.platform),
    ]
    .iter()
    .map(|(key, value)| format!("{key}: {value}\n"))
    .collect()
}
