//! ---
//! tg_section: "05-operator-tooling"
//! tg_subsection: "binary"
//! tg_type: "source"
//! tg_scope: "code"
//! tg_description: "Operator CLI for inspecting role permissions and routing."
//! tg_version: "v0.0.0-prealpha"
//! tg_owner: "tbd"
//! ---
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracegate_access::AccessService;
use tracegate_common::config::AppConfig;
use tracegate_common::logging::init_tracing;

mod check;
mod inspect;

const DEFAULT_CONFIG: &str = "configs/tracegate.toml";

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "TraceGate role and permission inspection utility",
    long_about = None
)]
struct Cli {
    /// Configuration file; defaults to configs/tracegate.toml when present.
    #[arg(long, global = true, value_name = "FILE", env = "TRACEGATE_CONFIG")]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "List registered roles")]
    Roles(inspect::RolesArgs),
    #[command(about = "Print the permission set generated for a role")]
    Permissions(inspect::PermissionsArgs),
    #[command(about = "Print the dashboard variant selected for a role")]
    Dashboard(inspect::DashboardArgs),
    #[command(about = "Check module access; exits non-zero when denied")]
    Check(check::CheckArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_ref())?;
    let _tracing = init_tracing("tracegatectl", &config.logging)?;
    let service = AccessService::new(&config);
    match cli.command {
        Commands::Roles(args) => inspect::roles(&args)?,
        Commands::Permissions(args) => inspect::permissions(&service, &args)?,
        Commands::Dashboard(args) => inspect::dashboard(&service, &args),
        Commands::Check(args) => check::run(&service, &args)?,
    }
    Ok(())
}

fn load_config(explicit: Option<&PathBuf>) -> Result<AppConfig> {
    match explicit {
        Some(path) => AppConfig::load(&[path]),
        None => AppConfig::load_or_default(&[PathBuf::from(DEFAULT_CONFIG)]),
    }
}
