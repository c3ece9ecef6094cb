//! ---
//! tg_section: "05-operator-tooling"
//! tg_subsection: "binary"
//! tg_type: "source"
//! tg_scope: "code"
//! tg_description: "Operator CLI for inspecting role permissions and routing."
//! tg_version: "v0.0.0-prealpha"
//! tg_owner: "tbd"
//! ---
use anyhow::Result;
use clap::Args;
use tracegate_access::AccessService;

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Role code as stored on the user record.
    #[arg(long)]
    pub role: String,
    /// Department tag supplied at sign-in.
    #[arg(long)]
    pub department: Option<String>,
    /// Module name, e.g. `processing_access`.
    #[arg(long)]
    pub module: String,
}

/// Print `granted` or fail with the denial reason.
pub fn run(service: &AccessService, args: &CheckArgs) -> Result<()> {
    let perms = service.authorize(&args.role, args.department.as_deref(), &args.module)?;
    println!("granted: {} may use {}", perms.role, args.module);
    Ok(())
}
