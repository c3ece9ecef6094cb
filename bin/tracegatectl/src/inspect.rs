//! ---
//! tg_section: "05-operator-tooling"
//! tg_subsection: "binary"
//! tg_type: "source"
//! tg_scope: "code"
//! tg_description: "Operator CLI for inspecting role permissions and routing."
//! tg_version: "v0.0.0-prealpha"
//! tg_owner: "tbd"
//! ---
use anyhow::{Context, Result};
use clap::Args;
use tracegate_access::{AccessService, Department, RoleRegistry, UserPermissions};

#[derive(Debug, Args)]
pub struct RolesArgs {
    /// Only list roles whose home department matches.
    #[arg(long, value_name = "DEPARTMENT")]
    pub department: Option<String>,
    /// Emit JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct PermissionsArgs {
    /// Role code as stored on the user record.
    #[arg(long)]
    pub role: String,
    /// Department tag supplied at sign-in.
    #[arg(long)]
    pub department: Option<String>,
    /// Emit JSON instead of a summary.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct DashboardArgs {
    /// Role code as stored on the user record.
    #[arg(long)]
    pub role: String,
}

pub fn roles(args: &RolesArgs) -> Result<()> {
    let registry = RoleRegistry::builtin();
    let roles = match &args.department {
        Some(raw) => registry.in_department(Department::parse(raw)?),
        None => registry.iter().collect(),
    };

    if args.json {
        let rendered =
            serde_json::to_string_pretty(&roles).context("failed to serialise role listing")?;
        println!("{rendered}");
        return Ok(());
    }

    for role in roles {
        println!(
            "{:<22} level={:<3} department={:<11} mobile_only={:<5} {}",
            role.code,
            role.level,
            role.department.map(|d| d.to_string()).unwrap_or_else(|| "-".into()),
            role.mobile_only,
            role.description
        );
    }
    Ok(())
}

pub fn permissions(service: &AccessService, args: &PermissionsArgs) -> Result<()> {
    let perms = service.permissions_for(&args.role, args.department.as_deref());
    if args.json {
        let rendered = serde_json::to_string_pretty(perms.as_ref())
            .context("failed to serialise permissions")?;
        println!("{rendered}");
    } else {
        render_summary(&perms);
    }
    Ok(())
}

pub fn dashboard(service: &AccessService, args: &DashboardArgs) {
    println!("{}", service.dashboard_for(&args.role));
}

fn render_summary(perms: &UserPermissions) {
    println!("role: {} (level {})", perms.role, perms.role_level);
    println!(
        "department: {}",
        perms
            .department
            .map(|d| d.to_string())
            .unwrap_or_else(|| "-".into())
    );
    for (module, enabled) in perms.modules.to_map() {
        println!("  {module:<18} {}", if enabled { "yes" } else { "no" });
    }
    let features: Vec<&str> = perms.features.iter().map(String::as_str).collect();
    println!("features: {}", features.join(", "));
}
