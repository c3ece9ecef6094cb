//! ---
//! tg_section: "06-access-control"
//! tg_subsection: "module"
//! tg_type: "source"
//! tg_scope: "code"
//! tg_description: "Role registry, permission matrix and access decisions."
//! tg_version: "v0.0.0-prealpha"
//! tg_owner: "tbd"
//! ---
//! Dashboard routing for the web console.
//!
//! Mobile-only roles are intentionally absent from the table and land on
//! [`DashboardVariant::Default`]. Blocking their web login is the job of the
//! authentication layer, not this resolver.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::permissions::UserPermissions;

/// Dashboard layouts the front-end router can mount.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
pub enum DashboardVariant {
    #[serde(rename = "DashboardAdmin")]
    #[strum(serialize = "DashboardAdmin")]
    Admin,
    #[serde(rename = "DashboardHR")]
    #[strum(serialize = "DashboardHR")]
    Hr,
    #[serde(rename = "DashboardProduction")]
    #[strum(serialize = "DashboardProduction")]
    Production,
    #[serde(rename = "DashboardWarehouse")]
    #[strum(serialize = "DashboardWarehouse")]
    Warehouse,
    #[serde(rename = "DashboardFinance")]
    #[strum(serialize = "DashboardFinance")]
    Finance,
    #[serde(rename = "DashboardDefault")]
    #[strum(serialize = "DashboardDefault")]
    Default,
}

fn dashboard_table(role_code: &str) -> Option<DashboardVariant> {
    let variant = match role_code {
        "platform_super_admin" | "factory_super_admin" => DashboardVariant::Admin,
        "hr_admin" => DashboardVariant::Hr,
        "department_admin" | "production_manager" => DashboardVariant::Production,
        "warehouse_manager" => DashboardVariant::Warehouse,
        "finance_manager" => DashboardVariant::Finance,
        _ => return None,
    };
    Some(variant)
}

/// Pick the dashboard for a role code. Total: unmapped codes get `Default`.
pub fn resolve_dashboard(role_code: &str) -> DashboardVariant {
    dashboard_table(role_code).unwrap_or(DashboardVariant::Default)
}

/// Pick the dashboard for an already-generated permission set.
pub fn resolve_dashboard_for(perms: &UserPermissions) -> DashboardVariant {
    resolve_dashboard(&perms.role)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::permissions::generate_permissions;
    use crate::registry::RoleRegistry;

    #[test]
    fn hr_admin_gets_hr_dashboard() {
        assert_eq!(resolve_dashboard("hr_admin"), DashboardVariant::Hr);
        assert_eq!(resolve_dashboard("hr_admin").to_string(), "DashboardHR");
    }

    #[test]
    fn unknown_role_gets_default() {
        assert_eq!(resolve_dashboard("totally_unknown"), DashboardVariant::Default);
        assert_eq!(
            resolve_dashboard("totally_unknown").to_string(),
            "DashboardDefault"
        );
    }

    #[test]
    fn mobile_only_roles_fall_back_to_default() {
        for role in RoleRegistry::builtin().iter().filter(|r| r.mobile_only) {
            assert_eq!(resolve_dashboard(role.code), DashboardVariant::Default);
        }
    }

    #[test]
    fn every_web_manager_has_a_dedicated_dashboard() {
        for (code, expected) in [
            ("platform_super_admin", DashboardVariant::Admin),
            ("factory_super_admin", DashboardVariant::Admin),
            ("production_manager", DashboardVariant::Production),
            ("warehouse_manager", DashboardVariant::Warehouse),
            ("finance_manager", DashboardVariant::Finance),
            ("viewer", DashboardVariant::Default),
        ] {
            assert_eq!(resolve_dashboard(code), expected, "{code}");
        }
    }

    #[test]
    fn permission_set_routes_by_effective_role() {
        let perms = generate_permissions("ghost_role", None);
        assert_eq!(resolve_dashboard_for(&perms), DashboardVariant::Default);
        let perms = generate_permissions("warehouse_manager", Some("WAREHOUSE"));
        assert_eq!(resolve_dashboard_for(&perms), DashboardVariant::Warehouse);
    }

    #[test]
    fn variants_parse_from_their_identifiers() {
        assert_eq!(
            "DashboardFinance".parse::<DashboardVariant>().unwrap(),
            DashboardVariant::Finance
        );
        assert_eq!(
            serde_json::to_value(DashboardVariant::Hr).unwrap(),
            serde_json::json!("DashboardHR")
        );
    }
}
