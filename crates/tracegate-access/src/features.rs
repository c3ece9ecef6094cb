//! ---
//! tg_section: "06-access-control"
//! tg_subsection: "module"
//! tg_type: "source"
//! tg_scope: "code"
//! tg_description: "Role registry, permission matrix and access decisions."
//! tg_version: "v0.0.0-prealpha"
//! tg_owner: "tbd"
//! ---
use std::collections::BTreeSet;

pub const PLATFORM_FACTORY_MANAGE: &str = "platform.factory.manage";
pub const PLATFORM_AI_QUOTA: &str = "platform.ai_quota";
pub const USER_MANAGE: &str = "user.manage";
pub const FACTORY_SETTINGS: &str = "factory.settings";
pub const BATCH_CREATE: &str = "batch.create";
pub const BATCH_VIEW: &str = "batch.view";
pub const QUALITY_INSPECT: &str = "quality.inspect";
pub const QUALITY_APPROVE: &str = "quality.approve";
pub const INVENTORY_MANAGE: &str = "inventory.manage";
pub const INVENTORY_SCAN: &str = "inventory.scan";
pub const ATTENDANCE_MANAGE: &str = "attendance.manage";
pub const PAYROLL_VIEW: &str = "payroll.view";
pub const COST_ANALYSIS: &str = "cost.analysis";
pub const TRACE_QUERY: &str = "trace.query";
pub const REPORT_VIEW: &str = "report.view";
pub const REPORT_EXPORT: &str = "report.export";
pub const DASHBOARD_VIEW: &str = "dashboard.view";

fn feature_table(role_code: &str) -> &'static [&'static str] {
    match role_code {
        "platform_super_admin" => &[
            PLATFORM_FACTORY_MANAGE,
            PLATFORM_AI_QUOTA,
            USER_MANAGE,
            REPORT_VIEW,
            REPORT_EXPORT,
            DASHBOARD_VIEW,
        ],
        "factory_super_admin" => &[
            USER_MANAGE,
            FACTORY_SETTINGS,
            BATCH_CREATE,
            BATCH_VIEW,
            QUALITY_APPROVE,
            INVENTORY_MANAGE,
            ATTENDANCE_MANAGE,
            COST_ANALYSIS,
            TRACE_QUERY,
            REPORT_VIEW,
            REPORT_EXPORT,
            DASHBOARD_VIEW,
        ],
        "department_admin" => &[
            BATCH_CREATE,
            BATCH_VIEW,
            TRACE_QUERY,
            REPORT_VIEW,
            DASHBOARD_VIEW,
        ],
        "hr_admin" => &[ATTENDANCE_MANAGE, PAYROLL_VIEW, REPORT_VIEW, DASHBOARD_VIEW],
        "production_manager" => &[
            BATCH_CREATE,
            BATCH_VIEW,
            QUALITY_APPROVE,
            TRACE_QUERY,
            REPORT_VIEW,
            DASHBOARD_VIEW,
        ],
        "warehouse_manager" => &[
            INVENTORY_MANAGE,
            BATCH_VIEW,
            TRACE_QUERY,
            REPORT_VIEW,
            DASHBOARD_VIEW,
        ],
        "finance_manager" => &[
            COST_ANALYSIS,
            PAYROLL_VIEW,
            REPORT_VIEW,
            REPORT_EXPORT,
            DASHBOARD_VIEW,
        ],
        "operator" => &[BATCH_VIEW, TRACE_QUERY],
        "quality_inspector" => &[QUALITY_INSPECT, BATCH_VIEW, TRACE_QUERY],
        "warehouse_worker" => &[INVENTORY_SCAN, BATCH_VIEW],
        "viewer" => &[DASHBOARD_VIEW, REPORT_VIEW],
        _ => &[],
    }
}

/// Feature flags enabled for a role code. Unmapped codes get an empty set.
pub fn features_for(role_code: &str) -> BTreeSet<String> {
    feature_table(role_code)
        .iter()
        .map(|feature| (*feature).to_owned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::RoleRegistry;

    #[test]
    fn every_registered_role_has_features() {
        for role in RoleRegistry::builtin().iter() {
            assert!(!features_for(role.code).is_empty(), "{} has no features", role.code);
        }
    }

    #[test]
    fn unmapped_role_has_no_features() {
        assert!(features_for("unknown_role_xyz").is_empty());
    }

    #[test]
    fn platform_features_stay_on_the_platform_role() {
        for role in RoleRegistry::builtin().iter() {
            let features = features_for(role.code);
            let platform = features.contains(PLATFORM_FACTORY_MANAGE);
            assert_eq!(platform, role.code == "platform_super_admin", "{}", role.code);
        }
    }
}
