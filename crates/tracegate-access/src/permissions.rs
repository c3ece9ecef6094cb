//! ---
//! tg_section: "06-access-control"
//! tg_subsection: "module"
//! tg_type: "source"
//! tg_scope: "code"
//! tg_description: "Role registry, permission matrix and access decisions."
//! tg_version: "v0.0.0-prealpha"
//! tg_owner: "tbd"
//! ---
//! Permission matrix generation.
//!
//! Generation is pure: the same role code and department always produce a
//! field-by-field equal [`UserPermissions`]. Unknown inputs degrade to the
//! least-privilege result and are reported through [`crate::telemetry`].

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::department::Department;
use crate::features::features_for;
use crate::module::{Module, ModuleAccess};
use crate::registry::{
    Role, RoleLevel, RoleRegistry, FACTORY_ADMIN_LEVEL, OPERATOR_LEVEL, PLATFORM_LEVEL,
};
use crate::telemetry;

/// Resolved permissions for one (role, department) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPermissions {
    /// Module flags; every module is present.
    pub modules: ModuleAccess,
    /// Enabled feature flags.
    pub features: BTreeSet<String>,
    /// Effective role code (the viewer role when the input was unknown).
    pub role: String,
    /// Hierarchy level copied from the registry.
    pub role_level: RoleLevel,
    /// Department the permissions were generated for, if one was recognised.
    pub department: Option<Department>,
}

impl UserPermissions {
    /// Typed module query.
    pub fn has_module(&self, module: Module) -> bool {
        self.modules.is_enabled(module)
    }
}

/// Build the permission set for a raw role code and optional department string.
///
/// Never fails. Unknown role codes resolve to `viewer`, unknown departments are
/// ignored; both are logged as warnings.
pub fn generate_permissions(role_code: &str, department: Option<&str>) -> UserPermissions {
    generate_with_warnings(role_code, department, true)
}

pub(crate) fn generate_with_warnings(
    role_code: &str,
    department: Option<&str>,
    warn: bool,
) -> UserPermissions {
    let role = resolve_role(role_code, warn);
    let department = resolve_department(role.code, department, warn);
    generate_for_role(role, department)
}

/// Resolve a role code, degrading unknown codes to the viewer role.
pub(crate) fn resolve_role(role_code: &str, warn: bool) -> &'static Role {
    let registry = RoleRegistry::builtin();
    match registry.lookup(role_code) {
        Ok(role) => role,
        Err(_) => {
            telemetry::record_unknown_role(role_code, warn);
            registry.default_role()
        }
    }
}

/// Parse an optional department string. Blank input means "no department".
pub(crate) fn resolve_department(
    role_code: &str,
    department: Option<&str>,
    warn: bool,
) -> Option<Department> {
    let raw = department.map(str::trim).filter(|raw| !raw.is_empty())?;
    match Department::parse(raw) {
        Ok(department) => Some(department),
        Err(_) => {
            telemetry::record_unknown_department(role_code, raw, warn);
            None
        }
    }
}

/// Build the permission set for an already-resolved role and department.
pub fn generate_for_role(role: &Role, department: Option<Department>) -> UserPermissions {
    let mut modules = ModuleAccess::none();

    if role.level == PLATFORM_LEVEL {
        modules.grant(Module::PlatformAccess);
    }

    if role.level <= FACTORY_ADMIN_LEVEL {
        modules.grant(Module::AdminAccess);
        for module in Module::DEPARTMENT_SCOPED {
            modules.grant(module);
        }
    }

    // Traceability lookups are cross-department.
    if role.level <= OPERATOR_LEVEL {
        modules.grant(Module::TraceAccess);
    }

    if role.is_department_scoped() {
        if let Some(module) = department.and_then(|d| d.module()) {
            modules.grant(module);
        }
    }

    UserPermissions {
        modules,
        features: features_for(role.code),
        role: role.code.to_owned(),
        role_level: role.level,
        department,
    }
}
