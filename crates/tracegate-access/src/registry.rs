//! ---
//! tg_section: "06-access-control"
//! tg_subsection: "module"
//! tg_type: "source"
//! tg_scope: "code"
//! tg_description: "Role registry, permission matrix and access decisions."
//! tg_version: "v0.0.0-prealpha"
//! tg_owner: "tbd"
//! ---
//! Canonical role table and hierarchy levels.
//!
//! The registry is built once per process and never mutated. Adding a role is a
//! code change.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use serde::Serialize;

use crate::department::Department;
use crate::error::AccessError;

/// Hierarchy level. Smaller values carry more privilege.
pub type RoleLevel = u8;

/// Platform administrators spanning every factory tenant.
pub const PLATFORM_LEVEL: RoleLevel = 0;
/// Factory super administrators.
pub const FACTORY_ADMIN_LEVEL: RoleLevel = 10;
/// Department managers.
pub const MANAGER_LEVEL: RoleLevel = 20;
/// Front-line operators and inspectors.
pub const OPERATOR_LEVEL: RoleLevel = 30;
/// Read-only viewers.
pub const VIEWER_LEVEL: RoleLevel = 50;

/// Role substituted whenever a role code cannot be resolved.
pub const DEFAULT_ROLE: &str = "viewer";

/// The single role granted platform access.
pub const PLATFORM_ADMIN_ROLE: &str = "platform_super_admin";

/// Immutable role definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Role {
    /// Canonical role code.
    pub code: &'static str,
    /// Position in the hierarchy.
    pub level: RoleLevel,
    /// Home department, for roles that belong to one.
    pub department: Option<Department>,
    /// Role is meant for the mobile app only and has no web dashboard.
    pub mobile_only: bool,
    /// Short description shown in operator tooling.
    pub description: &'static str,
}

impl Role {
    const fn new(
        code: &'static str,
        level: RoleLevel,
        department: Option<Department>,
        mobile_only: bool,
        description: &'static str,
    ) -> Self {
        Self {
            code,
            level,
            department,
            mobile_only,
            description,
        }
    }

    /// Department-scoped tier: managers and operators.
    pub fn is_department_scoped(&self) -> bool {
        (MANAGER_LEVEL..=OPERATOR_LEVEL).contains(&self.level)
    }
}

static BUILTIN_ROLES: &[Role] = &[
    Role::new(
        PLATFORM_ADMIN_ROLE,
        PLATFORM_LEVEL,
        None,
        false,
        "Platform operator managing every factory tenant",
    ),
    Role::new(
        "factory_super_admin",
        FACTORY_ADMIN_LEVEL,
        Some(Department::Management),
        false,
        "Full control over a single factory",
    ),
    Role::new(
        "department_admin",
        MANAGER_LEVEL,
        None,
        false,
        "Manager of the department supplied at sign-in",
    ),
    Role::new(
        "hr_admin",
        MANAGER_LEVEL,
        Some(Department::Hr),
        false,
        "Personnel, attendance and payroll administration",
    ),
    Role::new(
        "production_manager",
        MANAGER_LEVEL,
        Some(Department::Processing),
        false,
        "Production planning and batch oversight",
    ),
    Role::new(
        "warehouse_manager",
        MANAGER_LEVEL,
        Some(Department::Warehouse),
        false,
        "Inventory, inbound and outbound stock",
    ),
    Role::new(
        "finance_manager",
        MANAGER_LEVEL,
        Some(Department::Finance),
        false,
        "Cost accounting and financial reports",
    ),
    Role::new(
        "operator",
        OPERATOR_LEVEL,
        None,
        true,
        "Front-line production worker",
    ),
    Role::new(
        "quality_inspector",
        OPERATOR_LEVEL,
        Some(Department::Processing),
        true,
        "Records quality inspections on the line",
    ),
    Role::new(
        "warehouse_worker",
        OPERATOR_LEVEL,
        Some(Department::Warehouse),
        true,
        "Scans stock movements in the warehouse",
    ),
    Role::new(
        DEFAULT_ROLE,
        VIEWER_LEVEL,
        None,
        false,
        "Read-only access to dashboards",
    ),
];

static REGISTRY: Lazy<RoleRegistry> = Lazy::new(|| RoleRegistry {
    roles: BUILTIN_ROLES.iter().map(|role| (role.code, role)).collect(),
});

/// Read-only lookup table over the built-in roles.
#[derive(Debug)]
pub struct RoleRegistry {
    roles: IndexMap<&'static str, &'static Role>,
}

impl RoleRegistry {
    /// Process-wide registry.
    pub fn builtin() -> &'static RoleRegistry {
        &REGISTRY
    }

    /// Lookup a role by exact code.
    pub fn lookup(&self, code: &str) -> Result<&'static Role, AccessError> {
        self.roles
            .get(code)
            .copied()
            .ok_or_else(|| AccessError::UnknownRole(code.to_owned()))
    }

    /// Lookup a role, substituting the viewer role when the code is unknown.
    pub fn resolve(&self, code: &str) -> &'static Role {
        self.lookup(code).unwrap_or_else(|_| self.default_role())
    }

    /// Lowest-privilege fallback role.
    pub fn default_role(&self) -> &'static Role {
        // BUILTIN_ROLES always contains the viewer entry as its last element.
        self.roles
            .get(DEFAULT_ROLE)
            .copied()
            .unwrap_or(&BUILTIN_ROLES[BUILTIN_ROLES.len() - 1])
    }

    /// True if the code names a registered role.
    pub fn contains(&self, code: &str) -> bool {
        self.roles.contains_key(code)
    }

    /// All roles in declaration order (most privileged first).
    pub fn iter(&self) -> impl Iterator<Item = &'static Role> + '_ {
        self.roles.values().copied()
    }

    /// Roles whose home department matches.
    pub fn in_department(&self, department: Department) -> Vec<&'static Role> {
        self.iter()
            .filter(|role| role.department == Some(department))
            .collect()
    }

    /// Number of registered roles.
    pub fn len(&self) -> usize {
        self.roles.len()
    }

    /// Always false for the built-in registry.
    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }
}
