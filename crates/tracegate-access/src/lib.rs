//! ---
//! tg_section: "06-access-control"
//! tg_subsection: "module"
//! tg_type: "source"
//! tg_scope: "code"
//! tg_description: "Role registry, permission matrix and access decisions."
//! tg_version: "v0.0.0-prealpha"
//! tg_owner: "tbd"
//! ---
//! Role and permission resolution for the traceability platform.
//!
//! A caller supplies a role code and an optional department, receives a
//! [`UserPermissions`] value, and consults it through the checker functions or
//! the [`AccessService`] guards. Dashboard routing is resolved independently.
//! Every entry point degrades unknown input to least privilege instead of failing.

pub mod cache;
pub mod checker;
pub mod dashboard;
pub mod department;
pub mod error;
pub mod features;
pub mod module;
pub mod permissions;
pub mod registry;
pub mod service;
pub mod telemetry;

pub use cache::PermissionCache;
pub use checker::{
    has_feature, has_module_access, is_at_least_level, require_feature, require_level,
    require_module,
};
pub use dashboard::{resolve_dashboard, resolve_dashboard_for, DashboardVariant};
pub use department::Department;
pub use error::AccessError;
pub use module::{Module, ModuleAccess};
pub use permissions::{generate_for_role, generate_permissions, UserPermissions};
pub use registry::{Role, RoleLevel, RoleRegistry};
pub use service::AccessService;
