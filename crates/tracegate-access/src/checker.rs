//! ---
//! tg_section: "06-access-control"
//! tg_subsection: "module"
//! tg_type: "source"
//! tg_scope: "code"
//! tg_description: "Role registry, permission matrix and access decisions."
//! tg_version: "v0.0.0-prealpha"
//! tg_owner: "tbd"
//! ---
use crate::error::AccessError;
use crate::module::Module;
use crate::permissions::UserPermissions;
use crate::registry::RoleLevel;
use crate::telemetry;

/// Returns the module flag for `module_name`; unknown names read as no access.
pub fn has_module_access(perms: &UserPermissions, module_name: &str) -> bool {
    check_module(perms, module_name, true)
}

pub(crate) fn check_module(perms: &UserPermissions, module_name: &str, warn: bool) -> bool {
    match Module::parse(module_name) {
        Ok(module) => perms.has_module(module),
        Err(_) => {
            telemetry::record_unknown_module(&perms.role, module_name, warn);
            false
        }
    }
}

/// Membership test against the feature set.
pub fn has_feature(perms: &UserPermissions, feature: &str) -> bool {
    perms.features.contains(feature)
}

/// True when the role is at `threshold` or more privileged (numerically lower or equal).
pub fn is_at_least_level(perms: &UserPermissions, threshold: RoleLevel) -> bool {
    perms.role_level <= threshold
}

/// Guard variant of [`has_module_access`] for request middleware.
pub fn require_module(perms: &UserPermissions, module_name: &str) -> Result<(), AccessError> {
    guard(
        perms,
        has_module_access(perms, module_name),
        || format!("module {module_name}"),
    )
}

/// Guard variant of [`has_feature`].
pub fn require_feature(perms: &UserPermissions, feature: &str) -> Result<(), AccessError> {
    guard(perms, has_feature(perms, feature), || {
        format!("feature {feature}")
    })
}

/// Guard variant of [`is_at_least_level`].
pub fn require_level(perms: &UserPermissions, threshold: RoleLevel) -> Result<(), AccessError> {
    guard(perms, is_at_least_level(perms, threshold), || {
        format!("level {threshold} or higher")
    })
}

fn guard(
    perms: &UserPermissions,
    allowed: bool,
    requirement: impl FnOnce() -> String,
) -> Result<(), AccessError> {
    if allowed {
        return Ok(());
    }
    let requirement = requirement();
    telemetry::record_denial(&perms.role, &requirement);
    Err(AccessError::Denied {
        role: perms.role.clone(),
        requirement,
    })
}
