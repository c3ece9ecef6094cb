//! ---
//! tg_section: "06-access-control"
//! tg_subsection: "module"
//! tg_type: "source"
//! tg_scope: "code"
//! tg_description: "Role registry, permission matrix and access decisions."
//! tg_version: "v0.0.0-prealpha"
//! tg_owner: "tbd"
//! ---
use thiserror::Error;

/// Errors produced by the fallible building blocks of the access layer.
///
/// The resolution entry points never surface these; they degrade to the
/// least-privilege default instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccessError {
    /// Role code not present in the registry.
    #[error("role not found: {0}")]
    UnknownRole(String),
    /// Department tag outside the known set.
    #[error("unknown department: {0}")]
    UnknownDepartment(String),
    /// Module name outside the closed module set.
    #[error("unknown module: {0}")]
    UnknownModule(String),
    /// Caller lacks the required module, feature or level.
    #[error("access denied for role {role}: requires {requirement}")]
    Denied {
        /// Effective role the decision was made for.
        role: String,
        /// Human-readable description of the missing grant.
        requirement: String,
    },
}

impl AccessError {
    /// True when the error is an authorization rejection rather than bad input.
    pub fn is_denial(&self) -> bool {
        matches!(self, AccessError::Denied { .. })
    }
}
