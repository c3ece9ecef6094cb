//! ---
//! tg_section: "06-access-control"
//! tg_subsection: "module"
//! tg_type: "source"
//! tg_scope: "code"
//! tg_description: "Role registry, permission matrix and access decisions."
//! tg_version: "v0.0.0-prealpha"
//! tg_owner: "tbd"
//! ---
use std::sync::Arc;

use tracegate_common::config::AppConfig;
use tracegate_logging::{log_access_event, AccessOutcome, LogContext};
use tracing::debug;

use crate::cache::PermissionCache;
use crate::checker::{self, check_module};
use crate::dashboard::{resolve_dashboard, DashboardVariant};
use crate::error::AccessError;
use crate::permissions::{generate_with_warnings, UserPermissions};
use crate::registry::RoleLevel;
use crate::telemetry;

/// Facade used by the access-control middleware and the UI router.
///
/// Combines generation, the optional cache, guard checks and dashboard
/// routing behind one configured handle. Cheap to share behind an `Arc`.
#[derive(Debug)]
pub struct AccessService {
    cache: Option<PermissionCache>,
    warn_on_fallback: bool,
    metrics_enabled: bool,
}

impl Default for AccessService {
    fn default() -> Self {
        Self::new(&AppConfig::default())
    }
}

impl AccessService {
    pub fn new(config: &AppConfig) -> Self {
        let access = &config.access;
        let cache = access
            .cache_enabled
            .then(|| PermissionCache::new(access.cache_capacity));
        debug!(
            cache_enabled = access.cache_enabled,
            cache_capacity = access.cache_capacity,
            warn_on_fallback = access.warn_on_fallback,
            "access service configured"
        );
        Self {
            cache,
            warn_on_fallback: access.warn_on_fallback,
            metrics_enabled: config.metrics.enabled,
        }
    }

    /// Permissions for a raw role code and optional department.
    pub fn permissions_for(
        &self,
        role_code: &str,
        department: Option<&str>,
    ) -> Arc<UserPermissions> {
        match &self.cache {
            Some(cache) => cache.get_or_generate(role_code, department, self.warn_on_fallback),
            None => Arc::new(generate_with_warnings(
                role_code,
                department,
                self.warn_on_fallback,
            )),
        }
    }

    /// Dashboard variant for a raw role code.
    pub fn dashboard_for(&self, role_code: &str) -> DashboardVariant {
        resolve_dashboard(role_code)
    }

    /// Allow the request only if the caller holds `module_name`.
    pub fn authorize(
        &self,
        role_code: &str,
        department: Option<&str>,
        module_name: &str,
    ) -> Result<Arc<UserPermissions>, AccessError> {
        let perms = self.permissions_for(role_code, department);
        let allowed = check_module(&perms, module_name, self.warn_on_fallback);
        self.decide(perms, allowed, || format!("module {module_name}"))
    }

    /// Allow the request only if the caller is at `threshold` or above.
    pub fn require_level(
        &self,
        role_code: &str,
        department: Option<&str>,
        threshold: RoleLevel,
    ) -> Result<Arc<UserPermissions>, AccessError> {
        let perms = self.permissions_for(role_code, department);
        let allowed = checker::is_at_least_level(&perms, threshold);
        self.decide(perms, allowed, || format!("level {threshold} or higher"))
    }

    /// Allow the request only if the caller holds `feature`.
    pub fn require_feature(
        &self,
        role_code: &str,
        department: Option<&str>,
        feature: &str,
    ) -> Result<Arc<UserPermissions>, AccessError> {
        let perms = self.permissions_for(role_code, department);
        let allowed = checker::has_feature(&perms, feature);
        self.decide(perms, allowed, || format!("feature {feature}"))
    }

    /// Prometheus text exposition, when metrics are enabled.
    pub fn metrics_text(&self) -> Option<String> {
        if !self.metrics_enabled {
            return None;
        }
        telemetry::gather_text().ok()
    }

    /// Number of cached permission sets (zero when the cache is disabled).
    pub fn cached_entries(&self) -> usize {
        self.cache.as_ref().map_or(0, PermissionCache::len)
    }

    fn decide(
        &self,
        perms: Arc<UserPermissions>,
        allowed: bool,
        requirement: impl FnOnce() -> String,
    ) -> Result<Arc<UserPermissions>, AccessError> {
        if allowed {
            let ctx = LogContext::new().with_role(&perms.role);
            log_access_event(
                Some(&ctx),
                "access.granted",
                "request allowed",
                AccessOutcome::Granted,
            );
            return Ok(perms);
        }
        let requirement = requirement();
        telemetry::record_denial(&perms.role, &requirement);
        Err(AccessError::Denied {
            role: perms.role.clone(),
            requirement,
        })
    }
}
