//! ---
//! tg_section: "06-access-control"
//! tg_subsection: "module"
//! tg_type: "source"
//! tg_scope: "code"
//! tg_description: "Role registry, permission matrix and access decisions."
//! tg_version: "v0.0.0-prealpha"
//! tg_owner: "tbd"
//! ---
use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use tracegate_logging::{tg_debug, LogContext};

use crate::department::Department;
use crate::permissions::{generate_for_role, resolve_department, resolve_role, UserPermissions};
use crate::telemetry;

type CacheKey = (&'static str, Option<Department>);

/// Read-through cache of generated permission sets.
///
/// Keys are the resolved role and department, so unknown inputs share the
/// viewer entry. Entries are never replaced or invalidated; once `capacity`
/// keys are stored, further misses are generated without being inserted.
#[derive(Debug)]
pub struct PermissionCache {
    capacity: usize,
    entries: RwLock<HashMap<CacheKey, Arc<UserPermissions>>>,
}

impl PermissionCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Return the cached permissions for the inputs, generating them on a miss.
    pub fn get_or_generate(
        &self,
        role_code: &str,
        department: Option<&str>,
        warn: bool,
    ) -> Arc<UserPermissions> {
        let role = resolve_role(role_code, warn);
        let department = resolve_department(role.code, department, warn);
        let key = (role.code, department);

        if let Some(hit) = self.entries.read().get(&key) {
            telemetry::record_cache_hit();
            return Arc::clone(hit);
        }

        telemetry::record_cache_miss();
        tg_debug!(
            context = LogContext::new().with_role(role.code),
            "permission cache miss"
        );
        let generated = Arc::new(generate_for_role(role, department));
        let mut entries = self.entries.write();
        if let Some(existing) = entries.get(&key) {
            return Arc::clone(existing);
        }
        if entries.len() < self.capacity {
            entries.insert(key, Arc::clone(&generated));
        }
        generated
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
