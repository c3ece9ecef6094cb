//! ---
//! tg_section: "06-access-control"
//! tg_subsection: "module"
//! tg_type: "source"
//! tg_scope: "code"
//! tg_description: "Role registry, permission matrix and access decisions."
//! tg_version: "v0.0.0-prealpha"
//! tg_owner: "tbd"
//! ---
use once_cell::sync::Lazy;
use prometheus::{register_int_counter, Encoder, IntCounter, TextEncoder};
use tracegate_logging::{log_access_event, AccessOutcome, LogContext};

static UNKNOWN_ROLE_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "tracegate_unknown_role_total",
        "Role codes that fell back to the viewer role"
    )
    .expect("metric registration to succeed")
});

static UNKNOWN_DEPARTMENT_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "tracegate_unknown_department_total",
        "Department tags ignored because they were not recognised"
    )
    .expect("metric registration to succeed")
});

static UNKNOWN_MODULE_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "tracegate_unknown_module_total",
        "Module queries for names outside the module set"
    )
    .expect("metric registration to succeed")
});

static ACCESS_DENIED_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "tracegate_access_denied_total",
        "Requests rejected by an access guard"
    )
    .expect("metric registration to succeed")
});

static CACHE_HITS_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "tracegate_cache_hits_total",
        "Permission sets served from the cache"
    )
    .expect("metric registration to succeed")
});

static CACHE_MISSES_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "tracegate_cache_misses_total",
        "Permission sets generated on a cache miss"
    )
    .expect("metric registration to succeed")
});

/// Record an unknown role code that was degraded to the viewer role.
pub fn record_unknown_role(role_code: &str, warn: bool) {
    UNKNOWN_ROLE_TOTAL.inc();
    if warn {
        let ctx = LogContext::new().with_role(role_code);
        log_access_event(
            Some(&ctx),
            "role.fallback",
            "unknown role code; substituting viewer",
            AccessOutcome::Degraded,
        );
    }
}

/// Record an unknown department tag that was treated as absent.
pub fn record_unknown_department(role_code: &str, department: &str, warn: bool) {
    UNKNOWN_DEPARTMENT_TOTAL.inc();
    if warn {
        let ctx = LogContext::new()
            .with_role(role_code)
            .with_department(department);
        log_access_event(
            Some(&ctx),
            "department.fallback",
            "unknown department; no department access granted",
            AccessOutcome::Degraded,
        );
    }
}

/// Record a module query for a name outside the module set.
pub fn record_unknown_module(role_code: &str, module: &str, warn: bool) {
    UNKNOWN_MODULE_TOTAL.inc();
    if warn {
        let ctx = LogContext::new().with_role(role_code).with_module(module);
        log_access_event(
            Some(&ctx),
            "module.fallback",
            "unknown module; access denied",
            AccessOutcome::Degraded,
        );
    }
}

/// Record a rejected request.
pub fn record_denial(role_code: &str, requirement: &str) {
    ACCESS_DENIED_TOTAL.inc();
    let ctx = LogContext::new().with_role(role_code);
    log_access_event(Some(&ctx), "access.denied", requirement, AccessOutcome::Denied);
}

pub(crate) fn record_cache_hit() {
    CACHE_HITS_TOTAL.inc();
}

pub(crate) fn record_cache_miss() {
    CACHE_MISSES_TOTAL.inc();
}

/// Snapshot of the access counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AccessCounters {
    pub unknown_roles: u64,
    pub unknown_departments: u64,
    pub unknown_modules: u64,
    pub denials: u64,
    pub cache_hits: u64,
    pub cache_misses: u64,
}

/// Read the current counter values.
pub fn counters() -> AccessCounters {
    AccessCounters {
        unknown_roles: UNKNOWN_ROLE_TOTAL.get(),
        unknown_departments: UNKNOWN_DEPARTMENT_TOTAL.get(),
        unknown_modules: UNKNOWN_MODULE_TOTAL.get(),
        denials: ACCESS_DENIED_TOTAL.get(),
        cache_hits: CACHE_HITS_TOTAL.get(),
        cache_misses: CACHE_MISSES_TOTAL.get(),
    }
}

/// Render the default registry in the Prometheus text exposition format.
pub fn gather_text() -> Result<String, prometheus::Error> {
    // Touch the counters so they are registered even before their first event.
    let _ = counters();
    let mut buffer = Vec::new();
    TextEncoder::new().encode(&prometheus::gather(), &mut buffer)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_only_increase() {
        let before = counters();
        record_unknown_role("ghost", false);
        record_unknown_department("viewer", "AQUACULTURE", false);
        record_unknown_module("viewer", "nonexistent_module", true);
        record_denial("viewer", "module admin_access");
        let after = counters();
        assert!(after.unknown_roles > before.unknown_roles);
        assert!(after.unknown_departments > before.unknown_departments);
        assert!(after.unknown_modules > before.unknown_modules);
        assert!(after.denials > before.denials);
    }

    #[test]
    fn text_export_names_every_counter() {
        let text = gather_text().unwrap();
        for name in [
            "tracegate_unknown_role_total",
            "tracegate_unknown_department_total",
            "tracegate_unknown_module_total",
            "tracegate_access_denied_total",
            "tracegate_cache_hits_total",
            "tracegate_cache_misses_total",
        ] {
            assert!(text.contains(name), "missing {name}");
        }
    }
}
