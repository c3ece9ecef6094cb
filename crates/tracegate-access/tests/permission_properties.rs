//! ---
//! tg_section: "06-access-control"
//! tg_subsection: "integration-tests"
//! tg_type: "source"
//! tg_scope: "code"
//! tg_description: "Property checks for permission generation and routing."
//! tg_version: "v0.0.0-prealpha"
//! tg_owner: "tbd"
//! ---
use proptest::prelude::*;
use tracegate_access::registry::{FACTORY_ADMIN_LEVEL, OPERATOR_LEVEL, PLATFORM_ADMIN_ROLE};
use tracegate_access::{
    generate_permissions, has_module_access, is_at_least_level, resolve_dashboard,
    DashboardVariant, Module, RoleRegistry,
};

const DEPARTMENTS: &[&str] = &[
    "FARMING",
    "PROCESSING",
    "LOGISTICS",
    "MANAGEMENT",
    "HR",
    "WAREHOUSE",
    "FINANCE",
    "farming",
    "AQUACULTURE",
    "",
];

fn arb_known_role() -> impl Strategy<Value = &'static str> {
    let codes: Vec<&'static str> = RoleRegistry::builtin().iter().map(|r| r.code).collect();
    prop::sample::select(codes)
}

fn arb_role_code() -> impl Strategy<Value = String> {
    prop_oneof![
        arb_known_role().prop_map(str::to_owned),
        "[a-z_]{0,24}",
        any::<String>(),
    ]
}

fn arb_department() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        prop::sample::select(DEPARTMENTS).prop_map(|d| Some(d.to_owned())),
        "[A-Za-z]{0,12}".prop_map(Some),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_platform_access_iff_platform_admin(role in arb_role_code(), dept in arb_department()) {
        let perms = generate_permissions(&role, dept.as_deref());
        prop_assert_eq!(perms.has_module(Module::PlatformAccess), role == PLATFORM_ADMIN_ROLE);
    }

    #[test]
    fn prop_admin_access_tracks_level(role in arb_role_code(), dept in arb_department()) {
        let perms = generate_permissions(&role, dept.as_deref());
        prop_assert_eq!(
            perms.has_module(Module::AdminAccess),
            perms.role_level <= FACTORY_ADMIN_LEVEL
        );
    }

    #[test]
    fn prop_trace_access_for_authenticated_tiers(role in arb_role_code(), dept in arb_department()) {
        let perms = generate_permissions(&role, dept.as_deref());
        prop_assert_eq!(
            perms.has_module(Module::TraceAccess),
            perms.role_level <= OPERATOR_LEVEL
        );
    }

    #[test]
    fn prop_generation_is_pure(role in arb_role_code(), dept in arb_department()) {
        let first = generate_permissions(&role, dept.as_deref());
        let second = generate_permissions(&role, dept.as_deref());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_level_matches_registry(role in arb_known_role(), dept in arb_department()) {
        let perms = generate_permissions(role, dept.as_deref());
        let registered = RoleRegistry::builtin().lookup(role).unwrap();
        prop_assert_eq!(perms.role.as_str(), role);
        prop_assert_eq!(perms.role_level, registered.level);
    }

    #[test]
    fn prop_unknown_roles_equal_viewer(role in "[a-z_]{0,24}", dept in arb_department()) {
        prop_assume!(!RoleRegistry::builtin().contains(&role));
        prop_assert_eq!(
            generate_permissions(&role, dept.as_deref()),
            generate_permissions("viewer", dept.as_deref())
        );
        prop_assert_eq!(resolve_dashboard(&role), DashboardVariant::Default);
    }

    #[test]
    fn prop_department_scoped_roles_get_at_most_one_department_module(
        role in arb_known_role(),
        dept in arb_department(),
    ) {
        let registered = RoleRegistry::builtin().lookup(role).unwrap();
        prop_assume!(registered.is_department_scoped());
        let perms = generate_permissions(role, dept.as_deref());
        let granted = Module::DEPARTMENT_SCOPED
            .iter()
            .filter(|module| perms.has_module(**module))
            .count();
        prop_assert!(granted <= 1);
    }

    #[test]
    fn prop_unknown_module_names_never_grant(role in arb_role_code(), name in "[a-z_]{0,20}") {
        prop_assume!(Module::parse(&name).is_err());
        let perms = generate_permissions(&role, None);
        prop_assert!(!has_module_access(&perms, &name));
    }

    #[test]
    fn prop_level_threshold_is_monotone(role in arb_known_role(), threshold in 0u8..=60) {
        let perms = generate_permissions(role, None);
        if is_at_least_level(&perms, threshold) {
            prop_assert!(is_at_least_level(&perms, threshold.saturating_add(1)));
        }
    }
}

#[test]
fn level_threshold_examples() {
    let admin = generate_permissions("factory_super_admin", None);
    let operator = generate_permissions("operator", None);
    assert!(is_at_least_level(&admin, 20));
    assert!(!is_at_least_level(&operator, 20));
}
