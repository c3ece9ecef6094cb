//! ---
//! tg_section: "06-access-control"
//! tg_subsection: "module"
//! tg_type: "source"
//! tg_scope: "code"
//! tg_description: "Role registry, permission matrix and access decisions."
//! tg_version: "v0.0.0-prealpha"
//! tg_owner: "tbd"
//! ---
use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator};

use crate::error::AccessError;

/// Coarse-grained functional areas gated as a unit.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Module {
    /// Planting, breeding and raw-material intake.
    FarmingAccess,
    /// Production batches, processing lines and quality checks.
    ProcessingAccess,
    /// Shipments, cold chain and storage movements.
    LogisticsAccess,
    /// Cross-department traceability lookups.
    TraceAccess,
    /// Factory administration.
    AdminAccess,
    /// Multi-factory platform administration.
    PlatformAccess,
}

impl Module {
    /// Modules that are granted per department.
    pub const DEPARTMENT_SCOPED: [Module; 3] = [
        Module::FarmingAccess,
        Module::ProcessingAccess,
        Module::LogisticsAccess,
    ];

    /// Stable identifier string for API serialisation.
    pub fn as_str(&self) -> &str {
        self.as_ref()
    }

    /// Parse a module name. Matching is exact: no trimming or case folding.
    pub fn parse(raw: &str) -> Result<Self, AccessError> {
        Module::from_str(raw).map_err(|_| AccessError::UnknownModule(raw.to_owned()))
    }
}

/// Module flag matrix. Every module is always present; absent grants read as `false`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModuleAccess {
    inner: BTreeMap<Module, bool>,
}

impl ModuleAccess {
    /// Matrix with every module denied.
    pub fn none() -> Self {
        Self {
            inner: Module::iter().map(|module| (module, false)).collect(),
        }
    }

    /// Enable a module.
    pub fn grant(&mut self, module: Module) {
        self.inner.insert(module, true);
    }

    /// Returns true if the module is enabled.
    pub fn is_enabled(&self, module: Module) -> bool {
        self.inner.get(&module).copied().unwrap_or(false)
    }

    /// Enabled modules in declaration order.
    pub fn enabled(&self) -> impl Iterator<Item = Module> + '_ {
        self.inner
            .iter()
            .filter(|(_, enabled)| **enabled)
            .map(|(module, _)| *module)
    }

    /// Returns a serialisable map representation.
    pub fn to_map(&self) -> BTreeMap<String, bool> {
        self.inner
            .iter()
            .map(|(module, enabled)| (module.as_str().to_owned(), *enabled))
            .collect()
    }
}

impl Default for ModuleAccess {
    fn default() -> Self {
        Self::none()
    }
}
