//! ---
//! tg_section: "06-access-control"
//! tg_subsection: "module"
//! tg_type: "source"
//! tg_scope: "code"
//! tg_description: "Role registry, permission matrix and access decisions."
//! tg_version: "v0.0.0-prealpha"
//! tg_owner: "tbd"
//! ---
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::error::AccessError;
use crate::module::Module;

/// Department tags used to scope manager and operator roles.
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
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum Department {
    Farming,
    Processing,
    Logistics,
    Management,
    Hr,
    Warehouse,
    Finance,
}

impl Department {
    /// Parse a department tag case-insensitively.
    pub fn parse(raw: &str) -> Result<Self, AccessError> {
        Department::from_str(raw.trim())
            .map_err(|_| AccessError::UnknownDepartment(raw.to_owned()))
    }

    /// Module flag unlocked for department-scoped roles, if the department owns one.
    pub fn module(&self) -> Option<Module> {
        match self {
            Department::Farming => Some(Module::FarmingAccess),
            Department::Processing => Some(Module::ProcessingAccess),
            Department::Logistics => Some(Module::LogisticsAccess),
            Department::Management
            | Department::Hr
            | Department::Warehouse
            | Department::Finance => None,
        }
    }
}
