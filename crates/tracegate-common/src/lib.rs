//! ---
//! tg_section: "01-core-functionality"
//! tg_subsection: "module"
//! tg_type: "source"
//! tg_scope: "code"
//! tg_description: "Shared primitives and utilities for the access runtime."
//! tg_version: "v0.0.0-prealpha"
//! tg_owner: "tbd"
//! ---
//! Core shared primitives for the TraceGate workspace.
//! This crate exposes configuration loading and tracing bootstrap
//! utilities consumed by the access library and the operator CLI.

pub mod config;
pub mod logging;

pub use config::{AccessConfig, AppConfig, LoadedAppConfig, LoggingConfig, MetricsConfig};
pub use logging::{init_tracing, LogFormat, TracingGuard};
