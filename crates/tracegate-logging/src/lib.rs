//! ---
//! tg_section: "03-logging"
//! tg_subsection: "module"
//! tg_type: "source"
//! tg_scope: "code"
//! tg_description: "Structured access-decision logging adapters."
//! tg_version: "v0.0.0-prealpha"
//! tg_owner: "tbd"
//! ---
#![warn(missing_docs)]

use tracing::Level;
use tracing_subscriber::{fmt as subscriber_fmt, prelude::*, EnvFilter, Registry};

pub mod macros;

#[doc(hidden)]
pub use tracing;

/// Target carried by every access decision event, so `tracegate_access=<level>`
/// selects decisions together with the library's own diagnostics.
pub const ACCESS_TARGET: &str = "tracegate_access";

/// Initialize a baseline tracing subscriber suitable for development.
///
/// Events go to stderr so command output on stdout stays machine-readable.
pub fn init() {
    let _ = Registry::default()
        .with(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with(subscriber_fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

/// Structured logging context propagated by the convenience macros.
#[derive(Debug, Default, Clone)]
pub struct LogContext<'a> {
    /// Role code supplied by the caller.
    pub role: Option<&'a str>,
    /// Department tag supplied by the caller.
    pub department: Option<&'a str>,
    /// Module being queried.
    pub module: Option<&'a str>,
    /// Factory (tenant) identifier, when the caller knows it.
    pub factory: Option<&'a str>,
}

impl<'a> LogContext<'a> {
    /// Create an empty logging context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a role code.
    pub fn with_role(mut self, role: &'a str) -> Self {
        self.role = Some(role);
        self
    }

    /// Attach a department tag.
    pub fn with_department(mut self, department: &'a str) -> Self {
        self.department = Some(department);
        self
    }

    /// Attach a module name.
    pub fn with_module(mut self, module: &'a str) -> Self {
        self.module = Some(module);
        self
    }

    /// Attach a factory identifier.
    pub fn with_factory(mut self, factory: &'a str) -> Self {
        self.factory = Some(factory);
        self
    }
}

/// Outcome of an access decision, used when emitting decision log events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessOutcome {
    /// The request is allowed.
    Granted,
    /// The request is rejected.
    Denied,
    /// Input was unrecognised and a least-privilege default was substituted.
    Degraded,
}

impl AccessOutcome {
    /// Stable lowercase label.
    pub fn as_str(&self) -> &'static str {
        match self {
            AccessOutcome::Granted => "granted",
            AccessOutcome::Denied => "denied",
            AccessOutcome::Degraded => "degraded",
        }
    }
}

/// Emit a standardized access event with its outcome.
pub fn log_access_event(
    context: Option<&LogContext>,
    event: &str,
    message: &str,
    outcome: AccessOutcome,
) {
    let ctx = context.cloned().unwrap_or_default();
    // `tracing::event!` needs a constant level, so dispatch per level.
    macro_rules! emit {
        ($level:expr) => {
            tracing::event!(
                target: ACCESS_TARGET,
                $level,
                event,
                outcome = outcome.as_str(),
                role = ctx.role.unwrap_or(""),
                department = ctx.department.unwrap_or(""),
                module = ctx.module.unwrap_or(""),
                factory = ctx.factory.unwrap_or(""),
                message = %message
            )
        };
    }
    match outcome {
        AccessOutcome::Granted => emit!(Level::DEBUG),
        AccessOutcome::Denied => emit!(Level::INFO),
        AccessOutcome::Degraded => emit!(Level::WARN),
    }
}
