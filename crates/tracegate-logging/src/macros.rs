//! ---
//! tg_section: "03-logging"
//! tg_subsection: "module"
//! tg_type: "source"
//! tg_scope: "code"
//! tg_description: "Structured access-decision logging adapters."
//! tg_version: "v0.0.0-prealpha"
//! tg_owner: "tbd"
//! ---

/// Emit an event at the given level enriched with a [`LogContext`](crate::LogContext).
#[doc(hidden)]
#[macro_export]
macro_rules! tg_event {
    ($level:expr, $ctx:expr, $($arg:tt)+) => {{
        let ctx = &$ctx;
        $crate::tracing::event!(
            $level,
            role = ctx.role.unwrap_or(""),
            department = ctx.department.unwrap_or(""),
            module = ctx.module.unwrap_or(""),
            factory = ctx.factory.unwrap_or(""),
            message = %format_args!($($arg)+)
        );
    }};
}

/// Emit an informational log enriched with access context.
#[macro_export]
macro_rules! tg_info {
    (context = $ctx:expr, $($arg:tt)+) => {
        $crate::tg_event!($crate::tracing::Level::INFO, $ctx, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::tg_event!($crate::tracing::Level::INFO, $crate::LogContext::default(), $($arg)+)
    };
}

/// Emit a debug log enriched with access context.
#[macro_export]
macro_rules! tg_debug {
    (context = $ctx:expr, $($arg:tt)+) => {
        $crate::tg_event!($crate::tracing::Level::DEBUG, $ctx, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::tg_event!($crate::tracing::Level::DEBUG, $crate::LogContext::default(), $($arg)+)
    };
}

/// Emit a warning enriched with access context. Used for least-privilege fallbacks.
#[macro_export]
macro_rules! tg_warn {
    (context = $ctx:expr, $($arg:tt)+) => {
        $crate::tg_event!($crate::tracing::Level::WARN, $ctx, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::tg_event!($crate::tracing::Level::WARN, $crate::LogContext::default(), $($arg)+)
    };
}
