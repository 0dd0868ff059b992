//! Logging macros
//!
//! `tracing` fixes an event's level per call site, while stylesheet messages
//! choose theirs at runtime. `xsl_event!` bridges the two.

/// Emit a tracing event at a runtime [`LogLevel`](crate::LogLevel)
///
/// Everything after the level is passed through to the tracing macro.
///
/// # Example
///
/// ```
/// # use sxmsg_core::{xsl_event, LogLevel};
/// let level: LogLevel = "warn".parse().unwrap();
/// xsl_event!(level, target: "sxmsg::message", logger = "foo.bar", "{}", "disk almost full");
/// ```
#[macro_export]
macro_rules! xsl_event {
    ($level:expr, $($arg:tt)+) => {
        match $level {
            $crate::LogLevel::Trace => ::tracing::trace!($($arg)+),
            $crate::LogLevel::Debug => ::tracing::debug!($($arg)+),
            $crate::LogLevel::Info => ::tracing::info!($($arg)+),
            $crate::LogLevel::Warn => ::tracing::warn!($($arg)+),
            $crate::LogLevel::Error => ::tracing::error!($($arg)+),
        }
    };
}
