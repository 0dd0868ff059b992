//! Logging facade seam
//!
//! A [`MessageSink`] receives every record the dispatcher produces and is
//! responsible for looking up the named logger. Two facades are provided:
//!
//! - [`TracingSink`]: `tracing` events on target `sxmsg::message`; the
//!   logger name travels in the `logger` field because tracing targets are
//!   fixed at compile time.
//! - [`LogFacadeSink`]: `log` records whose target *is* the logger name, so
//!   per-logger filtering (`RUST_LOG=foo.bar=warn`) works natively.

use std::sync::Arc;

use sxmsg_core_types::schema::TARGET_MESSAGE;

use crate::dispatcher::LogRecord;
use crate::LogLevel;

/// Receives dispatched records.
pub trait MessageSink: Send + Sync {
    fn emit(&self, record: &LogRecord);
}

impl<S: MessageSink + ?Sized> MessageSink for &S {
    fn emit(&self, record: &LogRecord) {
        (**self).emit(record)
    }
}

impl<S: MessageSink + ?Sized> MessageSink for Arc<S> {
    fn emit(&self, record: &LogRecord) {
        (**self).emit(record)
    }
}

impl<S: MessageSink + ?Sized> MessageSink for Box<S> {
    fn emit(&self, record: &LogRecord) {
        (**self).emit(record)
    }
}

/// Emits records as `tracing` events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl MessageSink for TracingSink {
    fn emit(&self, record: &LogRecord) {
        crate::xsl_event!(
            record.level,
            target: TARGET_MESSAGE,
            logger = record.logger_name.as_str(),
            "{}",
            record.text
        );
    }
}

/// Emits records through the `log` facade with the logger name as target.
///
/// Records above `log::STATIC_MAX_LEVEL` or `log::max_level()` are skipped
/// before the logger is consulted, as the `log!` macros do.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogFacadeSink;

impl MessageSink for LogFacadeSink {
    fn emit(&self, record: &LogRecord) {
        let level = log_level(record.level);
        if level > log::STATIC_MAX_LEVEL || level > log::max_level() {
            return;
        }
        log::logger().log(
            &log::Record::builder()
                .args(format_args!("{}", record.text))
                .level(level)
                .target(&record.logger_name)
                .module_path(Some(module_path!()))
                .build(),
        );
    }
}

/// The `log` level a record is emitted at
pub fn log_level(level: LogLevel) -> log::Level {
    match level {
        LogLevel::Trace => log::Level::Trace,
        LogLevel::Debug => log::Level::Debug,
        LogLevel::Info => log::Level::Info,
        LogLevel::Warn => log::Level::Warn,
        LogLevel::Error => log::Level::Error,
    }
}

/// The `tracing` level a record is emitted at
pub fn tracing_level(level: LogLevel) -> tracing::Level {
    match level {
        LogLevel::Trace => tracing::Level::TRACE,
        LogLevel::Debug => tracing::Level::DEBUG,
        LogLevel::Info => tracing::Level::INFO,
        LogLevel::Warn => tracing::Level::WARN,
        LogLevel::Error => tracing::Level::ERROR,
    }
}
