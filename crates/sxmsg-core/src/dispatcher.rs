//! Severity classification and dispatch
//!
//! Plain text always goes out at `info`. Leveled messages go out at the level
//! their `level` attribute names; a missing or unknown level drops the
//! message without emitting anything to the message's logger.

use serde::Serialize;
use sxmsg_core_types::schema::{TARGET_LISTENER, TERMINATE_PREFIX};

use crate::errors::{SxError, SxErrorKind};
use crate::payload::MessagePayload;
use crate::sink::MessageSink;
use crate::LogLevel;

/// One message, ready for the logging facade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogRecord {
    pub logger_name: String,
    pub level: LogLevel,
    pub text: String,
}

/// Build the record for a payload, or `None` when the level is not one of
/// the five recognised severities.
pub fn build_record(
    payload: &MessagePayload,
    terminate: bool,
    logger_name: &str,
) -> Option<LogRecord> {
    let (level, text) = match payload {
        MessagePayload::PlainText { text } => (LogLevel::Info, text),
        MessagePayload::Leveled { level, text } => {
            match level.as_deref().map(str::parse::<LogLevel>) {
                Some(Ok(level)) => (level, text),
                _ => return None,
            }
        }
    };

    let text = if terminate {
        format!("{TERMINATE_PREFIX}{text}")
    } else {
        text.clone()
    };

    Some(LogRecord {
        logger_name: logger_name.to_string(),
        level,
        text,
    })
}

/// Classify `payload` and hand at most one record to `sink`.
pub fn dispatch(
    payload: &MessagePayload,
    terminate: bool,
    logger_name: &str,
    sink: &dyn MessageSink,
) {
    match build_record(payload, terminate, logger_name) {
        Some(record) => sink.emit(&record),
        None => {
            let err = unrecognized_severity(payload);
            tracing::trace!(
                target: TARGET_LISTENER,
                op = "dispatch",
                logger = logger_name,
                err_code = err.code(),
                "dropping message: {}",
                err.message()
            );
        }
    }
}

fn unrecognized_severity(payload: &MessagePayload) -> SxError {
    let raw = match payload {
        MessagePayload::Leveled { level: Some(level), .. } => format!("{level:?}"),
        _ => "none".to_string(),
    };
    SxError::new(SxErrorKind::UnrecognizedSeverity)
        .with_op("dispatch")
        .with_message(format!("level attribute {raw} is not trace|debug|info|warn|error"))
}
