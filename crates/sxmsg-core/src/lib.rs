//! sxmsg Core - stylesheet message listener
//!
//! Routes the diagnostic messages a stylesheet emits (`xsl:message`) into
//! the logging facade:
//! - Root package resolution from an override or a bundled properties resource
//! - Logger name derivation from the emitting stylesheet's path
//! - Payload classification into plain text or leveled messages
//! - Severity dispatch through a pluggable [`MessageSink`]
//!
//! ```
//! use sxmsg_core::{MessageListener, MessageNode, RootPackage, SourceLocation, TracingSink};
//!
//! let listener = MessageListener::new(RootPackage::new("foo"), TracingSink);
//! let content = MessageNode::document(vec![MessageNode::text("hello")]);
//! let location = SourceLocation::from_public_id("/opt/project/xsl/foo/bar.xsl");
//!
//! listener.message(&content, false, &location).unwrap();
//! assert_eq!(listener.logger_name_for(location.path()), "foo.bar.xsl");
//! ```

pub mod config;
pub mod dispatcher;
pub mod errors;
pub mod listener;
pub mod logger_name;
pub mod logging_facility;
pub mod payload;
pub mod properties;
pub mod sink;

// Re-export commonly used types
pub use config::{RootPackage, RootPackageResolver};
pub use dispatcher::{build_record, dispatch, LogRecord};
pub use errors::{Result, SxError, SxErrorKind};
pub use listener::{MessageListener, SourceLocation};
pub use logger_name::{derive_logger_name, LoggerNameDeriver};
pub use payload::{MessageNode, MessagePayload};
pub use sink::{LogFacadeSink, MessageSink, TracingSink};
pub use sxmsg_core_types::LogLevel;
