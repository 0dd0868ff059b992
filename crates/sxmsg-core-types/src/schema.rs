//! Canonical schema constants for configuration and structured logging
//!
//! These constants keep the listener, its sinks and the test capture layer
//! agreeing on names.

// Configuration surface
/// Process-wide override for the root package.
pub const ROOT_PACKAGE_OVERRIDE_KEY: &str = "top.marchand.xml.sxmsgslf.RootPackage";
/// Bundled properties resource searched in the adapter's packaging location.
pub const PROPERTY_FILE_NAME: &str = "top.marchand.xml.sxmsgslf.message-listener.properties";
/// Key looked up inside [`PROPERTY_FILE_NAME`].
pub const PROPERTY_ENTRY: &str = "root.package";

// Message text
pub const TERMINATE_PREFIX: &str = "[TERMINATE] ";
pub const LEVEL_ATTRIBUTE: &str = "level";

// Canonical field keys for structured logging
pub const FIELD_LOGGER: &str = "logger";
pub const FIELD_MESSAGE: &str = "message";
pub const FIELD_OP: &str = "op";

// Tracing targets
pub const TARGET_MESSAGE: &str = "sxmsg::message";
pub const TARGET_LISTENER: &str = "sxmsg::listener";
