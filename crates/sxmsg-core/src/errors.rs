use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias using SxError
pub type Result<T> = std::result::Result<T, SxError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Every condition the listener anticipates is classified here. Only
/// `MalformedPayload` ever reaches a caller; the other kinds are absorbed
/// where they occur and only show up in the listener's own diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SxErrorKind {
    /// The bundled properties resource exists but could not be read
    ConfigRead,
    /// The bundled properties resource is not valid properties syntax
    ConfigParse,
    /// The message content does not have the single child the engine promises
    MalformedPayload,
    /// A leveled message carried a missing or unknown `level` attribute
    UnrecognizedSeverity,
}

impl SxErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            SxErrorKind::ConfigRead => "ERR_CONFIG_READ",
            SxErrorKind::ConfigParse => "ERR_CONFIG_PARSE",
            SxErrorKind::MalformedPayload => "ERR_MALFORMED_PAYLOAD",
            SxErrorKind::UnrecognizedSeverity => "ERR_UNRECOGNIZED_SEVERITY",
        }
    }
}

/// Canonical structured error type
#[derive(Debug, Clone)]
pub struct SxError {
    kind: SxErrorKind,
    op: Option<String>,
    path: Option<PathBuf>,
    message: String,
}

impl SxError {
    /// Create a new error with the specified kind
    pub fn new(kind: SxErrorKind) -> Self {
        Self {
            kind,
            op: None,
            path: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add the file the error relates to
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> SxErrorKind {
        self.kind
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for SxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(path) = &self.path {
            write!(f, " (path: {})", path.display())?;
        }
        Ok(())
    }
}

impl std::error::Error for SxError {}

// ========== End Error Facility ==========

/// Syntax errors in a properties resource
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PropertiesError {
    /// `\u` not followed by four hex digits
    #[error("malformed \\uXXXX escape on line {line}")]
    MalformedUnicodeEscape { line: usize },
}

impl From<PropertiesError> for SxError {
    fn from(err: PropertiesError) -> Self {
        SxError::new(SxErrorKind::ConfigParse)
            .with_op("parse_properties")
            .with_message(err.to_string())
    }
}

/// Create a config read error from an I/O failure
pub fn config_read(path: &Path, err: std::io::Error) -> SxError {
    SxError::new(SxErrorKind::ConfigRead)
        .with_op("load_properties")
        .with_path(path)
        .with_message(err.to_string())
}

/// Create a malformed payload error
pub fn malformed_payload(reason: &str) -> SxError {
    SxError::new(SxErrorKind::MalformedPayload)
        .with_op("parse_payload")
        .with_message(reason.to_string())
}
