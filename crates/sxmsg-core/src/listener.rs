//! Entry point invoked by the transformation engine for every message

use std::fmt;

use crate::config::{RootPackage, RootPackageResolver};
use crate::dispatcher::dispatch;
use crate::errors::Result;
use crate::logger_name::LoggerNameDeriver;
use crate::payload::{MessageNode, MessagePayload};
use crate::sink::{MessageSink, TracingSink};

/// Where in a stylesheet a message was emitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceLocation {
    pub public_id: Option<String>,
    pub system_id: Option<String>,
    pub line_number: Option<usize>,
}

impl SourceLocation {
    pub fn from_public_id(public_id: impl Into<String>) -> Self {
        Self {
            public_id: Some(public_id.into()),
            ..Self::default()
        }
    }

    pub fn from_system_id(system_id: impl Into<String>) -> Self {
        Self {
            system_id: Some(system_id.into()),
            ..Self::default()
        }
    }

    pub fn with_line_number(mut self, line_number: usize) -> Self {
        self.line_number = Some(line_number);
        self
    }

    /// Path the logger name is derived from: the public identifier, else the
    /// system identifier, else empty.
    pub fn path(&self) -> &str {
        self.public_id
            .as_deref()
            .or(self.system_id.as_deref())
            .unwrap_or_default()
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = self.path();
        f.write_str(if path.is_empty() { "<unknown>" } else { path })?;
        if let Some(line) = self.line_number {
            write!(f, ":{line}")?;
        }
        Ok(())
    }
}

/// Routes stylesheet messages to a [`MessageSink`].
///
/// Holds no mutable state: share one instance across threads freely.
#[derive(Debug, Clone)]
pub struct MessageListener<S = TracingSink> {
    deriver: LoggerNameDeriver,
    sink: S,
}

impl MessageListener<TracingSink> {
    /// Resolve the root package from the process environment and the
    /// bundled resource, then log through `tracing`.
    pub fn from_env() -> Self {
        Self::from_resolver(&RootPackageResolver::from_env(), TracingSink)
    }
}

impl<S: MessageSink> MessageListener<S> {
    pub fn new(root_package: RootPackage, sink: S) -> Self {
        Self {
            deriver: LoggerNameDeriver::new(root_package),
            sink,
        }
    }

    /// Resolve the root package once with `resolver`.
    pub fn from_resolver(resolver: &RootPackageResolver, sink: S) -> Self {
        Self::new(resolver.resolve(), sink)
    }

    pub fn root_package(&self) -> &RootPackage {
        self.deriver.root_package()
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn logger_name_for(&self, path: &str) -> String {
        self.deriver.derive(path)
    }

    /// Handle one message event.
    ///
    /// # Errors
    ///
    /// Returns `MalformedPayload` when `content` has no child node; the error
    /// names the stylesheet and line when known. Unknown levels are not
    /// errors: the message is dropped.
    pub fn message(
        &self,
        content: &MessageNode,
        terminate: bool,
        location: &SourceLocation,
    ) -> Result<()> {
        let logger_name = self.deriver.derive(location.path());
        let payload = MessagePayload::from_content(content).map_err(|err| {
            let message = format!("{} at {}", err.message(), location);
            err.with_message(message)
        })?;
        dispatch(&payload, terminate, &logger_name, &self.sink);
        Ok(())
    }
}
