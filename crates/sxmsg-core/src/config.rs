//! Root package configuration
//!
//! The root package is resolved once, when a listener is built, and never
//! changes afterwards. Resolution order:
//!
//! 1. the `top.marchand.xml.sxmsgslf.RootPackage` override, when non-empty
//! 2. `root.package` in the bundled
//!    `top.marchand.xml.sxmsgslf.message-listener.properties` resource
//! 3. no root package
//!
//! Any failure while reading the resource resolves to "no root package".

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use sxmsg_core_types::schema::{
    PROPERTY_ENTRY, PROPERTY_FILE_NAME, ROOT_PACKAGE_OVERRIDE_KEY, TARGET_LISTENER,
};

use crate::errors::{config_read, Result, SxError};
use crate::properties::parse_properties;

/// Prefix used to trim derived logger names. Immutable once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RootPackage(Option<String>);

impl RootPackage {
    pub fn new(value: impl Into<String>) -> Self {
        Self(Some(value.into()))
    }

    /// No trimming: logger names keep their full dotted path.
    pub fn none() -> Self {
        Self(None)
    }

    pub fn as_deref(&self) -> Option<&str> {
        self.0.as_deref()
    }

    pub fn is_set(&self) -> bool {
        self.0.is_some()
    }
}

impl From<Option<String>> for RootPackage {
    fn from(value: Option<String>) -> Self {
        Self(value)
    }
}

/// Sources consulted when resolving the [`RootPackage`].
#[derive(Debug, Clone, Default)]
pub struct RootPackageResolver {
    override_value: Option<String>,
    resource_dir: Option<PathBuf>,
}

impl RootPackageResolver {
    /// A resolver with no override and no resource location.
    pub fn new() -> Self {
        Self::default()
    }

    /// A resolver reading the process environment for the override and the
    /// directory holding the running executable for the bundled resource.
    pub fn from_env() -> Self {
        Self {
            override_value: std::env::var(ROOT_PACKAGE_OVERRIDE_KEY).ok(),
            resource_dir: packaging_dir(),
        }
    }

    pub fn with_override(mut self, value: impl Into<String>) -> Self {
        self.override_value = Some(value.into());
        self
    }

    /// Directory searched for the bundled properties resource
    pub fn with_resource_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.resource_dir = Some(dir.into());
        self
    }

    /// Full path of the bundled resource, if a resource location is known
    pub fn resource_path(&self) -> Option<PathBuf> {
        self.resource_dir
            .as_ref()
            .map(|dir| dir.join(PROPERTY_FILE_NAME))
    }

    /// Resolve the root package. Never fails.
    ///
    /// The resource is decoded as UTF-8 when its bytes are valid UTF-8 and as
    /// ISO-8859-1 otherwise, so a Latin-1 file whose bytes also form valid
    /// UTF-8 is read as UTF-8.
    pub fn resolve(&self) -> RootPackage {
        if let Some(value) = self.override_value.as_deref().filter(|v| !v.is_empty()) {
            tracing::debug!(
                target: TARGET_LISTENER,
                op = "resolve_root_package",
                source = "override",
                root_package = value,
            );
            return RootPackage::new(value);
        }

        match self.load_from_resource() {
            Ok(value) => {
                tracing::debug!(
                    target: TARGET_LISTENER,
                    op = "resolve_root_package",
                    source = "resource",
                    root_package = ?value,
                );
                RootPackage::from(value)
            }
            Err(err) => {
                tracing::debug!(
                    target: TARGET_LISTENER,
                    op = "resolve_root_package",
                    err_code = err.code(),
                    "ignoring unreadable root package resource: {}",
                    err
                );
                RootPackage::none()
            }
        }
    }

    fn load_from_resource(&self) -> Result<Option<String>> {
        let Some(path) = self.resource_path() else {
            return Ok(None);
        };
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(config_read(&path, err)),
        };

        let text = decode_resource(bytes);
        let mut entries =
            parse_properties(&text).map_err(|err| SxError::from(err).with_path(&path))?;
        Ok(entries.remove(PROPERTY_ENTRY))
    }
}

// Properties resources are traditionally ISO-8859-1; accept UTF-8 first.
fn decode_resource(bytes: Vec<u8>) -> String {
    String::from_utf8(bytes)
        .unwrap_or_else(|err| err.into_bytes().iter().map(|&b| char::from(b)).collect())
}

fn packaging_dir() -> Option<PathBuf> {
    std::env::current_exe()
        .ok()?
        .parent()
        .map(Path::to_path_buf)
}
