//! Logger name derivation from a stylesheet location

use crate::config::RootPackage;

/// Turn a `/`-separated path into a dotted logger name.
///
/// Empty segments are dropped, so leading, trailing and doubled slashes
/// vanish. When `root_package` occurs in the dotted name, everything before
/// its first occurrence is cut away; otherwise the full dotted name is kept.
///
/// ```
/// use sxmsg_core::derive_logger_name;
///
/// assert_eq!(
///     derive_logger_name("/opt/project/src/main/xsl/foo/bar.xsl", Some("foo")),
///     "foo.bar.xsl"
/// );
/// assert_eq!(derive_logger_name("a/b/c.xsl", None), "a.b.c.xsl");
/// ```
pub fn derive_logger_name(path: &str, root_package: Option<&str>) -> String {
    let full = path
        .split('/')
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join(".");

    match root_package.and_then(|root| full.find(root)) {
        Some(pos) => full[pos..].to_string(),
        None => full,
    }
}

/// Derives logger names against a fixed [`RootPackage`].
#[derive(Debug, Clone, Default)]
pub struct LoggerNameDeriver {
    root_package: RootPackage,
}

impl LoggerNameDeriver {
    pub fn new(root_package: RootPackage) -> Self {
        Self { root_package }
    }

    pub fn root_package(&self) -> &RootPackage {
        &self.root_package
    }

    pub fn derive(&self, path: &str) -> String {
        derive_logger_name(path, self.root_package.as_deref())
    }
}
