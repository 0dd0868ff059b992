//! Structured logging facility for sxmsg
//!
//! This module provides:
//! - Single initialization point via `init(profile)` for hosts without a subscriber
//! - The `xsl_event!` macro for emitting at a level chosen at runtime
//! - Test capture mode for deterministic assertions on dispatched messages
//!
//! # Usage
//!
//! ```rust
//! use sxmsg_core::logging_facility::{init, Profile};
//!
//! // Initialize once at application startup
//! init(Profile::Development);
//! ```
//!
//! # Targets
//!
//! - `sxmsg::message` - the stylesheet messages themselves, with a `logger` field
//! - `sxmsg::listener` - the listener's own diagnostics (root package
//!   resolution, dropped messages)

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
