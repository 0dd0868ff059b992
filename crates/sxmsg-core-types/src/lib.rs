//! Core types shared across the sxmsg crates
//!
//! This crate provides the vocabulary used by both the message listener
//! and its logging facility:
//!
//! - **Severity levels**: [`LogLevel`], parsed from the `level` attribute of
//!   a stylesheet message
//! - **Schema constants**: configuration keys, structured field keys and
//!   tracing targets

pub mod level;
pub mod schema;

pub use level::{LogLevel, UnknownLevel};
