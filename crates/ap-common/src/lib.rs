//! Alerting provisioning shared value types.
//!
//! This crate provides foundational types shared across the provisioning
//! file model:
//! - Organization identifiers with the document defaulting rule
//! - Optional scalar wrappers that distinguish "absent" from "explicit zero"

pub mod id;
pub mod values;

pub use id::OrgId;
pub use values::OptionalInt64;
