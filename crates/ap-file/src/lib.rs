//! Alerting provisioning file model and schema-version translation.
//!
//! This crate provides:
//! - Typed structs for the V1 provisioning file schema
//! - Translation from V1 into the version-independent model
//! - YAML/JSON decoding keyed on the `apiVersion` tag
//!
//! Translation is fail-fast: the first sub-entity that fails aborts the
//! whole document and the caller gets an error naming the failing kind. A
//! provisioning file is applied whole or not at all; there is no partial
//! result to act on.

pub mod decode;
pub mod error;
pub mod model;
pub mod v1;

pub use decode::{decode_path, decode_str, DecodeError, FileFormat, VersionedFile};
pub use error::{ItemError, TranslateError};
pub use model::AlertingFile;
pub use v1::AlertingFileV1;

/// Newest provisioning file schema version this crate understands.
pub const CURRENT_API_VERSION: i64 = 1;
