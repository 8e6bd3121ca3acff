//! Decoding provisioning documents into version-tagged file structs.
//!
//! The document's `apiVersion` tag selects which schema the rest of the
//! file is read as. Only version 1 exists today; adding a version means
//! adding a [`VersionedFile`] variant and its translator without touching
//! the existing ones.

use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use crate::error::TranslateError;
use crate::model::AlertingFile;
use crate::v1::AlertingFileV1;
use crate::CURRENT_API_VERSION;

/// Supported provisioning document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Yaml,
    Json,
}

impl FileFormat {
    fn as_str(&self) -> &'static str {
        match self {
            Self::Yaml => "yaml",
            Self::Json => "json",
        }
    }
}

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("failed to read provisioning file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported provisioning file extension: {extension}")]
    UnsupportedExtension { extension: String },

    #[error("failed to parse {format} provisioning file: {message}")]
    Parse { format: String, message: String },

    #[error("unsupported apiVersion {version} (supported: {supported})")]
    UnsupportedApiVersion { version: i64, supported: i64 },
}

/// A decoded provisioning file, tagged with its schema version.
#[derive(Debug, Clone)]
pub enum VersionedFile {
    V1(AlertingFileV1),
}

impl VersionedFile {
    /// Translate into the version-independent model, dispatching to the
    /// translator for this file's schema version.
    pub fn into_model(self) -> Result<AlertingFile, TranslateError> {
        match self {
            VersionedFile::V1(file) => file.into_model(),
        }
    }

    /// The schema version this file was decoded as.
    pub fn api_version(&self) -> i64 {
        match self {
            VersionedFile::V1(_) => 1,
        }
    }
}

/// Decode a provisioning document from a file path.
///
/// The format is detected from the extension; the path becomes the
/// document's filename for error attribution.
pub fn decode_path(path: &Path) -> Result<VersionedFile, DecodeError> {
    let content = fs::read_to_string(path).map_err(|source| DecodeError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let format = detect_format(path)?;
    decode_str(&content, format, &path.display().to_string())
}

fn detect_format(path: &Path) -> Result<FileFormat, DecodeError> {
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_lowercase();
    match ext.as_str() {
        "yaml" | "yml" => Ok(FileFormat::Yaml),
        "json" => Ok(FileFormat::Json),
        _ => Err(DecodeError::UnsupportedExtension { extension: ext }),
    }
}

/// Decode a provisioning document from a string, dispatching on the
/// `apiVersion` tag. An absent tag reads as the current version.
pub fn decode_str(
    content: &str,
    format: FileFormat,
    filename: &str,
) -> Result<VersionedFile, DecodeError> {
    let raw: Value = match format {
        FileFormat::Yaml => serde_yaml::from_str(content).map_err(|e| DecodeError::Parse {
            format: format.as_str().to_string(),
            message: e.to_string(),
        })?,
        FileFormat::Json => serde_json::from_str(content).map_err(|e| DecodeError::Parse {
            format: format.as_str().to_string(),
            message: e.to_string(),
        })?,
    };

    let version = raw
        .get("apiVersion")
        .and_then(Value::as_i64)
        .unwrap_or(CURRENT_API_VERSION);

    match version {
        1 => {
            let mut file: AlertingFileV1 =
                serde_json::from_value(raw).map_err(|e| DecodeError::Parse {
                    format: format.as_str().to_string(),
                    message: e.to_string(),
                })?;
            file.filename = filename.to_string();
            debug!(filename, version, "decoded provisioning file");
            Ok(VersionedFile::V1(file))
        }
        other => Err(DecodeError::UnsupportedApiVersion {
            version: other,
            supported: CURRENT_API_VERSION,
        }),
    }
}
