//! Optional scalar wrappers for provisioning documents.
//!
//! Provisioning files need to distinguish "field absent from the document"
//! from "field explicitly set to zero". A bare `i64` cannot represent the
//! difference and `Option<i64>` scatters the absent-reads-as-zero
//! convention across call sites; `OptionalInt64` keeps it in one place.

use serde::{Deserialize, Serialize};

/// A 64-bit integer field that may be absent from the source document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<i64>", into = "Option<i64>")]
pub enum OptionalInt64 {
    /// The field was not present in the document (or was explicit null).
    #[default]
    Absent,
    /// The field carried an explicit value, possibly zero.
    Present(i64),
}

impl OptionalInt64 {
    /// Effective value under the document convention: the explicit value
    /// when present, zero when absent.
    pub fn value(self) -> i64 {
        match self {
            OptionalInt64::Absent => 0,
            OptionalInt64::Present(v) => v,
        }
    }

    pub fn is_absent(self) -> bool {
        matches!(self, OptionalInt64::Absent)
    }
}

impl From<Option<i64>> for OptionalInt64 {
    fn from(raw: Option<i64>) -> Self {
        match raw {
            None => OptionalInt64::Absent,
            Some(v) => OptionalInt64::Present(v),
        }
    }
}

impl From<OptionalInt64> for Option<i64> {
    fn from(value: OptionalInt64) -> Self {
        match value {
            OptionalInt64::Absent => None,
            OptionalInt64::Present(v) => Some(v),
        }
    }
}

impl From<i64> for OptionalInt64 {
    fn from(v: i64) -> Self {
        OptionalInt64::Present(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Doc {
        #[serde(default)]
        org_id: OptionalInt64,
    }

    #[test]
    fn absent_field_reads_as_zero() {
        let doc: Doc = serde_json::from_str("{}").unwrap();
        assert!(doc.org_id.is_absent());
        assert_eq!(doc.org_id.value(), 0);
    }

    #[test]
    fn null_reads_as_absent() {
        let doc: Doc = serde_json::from_str(r#"{"org_id": null}"#).unwrap();
        assert!(doc.org_id.is_absent());
    }

    #[test]
    fn explicit_zero_is_present() {
        let doc: Doc = serde_json::from_str(r#"{"org_id": 0}"#).unwrap();
        assert_eq!(doc.org_id, OptionalInt64::Present(0));
        assert_eq!(doc.org_id.value(), 0);
    }

    #[test]
    fn explicit_value_round_trips() {
        let doc: Doc = serde_json::from_str(r#"{"org_id": 42}"#).unwrap();
        assert_eq!(doc.org_id.value(), 42);
        assert_eq!(
            serde_json::to_string(&OptionalInt64::Present(42)).unwrap(),
            "42"
        );
        assert_eq!(serde_json::to_string(&OptionalInt64::Absent).unwrap(), "null");
    }

    #[test]
    fn yaml_scalar_decodes() {
        let doc: Doc = serde_yaml::from_str("org_id: 3").unwrap();
        assert_eq!(doc.org_id.value(), 3);
    }
}
