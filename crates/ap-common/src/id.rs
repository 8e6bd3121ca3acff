//! Tenant identity types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Organization ID scoping every provisioned alerting entity to a tenant.
///
/// In source documents the value 0 (or any negative value) means
/// "unspecified"; the normalized model only ever carries IDs of at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrgId(pub i64);

impl OrgId {
    /// Organization used when a document leaves the org unspecified.
    pub const DEFAULT: OrgId = OrgId(1);

    /// Build an `OrgId` from a raw document value, applying the defaulting
    /// rule: anything below 1 reads as "unspecified" and maps to
    /// [`OrgId::DEFAULT`].
    pub fn from_raw(raw: i64) -> Self {
        if raw < 1 {
            OrgId::DEFAULT
        } else {
            OrgId(raw)
        }
    }
}

impl fmt::Display for OrgId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Raw coercion without defaulting. Use [`OrgId::from_raw`] on paths where
/// the unspecified-means-1 rule applies.
impl From<i64> for OrgId {
    fn from(raw: i64) -> Self {
        OrgId(raw)
    }
}
