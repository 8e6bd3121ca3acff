//! Version-independent provisioning model.
//!
//! These types are what the rest of the provisioning pipeline consumes:
//! no schema-version suffixes, no optional-scalar wrappers, org IDs already
//! defaulted where the schema allows leaving them out. Payloads this layer
//! does not inspect (receiver settings, policy routes, mute timings) stay
//! as raw JSON values for downstream validation.

use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

use ap_common::OrgId;

/// Fully translated provisioning file.
///
/// Each collection preserves the order of the source document. `filename`
/// is provenance for error attribution, not business data.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AlertingFile {
    pub filename: String,
    pub groups: Vec<RuleGroup>,
    pub delete_rules: Vec<RuleDelete>,
    pub contact_points: Vec<ContactPoint>,
    pub delete_contact_points: Vec<DeleteContactPoint>,
    pub policies: Vec<NotificationPolicy>,
    pub reset_policies: Vec<OrgId>,
    pub mute_times: Vec<MuteTime>,
    pub delete_mute_times: Vec<DeleteMuteTime>,
}

/// A group of alert rules sharing a folder and evaluation interval.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RuleGroup {
    pub org_id: OrgId,
    pub name: String,
    pub folder: String,
    #[serde(with = "humantime_serde")]
    pub interval: Duration,
    pub rules: Vec<AlertRule>,
}

/// A single alert rule inside a group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlertRule {
    pub uid: String,
    pub title: String,
    pub condition: String,
    /// How long the rule must be firing before it alerts.
    #[serde(rename = "for", with = "humantime_serde")]
    pub for_duration: Option<Duration>,
    pub data: Vec<Value>,
}

/// Request to delete a provisioned alert rule.
///
/// The UID is passed through verbatim from the document, empty string
/// included; this layer does not validate it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleDelete {
    pub uid: String,
    pub org_id: OrgId,
}

/// A named contact point and its receiver integrations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactPoint {
    pub org_id: OrgId,
    pub name: String,
    pub receivers: Vec<Receiver>,
}

/// One receiver integration within a contact point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Receiver {
    pub uid: String,
    /// Integration type, e.g. "email" or "webhook".
    #[serde(rename = "type")]
    pub kind: String,
    pub disable_resolve_message: bool,
    pub settings: serde_json::Map<String, Value>,
}

/// Request to delete a provisioned contact point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteContactPoint {
    pub org_id: OrgId,
    pub uid: String,
}

/// Notification policy tree for one organization.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NotificationPolicy {
    pub org_id: OrgId,
    /// The routing tree, opaque to this layer.
    pub route: Value,
}

/// A mute-time interval definition.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MuteTime {
    pub org_id: OrgId,
    pub name: String,
    /// Interval specification, opaque to this layer.
    pub time_intervals: Value,
}

/// Request to delete a provisioned mute-time interval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteMuteTime {
    pub org_id: OrgId,
    pub name: String,
}
