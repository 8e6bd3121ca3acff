//! V1 provisioning file schema and its translation into the normalized
//! model.
//!
//! Each sub-entity kind (rules, contact points, policies, mute times)
//! translates independently over a disjoint slice of the document.
//! Translation is a pure value transform: no I/O, no shared state, safe to
//! run concurrently on distinct documents.

use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;

use ap_common::{OptionalInt64, OrgId};

use crate::error::{ItemError, TranslateError};
use crate::model::{
    AlertRule, AlertingFile, ContactPoint, DeleteContactPoint, DeleteMuteTime, MuteTime,
    NotificationPolicy, Receiver, RuleDelete, RuleGroup,
};

/// Evaluation interval applied when a rule group does not specify one.
pub const DEFAULT_GROUP_INTERVAL: Duration = Duration::from_secs(60);

/// As-decoded V1 provisioning file.
///
/// Every collection field is optional in the document; absent decodes to
/// empty. `filename` is provenance attached by the decoder, not document
/// data.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertingFileV1 {
    #[serde(default)]
    pub api_version: OptionalInt64,
    #[serde(skip)]
    pub filename: String,
    #[serde(default)]
    pub groups: Vec<RuleGroupV1>,
    #[serde(default)]
    pub delete_rules: Vec<RuleDeleteV1>,
    #[serde(default)]
    pub contact_points: Vec<ContactPointV1>,
    #[serde(default)]
    pub delete_contact_points: Vec<DeleteContactPointV1>,
    #[serde(default)]
    pub policies: Vec<NotificationPolicyV1>,
    #[serde(default)]
    pub reset_policies: Vec<OptionalInt64>,
    #[serde(default)]
    pub mute_times: Vec<MuteTimeV1>,
    #[serde(default)]
    pub delete_mute_times: Vec<DeleteMuteTimeV1>,
}

impl AlertingFileV1 {
    /// Translate the V1 document into the version-independent model.
    ///
    /// Sub-entities are translated in a fixed order: rules, contact points,
    /// policies, mute times. The first failure aborts the whole document
    /// and comes back wrapped with the failing kind; no partial model is
    /// ever returned. A malformed document is wholly invalid.
    pub fn into_model(self) -> Result<AlertingFile, TranslateError> {
        let AlertingFileV1 {
            api_version: _,
            filename,
            groups,
            delete_rules,
            contact_points,
            delete_contact_points,
            policies,
            reset_policies,
            mute_times,
            delete_mute_times,
        } = self;

        let mut file = AlertingFile {
            filename,
            ..AlertingFile::default()
        };

        map_rules(groups, delete_rules, &mut file).map_err(TranslateError::Rules)?;
        map_contact_points(contact_points, delete_contact_points, &mut file)
            .map_err(TranslateError::ContactPoints)?;
        map_policies(policies, reset_policies, &mut file);
        map_mute_times(mute_times, delete_mute_times, &mut file)
            .map_err(TranslateError::MuteTimes)?;

        Ok(file)
    }
}

// ── Rules ───────────────────────────────────────────────────────────────

/// A V1 rule group to upsert.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleGroupV1 {
    #[serde(default)]
    pub org_id: OptionalInt64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub folder: String,
    /// Evaluation interval as a duration string, e.g. "60s" or "5m".
    #[serde(default)]
    pub interval: Option<String>,
    #[serde(default)]
    pub rules: Vec<AlertRuleV1>,
}

/// A single V1 alert rule.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertRuleV1 {
    #[serde(default)]
    pub uid: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub condition: String,
    #[serde(rename = "for", default)]
    pub for_duration: Option<String>,
    #[serde(default)]
    pub data: Vec<Value>,
}

/// A V1 rule deletion request.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleDeleteV1 {
    #[serde(default)]
    pub uid: String,
    #[serde(default)]
    pub org_id: OptionalInt64,
}

fn map_rules(
    groups: Vec<RuleGroupV1>,
    deletes: Vec<RuleDeleteV1>,
    out: &mut AlertingFile,
) -> Result<(), ItemError> {
    for group in groups {
        out.groups.push(group.into_model()?);
    }
    for delete in deletes {
        out.delete_rules.push(delete.into_model());
    }
    Ok(())
}

impl RuleGroupV1 {
    fn into_model(self) -> Result<RuleGroup, ItemError> {
        let interval = match &self.interval {
            Some(raw) => {
                humantime::parse_duration(raw).map_err(|e| ItemError::InvalidInterval {
                    group: self.name.clone(),
                    value: raw.clone(),
                    reason: e.to_string(),
                })?
            }
            None => DEFAULT_GROUP_INTERVAL,
        };

        let mut rules = Vec::with_capacity(self.rules.len());
        for rule in self.rules {
            rules.push(rule.into_model()?);
        }

        Ok(RuleGroup {
            org_id: OrgId::from_raw(self.org_id.value()),
            name: self.name,
            folder: self.folder,
            interval,
            rules,
        })
    }
}

impl AlertRuleV1 {
    fn into_model(self) -> Result<AlertRule, ItemError> {
        let for_duration = match &self.for_duration {
            Some(raw) => Some(humantime::parse_duration(raw).map_err(|e| {
                ItemError::InvalidForDuration {
                    uid: self.uid.clone(),
                    value: raw.clone(),
                    reason: e.to_string(),
                }
            })?),
            None => None,
        };

        Ok(AlertRule {
            uid: self.uid,
            title: self.title,
            condition: self.condition,
            for_duration,
            data: self.data,
        })
    }
}

impl RuleDeleteV1 {
    /// Infallible: the UID passes through verbatim (empty included) and the
    /// org defaults to 1 when unspecified.
    fn into_model(self) -> RuleDelete {
        RuleDelete {
            uid: self.uid,
            org_id: OrgId::from_raw(self.org_id.value()),
        }
    }
}

// ── Contact points ──────────────────────────────────────────────────────

/// A V1 contact point to upsert.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactPointV1 {
    #[serde(default)]
    pub org_id: OptionalInt64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub receivers: Vec<ReceiverV1>,
}

/// One receiver integration within a V1 contact point.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiverV1 {
    #[serde(default)]
    pub uid: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub disable_resolve_message: bool,
    #[serde(default)]
    pub settings: Value,
}

/// A V1 contact point deletion request.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteContactPointV1 {
    #[serde(default)]
    pub org_id: OptionalInt64,
    #[serde(default)]
    pub uid: String,
}

/// Deletions first, then upserts. The two land in disjoint output fields
/// but the order is part of the contract.
fn map_contact_points(
    upserts: Vec<ContactPointV1>,
    deletes: Vec<DeleteContactPointV1>,
    out: &mut AlertingFile,
) -> Result<(), ItemError> {
    for delete in deletes {
        out.delete_contact_points.push(delete.into_model());
    }
    for contact_point in upserts {
        out.contact_points.push(contact_point.into_model()?);
    }
    Ok(())
}

impl ContactPointV1 {
    fn into_model(self) -> Result<ContactPoint, ItemError> {
        let mut receivers = Vec::with_capacity(self.receivers.len());
        for receiver in self.receivers {
            if receiver.kind.is_empty() {
                return Err(ItemError::MissingReceiverType {
                    name: self.name.clone(),
                    uid: receiver.uid,
                });
            }
            let settings = match receiver.settings {
                Value::Object(map) => map,
                Value::Null => serde_json::Map::new(),
                _ => {
                    return Err(ItemError::InvalidReceiverSettings {
                        name: self.name.clone(),
                        uid: receiver.uid,
                    })
                }
            };
            receivers.push(Receiver {
                uid: receiver.uid,
                kind: receiver.kind,
                disable_resolve_message: receiver.disable_resolve_message,
                settings,
            });
        }

        Ok(ContactPoint {
            org_id: OrgId::from_raw(self.org_id.value()),
            name: self.name,
            receivers,
        })
    }
}

impl DeleteContactPointV1 {
    /// Pure pass-through: no defaulting on this path.
    fn into_model(self) -> DeleteContactPoint {
        DeleteContactPoint {
            org_id: OrgId::from(self.org_id.value()),
            uid: self.uid,
        }
    }
}

// ── Policies ────────────────────────────────────────────────────────────

/// A V1 notification policy. Everything besides `orgId` is the routing
/// tree, kept opaque here.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationPolicyV1 {
    #[serde(default)]
    pub org_id: OptionalInt64,
    #[serde(flatten)]
    pub route: Value,
}

/// The only sub-translator defined to never fail. Any future validation
/// need here must not grow an error channel without explicit versioning.
fn map_policies(
    policies: Vec<NotificationPolicyV1>,
    resets: Vec<OptionalInt64>,
    out: &mut AlertingFile,
) {
    for policy in policies {
        out.policies.push(policy.into_model());
    }
    for raw in resets {
        out.reset_policies.push(OrgId::from(raw.value()));
    }
}

impl NotificationPolicyV1 {
    fn into_model(self) -> NotificationPolicy {
        NotificationPolicy {
            org_id: OrgId::from_raw(self.org_id.value()),
            route: self.route,
        }
    }
}

// ── Mute times ──────────────────────────────────────────────────────────

/// A V1 mute-time interval to upsert.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MuteTimeV1 {
    #[serde(default)]
    pub org_id: OptionalInt64,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "time_intervals", default)]
    pub time_intervals: Value,
}

/// A V1 mute-time deletion request.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteMuteTimeV1 {
    #[serde(default)]
    pub org_id: OptionalInt64,
    #[serde(default)]
    pub name: String,
}

/// Upserts first, then deletions; only the deletion path can fail.
fn map_mute_times(
    upserts: Vec<MuteTimeV1>,
    deletes: Vec<DeleteMuteTimeV1>,
    out: &mut AlertingFile,
) -> Result<(), ItemError> {
    for mute_time in upserts {
        out.mute_times.push(mute_time.into_model());
    }
    for delete in deletes {
        out.delete_mute_times.push(delete.into_model()?);
    }
    Ok(())
}

impl MuteTimeV1 {
    fn into_model(self) -> MuteTime {
        MuteTime {
            org_id: OrgId::from_raw(self.org_id.value()),
            name: self.name,
            time_intervals: self.time_intervals,
        }
    }
}

impl DeleteMuteTimeV1 {
    fn into_model(self) -> Result<DeleteMuteTime, ItemError> {
        if self.name.trim().is_empty() {
            return Err(ItemError::MissingMuteTimeName);
        }
        Ok(DeleteMuteTime {
            org_id: OrgId::from_raw(self.org_id.value()),
            name: self.name,
        })
    }
}
