//! Error types for provisioning file translation.

use thiserror::Error;

/// A single versioned item failed to convert to the normalized model.
///
/// Raised by item-level mappers inside the rules, contact-points, and
/// mute-times-delete paths. The other paths are infallible by contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ItemError {
    #[error("rule group '{group}': invalid evaluation interval '{value}': {reason}")]
    InvalidInterval {
        group: String,
        value: String,
        reason: String,
    },

    #[error("rule '{uid}': invalid 'for' duration '{value}': {reason}")]
    InvalidForDuration {
        uid: String,
        value: String,
        reason: String,
    },

    #[error("contact point '{name}': receiver '{uid}' has no type")]
    MissingReceiverType { name: String, uid: String },

    #[error("contact point '{name}': receiver '{uid}' settings must be a mapping")]
    InvalidReceiverSettings { name: String, uid: String },

    #[error("mute time deletion request has no name")]
    MissingMuteTimeName,
}

/// Translation failure wrapped with the sub-entity kind that failed.
///
/// Message prefixes are stable: callers surface them verbatim, attaching
/// the source filename tracked on both document forms. Policies have no
/// variant here; their translation cannot fail.
#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("failure parsing rules: {0}")]
    Rules(#[source] ItemError),

    #[error("failure parsing contact points: {0}")]
    ContactPoints(#[source] ItemError),

    #[error("failure parsing mute times: {0}")]
    MuteTimes(#[source] ItemError),
}

impl TranslateError {
    /// The underlying item-level cause.
    pub fn cause(&self) -> &ItemError {
        match self {
            TranslateError::Rules(e)
            | TranslateError::ContactPoints(e)
            | TranslateError::MuteTimes(e) => e,
        }
    }
}
