use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Secondary status refining why an issue is in its current state.
///
/// Only the archived substatuses influence resolution; every other value
/// falls through to the detail-driven rules.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Substatus {
    /// Archived until the issue escalates. Overrides every detail field.
    ArchivedUntilEscalating,
    /// Archived until a count, user count or date condition is met.
    ArchivedUntilConditionMet,
    /// Archived with no return condition.
    ArchivedForever,
    /// Unresolved and currently escalating.
    Escalating,
    /// Unresolved and seen for a while without escalating.
    Ongoing,
    /// Seen again after having been resolved.
    Regressed,
    /// First seen recently.
    New,
    /// Missing or unrecognised on the wire.
    #[default]
    #[serde(other)]
    Unknown,
}

/// Optional suppression parameters attached to an issue's status.
///
/// Every field is independent. Upstream may set any subset, including
/// combinations that contradict each other or the substatus.
/// Windows are expressed in minutes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusDetails {
    /// Instant at which the archive ends, UTC.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ignore_until: Option<DateTime<Utc>>,
    /// Occurrence count after which the issue returns.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ignore_count: Option<i64>,
    /// Window for `ignore_count`, in minutes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ignore_window: Option<i64>,
    /// Affected-user count after which the issue returns.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ignore_user_count: Option<i64>,
    /// Window for `ignore_user_count`, in minutes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ignore_user_window: Option<i64>,
    /// Upstream escalation flag. Carried but not consulted; the substatus decides.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ignore_until_escalating: Option<bool>,
}

impl StatusDetails {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
