use crate::model::{StatusDetails, Substatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub(crate) const SECONDS_PER_MINUTE: i64 = 60;

/// Why an archived issue is suppressed, with the values needed to explain it.
///
/// Window fields are in seconds, already converted from the minutes stored
/// on the status.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Reason {
    /// Returns to the inbox if the issue escalates.
    Escalating,
    /// Suppressed until an absolute point in time.
    UntilDate { until: DateTime<Utc> },
    /// Suppressed until it occurs `count` times within the window.
    CountInWindow { count: i64, window_seconds: i64 },
    /// Suppressed until it occurs `count` more times.
    CountOnly { count: i64 },
    /// Suppressed until `count` users are affected within the window.
    UserCountInWindow { count: i64, window_seconds: i64 },
    /// Suppressed until `count` more users are affected.
    UserCountOnly { count: i64 },
    /// No return condition.
    Forever,
}

impl Reason {
    /// Stable name of the rule that produced this reason.
    pub fn rule(&self) -> &'static str {
        match self {
            Reason::Escalating => "escalating",
            Reason::UntilDate { .. } => "until_date",
            Reason::CountInWindow { .. } => "count_in_window",
            Reason::CountOnly { .. } => "count_only",
            Reason::UserCountInWindow { .. } => "user_count_in_window",
            Reason::UserCountOnly { .. } => "user_count_only",
            Reason::Forever => "forever",
        }
    }
}

/// Pick the reason an issue with this substatus and these details is archived.
///
/// First matching rule wins:
///
/// 1. `ArchivedUntilEscalating` substatus, whatever the details say.
/// 2. `ignore_until`.
/// 3. `ignore_count` together with `ignore_window`.
/// 4. `ignore_count` alone.
/// 5. `ignore_user_count` together with `ignore_user_window`.
/// 6. `ignore_user_count` alone.
/// 7. Forever.
///
/// A count or window of zero counts as unset. `ignore_until_escalating` is
/// never consulted; the substatus is authoritative.
pub fn resolve(substatus: Substatus, details: &StatusDetails) -> Reason {
    let reason = pick(substatus, details);
    tracing::trace!(?substatus, rule = reason.rule(), "resolved archive reason");
    reason
}

fn pick(substatus: Substatus, details: &StatusDetails) -> Reason {
    if substatus == Substatus::ArchivedUntilEscalating {
        return Reason::Escalating;
    }
    if let Some(until) = details.ignore_until {
        return Reason::UntilDate { until };
    }

    match (set(details.ignore_count), set(details.ignore_window)) {
        (Some(count), Some(window)) => {
            return Reason::CountInWindow {
                count,
                window_seconds: minutes_to_seconds(window),
            };
        }
        (Some(count), None) => return Reason::CountOnly { count },
        _ => {}
    }

    match (
        set(details.ignore_user_count),
        set(details.ignore_user_window),
    ) {
        (Some(count), Some(window)) => Reason::UserCountInWindow {
            count,
            window_seconds: minutes_to_seconds(window),
        },
        (Some(count), None) => Reason::UserCountOnly { count },
        _ => Reason::Forever,
    }
}

fn set(value: Option<i64>) -> Option<i64> {
    value.filter(|v| *v != 0)
}

fn minutes_to_seconds(minutes: i64) -> i64 {
    minutes.saturating_mul(SECONDS_PER_MINUTE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn until() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2017, 6, 21, 19, 45, 10).unwrap()
    }

    #[test]
    fn escalating_substatus_ignores_every_detail() {
        let details = StatusDetails {
            ignore_until: Some(until()),
            ignore_count: Some(5),
            ignore_window: Some(5),
            ignore_user_count: Some(5),
            ignore_user_window: Some(5),
            ignore_until_escalating: Some(false),
        };
        assert_eq!(
            resolve(Substatus::ArchivedUntilEscalating, &details),
            Reason::Escalating
        );
        assert_eq!(
            resolve(Substatus::ArchivedUntilEscalating, &StatusDetails::default()),
            Reason::Escalating
        );
    }

    #[test]
    fn escalating_flag_alone_does_not_trigger_escalating() {
        let details = StatusDetails {
            ignore_until_escalating: Some(true),
            ..Default::default()
        };
        assert_eq!(
            resolve(Substatus::ArchivedUntilConditionMet, &details),
            Reason::Forever
        );
    }

    #[test]
    fn zero_window_degrades_to_count_only() {
        let details = StatusDetails {
            ignore_count: Some(10),
            ignore_window: Some(0),
            ..Default::default()
        };
        assert_eq!(
            resolve(Substatus::ArchivedUntilConditionMet, &details),
            Reason::CountOnly { count: 10 }
        );
    }

    #[test]
    fn zero_count_falls_through_to_user_rules() {
        let details = StatusDetails {
            ignore_count: Some(0),
            ignore_window: Some(5),
            ignore_user_count: Some(3),
            ..Default::default()
        };
        assert_eq!(
            resolve(Substatus::ArchivedUntilConditionMet, &details),
            Reason::UserCountOnly { count: 3 }
        );
    }

    #[test]
    fn user_window_without_user_count_is_forever() {
        let details = StatusDetails {
            ignore_user_window: Some(60),
            ..Default::default()
        };
        assert_eq!(resolve(Substatus::Unknown, &details), Reason::Forever);
    }

    #[test]
    fn huge_window_saturates_instead_of_overflowing() {
        let details = StatusDetails {
            ignore_count: Some(1),
            ignore_window: Some(i64::MAX),
            ..Default::default()
        };
        assert_eq!(
            resolve(Substatus::ArchivedUntilConditionMet, &details),
            Reason::CountInWindow {
                count: 1,
                window_seconds: i64::MAX,
            }
        );
    }

    #[test]
    fn negative_count_is_not_validated_here() {
        let details = StatusDetails {
            ignore_count: Some(-4),
            ..Default::default()
        };
        assert_eq!(
            resolve(Substatus::ArchivedUntilConditionMet, &details),
            Reason::CountOnly { count: -4 }
        );
    }

    #[test]
    fn rule_names_are_distinct() {
        let reasons = [
            Reason::Escalating,
            Reason::UntilDate { until: until() },
            Reason::CountInWindow {
                count: 1,
                window_seconds: 60,
            },
            Reason::CountOnly { count: 1 },
            Reason::UserCountInWindow {
                count: 1,
                window_seconds: 60,
            },
            Reason::UserCountOnly { count: 1 },
            Reason::Forever,
        ];
        let names: std::collections::HashSet<_> = reasons.iter().map(Reason::rule).collect();
        assert_eq!(names.len(), reasons.len());
    }

    #[test]
    fn reason_serializes_with_kind_tag() {
        let json = serde_json::to_value(Reason::CountInWindow {
            count: 100,
            window_seconds: 60,
        })
        .unwrap();
        assert_eq!(
            json,
            serde_json::json!({"kind": "count_in_window", "count": 100, "window_seconds": 60})
        );

        let json = serde_json::to_value(Reason::Forever).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "forever"}));
    }
}
