use crate::model::{StatusDetails, Substatus};
use crate::reason::{resolve, Reason, SECONDS_PER_MINUTE};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidStatusDetails {
    #[error("{field} must not be negative (got {value})")]
    NegativeValue { field: &'static str, value: i64 },
    #[error("{field} of {minutes} minutes does not fit in seconds")]
    WindowOverflow { field: &'static str, minutes: i64 },
}

/// Reject details that upstream should never have produced.
///
/// Fields are checked in declaration order and the first problem wins.
pub fn validate(details: &StatusDetails) -> Result<(), InvalidStatusDetails> {
    non_negative("ignoreCount", details.ignore_count)?;
    window("ignoreWindow", details.ignore_window)?;
    non_negative("ignoreUserCount", details.ignore_user_count)?;
    window("ignoreUserWindow", details.ignore_user_window)?;
    Ok(())
}

/// [`validate`] then [`resolve`].
pub fn resolve_checked(
    substatus: Substatus,
    details: &StatusDetails,
) -> Result<Reason, InvalidStatusDetails> {
    validate(details)?;
    Ok(resolve(substatus, details))
}

fn non_negative(field: &'static str, value: Option<i64>) -> Result<(), InvalidStatusDetails> {
    match value {
        Some(value) if value < 0 => Err(InvalidStatusDetails::NegativeValue { field, value }),
        _ => Ok(()),
    }
}

fn window(field: &'static str, minutes: Option<i64>) -> Result<(), InvalidStatusDetails> {
    non_negative(field, minutes)?;
    match minutes {
        Some(minutes) if minutes.checked_mul(SECONDS_PER_MINUTE).is_none() => {
            Err(InvalidStatusDetails::WindowOverflow { field, minutes })
        }
        _ => Ok(()),
    }
}
