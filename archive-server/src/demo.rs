use archive_banner::BannerRenderer;
use archive_reason::{resolve, StatusDetails, Substatus};
use chrono::{TimeZone, Utc};
use std::io::Write;

/// One archived status per resolution rule.
pub fn samples() -> Vec<(Substatus, StatusDetails)> {
    let condition_met = Substatus::ArchivedUntilConditionMet;
    vec![
        (
            Substatus::ArchivedUntilEscalating,
            StatusDetails {
                ignore_until_escalating: Some(true),
                ..Default::default()
            },
        ),
        (
            condition_met,
            StatusDetails {
                ignore_until: Utc.with_ymd_and_hms(2017, 6, 21, 19, 45, 10).single(),
                ..Default::default()
            },
        ),
        (
            condition_met,
            StatusDetails {
                ignore_count: Some(1_000),
                ignore_window: Some(60),
                ..Default::default()
            },
        ),
        (
            condition_met,
            StatusDetails {
                ignore_count: Some(100),
                ..Default::default()
            },
        ),
        (
            condition_met,
            StatusDetails {
                ignore_user_count: Some(25),
                ignore_user_window: Some(1_440),
                ..Default::default()
            },
        ),
        (
            condition_met,
            StatusDetails {
                ignore_user_count: Some(10),
                ..Default::default()
            },
        ),
        (Substatus::ArchivedForever, StatusDetails::default()),
    ]
}

/// Write `rule: sentence` for every sample.
pub fn run(renderer: &BannerRenderer, out: &mut impl Write) -> std::io::Result<()> {
    for (substatus, details) in samples() {
        let reason = resolve(substatus, &details);
        writeln!(out, "{}: {}", reason.rule(), renderer.render(&reason))?;
    }
    Ok(())
}
