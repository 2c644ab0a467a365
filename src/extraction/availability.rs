use super::normalize::{clock_12, clock_from_24};
use super::patterns::{DayKind, PatternLibrary, TimeKind};
use super::types::Availability;

/// Resolve the proposed interview slot from the transcript.
///
/// Day and time run as independent sub-cascades; the record is present only
/// if at least one of them resolved.
pub fn extract_availability(transcript: &str, patterns: &PatternLibrary) -> Option<Availability> {
    let availability = Availability {
        day: extract_day(transcript, patterns),
        time: extract_time(transcript, patterns),
    };
    if availability.is_empty() {
        None
    } else {
        Some(availability)
    }
}

/// First day match in pattern-list order wins. Ordinal-day + month matches
/// are reformatted as `"<day> <month>"`; everything else is the matched
/// text verbatim.
fn extract_day(transcript: &str, patterns: &PatternLibrary) -> Option<String> {
    for pattern in &patterns.day_patterns {
        if let Some(caps) = pattern.regex.captures(transcript) {
            let day = match pattern.kind {
                DayKind::Verbatim => caps[0].to_string(),
                DayKind::OrdinalMonth => format!("{} {}", &caps[1], &caps[2]),
            };
            return Some(day);
        }
    }
    None
}

/// First time match in pattern-list order wins, folded into the uniform
/// `"H:MM AM/PM"` clock string.
fn extract_time(transcript: &str, patterns: &PatternLibrary) -> Option<String> {
    for pattern in &patterns.time_patterns {
        let Some(caps) = pattern.regex.captures(transcript) else {
            continue;
        };
        let time = match pattern.kind {
            TimeKind::Clock24 => {
                let hour: u32 = caps[1].parse().ok()?;
                let minute: u32 = caps[2].parse().ok()?;
                clock_from_24(hour, minute)
            }
            TimeKind::ClockMeridiem => {
                let hour: u32 = caps[1].parse().ok()?;
                let minute: u32 = caps[2].parse().ok()?;
                clock_12(hour, minute, &caps[3])
            }
            TimeKind::HourMeridiem => {
                let hour: u32 = caps[1].parse().ok()?;
                clock_12(hour, 0, &caps[2])
            }
            TimeKind::NamedPeriod => match &caps[1] {
                "morning" => "9:00 AM".to_string(),
                "afternoon" => "2:00 PM".to_string(),
                _ => "6:00 PM".to_string(),
            },
            TimeKind::OClock => {
                let hour: u32 = caps[1].parse().ok()?;
                let meridiem = if (8..=11).contains(&hour) { "AM" } else { "PM" };
                format!("{hour}:00 {meridiem}")
            }
        };
        return Some(time);
    }
    None
}
