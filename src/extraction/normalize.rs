use super::types::CtcValue;

/// Fold a matched compensation token into the canonical LPA representation.
///
/// `lakh`/`lakhs`/`lpa`/`l` are already in lakhs; `k` is thousands, so the
/// value divides by 100; a bare number is assumed to already be in lakhs.
/// A token that does not parse as a number is kept verbatim as
/// `CtcValue::Raw` rather than treated as a fault.
pub fn standardize_ctc_value(raw: &str, unit: Option<&str>) -> CtcValue {
    let value: f64 = match raw.trim().parse() {
        Ok(v) => v,
        Err(_) => return CtcValue::Raw(raw.to_string()),
    };

    match unit.map(|u| u.trim().to_lowercase()).as_deref() {
        Some("k") => CtcValue::Lpa(value / 100.0),
        // lakh / lakhs / lpa / l, or no unit at all
        _ => CtcValue::Lpa(value),
    }
}

/// Map the word-numbers the notice-period cascade recognizes to digits.
pub fn word_to_digit(word: &str) -> Option<u32> {
    match word {
        "one" => Some(1),
        "two" => Some(2),
        "three" => Some(3),
        "four" => Some(4),
        "five" => Some(5),
        "six" => Some(6),
        _ => None,
    }
}

/// Fold a 24-hour clock reading into the uniform `"H:MM AM/PM"` string.
pub fn clock_from_24(hour: u32, minute: u32) -> String {
    let (hour12, meridiem) = match hour {
        0 => (12, "AM"),
        1..=11 => (hour, "AM"),
        12 => (12, "PM"),
        _ => (hour - 12, "PM"),
    };
    format!("{hour12}:{minute:02} {meridiem}")
}

/// Format an hour/minute that already carries a meridiem. Hour 0 maps to 12;
/// no leading zero on the hour.
pub fn clock_12(hour: u32, minute: u32, meridiem: &str) -> String {
    let hour12 = if hour == 0 { 12 } else { hour };
    format!("{hour12}:{minute:02} {}", meridiem.to_uppercase())
}
