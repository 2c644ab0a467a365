use regex::Regex;

use super::normalize::standardize_ctc_value;
use super::patterns::PatternLibrary;
use super::types::CtcValue;

/// Resolve the current/expected compensation slots from the transcript.
///
/// Each slot runs its own three-pattern cascade first. Slots still empty
/// afterwards are filled from the shared fallbacks, in order: a
/// `<value> to/and <value>` range (first number to current, second to
/// expected), then a bare-number sweep (two or more numbers fill both in
/// order; a single number fills current only).
pub fn extract_compensation(
    transcript: &str,
    patterns: &PatternLibrary,
) -> (Option<CtcValue>, Option<CtcValue>) {
    let mut current = first_slot_match(transcript, &patterns.current_ctc);
    let mut expected = first_slot_match(transcript, &patterns.expected_ctc);

    if current.is_none() || expected.is_none() {
        if let Some(caps) = patterns.ctc_range.captures(transcript) {
            if current.is_none() {
                current = Some(standardize_ctc_value(
                    &caps[1],
                    caps.get(2).map(|m| m.as_str()),
                ));
            }
            if expected.is_none() {
                expected = Some(standardize_ctc_value(
                    &caps[3],
                    caps.get(4).map(|m| m.as_str()),
                ));
            }
        }
    }

    if current.is_none() || expected.is_none() {
        let numbers: Vec<&str> = patterns
            .bare_number
            .find_iter(transcript)
            .map(|m| m.as_str())
            .collect();
        if numbers.len() >= 2 {
            if current.is_none() {
                current = Some(standardize_ctc_value(numbers[0], None));
            }
            if expected.is_none() {
                expected = Some(standardize_ctc_value(numbers[1], None));
            }
        } else if numbers.len() == 1 && current.is_none() {
            current = Some(standardize_ctc_value(numbers[0], None));
        }
    }

    (current, expected)
}

/// First cascade pattern that hits wins the slot. Capture 1 is the value,
/// capture 2 the optional unit.
fn first_slot_match(transcript: &str, cascade: &[Regex]) -> Option<CtcValue> {
    cascade.iter().find_map(|re| {
        re.captures(transcript)
            .map(|caps| standardize_ctc_value(&caps[1], caps.get(2).map(|m| m.as_str())))
    })
}
