use super::normalize::word_to_digit;
use super::patterns::PatternLibrary;

/// Resolve the notice period from the transcript.
///
/// Ordered cascade, first hit wins: explicit immediate-joining phrase,
/// numeric range, digit + unit, word-number + unit. Only day/week/month
/// units are recognized; anything else leaves the field absent.
pub fn extract_notice_period(transcript: &str, patterns: &PatternLibrary) -> Option<String> {
    if patterns.notice_immediate.is_match(transcript) {
        return Some("Immediate".to_string());
    }

    if let Some(caps) = patterns.notice_range.captures(transcript) {
        return Some(format!("{}-{} {}", &caps[1], &caps[2], &caps[3]));
    }

    if let Some(caps) = patterns.notice_digit.captures(transcript) {
        return Some(format!("{} {}", &caps[1], &caps[2]));
    }

    if let Some(caps) = patterns.notice_word.captures(transcript) {
        let digit = word_to_digit(&caps[1])?;
        return Some(format!("{digit} {}", &caps[2]));
    }

    None
}
