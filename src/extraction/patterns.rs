use regex::Regex;

// Shared regex fragments. Transcripts are lower-cased before matching, so
// none of these need (?i).
const VALUE: &str = r"(\d+(?:\.\d+)?)";
const UNIT_OPT: &str = r"(?:\s*(lakhs?|lpa|k|l)\b)?";
const CURRENCY_OPT: &str = r"(?:(?:inr|rs\.?|₹)\s*)?";
const NOTICE_UNIT: &str = r"(days?|weeks?|months?)";

/// How a matched day token becomes the `day` attribute.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DayKind {
    /// The matched text is the value ("monday", "tomorrow", "next week").
    Verbatim,
    /// Ordinal day + month name, reformatted as `"<day> <month>"`.
    OrdinalMonth,
}

pub struct DayPattern {
    pub regex: Regex,
    pub kind: DayKind,
}

/// How a matched time token folds into the `"H:MM AM/PM"` clock string.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TimeKind {
    /// `HH:MM` / `HH.MM`, optional `hours|hrs|h` suffix; 24-hour fold.
    Clock24,
    /// `HH:MM am/pm`.
    ClockMeridiem,
    /// Bare hour with meridiem ("2pm").
    HourMeridiem,
    /// morning / afternoon / evening, mapped to fixed clock times.
    NamedPeriod,
    /// `H o'clock`; AM for hours 8-11, PM otherwise.
    OClock,
}

pub struct TimePattern {
    pub regex: Regex,
    pub kind: TimeKind,
}

/// Every keyword table and compiled pattern the extractors run.
///
/// List position encodes priority throughout: extractors walk each list
/// top to bottom and stop at the first hit. Built once and passed by
/// reference into the extractor functions; never mutated afterwards.
pub struct PatternLibrary {
    // Interest keyword/phrase tables, matched by substring containment.
    pub positive_keywords: &'static [&'static str],
    pub positive_phrases: &'static [&'static str],
    pub negative_keywords: &'static [&'static str],
    pub negative_phrases: &'static [&'static str],

    // Notice-period cascade, highest priority first.
    pub notice_immediate: Regex,
    pub notice_range: Regex,
    pub notice_digit: Regex,
    pub notice_word: Regex,

    // Per-slot compensation cascades plus shared fallbacks.
    pub current_ctc: Vec<Regex>,
    pub expected_ctc: Vec<Regex>,
    pub ctc_range: Regex,
    pub bare_number: Regex,

    // Availability sub-cascades.
    pub day_patterns: Vec<DayPattern>,
    pub time_patterns: Vec<TimePattern>,
}

impl PatternLibrary {
    pub fn new() -> Self {
        Self {
            positive_keywords: &[
                "yes",
                "interested",
                "definitely",
                "absolutely",
                "sure",
                "of course",
                "certainly",
                "yeah",
                "yep",
                "positive",
            ],
            positive_phrases: &["sounds good", "like to", "would love", "great opportunity"],
            negative_keywords: &[
                "no",
                "not interested",
                "don't think",
                "cannot",
                "nope",
                "negative",
                "pass",
                "decline",
            ],
            negative_phrases: &[
                "not for me",
                "looking elsewhere",
                "other opportunities",
                "not at this time",
            ],

            notice_immediate: compile("immediate"),
            notice_range: compile(&format!(r"\b(\d+)\s*to\s*(\d+)\s*{NOTICE_UNIT}\b")),
            notice_digit: compile(&format!(r"\b(\d+)\s*{NOTICE_UNIT}\b")),
            notice_word: compile(&format!(
                r"\b(one|two|three|four|five|six)\s+{NOTICE_UNIT}\b"
            )),

            current_ctc: vec![
                compile(&format!(
                    r"current\s+(?:ctc\s+)?(?:is|of)\s+{CURRENCY_OPT}{VALUE}{UNIT_OPT}"
                )),
                compile(&format!(
                    r"(?:i\s+am|i'm|im)\s+(?:getting|earning|making)\s+{CURRENCY_OPT}{VALUE}{UNIT_OPT}"
                )),
                compile(&format!(
                    r"{VALUE}{UNIT_OPT}.*?\b(?:current|right\s+now|at\s+present)\b"
                )),
            ],
            expected_ctc: vec![
                compile(&format!(
                    r"expect(?:ed|ing)?\s+(?:ctc\s+)?(?:is|of)\s+{CURRENCY_OPT}{VALUE}{UNIT_OPT}"
                )),
                compile(&format!(r"looking\s+for\s+{CURRENCY_OPT}{VALUE}{UNIT_OPT}")),
                compile(&format!(r"{VALUE}{UNIT_OPT}.*?\b(?:expect|want|desired)\b")),
            ],
            ctc_range: compile(&format!(
                r"{VALUE}{UNIT_OPT}\s*(?:to|and)\s+{CURRENCY_OPT}{VALUE}{UNIT_OPT}"
            )),
            bare_number: compile(r"\d+(?:\.\d+)?"),

            day_patterns: vec![
                day(
                    r"\b(?:monday|tuesday|wednesday|thursday|friday|saturday|sunday)\b",
                    DayKind::Verbatim,
                ),
                day(
                    r"\b(?:mon|tues|tue|wed|thurs|thur|thu|fri|sat|sun)\b",
                    DayKind::Verbatim,
                ),
                // Longer phrase first so "day after tomorrow" is not read as
                // a bare "tomorrow" at the same position.
                day(
                    r"\b(?:day\s+after\s+tomorrow|tomorrow|next\s+week)\b",
                    DayKind::Verbatim,
                ),
                day(
                    r"\b(\d{1,2})(?:st|nd|rd|th)?\s+(january|february|march|april|may|june|july|august|september|october|november|december)\b",
                    DayKind::OrdinalMonth,
                ),
            ],
            time_patterns: vec![
                time(
                    r"\b(\d{1,2})[:.](\d{2})(?:\s*(?:hours|hrs|h)\b)?",
                    TimeKind::Clock24,
                ),
                time(r"\b(\d{1,2})[:.](\d{2})\s*(am|pm)\b", TimeKind::ClockMeridiem),
                time(r"\b(\d{1,2})\s*(am|pm)\b", TimeKind::HourMeridiem),
                time(r"\b(morning|afternoon|evening)\b", TimeKind::NamedPeriod),
                time(r"\b(\d{1,2})\s*o'?clock\b", TimeKind::OClock),
            ],
        }
    }
}

impl Default for PatternLibrary {
    fn default() -> Self {
        Self::new()
    }
}

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("invalid extraction pattern")
}

fn day(pattern: &str, kind: DayKind) -> DayPattern {
    DayPattern {
        regex: compile(pattern),
        kind,
    }
}

fn time(pattern: &str, kind: TimeKind) -> TimePattern {
    TimePattern {
        regex: compile(pattern),
        kind,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn library_compiles_every_pattern() {
        // Construction itself exercises every Regex::new call.
        let lib = PatternLibrary::new();
        assert_eq!(lib.current_ctc.len(), 3);
        assert_eq!(lib.expected_ctc.len(), 3);
        assert_eq!(lib.day_patterns.len(), 4);
        assert_eq!(lib.time_patterns.len(), 5);
    }

    #[test]
    fn notice_range_captures_bounds_and_unit() {
        let lib = PatternLibrary::new();
        let caps = lib.notice_range.captures("maybe 2 to 3 months").unwrap();
        assert_eq!(&caps[1], "2");
        assert_eq!(&caps[2], "3");
        assert_eq!(&caps[3], "months");
    }

    #[test]
    fn current_ctc_tolerates_currency_prefix() {
        let lib = PatternLibrary::new();
        let caps = lib.current_ctc[0]
            .captures("my current ctc is rs 8.5 lakh")
            .unwrap();
        assert_eq!(&caps[1], "8.5");
        assert_eq!(caps.get(2).map(|m| m.as_str()), Some("lakh"));
    }

    #[test]
    fn day_after_tomorrow_beats_tomorrow() {
        let lib = PatternLibrary::new();
        let relative = &lib.day_patterns[2].regex;
        let m = relative.find("the day after tomorrow works").unwrap();
        assert_eq!(m.as_str(), "day after tomorrow");
    }

    #[test]
    fn clock24_suffix_is_optional() {
        let lib = PatternLibrary::new();
        let clock = &lib.time_patterns[0].regex;
        assert!(clock.is_match("14:30 hrs"));
        assert!(clock.is_match("14.30"));
        assert!(!clock.is_match("2pm"));
    }
}
