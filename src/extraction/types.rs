use std::fmt;

use serde::de::Deserializer;
use serde::{Deserialize, Serialize, Serializer};

// ---------------------------------------------------------------------------
// Interested
// ---------------------------------------------------------------------------

/// Interest sentiment resolved from the transcript.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Interested {
    Yes,
    No,
}

impl Interested {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Yes => "Yes",
            Self::No => "No",
        }
    }
}

// ---------------------------------------------------------------------------
// CtcValue
// ---------------------------------------------------------------------------

/// A compensation value after normalization.
///
/// `Lpa` is the reliably normalized variant (Lakhs Per Annum). `Raw` is the
/// best-effort passthrough kept when the matched token does not parse as a
/// number; callers can distinguish the two instead of guessing from the
/// string shape.
#[derive(Debug, Clone, PartialEq)]
pub enum CtcValue {
    Lpa(f64),
    Raw(String),
}

impl fmt::Display for CtcValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Integral values keep one decimal so "12" renders as "12.0 LPA".
            Self::Lpa(v) if v.fract() == 0.0 => write!(f, "{v:.1} LPA"),
            Self::Lpa(v) => write!(f, "{v} LPA"),
            Self::Raw(s) => write!(f, "{s}"),
        }
    }
}

// On the wire both variants are plain strings; "<value> LPA" round-trips
// back into the Lpa variant, anything else is a raw passthrough.
impl Serialize for CtcValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CtcValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        match s.strip_suffix(" LPA").map(str::parse::<f64>) {
            Some(Ok(v)) => Ok(Self::Lpa(v)),
            _ => Ok(Self::Raw(s)),
        }
    }
}

// ---------------------------------------------------------------------------
// Availability
// ---------------------------------------------------------------------------

/// Proposed interview slot; each sub-field is independently optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Availability {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day: Option<String>,
    /// Uniform `"H:MM AM/PM"` clock string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
}

impl Availability {
    pub fn is_empty(&self) -> bool {
        self.day.is_none() && self.time.is_none()
    }
}

// ---------------------------------------------------------------------------
// ExtractedAttributes
// ---------------------------------------------------------------------------

/// The structured attribute set produced by one extraction run.
///
/// Constructed fresh per call; absent fields mean "not found", which is a
/// normal outcome, not an error. Absent fields are omitted from the wire
/// representation entirely.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ExtractedAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interested: Option<Interested>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice_period: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_ctc: Option<CtcValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_ctc: Option<CtcValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability: Option<Availability>,
}

impl ExtractedAttributes {
    pub fn is_empty(&self) -> bool {
        self.interested.is_none()
            && self.notice_period.is_none()
            && self.current_ctc.is_none()
            && self.expected_ctc.is_none()
            && self.availability.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ctc_display_integral_keeps_one_decimal() {
        assert_eq!(CtcValue::Lpa(12.0).to_string(), "12.0 LPA");
        assert_eq!(CtcValue::Lpa(8.5).to_string(), "8.5 LPA");
    }

    #[test]
    fn ctc_raw_passes_through() {
        assert_eq!(CtcValue::Raw("eight-ish".into()).to_string(), "eight-ish");
    }

    #[test]
    fn ctc_serde_round_trip() {
        let json = serde_json::to_string(&CtcValue::Lpa(8.5)).unwrap();
        assert_eq!(json, "\"8.5 LPA\"");
        let back: CtcValue = serde_json::from_str(&json).unwrap();
        assert_eq!(back, CtcValue::Lpa(8.5));

        let raw: CtcValue = serde_json::from_str("\"around ten\"").unwrap();
        assert_eq!(raw, CtcValue::Raw("around ten".into()));
    }

    #[test]
    fn absent_fields_are_omitted() {
        let attrs = ExtractedAttributes {
            notice_period: Some("2 months".into()),
            ..Default::default()
        };
        let json = serde_json::to_string(&attrs).unwrap();
        assert_eq!(json, "{\"notice_period\":\"2 months\"}");
    }

    #[test]
    fn empty_attributes_serialize_to_empty_object() {
        let attrs = ExtractedAttributes::default();
        assert!(attrs.is_empty());
        assert_eq!(serde_json::to_string(&attrs).unwrap(), "{}");
    }

    #[test]
    fn interested_as_str() {
        assert_eq!(Interested::Yes.as_str(), "Yes");
        assert_eq!(Interested::No.as_str(), "No");
        assert_eq!(
            serde_json::to_string(&Interested::Yes).unwrap(),
            "\"Yes\""
        );
    }

    #[test]
    fn availability_is_empty() {
        assert!(Availability::default().is_empty());
        assert!(!Availability {
            day: Some("monday".into()),
            time: None
        }
        .is_empty());
    }
}
