use std::time::Instant;

use super::availability::extract_availability;
use super::compensation::extract_compensation;
use super::interest::extract_interest;
use super::notice_period::extract_notice_period;
use super::patterns::PatternLibrary;
use super::router::{route_question_context, QuestionRoute};
use super::types::ExtractedAttributes;

/// The transcript extraction engine.
///
/// Owns the compiled pattern tables and composes router, category
/// extractors, and normalizers into a single call. Pure computation over
/// in-memory strings: no I/O, no per-call state, safe to share across
/// request-handling threads.
pub struct ExtractionEngine {
    patterns: PatternLibrary,
}

impl ExtractionEngine {
    pub fn new() -> Self {
        Self {
            patterns: PatternLibrary::new(),
        }
    }

    /// Run one extraction. Total over any string input: unmatched
    /// categories and unrecognized contexts yield absent fields, never an
    /// error.
    pub fn extract(&self, transcript: &str, question_context: &str) -> ExtractedAttributes {
        let start = Instant::now();
        let transcript = transcript.to_lowercase();
        let route = route_question_context(question_context);

        let mut attributes = ExtractedAttributes::default();
        match route {
            QuestionRoute::FullConversation => {
                attributes.interested = extract_interest(&transcript, &self.patterns);
                attributes.notice_period = extract_notice_period(&transcript, &self.patterns);
                let (current, expected) = extract_compensation(&transcript, &self.patterns);
                attributes.current_ctc = current;
                attributes.expected_ctc = expected;
                attributes.availability = extract_availability(&transcript, &self.patterns);
            }
            QuestionRoute::NoticePeriod => {
                attributes.notice_period = extract_notice_period(&transcript, &self.patterns);
            }
            QuestionRoute::Compensation => {
                let (current, expected) = extract_compensation(&transcript, &self.patterns);
                attributes.current_ctc = current;
                attributes.expected_ctc = expected;
            }
            QuestionRoute::Availability => {
                attributes.availability = extract_availability(&transcript, &self.patterns);
            }
            QuestionRoute::Unrouted => {}
        }

        tracing::info!(
            route = route.as_str(),
            interested = attributes.interested.is_some(),
            notice_period = attributes.notice_period.is_some(),
            current_ctc = attributes.current_ctc.is_some(),
            expected_ctc = attributes.expected_ctc.is_some(),
            availability = attributes.availability.is_some(),
            processing_us = start.elapsed().as_micros() as u64,
            "Transcript extraction complete"
        );

        attributes
    }
}

impl Default for ExtractionEngine {
    fn default() -> Self {
        Self::new()
    }
}
