use super::patterns::PatternLibrary;
use super::types::Interested;

/// Resolve interest sentiment from the transcript.
///
/// Matching is substring containment against the lower-cased transcript,
/// checked positive-first: any positive keyword or phrase short-circuits to
/// `Yes` before the negative tables are consulted, so a transcript carrying
/// both reads as positive. No hit in either table leaves the field absent.
pub fn extract_interest(transcript: &str, patterns: &PatternLibrary) -> Option<Interested> {
    let positive = patterns
        .positive_keywords
        .iter()
        .chain(patterns.positive_phrases)
        .any(|needle| transcript.contains(needle));
    if positive {
        return Some(Interested::Yes);
    }

    let negative = patterns
        .negative_keywords
        .iter()
        .chain(patterns.negative_phrases)
        .any(|needle| transcript.contains(needle));
    if negative {
        return Some(Interested::No);
    }

    None
}
