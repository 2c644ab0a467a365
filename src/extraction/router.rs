/// Which category extractors run for a given question context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionRoute {
    /// Run all four extractors against the full transcript.
    FullConversation,
    /// Notice-period extraction only.
    NoticePeriod,
    /// Compensation extraction only.
    Compensation,
    /// Availability extraction only.
    Availability,
    /// Unrecognized context: run nothing, return an empty attribute set.
    Unrouted,
}

impl QuestionRoute {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FullConversation => "full_conversation",
            Self::NoticePeriod => "notice_period",
            Self::Compensation => "compensation",
            Self::Availability => "availability",
            Self::Unrouted => "unrouted",
        }
    }
}

/// Route a question-context label to the extractors it selects.
///
/// First match over the ordered conditions wins; matching is
/// case-insensitive substring containment. The `"interest"` label routes
/// to notice-period extraction — the upstream dialogue flow asks about
/// notice period under that label, and the asymmetry is part of the
/// routing contract, not a branch to tidy up.
pub fn route_question_context(question_context: &str) -> QuestionRoute {
    let context = question_context.to_lowercase();

    if context.contains("full conversation") {
        QuestionRoute::FullConversation
    } else if context.contains("interest") {
        QuestionRoute::NoticePeriod
    } else if ["ctc", "compensation", "salary"]
        .iter()
        .any(|label| context.contains(label))
    {
        QuestionRoute::Compensation
    } else if ["available", "interview", "schedule"]
        .iter()
        .any(|label| context.contains(label))
    {
        QuestionRoute::Availability
    } else {
        QuestionRoute::Unrouted
    }
}
