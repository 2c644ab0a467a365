//! Candidex turns free-text transcripts from automated candidate-screening
//! calls into structured recruiting attributes: notice period,
//! current/expected compensation, interest sentiment, and a proposed
//! interview slot. The engine is a deterministic, priority-ordered rule
//! cascade — audio handling, speech-to-text, and result delivery live in
//! upstream/downstream services and only their data contracts appear here.

pub mod config;
pub mod extraction;
pub mod models;

pub use extraction::{
    Availability, CtcValue, ExtractedAttributes, ExtractionEngine, Interested,
};
pub use models::CandidatePayload;
