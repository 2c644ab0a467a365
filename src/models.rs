use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::extraction::ExtractedAttributes;

/// Payload handed to the downstream delivery collaborator after one
/// extraction run. The field casing matches the downstream store's wire
/// contract (`candidateId`). Delivery itself happens outside this crate;
/// a delivery failure cannot affect the attributes already computed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidatePayload {
    pub candidate_id: Uuid,
    pub transcript: String,
    pub attributes: ExtractedAttributes,
    pub timestamp: DateTime<Utc>,
}

impl CandidatePayload {
    pub fn new(candidate_id: Uuid, transcript: String, attributes: ExtractedAttributes) -> Self {
        Self {
            candidate_id,
            transcript,
            attributes,
            timestamp: Utc::now(),
        }
    }
}
