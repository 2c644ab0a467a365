pub mod types;
pub mod patterns;
pub mod normalize;
pub mod interest;
pub mod notice_period;
pub mod compensation;
pub mod availability;
pub mod router;
pub mod engine;

pub use types::*;
pub use patterns::PatternLibrary;
pub use router::{route_question_context, QuestionRoute};
pub use engine::ExtractionEngine;
