pub mod generation_flow;
pub mod generation_request;

pub use generation_flow::{AttemptError, QuestionGenerator};
pub use generation_request::{GenerationRequest, GeneratorSettings};
