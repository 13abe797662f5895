pub mod document_reader;
pub mod llm_service;
pub mod output_parser;
pub mod output_writer;
pub mod prompt_builder;
pub mod truncator;
pub mod validator;

pub use document_reader::{combine_documents, extract_text, read_document, DocumentKind};
pub use llm_service::{LlmService, TextGenerator};
pub use output_parser::parse_output;
pub use output_writer::OutputWriter;
pub use prompt_builder::{build_prompt, PromptInput};
pub use truncator::{Truncator, DEFAULT_MAX_TOKENS};
pub use validator::validate_questions;
