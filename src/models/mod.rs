pub mod job;
pub mod loaders;
pub mod question_block;
pub mod question_type;

pub use job::GenerationJob;
pub use loaders::{load_all_jobs, load_job};
pub use question_block::{
    join_blocks, NormalizedQuestionBlock, RawQuestionBlock, ValidatedQuestionSet,
    BLOCK_SEPARATOR,
};
pub use question_type::{Difficulty, QuestionType};
