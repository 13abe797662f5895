//! 提示词构建 - 业务能力层
//!
//! 纯函数：相同输入总是得到相同的提示词

use crate::models::{Difficulty, QuestionType};

/// 构建提示词所需的输入
#[derive(Debug, Clone, Copy)]
pub struct PromptInput<'a> {
    /// 已截断的文档文本
    pub text: &'a str,
    pub description: &'a str,
    pub num_questions: usize,
    pub question_type: QuestionType,
    pub difficulty: Difficulty,
}

/// 单个题型的格式模板
fn format_template(question_type: QuestionType) -> &'static str {
    match question_type {
        QuestionType::Mcq => {
            "Q1: [Question text]\n\
             A) [Option A]\n\
             B) [Option B]\n\
             C) [Option C]\n\
             D) [Option D]\n\
             Correct Answer: [Correct option letter]"
        }
        QuestionType::ShortAnswer => {
            "Q1: [Question text]\n\
             A: [Brief answer]"
        }
        QuestionType::TwoAnswerMcq => {
            "Q1: [Question text]\n\
             A) [Option A]\n\
             B) [Option B]\n\
             C) [Option C]\n\
             D) [Option D]\n\
             Correct Answer: [Two correct option letters, e.g., A, C]"
        }
        QuestionType::MultipleResponse => {
            "Q1: [Question text]\n\
             A) [Option A]\n\
             B) [Option B]\n\
             C) [Option C]\n\
             D) [Option D]\n\
             Correct Answer: [Correct option letters, e.g., A, C, D]"
        }
        QuestionType::LongAnswer => {
            "Q1: [Question text]\n\
             A: [Detailed answer or key points to be included in the answer]"
        }
        QuestionType::TrueFalse => {
            "Q1: [Question text]\n\
             A: True\n\
             or\n\
             Q1: [Question text]\n\
             A: False"
        }
    }
}

/// 全部六种题型的格式目录
///
/// 无论选择哪种题型都完整给出，保证指令前后一致
fn format_catalogue() -> String {
    QuestionType::ALL
        .iter()
        .map(|qt| format!("For {}:\n{}", qt.label(), format_template(*qt)))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// 构建题目生成提示词
///
/// # 参数
/// - `input`: 文本、描述、数量、题型、难度
///
/// # 返回
/// 返回完整的提示词字符串
pub fn build_prompt(input: &PromptInput<'_>) -> String {
    let count = input.num_questions;
    let question_type = input.question_type.label();

    format!(
        r#"Based on the following text and description, generate exactly {count} {question_type} questions.

Text: {text}

Description: {description}

Question Type: {question_type}
Difficulty: {difficulty}

Format the questions strictly as follows:

{catalogue}

Important instructions:
1. Generate exactly {count} questions.
2. Strictly follow the format provided for each question type.
3. Ensure each question is complete and properly formatted before moving to the next.
4. Include question numbers (Q1, Q2, Q3, etc.) for each question.
5. Make sure the questions are diverse and cover different aspects of the text.
6. Align the questions with the given description and difficulty level.
7. Use 'Q1:', 'Q2:', etc. for questions and 'A:' for answers consistently.
8. For 'Mix' difficulty, provide a balanced set of easy, medium, and hard questions.
9. Do not include any explanations or additional text outside the specified format.
10. For True/False questions, the answer must be exactly 'True' or 'False'.

Begin generating the questions now:"#,
        text = input.text,
        description = input.description,
        difficulty = input.difficulty.label(),
        catalogue = format_catalogue(),
    )
}
