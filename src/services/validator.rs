//! 题目校验 - 业务能力层
//!
//! 按题型的固定结构逐块校验，不合格的题目块直接丢弃。
//! 只有合格数量恰好等于请求数量时整组才算有效，不接受部分结果。

use crate::models::{QuestionType, ValidatedQuestionSet, BLOCK_SEPARATOR};

const OPTION_LETTERS: [&str; 4] = ["A", "B", "C", "D"];

/// 选择类题型：题干 + A/B/C/D 四行 + `Correct Answer:`
fn is_valid_choice_block(lines: &[&str]) -> bool {
    lines.len() == 6
        && lines[0].starts_with('Q')
        && lines[1..5]
            .iter()
            .zip(OPTION_LETTERS)
            .all(|(line, letter)| line.starts_with(letter))
        && lines[5].starts_with("Correct Answer:")
}

fn is_valid_short_answer(lines: &[&str]) -> bool {
    lines.len() == 2 && lines[0].starts_with('Q') && lines[1].starts_with("A:")
}

fn is_valid_long_answer(lines: &[&str]) -> bool {
    lines.len() >= 2 && lines[0].starts_with('Q') && lines[1].starts_with("A:")
}

/// 判断题答案行必须是 `A: True` / `A: False`（忽略大小写，冒号后恰好一个空格）
fn is_valid_true_false(lines: &[&str]) -> bool {
    is_valid_short_answer(lines)
        && matches!(lines[1].to_ascii_lowercase().as_str(), "a: true" | "a: false")
}

/// 校验单个题目块
pub fn is_valid_block(block: &str, question_type: QuestionType) -> bool {
    let lines: Vec<&str> = block.split('\n').collect();
    match question_type {
        QuestionType::Mcq | QuestionType::TwoAnswerMcq | QuestionType::MultipleResponse => {
            is_valid_choice_block(&lines)
        }
        QuestionType::ShortAnswer => is_valid_short_answer(&lines),
        QuestionType::LongAnswer => is_valid_long_answer(&lines),
        QuestionType::TrueFalse => is_valid_true_false(&lines),
    }
}

/// 校验规范化后的题目文本
///
/// # 参数
/// - `questions`: 以空行分隔的规范化题目文本
/// - `question_type`: 题型
/// - `num_questions`: 请求的题目数量
///
/// # 返回
/// 返回合格题目集合，`is_valid()` 表示数量是否恰好匹配
pub fn validate_questions(
    questions: &str,
    question_type: QuestionType,
    num_questions: usize,
) -> ValidatedQuestionSet {
    let valid = questions
        .split(BLOCK_SEPARATOR)
        .filter(|block| is_valid_block(block, question_type))
        .map(str::to_string)
        .collect();

    ValidatedQuestionSet {
        questions: valid,
        requested: num_questions,
    }
}
