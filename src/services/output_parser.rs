//! 输出解析 - 业务能力层
//!
//! 把模型返回的自由文本切分成题目块，并按题型整理成规范结构
//!
//! 解析是有损的：无法归类的行直接丢弃，是否合格由校验器决定

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::{NormalizedQuestionBlock, QuestionType, RawQuestionBlock};

/// 题干标记 `Q<n>:`
static QUESTION_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^Q\d+:").unwrap());

/// 选项行 `A)` ... `D)` 或 `A.` ... `D.`
static OPTION_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-D][).]").unwrap());

const ANSWER_PREFIX: &str = "A:";
const ANSWER_KEY_PREFIX: &str = "correct answer:";

/// 题目块内单行的类别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineKind {
    Stem,
    AnswerStart,
    AnswerContinuation,
    Option,
    AnswerKey,
    Unrecognized,
}

/// 是否为题干行
pub fn is_question_marker(line: &str) -> bool {
    QUESTION_MARKER.is_match(line)
}

fn is_answer_key(line: &str) -> bool {
    line.get(..ANSWER_KEY_PREFIX.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(ANSWER_KEY_PREFIX))
}

fn classify(line: &str, in_answer: bool, question_type: QuestionType) -> LineKind {
    if is_question_marker(line) {
        LineKind::Stem
    } else if line.starts_with(ANSWER_PREFIX) {
        LineKind::AnswerStart
    } else if in_answer && question_type.allows_multiline_answer() {
        LineKind::AnswerContinuation
    } else if OPTION_LINE.is_match(line) {
        LineKind::Option
    } else if is_answer_key(line) {
        LineKind::AnswerKey
    } else {
        LineKind::Unrecognized
    }
}

/// 把模型输出切分为原始题目块
///
/// 每行去除首尾空白，空行跳过；第一个 `Q<n>:` 之前的内容不属于任何题目块
pub fn segment(output: &str) -> Vec<RawQuestionBlock> {
    let mut blocks = Vec::new();
    let mut current: Option<RawQuestionBlock> = None;

    for line in output.split('\n').map(str::trim) {
        if is_question_marker(line) {
            if let Some(block) = current.take() {
                blocks.push(block);
            }
            current = Some(RawQuestionBlock::new(line));
        } else if !line.is_empty() {
            if let Some(block) = current.as_mut() {
                block.push(line);
            }
        }
    }

    blocks.extend(current);
    blocks
}

/// 按题型整理单个题目块
pub fn normalize(block: &RawQuestionBlock, question_type: QuestionType) -> NormalizedQuestionBlock {
    let mut stem = Vec::new();
    let mut options = Vec::new();
    let mut answers = Vec::new();
    let mut answer_keys = Vec::new();
    let mut in_answer = false;

    for line in &block.lines {
        match classify(line, in_answer, question_type) {
            LineKind::Stem => stem.push(line.clone()),
            LineKind::AnswerStart => {
                in_answer = true;
                answers.push(line.clone());
            }
            LineKind::AnswerContinuation => answers.push(line.clone()),
            LineKind::Option => options.push(line.clone()),
            LineKind::AnswerKey => answer_keys.push(line.clone()),
            LineKind::Unrecognized => {}
        }
    }

    let mut lines = stem;
    match question_type {
        QuestionType::Mcq | QuestionType::TwoAnswerMcq | QuestionType::MultipleResponse => {
            lines.extend(options);
            lines.extend(answer_keys.into_iter().take(1));
        }
        QuestionType::LongAnswer => lines.extend(answers),
        QuestionType::ShortAnswer | QuestionType::TrueFalse => {
            lines.extend(answers.into_iter().take(1));
        }
    }

    NormalizedQuestionBlock { lines }
}

/// 解析模型输出：切分后逐块整理
pub fn parse_output(output: &str, question_type: QuestionType) -> Vec<NormalizedQuestionBlock> {
    segment(output)
        .iter()
        .map(|block| normalize(block, question_type))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::join_blocks;

    const MCQ: &str = "Q1: What is 2+2?\nA) 3\nB) 4\nC) 5\nD) 6\nCorrect Answer: B";

    #[test]
    fn test_segment_splits_on_markers() {
        let output = "Here are your questions:\n\nQ1: First?\nA: one\n\n  Q2: Second?  \n\nA: two\n";
        let blocks = segment(output);

        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].lines, vec!["Q1: First?", "A: one"]);
        assert_eq!(blocks[1].lines, vec!["Q2: Second?", "A: two"]);
    }

    #[test]
    fn test_segment_without_markers_is_empty() {
        assert!(segment("no questions here\nat all").is_empty());
        assert!(segment("").is_empty());
    }

    #[test]
    fn test_mcq_keeps_first_answer_key_and_drops_commentary() {
        let output = "Q1: Pick one\nA) x\nSome commentary\nB) y\nC. z\nD) w\ncorrect answer: A\nCorrect Answer: B";
        let blocks = parse_output(output, QuestionType::Mcq);

        assert_eq!(
            blocks[0].lines,
            vec!["Q1: Pick one", "A) x", "B) y", "C. z", "D) w", "correct answer: A"]
        );
    }

    #[test]
    fn test_two_answer_mcq_uses_option_shape() {
        let output = "Q1: Pick two\nA) x\nB) y\nC) z\nD) w\nCorrect Answer: A, C";
        let blocks = parse_output(output, QuestionType::TwoAnswerMcq);
        assert_eq!(blocks[0].lines.len(), 6);
        assert_eq!(blocks[0].lines[5], "Correct Answer: A, C");
    }

    #[test]
    fn test_short_answer_keeps_first_answer_only() {
        let output = "Q1: Capital of France?\nA: Paris\nA: Lyon\nExtra words";
        let blocks = parse_output(output, QuestionType::ShortAnswer);
        assert_eq!(blocks[0].lines, vec!["Q1: Capital of France?", "A: Paris"]);
    }

    #[test]
    fn test_long_answer_collects_continuation_lines() {
        let output = "Q1: Explain photosynthesis.\nA: Plants convert light.\nMore detail here.";
        let blocks = parse_output(output, QuestionType::LongAnswer);
        assert_eq!(
            blocks[0].lines,
            vec![
                "Q1: Explain photosynthesis.",
                "A: Plants convert light.",
                "More detail here."
            ]
        );
    }

    #[test]
    fn test_long_answer_drops_lines_before_answer() {
        let output = "Q1: Explain.\nstray note\nA: Because.\nA) still part of the answer";
        let blocks = parse_output(output, QuestionType::LongAnswer);
        assert_eq!(
            blocks[0].lines,
            vec!["Q1: Explain.", "A: Because.", "A) still part of the answer"]
        );
    }

    #[test]
    fn test_multiline_answer_only_for_long_answer() {
        let output = "Q1: Is water wet?\nA: True\nbecause it is";
        let blocks = parse_output(output, QuestionType::TrueFalse);
        assert_eq!(blocks[0].lines, vec!["Q1: Is water wet?", "A: True"]);
    }

    #[test]
    fn test_parser_is_idempotent_on_normalized_output() {
        let output = format!("{MCQ}\n\nQ2: Pick\nA) a\nB) b\nC) c\nD) d\nCorrect Answer: D");
        let first = join_blocks(&parse_output(&output, QuestionType::Mcq));
        let second = join_blocks(&parse_output(&first, QuestionType::Mcq));

        assert_eq!(first, output);
        assert_eq!(second, first);
    }
}
