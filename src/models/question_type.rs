use crate::error::RequestError;
use phf::phf_map;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// 题型枚举
///
/// 题型决定题目块的结构：选择类题型需要四个选项和一行答案，
/// 作答类题型需要 `A:` 开头的答案行。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum QuestionType {
    /// 单选题
    Mcq,
    /// 简答题
    ShortAnswer,
    /// 双选题
    TwoAnswerMcq,
    /// 多选题
    MultipleResponse,
    /// 论述题
    LongAnswer,
    /// 判断题
    TrueFalse,
}

/// 题型名称 → 题型（小写键）
static QUESTION_TYPE_LABELS: phf::Map<&'static str, QuestionType> = phf_map! {
    "mcq" => QuestionType::Mcq,
    "short answer" => QuestionType::ShortAnswer,
    "short-answer" => QuestionType::ShortAnswer,
    "two answer mcq" => QuestionType::TwoAnswerMcq,
    "two-answer mcq" => QuestionType::TwoAnswerMcq,
    "multiple-response" => QuestionType::MultipleResponse,
    "multiple response" => QuestionType::MultipleResponse,
    "long answer" => QuestionType::LongAnswer,
    "long-answer" => QuestionType::LongAnswer,
    "true/false" => QuestionType::TrueFalse,
    "true-false" => QuestionType::TrueFalse,
    "true false" => QuestionType::TrueFalse,
};

impl QuestionType {
    /// 全部题型，按提示词模板中的顺序排列
    pub const ALL: [QuestionType; 6] = [
        QuestionType::Mcq,
        QuestionType::ShortAnswer,
        QuestionType::TwoAnswerMcq,
        QuestionType::MultipleResponse,
        QuestionType::LongAnswer,
        QuestionType::TrueFalse,
    ];

    /// 获取标准名称（写入提示词的名称）
    pub fn label(self) -> &'static str {
        match self {
            QuestionType::Mcq => "MCQ",
            QuestionType::ShortAnswer => "Short Answer",
            QuestionType::TwoAnswerMcq => "Two Answer MCQ",
            QuestionType::MultipleResponse => "Multiple-response",
            QuestionType::LongAnswer => "Long Answer",
            QuestionType::TrueFalse => "True/False",
        }
    }

    /// 答案是否允许跨多行
    pub fn allows_multiline_answer(self) -> bool {
        matches!(self, QuestionType::LongAnswer)
    }

    /// 按名称查找题型（忽略大小写和首尾空白）
    pub fn find(s: &str) -> Option<Self> {
        QUESTION_TYPE_LABELS
            .get(s.trim().to_lowercase().as_str())
            .copied()
    }
}

impl FromStr for QuestionType {
    type Err = RequestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::find(s).ok_or_else(|| RequestError::UnknownQuestionType(s.to_string()))
    }
}

impl TryFrom<String> for QuestionType {
    type Error = RequestError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<QuestionType> for String {
    fn from(value: QuestionType) -> Self {
        value.label().to_string()
    }
}

impl std::fmt::Display for QuestionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// 难度枚举，只写入提示词，不参与校验
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    #[default]
    Mix,
}

impl Difficulty {
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::Mix => "Mix",
        }
    }
}

impl FromStr for Difficulty {
    type Err = RequestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            "mix" | "mixed" => Ok(Difficulty::Mix),
            _ => Err(RequestError::UnknownDifficulty(s.to_string())),
        }
    }
}

impl TryFrom<String> for Difficulty {
    type Error = RequestError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Difficulty> for String {
    fn from(value: Difficulty) -> Self {
        value.label().to_string()
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
