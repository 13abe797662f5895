//! 题目生成请求
//!
//! 封装"从哪段文本、按什么要求出题"这一信息

use std::fmt::Display;

use crate::config::{Config, DEFAULT_MAX_ATTEMPTS};
use crate::error::RequestError;
use crate::models::{Difficulty, QuestionType};
use crate::services::truncator::DEFAULT_MAX_TOKENS;

/// 生成流程参数
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorSettings {
    /// 文档文本的 token 预算
    pub max_input_tokens: usize,
    /// 最大尝试次数
    pub max_attempts: u32,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            max_input_tokens: DEFAULT_MAX_TOKENS,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl From<&Config> for GeneratorSettings {
    fn from(config: &Config) -> Self {
        Self {
            max_input_tokens: config.max_input_tokens,
            max_attempts: config.max_attempts,
        }
    }
}

/// 题目生成请求
///
/// 通过 `new` 创建时保证文本非空、题目数量至少为 1
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    text: String,
    description: String,
    num_questions: usize,
    question_type: QuestionType,
    difficulty: Difficulty,
}

impl GenerationRequest {
    /// 创建新的生成请求
    pub fn new(
        text: impl Into<String>,
        description: impl Into<String>,
        num_questions: usize,
        question_type: QuestionType,
        difficulty: Difficulty,
    ) -> Result<Self, RequestError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(RequestError::EmptyText);
        }
        if num_questions == 0 {
            return Err(RequestError::QuestionCountOutOfRange {
                requested: num_questions,
                min: 1,
                max: usize::MAX,
            });
        }

        Ok(Self {
            text,
            description: description.into(),
            num_questions,
            question_type,
            difficulty,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn num_questions(&self) -> usize {
        self.num_questions
    }

    pub fn question_type(&self) -> QuestionType {
        self.question_type
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
}

impl Display for GenerationRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[题型 {} | 数量 {} | 难度 {}]",
            self.question_type, self.num_questions, self.difficulty
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_text_is_rejected() {
        let result = GenerationRequest::new(" \n\t", "d", 1, QuestionType::Mcq, Difficulty::Easy);
        assert_eq!(result.unwrap_err(), RequestError::EmptyText);
    }

    #[test]
    fn test_zero_questions_is_rejected() {
        let result = GenerationRequest::new("text", "d", 0, QuestionType::Mcq, Difficulty::Easy);
        assert!(matches!(
            result,
            Err(RequestError::QuestionCountOutOfRange { requested: 0, .. })
        ));
    }

    #[test]
    fn test_display_for_logs() {
        let request =
            GenerationRequest::new("text", "d", 5, QuestionType::ShortAnswer, Difficulty::Mix)
                .unwrap();
        assert_eq!(request.to_string(), "[题型 Short Answer | 数量 5 | 难度 Mix]");
    }

    #[test]
    fn test_settings_from_config() {
        let config = Config {
            max_input_tokens: 100,
            max_attempts: 5,
            ..Config::default()
        };
        let settings = GeneratorSettings::from(&config);
        assert_eq!(settings.max_input_tokens, 100);
        assert_eq!(settings.max_attempts, 5);
        assert_eq!(GeneratorSettings::default().max_attempts, 3);
    }
}
