//! 题目生成流程 - 流程层
//!
//! 核心职责：定义"一次出题"的完整流程，并在格式不合格时重试
//!
//! 单次尝试的顺序：
//! 1. 截断文档文本
//! 2. 构建提示词
//! 3. 调用生成服务
//! 4. 解析输出
//! 5. 校验数量和格式
//!
//! 任何一步出错都只算这一次尝试失败；全部尝试用完后返回终止性错误，
//! 不返回部分结果。

use thiserror::Error;
use tracing::{error, info, warn};

use crate::error::{GenerationError, GenerationResult, LlmError, TokenizerError};
use crate::models::join_blocks;
use crate::services::{
    build_prompt, parse_output, validate_questions, PromptInput, TextGenerator, Truncator,
};
use crate::workflow::generation_request::{GenerationRequest, GeneratorSettings};

/// 单次尝试失败的原因
#[derive(Debug, Error)]
pub enum AttemptError {
    #[error(transparent)]
    Tokenizer(#[from] TokenizerError),
    #[error(transparent)]
    Llm(#[from] LlmError),
    /// 合格题目数量与请求数量不符
    #[error("生成的题目不符合格式要求: 合格 {valid} 道，需要 {requested} 道")]
    SchemaMismatch { valid: usize, requested: usize },
}

/// 题目生成流程
///
/// - 持有生成服务和分词器
/// - 不保存任何跨请求的状态，可以在多个任务间共享
pub struct QuestionGenerator<G> {
    generator: G,
    truncator: Truncator,
    settings: GeneratorSettings,
}

impl<G: TextGenerator> QuestionGenerator<G> {
    /// 创建新的题目生成流程
    ///
    /// 分词器加载失败时直接返回错误
    pub fn new(generator: G, settings: GeneratorSettings) -> GenerationResult<Self> {
        Ok(Self {
            generator,
            truncator: Truncator::new()?,
            settings,
        })
    }

    /// 生成题目
    ///
    /// # 参数
    /// - `request`: 生成请求
    ///
    /// # 返回
    /// 返回以空行分隔的合格题目文本；所有尝试失败后返回 `GenerationError::Exhausted`
    pub async fn generate_questions(&self, request: &GenerationRequest) -> GenerationResult<String> {
        let max_attempts = self.settings.max_attempts;

        for attempt in 1..=max_attempts {
            info!("🤖 {} 第 {}/{} 次尝试生成题目", request, attempt, max_attempts);

            match self.run_attempt(request).await {
                Ok(questions) => {
                    info!("✓ {} 第 {} 次尝试成功", request, attempt);
                    return Ok(questions);
                }
                Err(AttemptError::SchemaMismatch { valid, requested }) => {
                    warn!(
                        "⚠️ 第 {} 次尝试: 生成的题目不符合格式要求 (合格 {}/{})，重试中...",
                        attempt, valid, requested
                    );
                }
                Err(e) => {
                    warn!("❌ 第 {} 次尝试失败: {}", attempt, e);
                }
            }
        }

        error!("{} 经过 {} 次尝试仍未生成合格题目", request, max_attempts);
        Err(GenerationError::Exhausted {
            attempts: max_attempts,
        })
    }

    /// 执行单次尝试：截断 → 提示词 → 生成 → 解析 → 校验
    async fn run_attempt(&self, request: &GenerationRequest) -> Result<String, AttemptError> {
        let truncated = self
            .truncator
            .truncate(request.text(), self.settings.max_input_tokens)?;

        let prompt = build_prompt(&PromptInput {
            text: &truncated,
            description: request.description(),
            num_questions: request.num_questions(),
            question_type: request.question_type(),
            difficulty: request.difficulty(),
        });

        let output = self.generator.generate(&prompt).await?;

        let parsed = parse_output(&output, request.question_type());
        let formatted = join_blocks(&parsed);

        let validated =
            validate_questions(&formatted, request.question_type(), request.num_questions());
        if !validated.is_valid() {
            return Err(AttemptError::SchemaMismatch {
                valid: validated.len(),
                requested: validated.requested,
            });
        }

        Ok(validated.to_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Difficulty, QuestionType};
    use crate::services::llm_service::MockTextGenerator;
    use mockall::Sequence;

    const MCQ: &str = "Q1: What is 2+2?\nA) 3\nB) 4\nC) 5\nD) 6\nCorrect Answer: B";

    fn request(question_type: QuestionType, num_questions: usize) -> GenerationRequest {
        GenerationRequest::new(
            "Arithmetic is the study of numbers.",
            "Basic maths quiz",
            num_questions,
            question_type,
            Difficulty::Easy,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_exhausts_after_exactly_max_attempts() {
        let mut mock = MockTextGenerator::new();
        mock.expect_generate()
            .times(3)
            .returning(|_| Ok("This is not a question at all.".to_string()));

        let generator = QuestionGenerator::new(mock, GeneratorSettings::default()).unwrap();
        let result = generator
            .generate_questions(&request(QuestionType::Mcq, 1))
            .await;

        assert!(matches!(result, Err(GenerationError::Exhausted { attempts: 3 })));
    }

    #[tokio::test]
    async fn test_respects_custom_attempt_limit() {
        let mut mock = MockTextGenerator::new();
        mock.expect_generate()
            .times(5)
            .returning(|_| Err(LlmError::EmptyContent { model: "mock".to_string() }));

        let settings = GeneratorSettings {
            max_attempts: 5,
            ..GeneratorSettings::default()
        };
        let generator = QuestionGenerator::new(mock, settings).unwrap();
        let result = generator
            .generate_questions(&request(QuestionType::ShortAnswer, 1))
            .await;

        assert!(matches!(result, Err(GenerationError::Exhausted { attempts: 5 })));
    }

    #[tokio::test]
    async fn test_recovers_after_transport_error_and_bad_output() {
        let mut seq = Sequence::new();
        let mut mock = MockTextGenerator::new();
        mock.expect_generate()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| {
                Err(LlmError::api_call_failed(
                    "mock",
                    std::io::Error::new(std::io::ErrorKind::TimedOut, "timeout"),
                ))
            });
        mock.expect_generate()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok("Q1: Incomplete?\nA) 3".to_string()));
        mock.expect_generate()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(format!("Sure! Here you go:\n\n{MCQ}\n")));

        let generator = QuestionGenerator::new(mock, GeneratorSettings::default()).unwrap();
        let questions = generator
            .generate_questions(&request(QuestionType::Mcq, 1))
            .await
            .unwrap();

        assert_eq!(questions, MCQ);
    }

    #[tokio::test]
    async fn test_prompt_carries_request() {
        let mut mock = MockTextGenerator::new();
        mock.expect_generate()
            .withf(|prompt| {
                prompt.contains("generate exactly 1 True/False questions")
                    && prompt.contains("Text: Arithmetic is the study of numbers.")
                    && prompt.contains("Description: Basic maths quiz")
            })
            .times(1)
            .returning(|_| Ok("Q1: The sky is blue.\nA: true".to_string()));

        let generator = QuestionGenerator::new(mock, GeneratorSettings::default()).unwrap();
        let questions = generator
            .generate_questions(&request(QuestionType::TrueFalse, 1))
            .await
            .unwrap();

        assert_eq!(questions, "Q1: The sky is blue.\nA: true");
    }

    #[tokio::test]
    async fn test_prompt_text_is_truncated() {
        let mut mock = MockTextGenerator::new();
        mock.expect_generate()
            .withf(|prompt| !prompt.contains("tail-marker"))
            .times(1)
            .returning(|_| Ok("Q1: Capital of France?\nA: Paris".to_string()));

        let settings = GeneratorSettings {
            max_input_tokens: 20,
            ..GeneratorSettings::default()
        };
        let generator = QuestionGenerator::new(mock, settings).unwrap();
        let text = format!("{} tail-marker", "word ".repeat(200));
        let request =
            GenerationRequest::new(text, "geo", 1, QuestionType::ShortAnswer, Difficulty::Mix)
                .unwrap();

        assert!(generator.generate_questions(&request).await.is_ok());
    }
}
