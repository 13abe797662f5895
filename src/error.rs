//! 错误类型定义
//!
//! - `LlmError`：生成服务调用失败，可重试
//! - `TokenizerError`：分词器加载或解码失败
//! - `RequestError`：请求参数不合法，在进入核心流程前拦截
//! - `GenerationError`：核心流程对外暴露的终止性错误

use thiserror::Error;

/// LLM 服务错误
#[derive(Debug, Error)]
pub enum LlmError {
    /// 请求构建失败
    #[error("LLM 请求构建失败 (模型: {model}): {source}")]
    RequestBuildFailed {
        model: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// API 调用失败
    #[error("LLM API调用失败 (模型: {model}): {source}")]
    ApiCallFailed {
        model: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 返回内容为空
    #[error("LLM返回内容为空 (模型: {model})")]
    EmptyContent { model: String },
}

impl LlmError {
    /// 便捷构造 API 调用失败
    pub fn api_call_failed<E>(model: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        LlmError::ApiCallFailed {
            model: model.into(),
            source: Box::new(source),
        }
    }
}

/// 分词器错误
#[derive(Debug, Error)]
pub enum TokenizerError {
    /// 词表加载失败（致命）
    #[error("分词器加载失败: {0}")]
    LoadFailed(String),
    /// 截断后的 token 前缀无法解码
    #[error("token 前缀解码失败 (前缀长度: {prefix_len}): {reason}")]
    DecodeFailed { prefix_len: usize, reason: String },
}

/// 请求参数错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    /// 文档文本为空
    #[error("文档文本为空，无法生成题目")]
    EmptyText,
    /// 题目描述为空
    #[error("题目描述不能为空")]
    EmptyDescription,
    /// 题目数量超出范围
    #[error("题目数量 {requested} 超出范围 [{min}, {max}]")]
    QuestionCountOutOfRange {
        requested: usize,
        min: usize,
        max: usize,
    },
    /// 无法识别的题型
    #[error("无法识别的题型: {0}")]
    UnknownQuestionType(String),
    /// 无法识别的难度
    #[error("无法识别的难度: {0}")]
    UnknownDifficulty(String),
}

/// 题目生成错误
#[derive(Debug, Error)]
pub enum GenerationError {
    /// 分词器不可用
    #[error(transparent)]
    Tokenizer(#[from] TokenizerError),
    /// 所有尝试均失败
    #[error("经过 {attempts} 次尝试后仍未生成符合格式的题目")]
    Exhausted { attempts: u32 },
}

pub type GenerationResult<T> = Result<T, GenerationError>;
