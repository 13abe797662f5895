//! 文本截断服务 - 业务能力层
//!
//! 只负责"把文本限制在 token 预算内"能力
//!
//! 使用固定的 `cl100k_base` BPE 词表，保证同一输入的截断结果可复现

use tiktoken_rs::CoreBPE;
use tracing::debug;

use crate::error::TokenizerError;

/// 默认 token 预算
pub const DEFAULT_MAX_TOKENS: usize = 3000;

/// 解码失败时最多回退的 token 数
///
/// 一个 UTF-8 字符最多 4 个字节，可能被拆到多个 token 中
const MAX_DECODE_BACKOFF: usize = 8;

/// 文本截断器
pub struct Truncator {
    bpe: CoreBPE,
}

impl Truncator {
    /// 加载 `cl100k_base` 词表
    ///
    /// 加载失败是致命错误，直接向上传播
    pub fn new() -> Result<Self, TokenizerError> {
        let bpe = tiktoken_rs::cl100k_base()
            .map_err(|e| TokenizerError::LoadFailed(e.to_string()))?;
        Ok(Self { bpe })
    }

    /// 截断文本，使其 token 数不超过 `max_tokens`
    ///
    /// # 参数
    /// - `text`: 原始文本
    /// - `max_tokens`: token 预算
    ///
    /// # 返回
    /// 未超出预算时原样返回；否则返回前 `max_tokens` 个 token 解码后的文本。
    /// 如果切点落在多字节字符中间，则继续向前回退整个 token 直到可以解码。
    pub fn truncate(&self, text: &str, max_tokens: usize) -> Result<String, TokenizerError> {
        let tokens = self.bpe.encode_ordinary(text);
        if tokens.len() <= max_tokens {
            return Ok(text.to_string());
        }

        debug!("文本共 {} 个 token，截断至 {}", tokens.len(), max_tokens);

        let mut last_error = String::new();
        let min_len = max_tokens.saturating_sub(MAX_DECODE_BACKOFF);
        for prefix_len in (min_len..=max_tokens).rev() {
            match self.bpe.decode(tokens[..prefix_len].to_vec()) {
                Ok(decoded) => {
                    if prefix_len < max_tokens {
                        debug!("切点位于多字节字符中间，回退到 {} 个 token", prefix_len);
                    }
                    return Ok(decoded);
                }
                Err(e) => last_error = e.to_string(),
            }
        }

        Err(TokenizerError::DecodeFailed {
            prefix_len: max_tokens,
            reason: last_error,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_text(sentences: usize) -> String {
        "The quick brown fox jumps over the lazy dog. ".repeat(sentences)
    }

    #[test]
    fn test_within_budget_is_identity() {
        let truncator = Truncator::new().unwrap();
        let text = sample_text(5);
        let budget = truncator.bpe.encode_ordinary(&text).len();

        assert_eq!(truncator.truncate(&text, budget).unwrap(), text);
        assert_eq!(truncator.truncate(&text, DEFAULT_MAX_TOKENS).unwrap(), text);
        assert_eq!(truncator.truncate("", 10).unwrap(), "");
    }

    #[test]
    fn test_over_budget_keeps_token_prefix() {
        let truncator = Truncator::new().unwrap();
        let text = sample_text(50);
        let original = truncator.bpe.encode_ordinary(&text);
        assert!(original.len() > 100);

        let truncated = truncator.truncate(&text, 100).unwrap();
        let kept = truncator.bpe.encode_ordinary(&truncated);

        assert_eq!(kept.len(), 100);
        assert_eq!(kept[..], original[..100]);
        assert!(text.starts_with(&truncated));
    }

    #[test]
    fn test_truncation_is_deterministic() {
        let truncator = Truncator::new().unwrap();
        let text = sample_text(30);
        let first = truncator.truncate(&text, 37).unwrap();
        let second = truncator.truncate(&text, 37).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_multibyte_text_stays_valid() {
        let truncator = Truncator::new().unwrap();
        let text = "光合作用是植物利用光能把二氧化碳和水转化为有机物的过程。".repeat(20);

        let truncated = truncator.truncate(&text, 15).unwrap();

        assert!(!truncated.is_empty());
        assert!(truncated.len() < text.len());
        assert!(text.starts_with(&truncated));
    }
}
