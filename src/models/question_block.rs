//! 题目块数据结构
//!
//! 生命周期：每次生成尝试中临时创建，校验后即丢弃

/// 题目块之间的分隔符（一个空行）
pub const BLOCK_SEPARATOR: &str = "\n\n";

/// 原始题目块
///
/// 以 `Q<n>:` 行开头，包含直到下一个 `Q<n>:` 行之前的所有非空行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawQuestionBlock {
    pub lines: Vec<String>,
}

impl RawQuestionBlock {
    pub fn new(stem: impl Into<String>) -> Self {
        Self {
            lines: vec![stem.into()],
        }
    }

    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }
}

/// 规范化后的题目块
///
/// 题干一行；选择类题型接四个选项和一行 `Correct Answer:`，
/// 作答类题型接一行或多行 `A:` 答案
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedQuestionBlock {
    pub lines: Vec<String>,
}

impl NormalizedQuestionBlock {
    /// 按行拼接为文本
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

/// 通过校验的题目集合
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedQuestionSet {
    /// 通过校验的题目块（文本形式）
    pub questions: Vec<String>,
    /// 请求的题目数量
    pub requested: usize,
}

impl ValidatedQuestionSet {
    /// 只有数量恰好等于请求数量时才算有效
    pub fn is_valid(&self) -> bool {
        self.questions.len() == self.requested
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// 用空行拼接所有题目，末尾不带空行
    pub fn to_text(&self) -> String {
        self.questions.join(BLOCK_SEPARATOR)
    }
}

/// 用空行拼接规范化题目块
pub fn join_blocks(blocks: &[NormalizedQuestionBlock]) -> String {
    blocks
        .iter()
        .map(NormalizedQuestionBlock::text)
        .collect::<Vec<_>>()
        .join(BLOCK_SEPARATOR)
}
