use crate::error::RequestError;
use crate::models::question_type::{Difficulty, QuestionType};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 单次生成最少题目数量
pub const MIN_QUESTIONS: usize = 1;
/// 单次生成最多题目数量
pub const MAX_QUESTIONS: usize = 25;

/// 未命名任务的输出文件名
pub const DEFAULT_OUTPUT_NAME: &str = "generated_questions";

fn default_num_questions() -> usize {
    5
}

/// 生成任务（对应一个 TOML 文件）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationJob {
    /// 任务名称，同时用作输出文件名
    #[serde(default)]
    pub name: Option<String>,
    /// 文档路径列表，相对路径以任务文件所在目录为基准
    pub files: Vec<String>,
    /// 题目描述
    pub description: String,
    #[serde(default = "default_num_questions")]
    pub num_questions: usize,
    pub question_type: QuestionType,
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(skip_serializing, skip_deserializing)]
    pub file_path: Option<String>,
}

impl GenerationJob {
    /// 检查任务参数
    pub fn validate(&self) -> Result<(), RequestError> {
        if self.description.trim().is_empty() {
            return Err(RequestError::EmptyDescription);
        }
        if !(MIN_QUESTIONS..=MAX_QUESTIONS).contains(&self.num_questions) {
            return Err(RequestError::QuestionCountOutOfRange {
                requested: self.num_questions,
                min: MIN_QUESTIONS,
                max: MAX_QUESTIONS,
            });
        }
        Ok(())
    }

    /// 获取输出文件名（不含扩展名），如果未命名则使用默认名称
    pub fn output_name(&self) -> String {
        self.name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(DEFAULT_OUTPUT_NAME)
            .to_string()
    }

    /// 解析文档的实际路径
    pub fn resolved_files(&self) -> Vec<PathBuf> {
        let base = self
            .file_path
            .as_deref()
            .and_then(|p| Path::new(p).parent())
            .map(Path::to_path_buf);

        self.files
            .iter()
            .map(|file| {
                let path = PathBuf::from(file);
                match &base {
                    Some(dir) if path.is_relative() => dir.join(path),
                    _ => path,
                }
            })
            .collect()
    }
}
