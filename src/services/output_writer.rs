//! 结果写入服务 - 业务能力层
//!
//! 只负责"把生成的题目写成 .txt 文件"能力，不关心流程

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

/// 结果写入服务
pub struct OutputWriter {
    output_folder: PathBuf,
}

impl OutputWriter {
    /// 使用指定输出目录创建
    pub fn new(output_folder: impl Into<PathBuf>) -> Self {
        Self {
            output_folder: output_folder.into(),
        }
    }

    pub fn output_folder(&self) -> &Path {
        &self.output_folder
    }

    /// 计算输出文件路径，文件名中的路径分隔符等字符被替换为 `_`
    pub fn output_path(&self, name: &str) -> PathBuf {
        let file_name: String = name
            .chars()
            .map(|c| match c {
                '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
                c => c,
            })
            .collect();
        self.output_folder.join(format!("{}.txt", file_name))
    }

    /// 写入题目文本
    ///
    /// # 参数
    /// - `name`: 输出文件名（不含扩展名）
    /// - `questions`: 以空行分隔的题目文本
    ///
    /// # 返回
    /// 返回写入的文件路径
    pub async fn write(&self, name: &str, questions: &str) -> Result<PathBuf> {
        tokio::fs::create_dir_all(&self.output_folder)
            .await
            .with_context(|| format!("无法创建输出目录: {}", self.output_folder.display()))?;

        let path = self.output_path(name);
        debug!("写入题目: {} | 长度: {}", path.display(), questions.len());

        tokio::fs::write(&path, questions)
            .await
            .with_context(|| format!("无法写入文件: {}", path.display()))?;

        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_path_sanitizes_name() {
        let writer = OutputWriter::new("out");
        assert_eq!(writer.output_path("bio/ch1: cells"), PathBuf::from("out/bio_ch1_ cells.txt"));
    }

    #[tokio::test]
    async fn test_write_creates_folder() {
        let folder = std::env::temp_dir().join(format!("exam_craft_writer_{}", std::process::id()));
        let writer = OutputWriter::new(&folder);

        let path = writer.write("generated_questions", "Q1: x\nA: y").await.unwrap();

        assert_eq!(tokio::fs::read_to_string(&path).await.unwrap(), "Q1: x\nA: y");
        let _ = tokio::fs::remove_dir_all(&folder).await;
    }
}
