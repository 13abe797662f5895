//! 文档读取 - 业务能力层
//!
//! 文档解析的边界：字节 + 文件类型 → 纯文本，失败时返回空字符串。
//! PDF / Word 的解析不在本项目范围内。

use std::path::Path;
use tracing::{debug, warn};

/// 文档类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    /// 纯文本（.txt / .md）
    Text,
    /// PDF
    Pdf,
    /// Word（.doc / .docx）
    Word,
}

impl DocumentKind {
    /// 根据扩展名判断文档类型
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_lowercase();
        match extension.as_str() {
            "txt" | "md" => Some(DocumentKind::Text),
            "pdf" => Some(DocumentKind::Pdf),
            "doc" | "docx" => Some(DocumentKind::Word),
            _ => None,
        }
    }
}

/// 从字节中提取文本
///
/// 任何失败都返回空字符串，由调用方决定是否跳过该文档
pub fn extract_text(bytes: &[u8], kind: DocumentKind) -> String {
    match kind {
        DocumentKind::Text => match std::str::from_utf8(bytes) {
            Ok(text) => text.to_string(),
            Err(e) => {
                warn!("文本文件不是有效的 UTF-8: {}", e);
                String::new()
            }
        },
        DocumentKind::Pdf | DocumentKind::Word => {
            warn!("暂不支持解析 {:?} 文档", kind);
            String::new()
        }
    }
}

/// 读取并提取单个文档的文本
pub async fn read_document(path: &Path) -> String {
    let Some(kind) = DocumentKind::from_path(path) else {
        warn!("不支持的文件类型: {}", path.display());
        return String::new();
    };

    match tokio::fs::read(path).await {
        Ok(bytes) => {
            let text = extract_text(&bytes, kind);
            debug!("从 {} 提取了 {} 个字符", path.display(), text.chars().count());
            text
        }
        Err(e) => {
            warn!("无法读取文档 {}: {}", path.display(), e);
            String::new()
        }
    }
}

/// 合并多个文档的文本
///
/// 空白文档被跳过，其余文档之间以空行分隔
pub fn combine_documents<I, S>(texts: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    texts
        .into_iter()
        .filter(|text| !text.as_ref().trim().is_empty())
        .map(|text| text.as_ref().to_string())
        .collect::<Vec<_>>()
        .join("\n\n")
}
