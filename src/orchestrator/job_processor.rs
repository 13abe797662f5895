//! 单个任务处理器 - 编排层
//!
//! ## 职责
//!
//! 本模块负责处理单个生成任务，是任务级别的编排器。
//!
//! ## 核心功能
//!
//! 1. **参数检查**：描述非空、题目数量在允许范围内
//! 2. **读取文档**：逐个提取文本，空文档跳过
//! 3. **流程调度**：委托 `QuestionGenerator` 生成题目
//! 4. **结果写入**：写入 `<输出目录>/<任务名>.txt`

use crate::models::GenerationJob;
use crate::services::{combine_documents, read_document, OutputWriter, TextGenerator};
use crate::utils::logging::preview_text;
use crate::workflow::{GenerationRequest, QuestionGenerator};
use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::{info, warn};

/// 处理单个任务
///
/// # 参数
/// - `generator`: 题目生成流程
/// - `writer`: 结果写入服务
/// - `job`: 任务数据
/// - `job_index`: 任务索引（用于日志）
///
/// # 返回
/// 返回写入的结果文件路径
pub async fn process_job<G: TextGenerator>(
    generator: &QuestionGenerator<G>,
    writer: &OutputWriter,
    job: GenerationJob,
    job_index: usize,
) -> Result<PathBuf> {
    let name = job.output_name();
    log_job_start(job_index, &name, &job);

    job.validate()
        .with_context(|| format!("任务 {} 参数不合法", name))?;

    let text = collect_text(&job, job_index).await;
    if text.trim().is_empty() {
        anyhow::bail!("任务 {} 没有从文档中提取到有效文本", name);
    }
    info!(
        "[任务 {}] 📄 文本预览: {}",
        job_index,
        preview_text(text.trim(), 60)
    );

    let request = GenerationRequest::new(
        text,
        job.description.clone(),
        job.num_questions,
        job.question_type,
        job.difficulty,
    )?;

    let questions = generator
        .generate_questions(&request)
        .await
        .with_context(|| format!("任务 {} 生成题目失败", name))?;

    let path = writer.write(&name, &questions).await?;
    info!("[任务 {}] ✓ 题目已写入: {}", job_index, path.display());

    Ok(path)
}

/// 读取任务的所有文档并合并文本
async fn collect_text(job: &GenerationJob, job_index: usize) -> String {
    let mut texts = Vec::new();

    for path in job.resolved_files() {
        let text = read_document(&path).await;
        if text.trim().is_empty() {
            warn!(
                "[任务 {}] ⚠️ 未能从 {} 提取文本，跳过该文件",
                job_index,
                path.display()
            );
            continue;
        }
        texts.push(text);
    }

    combine_documents(texts)
}

fn log_job_start(job_index: usize, name: &str, job: &GenerationJob) {
    info!("\n[任务 {}] {}", job_index, "-".repeat(40));
    info!("[任务 {}] 📝 {}", job_index, name);
    info!(
        "[任务 {}] 题型: {} | 数量: {} | 难度: {} | 文档: {} 个",
        job_index,
        job.question_type,
        job.num_questions,
        job.difficulty,
        job.files.len()
    );
}
