//! 批量任务处理器 - 编排层
//!
//! ## 职责
//!
//! 本模块是整个应用的入口，负责批量任务的处理和资源管理。
//!
//! ## 核心功能
//!
//! 1. **应用初始化**：创建日志文件、加载分词器、创建 LLM 服务
//! 2. **批量加载**：扫描并加载所有待处理的任务（`Vec<GenerationJob>`）
//! 3. **并发控制**：所有任务一次性派发，由 Semaphore 限制同时运行的数量
//! 4. **全局统计**：汇总所有任务的处理结果
//!
//! 每个任务都是独立的一次生成调用，任务之间不共享可变状态。

use crate::config::Config;
use crate::models::GenerationJob;
use crate::orchestrator::job_processor;
use crate::services::{LlmService, OutputWriter, TextGenerator};
use crate::utils::logging::{append_log_line, init_log_file, log_jobs_loaded, log_startup};
use crate::workflow::{GeneratorSettings, QuestionGenerator};
use anyhow::Result;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tracing::{error, info, warn};

/// 应用主结构
pub struct App<G = LlmService> {
    config: Config,
    generator: Arc<QuestionGenerator<G>>,
    writer: Arc<OutputWriter>,
}

impl App<LlmService> {
    /// 初始化应用
    pub async fn initialize(config: Config) -> Result<Self> {
        let llm_service = LlmService::new(&config);
        Self::with_generator(config, llm_service)
    }
}

impl<G: TextGenerator + 'static> App<G> {
    /// 使用自定义生成服务初始化应用
    pub fn with_generator(config: Config, text_generator: G) -> Result<Self> {
        // 初始化日志文件
        init_log_file(&config.output_log_file)?;

        log_startup(config.max_concurrent_jobs, &config.llm_model_name);

        let generator = QuestionGenerator::new(text_generator, GeneratorSettings::from(&config))?;
        let writer = OutputWriter::new(&config.output_folder);

        Ok(Self {
            config,
            generator: Arc::new(generator),
            writer: Arc::new(writer),
        })
    }

    /// 运行应用主逻辑
    pub async fn run(&self) -> Result<ProcessingStats> {
        let all_jobs = self.load_jobs().await?;

        if all_jobs.is_empty() {
            warn!("⚠️ 没有找到待处理的TOML文件，程序结束");
            return Ok(ProcessingStats::default());
        }

        log_jobs_loaded(all_jobs.len(), self.max_concurrent());

        let stats = self.process_all_jobs(all_jobs).await;
        stats.log(&self.config.output_log_file);
        self.record(&stats.summary());

        Ok(stats)
    }

    async fn load_jobs(&self) -> Result<Vec<GenerationJob>> {
        info!("\n📁 正在扫描待处理的任务...");
        crate::models::load_all_jobs(&self.config.jobs_folder).await
    }

    fn max_concurrent(&self) -> usize {
        self.config.max_concurrent_jobs.max(1)
    }

    /// 处理所有任务
    ///
    /// 所有任务一次性派发，同时运行的数量由 Semaphore 限制；
    /// 结果按任务编号顺序收集
    async fn process_all_jobs(&self, all_jobs: Vec<GenerationJob>) -> ProcessingStats {
        let semaphore = Arc::new(Semaphore::new(self.max_concurrent()));
        let mut stats = ProcessingStats {
            total: all_jobs.len(),
            ..Default::default()
        };

        let handles: Vec<_> = all_jobs
            .into_iter()
            .enumerate()
            .map(|(idx, job)| {
                let job_index = idx + 1;
                let semaphore = semaphore.clone();
                let generator = self.generator.clone();
                let writer = self.writer.clone();

                let handle = tokio::spawn(async move {
                    let _permit = semaphore.acquire_owned().await?;
                    job_processor::process_job(&generator, &writer, job, job_index).await
                });
                (job_index, handle)
            })
            .collect();

        for (job_index, handle) in handles {
            match handle.await {
                Ok(Ok(path)) => {
                    stats.success += 1;
                    self.record(&format!("任务 {} | 成功 | {}", job_index, path.display()));
                }
                Ok(Err(e)) => {
                    error!("[任务 {}] ❌ 处理过程中发生错误: {:#}", job_index, e);
                    stats.failed += 1;
                    self.record(&format!("任务 {} | 失败 | {:#}", job_index, e));
                }
                Err(e) => {
                    error!("[任务 {}] 任务执行失败: {}", job_index, e);
                    stats.failed += 1;
                    self.record(&format!("任务 {} | 执行失败 | {}", job_index, e));
                }
            }
        }

        stats
    }

    fn record(&self, line: &str) {
        if let Err(e) = append_log_line(&self.config.output_log_file, line) {
            warn!("写入日志文件失败: {}", e);
        }
    }
}

/// 处理统计
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ProcessingStats {
    pub success: usize,
    pub failed: usize,
    pub total: usize,
}

impl ProcessingStats {
    /// 写入日志文件的一行汇总
    pub fn summary(&self) -> String {
        format!(
            "汇总 | 成功 {}/{} | 失败 {}",
            self.success, self.total, self.failed
        )
    }

    /// 输出最终统计
    pub fn log(&self, log_file_path: &str) {
        info!("\n{}", "=".repeat(60));
        info!(
            "📊 出题完成 ({})",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
        );
        info!("✅ 成功 {} 个任务，❌ 失败 {} 个任务", self.success, self.failed);
        info!("📝 结果日志: {}", log_file_path);
        info!("{}", "=".repeat(60));
    }
}
