//! 编排层（Orchestration Layer）
//!
//! ## 模块划分
//!
//! ### `batch_processor` - 批量任务处理器
//! - 管理应用生命周期（初始化、运行）
//! - 批量加载任务（Vec<GenerationJob>）
//! - 控制并发数量（Semaphore）
//! - 输出全局统计信息
//!
//! ### `job_processor` - 单个任务处理器
//! - 读取并合并任务的文档
//! - 调用 QuestionGenerator
//! - 写入结果文件
//!
//! ## 层次关系
//!
//! ```text
//! batch_processor (处理 Vec<GenerationJob>)
//!     ↓
//! job_processor (处理单个 GenerationJob)
//!     ↓
//! workflow::QuestionGenerator (截断 → 提示词 → 生成 → 解析 → 校验 → 重试)
//!     ↓
//! services (能力层：truncator / prompt / llm / parser / validator / writer)
//! ```

pub mod batch_processor;
pub mod job_processor;

// 重新导出主要类型
pub use batch_processor::{App, ProcessingStats};
pub use job_processor::process_job;
