//! # Exam Craft
//!
//! 根据文档文本调用 LLM 生成考试题目，并把模型输出整理、校验成固定格式
//!
//! ## 架构设计
//!
//! 本系统采用三层架构：
//!
//! ### ① 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，每个服务只做一件事
//! - `Truncator` - 把文档文本限制在 token 预算内
//! - `build_prompt` - 构建固定模板的提示词
//! - `LlmService` - 调用生成服务（`TextGenerator` 的实现）
//! - `parse_output` / `validate_questions` - 解析并校验模型输出
//! - `OutputWriter` - 写出 .txt 结果文件
//!
//! ### ② 流程层（Workflow）
//! - `workflow/` - 定义"一次出题"的完整流程
//! - `GenerationRequest` - 请求封装（文本 + 描述 + 数量 + 题型 + 难度）
//! - `QuestionGenerator` - 流程编排与重试（截断 → 提示词 → 生成 → 解析 → 校验）
//!
//! ### ③ 编排层（Orchestration）
//! - `orchestrator/batch_processor` - 批量任务处理器，管理并发
//! - `orchestrator/job_processor` - 单个任务处理器，读取文档并写出结果
//!
//! ## 模块结构

pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::Config;
pub use error::{GenerationError, GenerationResult, LlmError, RequestError, TokenizerError};
pub use models::{Difficulty, GenerationJob, QuestionType};
pub use orchestrator::{process_job, App, ProcessingStats};
pub use services::{LlmService, TextGenerator};
pub use workflow::{GenerationRequest, GeneratorSettings, QuestionGenerator};
