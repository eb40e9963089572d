//! # 批量处理模块
//!
//! 批量重命名引擎。
//!
//! ## 功能
//! - 文件发现（扩展名筛选、可选递归）
//! - 带冲突检查的移动/复制
//! - 逐个处理、结果汇总与回调
//! - 运行报告导出
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `walkdir` 遍历目录
//! - 使用 `rename/` 计算新文件名

pub mod collector;
pub mod export;
pub mod notifier;
pub mod operator;
pub mod session;

pub use collector::{discover, FileCollector};
pub use notifier::Notifier;
pub use session::{BatchRenameSession, RenameRequest};
