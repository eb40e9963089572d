//! # 数据模型模块
//!
//! 定义批量重命名的规则、筛选条件与运行结果数据模型。
//!
//! ## 依赖关系
//! - 被 `rename/`, `batch/` 和 `commands/` 使用
//! - 子模块: rule, report

pub mod report;
pub mod rule;

pub use report::{CandidateFile, RenameOutcome, RenameRecord, RunReport, SkipReason};
pub use rule::{DiscoveryFilter, ExtensionMatch, RenameRule, TransferMode};
