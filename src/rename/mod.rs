//! # 重命名模块
//!
//! 文件名变换与预览（不修改文件系统）。
//!
//! ## 依赖关系
//! - 被 `batch/session.rs` 和 `commands/` 使用
//! - 使用 `models/`
//! - 子模块: transformer, planner

pub mod planner;
pub mod transformer;

pub use planner::{plan_renames, PlannedRename};
pub use transformer::{is_valid_file_name, transform};
