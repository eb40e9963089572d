//! # rename 子命令 CLI 定义
//!
//! 批量重命名（移动）或复制文件
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/rename.rs`

use super::selection::{RuleArgs, SelectionArgs};
use clap::Args;
use std::path::PathBuf;

/// rename 子命令参数
#[derive(Args, Debug)]
pub struct RenameArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,

    #[command(flatten)]
    pub rule: RuleArgs,

    /// Copy files to their new names instead of moving them
    #[arg(short, long, default_value_t = false)]
    pub copy: bool,

    /// Do not wait for a key press after warnings
    #[arg(short, long, default_value_t = false)]
    pub yes: bool,

    /// Write a CSV report of every file to this path
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Do not print the refreshed file list after the run
    #[arg(long, default_value_t = false)]
    pub no_list: bool,
}
