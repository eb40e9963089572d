//! # list 子命令 CLI 定义
//!
//! 列出将被处理的文件
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/list.rs`

use super::selection::SelectionArgs;
use clap::Args;

/// list 子命令参数
#[derive(Args, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,
}
