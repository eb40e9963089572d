//! # preview 子命令 CLI 定义
//!
//! 预览新文件名与冲突，不修改任何文件
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/preview.rs`

use super::selection::{RuleArgs, SelectionArgs};
use clap::Args;

/// preview 子命令参数
#[derive(Args, Debug)]
pub struct PreviewArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,

    #[command(flatten)]
    pub rule: RuleArgs,

    /// Predict the outcome of a copy run instead of a move run
    #[arg(short, long, default_value_t = false)]
    pub copy: bool,
}
