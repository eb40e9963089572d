//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `batch/`, `rename/`, `utils/`
//! - 子模块: rename, preview, list

pub mod list;
pub mod preview;
pub mod rename;

use crate::cli::selection::SelectionArgs;
use crate::cli::Commands;
use crate::error::{RenamerError, Result};

use std::path::PathBuf;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Rename(args) => rename::execute(args),
        Commands::Preview(args) => preview::execute(args),
        Commands::List(args) => list::execute(args),
    }
}

/// 取得根目录，未指定时返回 `NoDirectorySelected`
fn require_directory(selection: &SelectionArgs) -> Result<PathBuf> {
    let root = selection.root_dir();
    if root.as_os_str().is_empty() {
        return Err(RenamerError::NoDirectorySelected);
    }
    Ok(root)
}
