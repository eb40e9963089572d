//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `rename`: 批量重命名/复制
//! - `preview`: 预览新文件名（不修改文件）
//! - `list`: 列出匹配的文件
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: selection, rename, preview, list

pub mod list;
pub mod preview;
pub mod rename;
pub mod selection;

use clap::{Parser, Subcommand, ValueEnum};
use simplelog::LevelFilter;
use std::path::PathBuf;

/// renamer - 批量文件重命名工具
#[derive(Parser)]
#[command(name = "renamer")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "Batch rename or copy files with find/replace, prefix and suffix rules", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Activity log file (appended to)
    #[arg(long, global = true, env = "RENAMER_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Minimum level written to the activity log
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Also print log records to the terminal
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Rename (move) or copy files to names derived from the rule
    Rename(rename::RenameArgs),

    /// Show the new names and predicted conflicts without touching any file
    Preview(preview::PreviewArgs),

    /// List the files a run would operate on
    List(list::ListArgs),
}

/// 日志级别
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}
