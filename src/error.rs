//! # 统一错误处理模块
//!
//! 定义 renamer 的所有错误类型，使用 `thiserror` 派生。
//!
//! 单个文件的冲突或传输失败不会中止整次运行：`batch/operator.rs` 返回
//! `TransferFailed`，由 `batch/session.rs` 折叠为 `SkipReason`。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use std::path::PathBuf;
use thiserror::Error;

/// renamer 统一错误类型
#[derive(Error, Debug)]
pub enum RenamerError {
    // ─────────────────────────────────────────────────────────────
    // 运行前校验
    // ─────────────────────────────────────────────────────────────
    #[error("No directory selected")]
    NoDirectorySelected,

    /// 不存在、不是目录或无法读取
    #[error("Directory not found or not accessible: {path}")]
    DirectoryNotFound {
        path: String,
        #[source]
        source: Option<walkdir::Error>,
    },

    // ─────────────────────────────────────────────────────────────
    // 单文件传输
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to transfer {} -> {}", source_path.display(), target_path.display())]
    TransferFailed {
        source_path: PathBuf,
        target_path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ─────────────────────────────────────────────────────────────
    // 输出
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Failed to initialize activity log: {0}")]
    LoggerInit(String),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, RenamerError>;
