//! # 文件操作器
//!
//! 唯一修改文件系统的组件：带冲突检查的移动或复制。
//!
//! ## 规则
//! - 目标路径上已有任何条目（包括目录和悬空符号链接）时拒绝操作，不写入任何内容
//! - 复制保留源文件，移动后源路径不再存在
//! - 底层 I/O 错误以 `TransferFailed` 返回，附带两个路径
//!
//! ## 依赖关系
//! - 被 `batch/session.rs` 调用
//! - 使用 `error.rs`

use crate::error::{RenamerError, Result};
use crate::models::TransferMode;

use log::{error, info, warn};
use std::fs;
use std::path::Path;

/// 单次传输的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferStatus {
    /// 已移动/复制
    Transferred,
    /// 目标已存在，未做任何操作
    AlreadyExists,
}

/// 检查路径上是否已有文件系统条目（不跟随符号链接）
pub fn target_occupied(target: &Path) -> bool {
    fs::symlink_metadata(target).is_ok()
}

/// 移动或复制单个文件
pub fn transfer(source: &Path, target: &Path, mode: TransferMode) -> Result<TransferStatus> {
    if target_occupied(target) {
        warn!("File already exists: {}", target.display());
        return Ok(TransferStatus::AlreadyExists);
    }

    info!(
        "{} {} to {}",
        mode.progressive(),
        source.display(),
        target.display()
    );

    let result = match mode {
        TransferMode::Copy => fs::copy(source, target).map(|_| ()),
        TransferMode::Move => fs::rename(source, target),
    };

    match result {
        Ok(()) => {
            info!(
                "Successfully {} {} to {}",
                mode.past_tense(),
                source.display(),
                target.display()
            );
            Ok(TransferStatus::Transferred)
        }
        Err(e) => {
            error!(
                "Failed to {} {} to {}: {}",
                mode,
                source.display(),
                target.display(),
                e
            );
            Err(RenamerError::TransferFailed {
                source_path: source.to_path_buf(),
                target_path: target.to_path_buf(),
                source: e,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_move_relocates_content() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("draft.txt");
        let target = dir.path().join("final.txt");
        fs::write(&source, "hello").unwrap();

        let status = transfer(&source, &target, TransferMode::Move).unwrap();
        assert_eq!(status, TransferStatus::Transferred);
        assert!(!source.exists());
        assert_eq!(fs::read_to_string(&target).unwrap(), "hello");
    }

    #[test]
    fn test_copy_keeps_source() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("draft.txt");
        let target = dir.path().join("copy.txt");
        fs::write(&source, "hello").unwrap();

        let status = transfer(&source, &target, TransferMode::Copy).unwrap();
        assert_eq!(status, TransferStatus::Transferred);
        assert_eq!(fs::read_to_string(&source).unwrap(), "hello");
        assert_eq!(fs::read_to_string(&target).unwrap(), "hello");
    }

    #[test]
    fn test_never_overwrites() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("a.txt");
        let target = dir.path().join("b.txt");
        fs::write(&source, "source").unwrap();
        fs::write(&target, "target").unwrap();

        for mode in [TransferMode::Move, TransferMode::Copy] {
            let status = transfer(&source, &target, mode).unwrap();
            assert_eq!(status, TransferStatus::AlreadyExists);
            assert_eq!(fs::read_to_string(&source).unwrap(), "source");
            assert_eq!(fs::read_to_string(&target).unwrap(), "target");
        }
    }

    #[test]
    fn test_existing_directory_blocks_target() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("a.txt");
        let target = dir.path().join("taken");
        fs::write(&source, "source").unwrap();
        fs::create_dir(&target).unwrap();

        let status = transfer(&source, &target, TransferMode::Move).unwrap();
        assert_eq!(status, TransferStatus::AlreadyExists);
        assert!(source.exists());
    }

    #[test]
    fn test_io_failure_reports_paths() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("vanished.txt");
        let target = dir.path().join("new.txt");

        let err = transfer(&source, &target, TransferMode::Move).unwrap_err();
        match err {
            RenamerError::TransferFailed {
                source_path,
                target_path,
                ..
            } => {
                assert_eq!(source_path, source);
                assert_eq!(target_path, target);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(!target.exists());
    }

    #[test]
    fn test_copy_failure_into_missing_directory() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("a.txt");
        fs::write(&source, "x").unwrap();
        let target = dir.path().join("missing_dir").join("a.txt");

        let result = transfer(&source, &target, TransferMode::Copy);
        assert!(matches!(result, Err(RenamerError::TransferFailed { .. })));
        assert!(source.exists());
    }
}
