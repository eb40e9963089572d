//! # 文件收集器
//!
//! 在根目录下查找符合扩展名筛选条件的普通文件。
//!
//! ## 功能
//! - 仅直接子文件，或递归整个子树
//! - 按扩展名（最后一个 `.` 之后的部分）或字面后缀筛选
//! - 同一目录内按文件名排序，结果顺序确定
//!
//! ## 依赖关系
//! - 被 `batch/session.rs`, `commands/list.rs`, `commands/preview.rs` 调用
//! - 使用 `walkdir` 遍历目录

use crate::error::{RenamerError, Result};
use crate::models::{CandidateFile, DiscoveryFilter};

use log::{debug, info, warn};
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// 文件收集器
pub struct FileCollector {
    /// 根目录
    root: PathBuf,
    /// 筛选条件
    filter: DiscoveryFilter,
}

impl FileCollector {
    /// 创建新的文件收集器
    pub fn new(root: impl Into<PathBuf>, filter: DiscoveryFilter) -> Self {
        Self {
            root: root.into(),
            filter,
        }
    }

    /// 收集所有匹配的文件
    ///
    /// 根目录不存在、不是目录或无法读取时返回 `DirectoryNotFound`，不返回部分结果。
    pub fn collect(&self) -> Result<Vec<CandidateFile>> {
        if !self.root.is_dir() {
            warn!("Directory not found: {}", self.root.display());
            return Err(RenamerError::DirectoryNotFound {
                path: self.root.display().to_string(),
                source: None,
            });
        }

        if self.filter.recursive {
            info!(
                "Searching for {} files recursively in {}",
                self.filter.describe_extensions(),
                self.root.display()
            );
        } else {
            info!(
                "Searching for {} files in {}",
                self.filter.describe_extensions(),
                self.root.display()
            );
        }

        let max_depth = if self.filter.recursive { usize::MAX } else { 1 };

        let walker = WalkDir::new(&self.root)
            .min_depth(1)
            .max_depth(max_depth)
            .sort_by_file_name();

        let mut candidates = Vec::new();

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    // 根目录本身读不了就是整体失败；子目录读不了只跳过该子目录
                    if e.depth() == 0 {
                        warn!("Directory not accessible: {}: {}", self.root.display(), e);
                        return Err(RenamerError::DirectoryNotFound {
                            path: self.root.display().to_string(),
                            source: Some(e),
                        });
                    }
                    warn!("Skipping unreadable entry under {}: {}", self.root.display(), e);
                    continue;
                }
            };

            if !is_regular_file(&entry) {
                continue;
            }

            let Some(name) = entry.file_name().to_str() else {
                warn!("Skipping non UTF-8 file name: {}", entry.path().display());
                continue;
            };

            if !self.filter.accepts(name) {
                debug!("Filtered out: {}", entry.path().display());
                continue;
            }

            let containing_dir = entry
                .path()
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| self.root.clone());

            info!("Found file: {}", entry.path().display());
            candidates.push(CandidateFile::new(name, containing_dir));
        }

        info!(
            "Found {} matching files in {}",
            candidates.len(),
            self.root.display()
        );
        Ok(candidates)
    }
}

/// 普通文件（指向普通文件的符号链接也算）
fn is_regular_file(entry: &DirEntry) -> bool {
    entry.file_type().is_file() || (entry.path_is_symlink() && entry.path().is_file())
}

/// 便捷函数：一次性收集
pub fn discover(root: &Path, filter: &DiscoveryFilter) -> Result<Vec<CandidateFile>> {
    FileCollector::new(root, filter.clone()).collect()
}
