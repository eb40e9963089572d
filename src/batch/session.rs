//! # 批量重命名会话
//!
//! 编排一次完整运行：校验 → 文件发现 → 逐个变换与传输 → 汇总 → 回调。
//!
//! ## 流程
//! 1. 根目录为空时直接失败（`NoDirectorySelected`），不做任何 I/O
//! 2. 文件发现失败（`DirectoryNotFound`）原样向上传递
//! 3. 按发现顺序逐个处理，一个文件完整处理完（变换 → 传输 → 记录）再处理下一个
//! 4. 冲突、非法文件名和 I/O 失败只影响当前文件，计入跳过数并发出警告
//! 5. 汇总信息通过 `report_status` 报告，最后总是请求刷新文件列表
//!
//! ## 依赖关系
//! - 被 `commands/rename.rs` 调用
//! - 使用 `batch/collector.rs`, `batch/operator.rs`, `rename/transformer.rs`
//! - 通过 `batch/notifier.rs` 与展示层通信

use super::collector::FileCollector;
use super::notifier::Notifier;
use super::operator::{self, TransferStatus};
use crate::error::{RenamerError, Result};
use crate::models::{
    CandidateFile, DiscoveryFilter, RenameOutcome, RenameRecord, RenameRule, RunReport,
    SkipReason, TransferMode,
};
use crate::rename::{is_valid_file_name, transform};

use log::{debug, info, warn};
use std::path::PathBuf;

/// 一次运行的全部参数
#[derive(Debug, Clone)]
pub struct RenameRequest {
    pub root_dir: PathBuf,
    pub rule: RenameRule,
    pub filter: DiscoveryFilter,
    pub mode: TransferMode,
}

/// 批量重命名会话
///
/// 会话本身不保存运行之间的状态；每次 `run` 都返回新的报告。
pub struct BatchRenameSession<'a> {
    notifier: &'a mut dyn Notifier,
}

impl<'a> BatchRenameSession<'a> {
    /// 创建会话
    pub fn new(notifier: &'a mut dyn Notifier) -> Self {
        Self { notifier }
    }

    /// 执行一次批量重命名
    pub fn run(&mut self, request: &RenameRequest) -> Result<RunReport> {
        if request.root_dir.as_os_str().is_empty() {
            warn!("Run aborted: no directory selected");
            self.notifier.confirm_or_warn(
                "No directory selected",
                "Please select a directory before running the renamer",
            );
            return Err(RenamerError::NoDirectorySelected);
        }

        info!(
            "Starting batch {} in {} (extensions: {}, recursive: {})",
            request.mode,
            request.root_dir.display(),
            request.filter.describe_extensions(),
            request.filter.recursive
        );
        self.notifier.report_status(match request.mode {
            TransferMode::Move => "Renaming files",
            TransferMode::Copy => "Copying files",
        });

        let candidates =
            match FileCollector::new(&request.root_dir, request.filter.clone()).collect() {
                Ok(candidates) => candidates,
                Err(e) => {
                    warn!("Run aborted: {}", e);
                    self.notifier.confirm_or_warn("Directory not available", &e.to_string());
                    return Err(e);
                }
            };

        let total = candidates.len();
        let mut records = Vec::with_capacity(total);

        for (index, candidate) in candidates.into_iter().enumerate() {
            let record = self.process_one(candidate, &request.rule, request.mode);
            self.notifier.file_processed(index, total, &record);
            records.push(record);
        }

        let report = RunReport::from_records(request.mode, records);
        let summary = report.summary_message();
        info!(
            "{} ({} candidates, {} skipped)",
            summary,
            report.total_candidates,
            report.skipped()
        );

        if report.succeeded == 0 {
            let title = format!("No files were {}", request.mode.past_tense());
            self.notifier
                .confirm_or_warn(&title, "Please adjust the parameters and try again");
        }

        self.notifier.report_status(&summary);
        self.notifier.refresh_file_list();

        Ok(report)
    }

    /// 处理单个候选文件
    fn process_one(
        &mut self,
        candidate: CandidateFile,
        rule: &RenameRule,
        mode: TransferMode,
    ) -> RenameRecord {
        let new_name = transform(&candidate.base_name, rule);
        let source = candidate.path();
        let target = candidate.sibling(&new_name);
        debug!("{} -> {}", candidate.base_name, new_name);

        let outcome = if !is_valid_file_name(&new_name) {
            warn!(
                "Skipping {}: invalid target name '{}'",
                source.display(),
                new_name
            );
            self.warn(
                "Invalid file name",
                &format!(
                    "Skipping edit because '{}' is not a valid file name for {}",
                    new_name,
                    source.display()
                ),
            );
            RenameOutcome::Skipped(SkipReason::InvalidTargetName)
        } else {
            match operator::transfer(&source, &target, mode) {
                Ok(TransferStatus::Transferred) => RenameOutcome::Renamed,
                Ok(TransferStatus::AlreadyExists) => {
                    self.warn(
                        "File already exists",
                        &format!(
                            "Skipping edit because file already exists: {}",
                            target.display()
                        ),
                    );
                    RenameOutcome::Skipped(SkipReason::AlreadyExists)
                }
                Err(e) => {
                    let cause = std::error::Error::source(&e)
                        .map(|s| s.to_string())
                        .unwrap_or_else(|| e.to_string());
                    self.warn("Transfer failed", &format!("{}: {}", e, cause));
                    RenameOutcome::Skipped(SkipReason::TransferFailed {
                        source_path: source,
                        target_path: target,
                        cause,
                    })
                }
            }
        };

        RenameRecord {
            candidate,
            new_name,
            outcome,
        }
    }

    fn warn(&mut self, title: &str, message: &str) {
        if !self.notifier.confirm_or_warn(title, message) {
            debug!("Warning '{}' was not acknowledged", title);
        }
    }
}
