//! # 运行结果数据模型
//!
//! 候选文件、单文件结果和整次运行的汇总报告。
//!
//! ## 依赖关系
//! - 被 `batch/session.rs` 构造
//! - 被 `batch/export.rs` 和 `commands/rename.rs` 读取

use super::rule::TransferMode;

use std::path::{Path, PathBuf};

/// 候选文件（由文件发现产生，仅在一次运行内存在）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFile {
    /// 文件名
    pub base_name: String,
    /// 所在目录
    pub containing_dir: PathBuf,
}

impl CandidateFile {
    pub fn new(base_name: impl Into<String>, containing_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_name: base_name.into(),
            containing_dir: containing_dir.into(),
        }
    }

    /// 完整源路径
    pub fn path(&self) -> PathBuf {
        self.containing_dir.join(&self.base_name)
    }

    /// 同目录下的目标路径
    pub fn sibling(&self, new_name: &str) -> PathBuf {
        self.containing_dir.join(new_name)
    }

    /// 相对于根目录的显示路径
    pub fn display_relative(&self, root: &Path) -> String {
        let path = self.path();
        path.strip_prefix(root)
            .unwrap_or(&path)
            .display()
            .to_string()
    }
}

/// 跳过原因
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// 目标路径已存在
    AlreadyExists,
    /// 变换后的文件名不能作为同目录下的文件名
    InvalidTargetName,
    /// 底层 I/O 失败
    TransferFailed {
        source_path: PathBuf,
        target_path: PathBuf,
        cause: String,
    },
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::AlreadyExists => write!(f, "target already exists"),
            SkipReason::InvalidTargetName => write!(f, "invalid target name"),
            SkipReason::TransferFailed {
                source_path,
                target_path,
                cause,
            } => write!(
                f,
                "transfer failed: {} -> {}: {}",
                source_path.display(),
                target_path.display(),
                cause
            ),
        }
    }
}

/// 单个候选文件的处理结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameOutcome {
    Renamed,
    Skipped(SkipReason),
}

impl RenameOutcome {
    pub fn is_renamed(&self) -> bool {
        matches!(self, RenameOutcome::Renamed)
    }

    /// 简短标签（用于表格和 CSV）
    pub fn label(&self) -> &'static str {
        match self {
            RenameOutcome::Renamed => "done",
            RenameOutcome::Skipped(SkipReason::AlreadyExists) => "exists",
            RenameOutcome::Skipped(SkipReason::InvalidTargetName) => "invalid",
            RenameOutcome::Skipped(SkipReason::TransferFailed { .. }) => "failed",
        }
    }
}

/// 候选文件、目标文件名与结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameRecord {
    pub candidate: CandidateFile,
    pub new_name: String,
    pub outcome: RenameOutcome,
}

impl RenameRecord {
    pub fn target_path(&self) -> PathBuf {
        self.candidate.sibling(&self.new_name)
    }
}

/// 一次运行的汇总报告
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// 传输模式
    pub mode: TransferMode,
    /// 候选文件数
    pub total_candidates: usize,
    /// 成功数
    pub succeeded: usize,
    /// 按处理顺序排列的单文件结果
    pub outcomes: Vec<RenameRecord>,
}

impl RunReport {
    /// 由单文件结果构建报告，计数始终与结果一致
    pub fn from_records(mode: TransferMode, outcomes: Vec<RenameRecord>) -> Self {
        let succeeded = outcomes.iter().filter(|r| r.outcome.is_renamed()).count();
        Self {
            mode,
            total_candidates: outcomes.len(),
            succeeded,
            outcomes,
        }
    }

    /// 跳过数（含失败）
    pub fn skipped(&self) -> usize {
        self.total_candidates - self.succeeded
    }

    /// 因目标已存在而跳过的数量
    pub fn conflicts(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|r| r.outcome == RenameOutcome::Skipped(SkipReason::AlreadyExists))
            .count()
    }

    /// I/O 失败的记录
    pub fn failures(&self) -> impl Iterator<Item = &RenameRecord> {
        self.outcomes.iter().filter(|r| {
            matches!(
                r.outcome,
                RenameOutcome::Skipped(SkipReason::TransferFailed { .. })
            )
        })
    }

    /// 人类可读的汇总信息
    pub fn summary_message(&self) -> String {
        if self.succeeded == 0 {
            format!("No files {}", self.mode.past_tense())
        } else {
            format!("{} files {}", self.succeeded, self.mode.past_tense())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, outcome: RenameOutcome) -> RenameRecord {
        RenameRecord {
            candidate: CandidateFile::new(name, "/data"),
            new_name: format!("new_{}", name),
            outcome,
        }
    }

    #[test]
    fn test_report_counts_are_consistent() {
        let report = RunReport::from_records(
            TransferMode::Move,
            vec![
                record("a.txt", RenameOutcome::Renamed),
                record("b.txt", RenameOutcome::Skipped(SkipReason::AlreadyExists)),
                record(
                    "c.txt",
                    RenameOutcome::Skipped(SkipReason::TransferFailed {
                        source_path: PathBuf::from("/data/c.txt"),
                        target_path: PathBuf::from("/data/new_c.txt"),
                        cause: "permission denied".to_string(),
                    }),
                ),
            ],
        );

        assert_eq!(report.total_candidates, 3);
        assert_eq!(report.succeeded, 1);
        assert_eq!(report.skipped(), 2);
        assert_eq!(report.conflicts(), 1);
        assert_eq!(report.failures().count(), 1);
        assert_eq!(report.summary_message(), "1 files renamed");
    }

    #[test]
    fn test_summary_wording() {
        let empty_move = RunReport::from_records(TransferMode::Move, vec![]);
        assert_eq!(empty_move.summary_message(), "No files renamed");

        let empty_copy = RunReport::from_records(TransferMode::Copy, vec![]);
        assert_eq!(empty_copy.summary_message(), "No files copied");

        let two = RunReport::from_records(
            TransferMode::Copy,
            vec![
                record("a.txt", RenameOutcome::Renamed),
                record("b.txt", RenameOutcome::Renamed),
            ],
        );
        assert_eq!(two.summary_message(), "2 files copied");
    }

    #[test]
    fn test_candidate_paths() {
        let candidate = CandidateFile::new("draft.txt", "/root/sub");
        assert_eq!(candidate.path(), PathBuf::from("/root/sub/draft.txt"));
        assert_eq!(
            candidate.sibling("final.txt"),
            PathBuf::from("/root/sub/final.txt")
        );
        assert_eq!(
            candidate.display_relative(Path::new("/root")),
            Path::new("sub").join("draft.txt").display().to_string()
        );
    }

    #[test]
    fn test_failure_reason_mentions_paths() {
        let reason = SkipReason::TransferFailed {
            source_path: PathBuf::from("/a/x.txt"),
            target_path: PathBuf::from("/a/y.txt"),
            cause: "disk full".to_string(),
        };
        let text = reason.to_string();
        assert!(text.contains("/a/x.txt"));
        assert!(text.contains("/a/y.txt"));
        assert!(text.contains("disk full"));
    }
}
