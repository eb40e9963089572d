//! # 重命名预览
//!
//! 对候选文件逐个计算新文件名，并按顺序模拟执行，预测每个文件在真实运行中
//! 的结果。只读取文件系统，不做任何修改。
//!
//! ## 依赖关系
//! - 被 `commands/preview.rs` 调用
//! - 使用 `rename/transformer.rs`

use super::transformer::{is_valid_file_name, transform};
use crate::models::{CandidateFile, RenameRule, TransferMode};

use std::collections::HashSet;
use std::path::PathBuf;

/// 预测状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanStatus {
    /// 会成功
    Ok,
    /// 新旧文件名相同（运行时按已存在跳过）
    Unchanged,
    /// 目标已存在于磁盘上
    Exists,
    /// 与同目录中前面某个候选文件的目标重名
    Duplicate,
    /// 新文件名不合法
    InvalidName,
}

impl PlanStatus {
    pub fn is_ok(&self) -> bool {
        matches!(self, PlanStatus::Ok)
    }
}

impl std::fmt::Display for PlanStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlanStatus::Ok => write!(f, "ok"),
            PlanStatus::Unchanged => write!(f, "unchanged"),
            PlanStatus::Exists => write!(f, "exists"),
            PlanStatus::Duplicate => write!(f, "duplicate"),
            PlanStatus::InvalidName => write!(f, "invalid name"),
        }
    }
}

/// 单个文件的预览结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedRename {
    pub candidate: CandidateFile,
    pub new_name: String,
    pub status: PlanStatus,
}

/// 生成预览
///
/// 按候选顺序模拟：前面的文件占用的目标路径会挡住后面的文件；
/// 移动模式下前面的文件腾出的源路径可以被后面的文件使用。
pub fn plan_renames(
    candidates: &[CandidateFile],
    rule: &RenameRule,
    mode: TransferMode,
) -> Vec<PlannedRename> {
    let mut claimed: HashSet<PathBuf> = HashSet::new();
    let mut vacated: HashSet<PathBuf> = HashSet::new();
    let mut plans = Vec::with_capacity(candidates.len());

    for candidate in candidates {
        let new_name = transform(&candidate.base_name, rule);
        let target = candidate.sibling(&new_name);

        let status = if !is_valid_file_name(&new_name) {
            PlanStatus::InvalidName
        } else if new_name == candidate.base_name {
            PlanStatus::Unchanged
        } else if claimed.contains(&target) {
            PlanStatus::Duplicate
        } else if target.symlink_metadata().is_ok() && !vacated.contains(&target) {
            PlanStatus::Exists
        } else {
            PlanStatus::Ok
        };

        if status.is_ok() {
            claimed.insert(target.clone());
            vacated.remove(&target);
            if mode == TransferMode::Move {
                let source = candidate.path();
                claimed.remove(&source);
                vacated.insert(source);
            }
        }

        plans.push(PlannedRename {
            candidate: candidate.clone(),
            new_name,
            status,
        });
    }

    plans
}
