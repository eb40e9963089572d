//! # 运行报告导出
//!
//! 将 `RunReport` 导出为 CSV，每个候选文件一行。
//!
//! ## 列
//! `source, target, outcome, detail`
//!
//! ## 依赖关系
//! - 被 `commands/rename.rs` 调用
//! - 使用 `csv` 库写入 CSV 文件

use crate::error::{RenamerError, Result};
use crate::models::{RenameOutcome, RunReport};

use std::path::Path;

/// 导出运行报告为 CSV
pub fn to_csv(report: &RunReport, output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;

    wtr.write_record(["source", "target", "outcome", "detail"])?;

    for record in &report.outcomes {
        let detail = match &record.outcome {
            RenameOutcome::Renamed => String::new(),
            RenameOutcome::Skipped(reason) => reason.to_string(),
        };
        wtr.write_record([
            record.candidate.path().display().to_string(),
            record.target_path().display().to_string(),
            record.outcome.label().to_string(),
            detail,
        ])?;
    }

    wtr.flush().map_err(|e| RenamerError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}
