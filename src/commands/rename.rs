//! # rename 命令实现
//!
//! 执行一次批量重命名/复制。
//!
//! ## 功能
//! - 由命令行参数构造运行请求
//! - 通过终端通知器运行批量会话
//! - 打印结果表格，可选导出 CSV 报告
//!
//! ## 依赖关系
//! - 使用 `cli/rename.rs` 定义的参数
//! - 使用 `batch/session.rs`, `batch/export.rs`
//! - 使用 `utils/console.rs`, `utils/output.rs`

use crate::batch::{export, BatchRenameSession, RenameRequest};
use crate::cli::rename::RenameArgs;
use crate::error::Result;
use crate::models::{RenameOutcome, RunReport, TransferMode};
use crate::utils::console::ConsoleNotifier;
use crate::utils::output;

use std::path::Path;
use tabled::{Table, Tabled};

/// 结果表格行
#[derive(Debug, Clone, Tabled)]
struct ResultRow {
    #[tabled(rename = "File")]
    file: String,
    #[tabled(rename = "New name")]
    new_name: String,
    #[tabled(rename = "Result")]
    result: String,
}

/// 执行 rename 命令
pub fn execute(args: RenameArgs) -> Result<()> {
    let mode = TransferMode::from_copy_flag(args.copy);
    output::print_header(match mode {
        TransferMode::Move => "Batch Rename",
        TransferMode::Copy => "Batch Copy",
    });

    let request = RenameRequest {
        root_dir: args.selection.root_dir(),
        rule: args.rule.to_rule(),
        filter: args.selection.to_filter(),
        mode,
    };

    if request.rule.is_identity() {
        output::print_warning("The rule leaves every file name unchanged; all files will be skipped.");
    }

    let mut notifier = ConsoleNotifier::new(request.root_dir.clone(), request.filter.clone())
        .assume_yes(args.yes)
        .show_listing(!args.no_list);

    let report = BatchRenameSession::new(&mut notifier).run(&request)?;

    if !report.outcomes.is_empty() {
        print_results_table(&report, &request.root_dir);
    }

    for failure in report.failures() {
        if let RenameOutcome::Skipped(reason) = &failure.outcome {
            output::print_error(&reason.to_string());
        }
    }

    if report.succeeded > 0 {
        output::print_done(&format!(
            "{} ({} of {} skipped, {} already existed)",
            report.summary_message(),
            report.skipped(),
            report.total_candidates,
            report.conflicts()
        ));
    }

    if let Some(report_path) = &args.report {
        export::to_csv(&report, report_path)?;
        output::print_success(&format!("Report written to '{}'", report_path.display()));
    }

    Ok(())
}

/// 打印结果表格
fn print_results_table(report: &RunReport, root: &Path) {
    let rows: Vec<ResultRow> = report
        .outcomes
        .iter()
        .map(|r| ResultRow {
            file: r.candidate.display_relative(root),
            new_name: r.new_name.clone(),
            result: match &r.outcome {
                RenameOutcome::Renamed => report.mode.past_tense().to_string(),
                RenameOutcome::Skipped(_) => format!("skipped ({})", r.outcome.label()),
            },
        })
        .collect();

    println!("\n{}", Table::new(rows));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::selection::{RuleArgs, SelectionArgs};
    use crate::error::RenamerError;
    use std::fs;
    use tempfile::tempdir;

    fn args(dir: Option<&Path>, report: Option<&Path>) -> RenameArgs {
        RenameArgs {
            selection: SelectionArgs {
                dir: dir.map(Path::to_path_buf),
                extensions: vec!["txt".to_string()],
                all_files: false,
                suffix_match: false,
                recursive: false,
            },
            rule: RuleArgs {
                find: vec!["draft".to_string()],
                replace: "final".to_string(),
                prefix: "2024_".to_string(),
                suffix: String::new(),
            },
            copy: false,
            yes: true,
            report: report.map(Path::to_path_buf),
            no_list: true,
        }
    }

    #[test]
    fn test_execute_renames_and_writes_report() {
        let dir = tempdir().unwrap();
        let out = tempdir().unwrap();
        fs::write(dir.path().join("draft.txt"), "d").unwrap();
        fs::write(dir.path().join("report.txt"), "r").unwrap();
        fs::write(dir.path().join("image.png"), "i").unwrap();
        let report_path = out.path().join("run.csv");

        execute(args(Some(dir.path()), Some(&report_path))).unwrap();

        assert!(dir.path().join("2024_final.txt").exists());
        assert!(dir.path().join("2024_report.txt").exists());
        assert!(dir.path().join("image.png").exists());

        let csv = fs::read_to_string(&report_path).unwrap();
        assert_eq!(csv.lines().count(), 3);
    }

    #[test]
    fn test_execute_without_directory() {
        let result = execute(args(None, None));
        assert!(matches!(result, Err(RenamerError::NoDirectorySelected)));
    }
}
