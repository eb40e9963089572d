//! # preview 命令实现
//!
//! 显示每个候选文件的新文件名和预测的冲突，不修改任何文件。
//!
//! ## 依赖关系
//! - 使用 `cli/preview.rs` 定义的参数
//! - 使用 `batch/collector.rs` 发现文件
//! - 使用 `rename/planner.rs` 模拟运行

use super::require_directory;
use crate::batch::discover;
use crate::cli::preview::PreviewArgs;
use crate::error::Result;
use crate::models::TransferMode;
use crate::rename::{plan_renames, PlannedRename};
use crate::utils::output;

/// 执行 preview 命令
pub fn execute(args: PreviewArgs) -> Result<()> {
    let root = require_directory(&args.selection)?;
    let filter = args.selection.to_filter();
    let rule = args.rule.to_rule();
    let mode = TransferMode::from_copy_flag(args.copy);

    output::print_header("Rename Preview");

    let candidates = discover(&root, &filter)?;
    if candidates.is_empty() {
        output::print_warning(&format!(
            "No {} files found in {}",
            filter.describe_extensions(),
            root.display()
        ));
        return Ok(());
    }

    let plans = plan_renames(&candidates, &rule, mode);
    for plan in &plans {
        print_plan(plan, &root);
    }

    let ready = plans.iter().filter(|p| p.status.is_ok()).count();
    output::print_separator();
    output::print_info(&format!(
        "{} of {} files would be {}",
        ready,
        plans.len(),
        mode.past_tense()
    ));

    Ok(())
}

fn print_plan(plan: &PlannedRename, root: &std::path::Path) {
    let from = plan.candidate.display_relative(root);
    if plan.status.is_ok() {
        output::print_rename(&from, &plan.new_name);
    } else {
        output::print_skip(&format!("{} -> {} ({})", from, plan.new_name, plan.status));
    }
}
