//! # list 命令实现
//!
//! 列出一次运行将会处理的文件。
//!
//! ## 依赖关系
//! - 使用 `cli/list.rs` 定义的参数
//! - 使用 `batch/collector.rs`, `utils/output.rs`

use super::require_directory;
use crate::batch::FileCollector;
use crate::cli::list::ListArgs;
use crate::error::Result;
use crate::utils::output;

/// 执行 list 命令
pub fn execute(args: ListArgs) -> Result<()> {
    let root = require_directory(&args.selection)?;
    let filter = args.selection.to_filter();

    output::print_header(&format!("Files in {}", root.display()));
    output::print_info(&format!(
        "Extensions: {}{}",
        filter.describe_extensions(),
        if filter.recursive { " (recursive)" } else { "" }
    ));

    let files = FileCollector::new(&root, filter).collect()?;
    output::print_file_list(&root, &files);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::selection::SelectionArgs;
    use crate::error::RenamerError;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_list_directory() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.txt"), "a").unwrap();

        let args = ListArgs {
            selection: SelectionArgs {
                dir: Some(dir.path().to_path_buf()),
                extensions: Vec::new(),
                all_files: true,
                suffix_match: false,
                recursive: true,
            },
        };
        assert!(execute(args).is_ok());
    }

    #[test]
    fn test_list_requires_directory() {
        let args = ListArgs {
            selection: SelectionArgs {
                dir: None,
                extensions: Vec::new(),
                all_files: false,
                suffix_match: false,
                recursive: false,
            },
        };
        assert!(matches!(execute(args), Err(RenamerError::NoDirectorySelected)));
    }
}
