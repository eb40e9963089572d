//! # 共享参数定义
//!
//! 文件选择参数（目录、扩展名、递归）和重命名规则参数，
//! 被 `rename`、`preview`、`list` 子命令复用。
//!
//! ## 依赖关系
//! - 被 `cli/rename.rs`, `cli/preview.rs`, `cli/list.rs` 使用
//! - 构造 `models/` 中的 `DiscoveryFilter` 和 `RenameRule`

use crate::models::{DiscoveryFilter, ExtensionMatch, RenameRule};

use clap::{ArgAction, Args};
use log::warn;
use std::path::PathBuf;

/// 未指定扩展名时启用的已知扩展名
pub const KNOWN_EXTENSIONS: [&str; 3] = ["txt", "ma", "png"];

// ─────────────────────────────────────────────────────────────
// 文件选择
// ─────────────────────────────────────────────────────────────

/// 文件选择参数
#[derive(Args, Debug, Clone)]
pub struct SelectionArgs {
    /// Directory containing the files to rename
    #[arg(env = "RENAMER_DIR")]
    pub dir: Option<PathBuf>,

    /// File extensions to include, without the dot (repeatable or comma-separated; default: txt,ma,png)
    #[arg(short = 'e', long = "ext", value_delimiter = ',', action = ArgAction::Append)]
    pub extensions: Vec<String>,

    /// Include files of every type
    #[arg(long, default_value_t = false, conflicts_with = "extensions")]
    pub all_files: bool,

    /// Match extensions as raw file name suffixes (e.g. 'a.txt' also matches 'ba.txt')
    #[arg(long, default_value_t = false)]
    pub suffix_match: bool,

    /// Recurse into subdirectories
    #[arg(short, long, default_value_t = false)]
    pub recursive: bool,
}

impl SelectionArgs {
    /// 根目录（未指定时为空路径，由会话报告 `NoDirectorySelected`）
    pub fn root_dir(&self) -> PathBuf {
        self.dir.clone().unwrap_or_default()
    }

    /// 构造筛选条件
    pub fn to_filter(&self) -> DiscoveryFilter {
        if self.all_files {
            return DiscoveryFilter::all_files(self.recursive);
        }

        // 规范化后一个扩展名都不剩（如 `--ext .`）时回到已知扩展名，绝不变成不筛选
        let mut filter = DiscoveryFilter::with_extensions(&self.extensions, self.recursive);
        if !filter.is_filtering() {
            if !self.extensions.is_empty() {
                warn!(
                    "No usable extension in {:?}, using {}",
                    self.extensions,
                    KNOWN_EXTENSIONS.join(", ")
                );
            }
            filter = DiscoveryFilter::with_extensions(KNOWN_EXTENSIONS, self.recursive);
        }

        if self.suffix_match {
            filter.matching(ExtensionMatch::Suffix)
        } else {
            filter
        }
    }
}

// ─────────────────────────────────────────────────────────────
// 重命名规则
// ─────────────────────────────────────────────────────────────

/// 重命名规则参数
#[derive(Args, Debug, Clone)]
pub struct RuleArgs {
    /// Text to find in file names (repeatable; applied in the given order)
    #[arg(short, long, action = ArgAction::Append)]
    pub find: Vec<String>,

    /// Replacement for every --find value
    #[arg(long, default_value = "")]
    pub replace: String,

    /// Text to insert at the beginning of each file name
    #[arg(long, default_value = "")]
    pub prefix: String,

    /// Text to insert before the final extension of each file name
    #[arg(long, default_value = "")]
    pub suffix: String,
}

impl RuleArgs {
    /// 构造重命名规则：每个查找串都映射到同一个替换串
    pub fn to_rule(&self) -> RenameRule {
        RenameRule::new()
            .with_find_all(&self.find, &self.replace)
            .with_prefix(&self.prefix)
            .with_suffix(&self.suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        selection: SelectionArgs,
        #[command(flatten)]
        rule: RuleArgs,
    }

    fn parse(args: &[&str]) -> TestCli {
        TestCli::try_parse_from(std::iter::once("test").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_default_extensions_are_known_set() {
        let cli = parse(&["/data"]);
        let filter = cli.selection.to_filter();
        assert_eq!(
            filter.extensions.iter().map(String::as_str).collect::<Vec<_>>(),
            vec!["ma", "png", "txt"]
        );
        assert!(!filter.recursive);
        assert_eq!(cli.selection.root_dir(), PathBuf::from("/data"));
    }

    #[test]
    fn test_extension_list_and_flags() {
        let cli = parse(&["/data", "-e", "txt,.md", "--ext", "png", "-r", "--suffix-match"]);
        let filter = cli.selection.to_filter();
        assert_eq!(filter.extensions.len(), 3);
        assert!(filter.extensions.contains("md"));
        assert!(filter.recursive);
        assert_eq!(filter.matching, ExtensionMatch::Suffix);
    }

    #[test]
    fn test_dot_only_extension_falls_back_to_known_set() {
        for raw in [".", " ", ".,  ,."] {
            let cli = parse(&["/data", "--ext", raw]);
            let filter = cli.selection.to_filter();
            assert!(filter.is_filtering(), "--ext {:?} disabled filtering", raw);
            assert!(!filter.accepts("Makefile"));
            assert!(!filter.accepts("secret.key"));
            assert!(filter.accepts("notes.txt"));
        }
    }

    #[test]
    fn test_all_files_disables_filter() {
        let cli = parse(&["/data", "--all-files"]);
        assert!(!cli.selection.to_filter().is_filtering());
        assert!(TestCli::try_parse_from(["test", "/data", "--all-files", "-e", "txt"]).is_err());
    }

    #[test]
    fn test_rule_from_args() {
        let cli = parse(&[
            "/data", "-f", "draft", "--find", "tmp", "--replace", "final", "--prefix", "2024_",
            "--suffix", "_v1",
        ]);
        let rule = cli.rule.to_rule();
        assert_eq!(rule.substitutions.len(), 2);
        assert_eq!(rule.substitutions[1].find, "tmp");
        assert_eq!(rule.substitutions[1].replace, "final");
        assert_eq!(rule.prefix, "2024_");
        assert_eq!(rule.suffix, "_v1");
    }
}
