//! # 美化输出工具
//!
//! 统一的终端输出样式：带颜色标签的单行消息、标题栏和文件列表。
//!
//! ## 依赖关系
//! - 被所有 `commands/` 模块和 `utils/console.rs` 使用
//! - 使用 `colored` crate

use crate::models::CandidateFile;

use colored::{ColoredString, Colorize};
use std::path::Path;

/// 标题栏和分隔线宽度
const RULE_WIDTH: usize = 60;

fn tagged(tag: ColoredString, msg: &str) -> String {
    format!("{} {}", tag, msg)
}

fn rule() -> ColoredString {
    "─".repeat(RULE_WIDTH).dimmed()
}

pub fn print_success(msg: &str) {
    println!("{}", tagged("[OK]".green().bold(), msg));
}

/// 错误写到 stderr
pub fn print_error(msg: &str) {
    eprintln!("{}", tagged("[ERR]".red().bold(), msg));
}

pub fn print_warning(msg: &str) {
    println!("{}", tagged("[WARN]".yellow().bold(), msg));
}

pub fn print_info(msg: &str) {
    println!("{}", tagged("[*]".blue().bold(), msg));
}

pub fn print_skip(msg: &str) {
    println!("{}", tagged("[SKIP]".dimmed(), msg));
}

pub fn print_done(msg: &str) {
    println!("{}", tagged("[DONE]".green().bold(), msg));
}

/// `old -> new`
pub fn print_rename(from: &str, to: &str) {
    print_success(&format!("{} {} {}", from.dimmed(), "->".cyan(), to));
}

/// 每行一个相对路径，最后是总数
pub fn print_file_list(root: &Path, files: &[CandidateFile]) {
    for file in files {
        println!("  {}", file.display_relative(root));
    }
    println!("{}", format!("Total files: {}", files.len()).bold());
}

pub fn print_header(title: &str) {
    println!("\n{}\n  {}\n{}\n", rule(), title.bold(), rule());
}

pub fn print_separator() {
    println!("{}", rule());
}
