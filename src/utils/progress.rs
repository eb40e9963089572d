//! # 进度条工具
//!
//! 封装 `indicatif` 提供统一的进度条样式。
//!
//! ## 依赖关系
//! - 被 `utils/console.rs` 使用
//! - 使用 `indicatif` crate

use indicatif::{ProgressBar, ProgressStyle};

const BAR_TEMPLATE: &str =
    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}";

/// 创建标准进度条
pub fn create_progress_bar(len: u64, message: &str) -> ProgressBar {
    let pb = ProgressBar::new(len);
    let style = match ProgressStyle::with_template(BAR_TEMPLATE) {
        Ok(style) => style.progress_chars("#>-"),
        Err(_) => ProgressStyle::default_bar(),
    };
    pb.set_style(style);
    pb.set_message(message.to_string());
    pb
}
