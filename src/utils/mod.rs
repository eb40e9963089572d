//! # 工具函数模块
//!
//! 提供美化输出、进度条、活动日志和终端通知器。
//!
//! ## 依赖关系
//! - 被 `main.rs` 和 `commands/` 模块使用
//! - 子模块: console, logging, output, progress

pub mod console;
pub mod logging;
pub mod output;
pub mod progress;
