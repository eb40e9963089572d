//! # renamer - 批量文件重命名工具
//!
//! 按查找/替换、前缀、后缀规则批量重命名（或复制）目录中的文件，
//! 并把每一步写入活动日志。
//!
//! ## 子命令
//! - `rename`  - 执行批量重命名/复制
//! - `preview` - 预览新文件名和冲突
//! - `list`    - 列出匹配的文件
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── batch/     (文件发现、传输、会话)
//!   │     ├── rename/    (文件名变换与预览)
//!   │     └── models/    (数据模型)
//!   ├── utils/      (输出、进度条、日志)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod error;
mod models;
mod rename;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::{logging, output};

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    let log_path = cli.log_file.clone().unwrap_or_else(logging::default_log_path);
    if let Err(e) = logging::init(&log_path, cli.log_level.into(), cli.verbose) {
        output::print_warning(&format!("Activity log disabled: {}", e));
    }

    let result = commands::run(cli.command);
    logging::shutdown();

    if let Err(e) = result {
        output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
