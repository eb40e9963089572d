//! # 活动日志
//!
//! 进程级日志的生命周期：启动时打开日志文件并安装 `simplelog` 记录器，退出前刷新。
//! 引擎只通过 `log` 宏写日志，从不自行初始化记录器。
//!
//! ## 日志格式
//! 每个事件一行：时间戳（RFC 3339）、级别、来源模块、消息。日志文件只追加。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `simplelog`, `directories`

use crate::error::{RenamerError, Result};

use directories::ProjectDirs;
use log::info;
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, LevelFilter, SharedLogger, TermLogger,
    TerminalMode, WriteLogger,
};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

const APP_NAME: &str = "renamer";
const LOG_FILE_NAME: &str = "renamer.log";

/// 默认日志文件路径：平台本地数据目录，取不到时退回当前目录
pub fn default_log_path() -> PathBuf {
    ProjectDirs::from("", "", APP_NAME)
        .map(|dirs| dirs.data_local_dir().join(LOG_FILE_NAME))
        .unwrap_or_else(|| PathBuf::from(LOG_FILE_NAME))
}

/// 日志行格式
fn log_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .set_thread_level(LevelFilter::Off)
        .set_location_level(LevelFilter::Off)
        .build()
}

/// 打开日志文件并安装全局记录器
///
/// `echo` 为真时同时输出到终端。
pub fn init(path: &Path, level: LevelFilter, echo: bool) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| RenamerError::FileWriteError {
            path: parent.display().to_string(),
            source: e,
        })?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| RenamerError::FileWriteError {
            path: path.display().to_string(),
            source: e,
        })?;

    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();
    loggers.push(WriteLogger::new(level, log_config(), file));
    if echo {
        loggers.push(TermLogger::new(
            level,
            log_config(),
            TerminalMode::Stderr,
            ColorChoice::Auto,
        ));
    }

    CombinedLogger::init(loggers).map_err(|e| RenamerError::LoggerInit(e.to_string()))?;

    info!(
        "Logger initialized ({} {}), writing to {}",
        APP_NAME,
        env!("CARGO_PKG_VERSION"),
        path.display()
    );
    Ok(())
}

/// 退出前刷新日志
pub fn shutdown() {
    log::logger().flush();
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::{Level, Log, Record};
    use tempfile::tempdir;

    #[test]
    fn test_default_log_path_file_name() {
        let path = default_log_path();
        assert_eq!(path.file_name().unwrap(), LOG_FILE_NAME);
    }

    #[test]
    fn test_log_line_format() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("activity.log");
        let file = fs::File::create(&path).unwrap();
        let logger = WriteLogger::new(LevelFilter::Info, log_config(), file);

        logger.log(
            &Record::builder()
                .args(format_args!("Found file: draft.txt"))
                .level(Level::Info)
                .target("renamer::batch::collector")
                .build(),
        );
        logger.log(
            &Record::builder()
                .args(format_args!("hidden detail"))
                .level(Level::Debug)
                .target("renamer::batch::collector")
                .build(),
        );
        logger.flush();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("INFO"));
        assert!(lines[0].contains("renamer::batch::collector"));
        assert!(lines[0].ends_with("Found file: draft.txt"));
    }
}
