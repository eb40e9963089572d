//! # 终端通知器
//!
//! `Notifier` 的终端实现：状态信息、进度条、阻塞式警告和运行后的文件列表。
//!
//! ## 依赖关系
//! - 被 `commands/rename.rs` 使用
//! - 使用 `utils/output.rs`, `utils/progress.rs`
//! - 使用 `console` 检测终端并读取按键

use crate::batch::{discover, Notifier};
use crate::models::{DiscoveryFilter, RenameRecord};
use crate::utils::{output, progress};

use console::{Key, Term};
use indicatif::ProgressBar;
use log::debug;
use std::io;
use std::path::PathBuf;

/// 终端通知器
pub struct ConsoleNotifier {
    /// 刷新列表时使用的根目录
    root: PathBuf,
    /// 刷新列表时使用的筛选条件
    filter: DiscoveryFilter,
    /// 警告是否等待按键
    interactive: bool,
    /// 运行后是否打印文件列表
    show_listing: bool,
    progress: Option<ProgressBar>,
}

impl ConsoleNotifier {
    pub fn new(root: PathBuf, filter: DiscoveryFilter) -> Self {
        Self {
            root,
            filter,
            interactive: Term::stdout().is_term() && Term::stderr().is_term(),
            show_listing: true,
            progress: None,
        }
    }

    /// 不等待按键（`--yes`）
    pub fn assume_yes(mut self, yes: bool) -> Self {
        if yes {
            self.interactive = false;
        }
        self
    }

    /// 运行后是否打印文件列表
    pub fn show_listing(mut self, show: bool) -> Self {
        self.show_listing = show;
        self
    }

    /// 打印时暂停进度条
    fn suspend<F: FnOnce()>(&self, f: F) {
        match &self.progress {
            Some(pb) => pb.suspend(f),
            None => f(),
        }
    }

    fn finish_progress(&mut self) {
        if let Some(pb) = self.progress.take() {
            pb.finish_and_clear();
        }
    }
}

impl Notifier for ConsoleNotifier {
    fn report_status(&mut self, message: &str) {
        self.suspend(|| output::print_info(message));
    }

    fn refresh_file_list(&mut self) {
        self.finish_progress();
        if !self.show_listing {
            return;
        }

        output::print_separator();
        match discover(&self.root, &self.filter) {
            Ok(files) => output::print_file_list(&self.root, &files),
            Err(e) => output::print_error(&format!("Cannot list files: {}", e)),
        }
    }

    fn confirm_or_warn(&mut self, title: &str, message: &str) -> bool {
        let interactive = self.interactive;
        let mut acknowledged = true;

        self.suspend(|| {
            output::print_warning(&format!("{}: {}", title, message));
            if interactive {
                let term = Term::stderr();
                acknowledged = wait_for_key(
                    || term.write_line("Press any key to continue..."),
                    || term.read_key(),
                );
            }
        });

        acknowledged
    }

    fn file_processed(&mut self, index: usize, total: usize, record: &RenameRecord) {
        let pb = self
            .progress
            .get_or_insert_with(|| progress::create_progress_bar(total as u64, "Processing"));
        pb.set_message(record.candidate.base_name.clone());
        pb.inc(1);

        if index + 1 == total {
            self.finish_progress();
        }
    }
}

/// 打印提示后等待按键；任一步失败都算未确认
fn wait_for_key<P, R>(prompt: P, read: R) -> bool
where
    P: FnOnce() -> io::Result<()>,
    R: FnOnce() -> io::Result<Key>,
{
    match prompt().and_then(|_| read()) {
        Ok(_) => true,
        Err(e) => {
            debug!("Warning prompt failed: {}", e);
            false
        }
    }
}
