//! # 通知接口
//!
//! 批量重命名会话与外部展示层之间的回调约定。核心逻辑只依赖这个 trait，
//! 不引用任何具体的终端或界面组件。
//!
//! ## 依赖关系
//! - 被 `batch/session.rs` 调用
//! - 由 `utils/console.rs` 实现

use crate::models::RenameRecord;

/// 展示层回调
pub trait Notifier {
    /// 状态信息（每次运行至少调用一次，给出最终汇总）
    fn report_status(&mut self, message: &str);

    /// 请求展示层重新枚举并显示文件列表（每次运行调用一次）
    fn refresh_file_list(&mut self);

    /// 阻塞式警告/确认，返回用户是否已确认
    fn confirm_or_warn(&mut self, title: &str, message: &str) -> bool;

    /// 单个文件处理完毕（`index` 从 0 开始）
    fn file_processed(&mut self, _index: usize, _total: usize, _record: &RenameRecord) {}
}
