//! # 文件名变换
//!
//! 纯函数：旧文件名 + 规则 → 新文件名。不做任何 I/O。
//!
//! ## 规则
//! - 替换对按顺序依次作用（每一对替换全部出现位置），空查找串忽略
//! - 前缀直接加在最前面
//! - 后缀插入最后一个 `.` 之前；没有 `.` 的文件名直接追加在末尾
//!
//! ## 依赖关系
//! - 被 `batch/session.rs`, `rename/planner.rs` 调用
//! - 使用 `models/rule.rs`

use crate::models::RenameRule;

/// 根据规则计算新文件名
pub fn transform(existing_name: &str, rule: &RenameRule) -> String {
    let mut new_name = existing_name.to_string();

    for sub in &rule.substitutions {
        if sub.find.is_empty() {
            continue;
        }
        new_name = new_name.replace(&sub.find, &sub.replace);
    }

    if !rule.prefix.is_empty() {
        new_name = format!("{}{}", rule.prefix, new_name);
    }

    if !rule.suffix.is_empty() {
        new_name = match new_name.rsplit_once('.') {
            Some((stem, ext)) => format!("{}{}.{}", stem, rule.suffix, ext),
            None => format!("{}{}", new_name, rule.suffix),
        };
    }

    new_name
}

/// 检查新文件名能否作为同目录下的文件名
///
/// 空名、`.`、`..` 以及包含路径分隔符的名字会把文件移出所在目录。
pub fn is_valid_file_name(name: &str) -> bool {
    if name.is_empty() || name == "." || name == ".." {
        return false;
    }
    !name.contains('/') && !name.contains(std::path::MAIN_SEPARATOR) && !name.contains('\0')
}
