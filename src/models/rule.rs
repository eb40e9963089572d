//! # 重命名规则数据模型
//!
//! 一次运行中不可变的参数：替换规则、前后缀、文件筛选条件和传输模式。
//!
//! ## 依赖关系
//! - 被 `rename/transformer.rs`, `batch/collector.rs` 使用
//! - 由 `cli/selection.rs` 构造

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// 单个查找/替换对
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Substitution {
    /// 要查找的文本（按字面匹配）
    pub find: String,
    /// 替换文本
    pub replace: String,
}

impl Substitution {
    pub fn new(find: impl Into<String>, replace: impl Into<String>) -> Self {
        Self {
            find: find.into(),
            replace: replace.into(),
        }
    }
}

/// 文件名变换规则
///
/// 替换对按顺序依次作用，前一对的结果是后一对的输入。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameRule {
    /// 有序的查找/替换对
    pub substitutions: Vec<Substitution>,
    /// 前缀（空串表示不添加）
    pub prefix: String,
    /// 后缀，插入到最后一个 `.` 之前（空串表示不添加）
    pub suffix: String,
}

impl RenameRule {
    /// 创建空规则（恒等变换）
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加一个查找/替换对
    pub fn with_substitution(mut self, find: &str, replace: &str) -> Self {
        self.substitutions.push(Substitution::new(find, replace));
        self
    }

    /// 多个查找串映射到同一个替换串
    pub fn with_find_all(self, finds: &[String], replace: &str) -> Self {
        finds
            .iter()
            .fold(self, |rule, find| rule.with_substitution(find, replace))
    }

    /// 设置前缀
    pub fn with_prefix(mut self, prefix: &str) -> Self {
        self.prefix = prefix.to_string();
        self
    }

    /// 设置后缀
    pub fn with_suffix(mut self, suffix: &str) -> Self {
        self.suffix = suffix.to_string();
        self
    }

    /// 规则是否为恒等变换
    pub fn is_identity(&self) -> bool {
        self.prefix.is_empty()
            && self.suffix.is_empty()
            && self.substitutions.iter().all(|s| s.find.is_empty())
    }
}

/// 扩展名匹配方式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExtensionMatch {
    /// 比较最后一个 `.` 之后的部分
    #[default]
    LastComponent,
    /// 文件名以给定字符串结尾即可（兼容模式，`a.txt` 也匹配 `ba.txt`）
    Suffix,
}

/// 文件发现筛选条件
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiscoveryFilter {
    /// 扩展名集合（不含前导点，大小写敏感）；为空表示不筛选
    pub extensions: BTreeSet<String>,
    /// 是否递归子目录
    pub recursive: bool,
    /// 扩展名匹配方式
    pub matching: ExtensionMatch,
}

impl DiscoveryFilter {
    /// 不筛选扩展名的条件
    pub fn all_files(recursive: bool) -> Self {
        Self {
            extensions: BTreeSet::new(),
            recursive,
            matching: ExtensionMatch::LastComponent,
        }
    }

    /// 按扩展名筛选（会去掉用户输入的前导点和空白）
    pub fn with_extensions<I, S>(extensions: I, recursive: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let extensions = extensions
            .into_iter()
            .map(|e| e.as_ref().trim().trim_start_matches('.').to_string())
            .filter(|e| !e.is_empty())
            .collect();
        Self {
            extensions,
            recursive,
            matching: ExtensionMatch::LastComponent,
        }
    }

    /// 设置匹配方式
    pub fn matching(mut self, matching: ExtensionMatch) -> Self {
        self.matching = matching;
        self
    }

    /// 是否启用了扩展名筛选
    pub fn is_filtering(&self) -> bool {
        !self.extensions.is_empty()
    }

    /// 检查文件名是否通过筛选
    pub fn accepts(&self, file_name: &str) -> bool {
        if !self.is_filtering() {
            return true;
        }

        match self.matching {
            ExtensionMatch::LastComponent => match file_name.rsplit_once('.') {
                Some((_, ext)) => self.extensions.contains(ext),
                None => false,
            },
            ExtensionMatch::Suffix => self
                .extensions
                .iter()
                .any(|ext| file_name.ends_with(ext.as_str())),
        }
    }

    /// 用于日志和状态输出的扩展名描述
    pub fn describe_extensions(&self) -> String {
        if self.is_filtering() {
            self.extensions
                .iter()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(", ")
        } else {
            "all".to_string()
        }
    }
}

/// 传输模式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransferMode {
    /// 移动（源路径消失）
    #[default]
    Move,
    /// 复制（源路径保留）
    Copy,
}

impl TransferMode {
    pub fn from_copy_flag(copy: bool) -> Self {
        if copy {
            TransferMode::Copy
        } else {
            TransferMode::Move
        }
    }

    /// 用于汇总信息的过去分词
    pub fn past_tense(&self) -> &'static str {
        match self {
            TransferMode::Move => "renamed",
            TransferMode::Copy => "copied",
        }
    }

    /// 用于日志的进行时
    pub fn progressive(&self) -> &'static str {
        match self {
            TransferMode::Move => "Renaming",
            TransferMode::Copy => "Copying",
        }
    }
}

impl std::fmt::Display for TransferMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransferMode::Move => write!(f, "move"),
            TransferMode::Copy => write!(f, "copy"),
        }
    }
}
