//! 提取选项与结果报告（模块）
use std::path::{Path, PathBuf};

/// 默认输入文件（相对当前工作目录）
pub const DEFAULT_INPUT_PATH: &str = "src/json/apiItems.json";
/// 默认输出文件（相对当前工作目录）
pub const DEFAULT_OUTPUT_PATH: &str = "src/python/unified_tooltips.txt";

/// 提取选项
/// - 路径若为相对路径，则在 `resolve` 时拼接到基准目录（通常为当前工作目录）
/// - 绝对路径原样保留
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOptions {
    /// 输入 JSON 文件
    pub input_path: PathBuf,
    /// 输出文本文件（每行一条提示）
    pub output_path: PathBuf,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }
}

impl ExtractOptions {
    /// 将两个路径解析到 `base` 之下
    pub fn resolve(&self, base: &Path) -> Self {
        Self {
            input_path: base.join(&self.input_path),
            output_path: base.join(&self.output_path),
        }
    }
}

/// 成功运行后的汇总（便于 CLI 打印）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractReport {
    /// 去重后的提示条数
    pub unique_tooltips: usize,
    /// 实际写入的输出路径（已解析）
    pub output_path: PathBuf,
}

impl ExtractReport {
    /// 面向操作者的两行汇总
    pub fn summary_lines(&self) -> [String; 2] {
        [
            format!("Found {} unique unified tooltips.", self.unique_tooltips),
            format!("Results have been saved to {}", self.output_path.display()),
        ]
    }
}
