//! 提示收集、去重与排序
use std::collections::BTreeSet;

use crate::types::ApiItems;

/// 全局去重后的提示集合；`BTreeSet` 的迭代顺序即字节序（= 码点序）升序
pub type TooltipSet = BTreeSet<String>;

/// 收集所有条目的 `unifiedTooltips`，缺少该键的条目直接跳过
pub fn collect_tooltips(doc: &ApiItems) -> TooltipSet {
    doc.data
        .iter()
        .filter_map(|item| item.unified_tooltips.as_ref())
        .flatten()
        .cloned()
        .collect()
}

/// 转为升序列表
pub fn sorted_tooltips(set: TooltipSet) -> Vec<String> {
    set.into_iter().collect()
}
