//! 输入文档结构（对外暴露）
use serde::{Deserialize, Deserializer};

/// apiItems.json 顶层结构；`data` 缺失时视为空列表，其余键忽略
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiItems {
    #[serde(default)]
    pub data: Vec<ApiItem>,
}

/// 单个条目；只解析 `unifiedTooltips`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiItem {
    /// 键缺失为 None；键存在则必须是字符串数组（`null` 同样视为结构错误）
    #[serde(default, rename = "unifiedTooltips", deserialize_with = "present_tooltips")]
    pub unified_tooltips: Option<Vec<String>>,
}

fn present_tooltips<'de, D>(de: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Vec::<String>::deserialize(de).map(Some)
}
