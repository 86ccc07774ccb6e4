//! 输入文档加载（JSON）
use std::path::Path;

use tracing::debug;

use crate::error::ExtractError;
use crate::types::ApiItems;

/// 读取并解析 apiItems.json
/// - 整文件读入内存，按 UTF-8 解码；非 UTF-8 内容归为 Unexpected
/// - 文件句柄在读取完成后立即释放
pub fn load_document(path: &Path) -> Result<ApiItems, ExtractError> {
    let txt = std::fs::read_to_string(path).map_err(|e| ExtractError::from_read(path, e))?;
    debug!(?path, bytes = txt.len(), "input read");
    parse_document(path, &txt)
}

/// 从已读入的文本解析文档；`path` 仅用于错误信息
pub fn parse_document(path: &Path, txt: &str) -> Result<ApiItems, ExtractError> {
    let doc: ApiItems = serde_json::from_str(txt).map_err(|e| ExtractError::from_parse(path, e))?;
    debug!(items = doc.data.len(), "document parsed");
    Ok(doc)
}
