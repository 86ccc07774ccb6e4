//! 统一提示（unifiedTooltips）提取核心库
//!
//! 设计要点：
//! - 读取 `apiItems.json`，仅关心 `data[*].unifiedTooltips` 字段，其余字段一律忽略。
//! - 全局去重后按码点（字节序）升序输出，每行一条，末行同样以换行结束。
//! - 错误收敛为三类（NotFound / MalformedInput / Unexpected），由外层统一打印。
//! - 输出写入任意 `Write`，文件句柄仅在读/写步骤内持有。

mod options;
mod types;
mod error;
mod document;
mod collect;
mod extract;

pub use options::{ExtractOptions, ExtractReport, DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH};
pub use types::{ApiItem, ApiItems};
pub use error::{ExtractError, UnexpectedCause};
pub use document::{load_document, parse_document};
pub use collect::{collect_tooltips, sorted_tooltips, TooltipSet};
pub use extract::{extract_unified_tooltips, write_tooltips};
