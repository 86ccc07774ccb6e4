//! 错误分类（模块）
//!
//! 三类错误的 `Display` 即为打印给操作者的那一行。
use std::io;
use std::path::{Path, PathBuf};

/// 提取过程中的错误
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    /// 输入文件不存在
    #[error("Error: Could not find the file {}", .path.display())]
    NotFound { path: PathBuf },

    /// 输入文件不是合法 JSON（语法错误或提前结束）
    #[error("Error: The file {} is not a valid JSON file", .path.display())]
    MalformedInput {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// 其余所有失败：权限、编码、结构不符、输出写入失败等
    #[error("An error occurred: {action} {}: {cause}", .path.display())]
    Unexpected {
        action: &'static str,
        path: PathBuf,
        #[source]
        cause: UnexpectedCause,
    },
}

/// Unexpected 的底层原因
#[derive(Debug, thiserror::Error)]
pub enum UnexpectedCause {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl ExtractError {
    pub(crate) fn unexpected(action: &'static str, path: &Path, cause: impl Into<UnexpectedCause>) -> Self {
        Self::Unexpected { action, path: path.to_path_buf(), cause: cause.into() }
    }

    /// 读取输入时的 I/O 错误：NotFound 单独归类，其余为 Unexpected
    pub(crate) fn from_read(path: &Path, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => Self::NotFound { path: path.to_path_buf() },
            _ => Self::unexpected("failed to read", path, err),
        }
    }

    /// 解析输入时的 JSON 错误：语法/EOF 为 MalformedInput，结构不符（Data）为 Unexpected
    /// 未配对的 `\uD800`..`\uDFFF` 转义属于编码问题而非语法问题，同样归为 Unexpected
    pub(crate) fn from_parse(path: &Path, err: serde_json::Error) -> Self {
        use serde_json::error::Category;
        if is_lone_surrogate(&err) {
            return Self::unexpected("invalid UTF-8 text in", path, err);
        }
        match err.classify() {
            Category::Syntax | Category::Eof => Self::MalformedInput { path: path.to_path_buf(), source: err },
            Category::Data => Self::unexpected("unexpected structure in", path, err),
            Category::Io => Self::unexpected("failed to read", path, err),
        }
    }

    /// 短标签，用于日志字段
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "not_found",
            Self::MalformedInput { .. } => "malformed_input",
            Self::Unexpected { .. } => "unexpected",
        }
    }
}

/// serde_json 不公开错误码，只能按消息文本识别两种代理项错误
fn is_lone_surrogate(err: &serde_json::Error) -> bool {
    let msg = err.to_string();
    msg.starts_with("lone leading surrogate in hex escape") || msg.starts_with("unexpected end of hex escape")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_not_found_is_classified() {
        let err = ExtractError::from_read(Path::new("/x/apiItems.json"), io::Error::from(io::ErrorKind::NotFound));
        assert!(matches!(err, ExtractError::NotFound { .. }));
        assert_eq!(err.to_string(), "Error: Could not find the file /x/apiItems.json");
    }

    #[test]
    fn read_permission_denied_is_unexpected() {
        let err = ExtractError::from_read(Path::new("/x/apiItems.json"), io::Error::from(io::ErrorKind::PermissionDenied));
        assert_eq!(err.kind(), "unexpected");
        assert!(err.to_string().starts_with("An error occurred: failed to read /x/apiItems.json: "));
    }

    #[test]
    fn syntax_error_is_malformed() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not valid json").unwrap_err();
        let err = ExtractError::from_parse(Path::new("in.json"), json_err);
        assert_eq!(err.kind(), "malformed_input");
        assert_eq!(err.to_string(), "Error: The file in.json is not a valid JSON file");
    }

    #[test]
    fn truncated_document_is_malformed() {
        let json_err = serde_json::from_str::<serde_json::Value>(r#"{"data": ["#).unwrap_err();
        let err = ExtractError::from_parse(Path::new("in.json"), json_err);
        assert!(matches!(err, ExtractError::MalformedInput { .. }));
    }

    #[test]
    fn lone_surrogates_are_unexpected() {
        for txt in [r#"["\ud800"]"#, r#"["\udc00"]"#, r#"["\ud800A"]"#] {
            let json_err = serde_json::from_str::<Vec<String>>(txt).unwrap_err();
            let err = ExtractError::from_parse(Path::new("in.json"), json_err);
            assert_eq!(err.kind(), "unexpected", "{txt}");
            assert!(err.to_string().starts_with("An error occurred: invalid UTF-8 text in in.json: "));
        }
    }

    #[test]
    fn paired_surrogates_parse() {
        let v: Vec<String> = serde_json::from_str(r#"["\ud83d\ude00"]"#).unwrap();
        assert_eq!(v, vec!["😀"]);
    }

    #[test]
    fn wrong_shape_is_unexpected() {
        let json_err = serde_json::from_str::<Vec<String>>("[1, 2]").unwrap_err();
        let err = ExtractError::from_parse(Path::new("in.json"), json_err);
        assert!(matches!(err, ExtractError::Unexpected { cause: UnexpectedCause::Json(_), .. }));
    }
}
