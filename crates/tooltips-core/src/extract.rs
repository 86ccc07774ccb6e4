//! 提取主流程：读取 → 去重排序 → 写出
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use tracing::{debug, info};

use crate::collect::{collect_tooltips, sorted_tooltips};
use crate::document::load_document;
use crate::error::ExtractError;
use crate::options::{ExtractOptions, ExtractReport};

/// 以当前工作目录为基准执行一次完整提取
/// - 输入缺失或非法 JSON 时不会创建/改动输出文件
/// - 输出文件每次整体覆盖
pub fn extract_unified_tooltips(opts: &ExtractOptions) -> Result<ExtractReport, ExtractError> {
    let cwd = std::env::current_dir()
        .map_err(|e| ExtractError::unexpected("failed to resolve working directory", Path::new("."), e))?;
    run(&opts.resolve(&cwd))
}

fn run(opts: &ExtractOptions) -> Result<ExtractReport, ExtractError> {
    info!(input = ?opts.input_path, output = ?opts.output_path, "starting extraction");

    let doc = load_document(&opts.input_path)?;
    let tooltips = sorted_tooltips(collect_tooltips(&doc));
    drop(doc);
    debug!(unique = tooltips.len(), "tooltips collected");

    write_file(&opts.output_path, &tooltips)?;

    Ok(ExtractReport { unique_tooltips: tooltips.len(), output_path: opts.output_path.clone() })
}

/// 创建（或截断）输出文件并缓冲写入
fn write_file(path: &Path, tooltips: &[String]) -> Result<(), ExtractError> {
    let file = File::create(path).map_err(|e| ExtractError::unexpected("failed to create", path, e))?;
    let mut out = BufWriter::new(file);
    let lines = write_tooltips(&mut out, tooltips)
        .and_then(|n| out.flush().map(|_| n))
        .map_err(|e| ExtractError::unexpected("failed to write", path, e))?;
    debug!(?path, lines, "output written");
    Ok(())
}

/// 每条提示写一行，末行也以 `\n` 结束；返回写入行数
pub fn write_tooltips(out: &mut dyn Write, tooltips: &[String]) -> io::Result<usize> {
    for t in tooltips {
        writeln!(out, "{t}")?;
    }
    Ok(tooltips.len())
}
