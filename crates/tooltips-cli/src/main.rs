use anyhow::Result;
use clap::Parser;
use tooltips_core::{extract_unified_tooltips, ExtractError, ExtractOptions, ExtractReport};
use tracing::{error, info};

/// 命令行入口（基于 clap）；固定路径，无额外参数
#[derive(Parser, Debug)]
#[command(
    name = "extract-tooltips",
    version,
    about = "Collect unique unifiedTooltips from src/json/apiItems.json into src/python/unified_tooltips.txt"
)]
struct Cli {}

fn main() -> Result<()> {
    // 初始化日志（RUST_LOG 控制等级）；日志走 stderr，stdout 只留给结果汇报
    init_tracing();
    let _cli = Cli::parse();

    // 任何失败都只打印一行说明，进程仍以 0 退出
    let outcome = extract_unified_tooltips(&ExtractOptions::default());
    for line in report_lines(&outcome) {
        println!("{line}");
    }
    match &outcome {
        Ok(report) => info!(unique = report.unique_tooltips, "extraction finished"),
        Err(e) => error!(kind = e.kind(), "extraction failed"),
    }

    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, FmtSubscriber};
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

/// 成功：两行汇总；失败：一行错误说明
fn report_lines(outcome: &Result<ExtractReport, ExtractError>) -> Vec<String> {
    match outcome {
        Ok(report) => report.summary_lines().to_vec(),
        Err(e) => vec![e.to_string()],
    }
}
