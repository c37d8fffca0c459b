//! Share-Sweep main entry point
//!
//! This is the command-line interface for the Share-Sweep batch collector.

use anyhow::Context;
use clap::Parser;
use share_sweep::config::load_config_with_hash;
use share_sweep::pipeline::{Pipeline, ReportOutcome};
use std::io::Read;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Share-Sweep: a batch engagement collector for pasted share snippets
///
/// Share-Sweep reads pasted Xiaohongshu and Douyin share snippets, drives
/// the per-platform crawling agents for every link it finds, and merges the
/// crawled engagement numbers into a single tabular report.
#[derive(Parser, Debug)]
#[command(name = "share-sweep")]
#[command(version = "1.0.0")]
#[command(about = "A batch engagement collector for pasted share snippets", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// File containing the pasted snippet text (reads stdin when omitted)
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Where to write the report (defaults to a timestamped file in the
    /// working directory)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Load and validate configuration
    tracing::info!("Loading configuration from: {}", cli.config.display());
    let (config, config_hash) =
        load_config_with_hash(&cli.config).context("Failed to load configuration")?;
    tracing::info!("Configuration loaded successfully (hash: {})", config_hash);

    // Gather the input text
    let text = read_input(cli.input.as_deref()).context("Failed to read input text")?;

    let report_path = cli.output.unwrap_or_else(default_report_path);

    // Run the pipeline
    let pipeline = Pipeline::new(config)?;
    match pipeline.run(&text, &report_path).await? {
        ReportOutcome::Written(summary) => {
            println!("\n=== 爬取完成 ===");
            println!("总共处理: {} 条记录", summary.total_records);
            for (platform, count) in &summary.platform_counts {
                println!("{}: {} 条", platform.label(), count);
            }
            println!("结果已保存到: {}", summary.path.display());
        }
        ReportOutcome::NoData => {
            println!("没有爬取到任何数据，未生成报告文件");
        }
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("share_sweep=info,warn"),
            1 => EnvFilter::new("share_sweep=debug,info"),
            2 => EnvFilter::new("share_sweep=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Reads the snippet text from a file, or from stdin when no file is given
fn read_input(path: Option<&std::path::Path>) -> std::io::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

/// Default report filename: 点评赞数据-<timestamp>.csv in the working directory
fn default_report_path() -> PathBuf {
    let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    PathBuf::from(format!("点评赞数据-{}.csv", timestamp))
}
