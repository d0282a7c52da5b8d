/*
[INPUT]:  CLI arguments, optional YAML configuration file
[OUTPUT]: Interactive tab bar preview, or a validated configuration on --dry-run
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags, startup flow, or logging setup
*/

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use scroll_tabbar_preview::{PreviewConfig, run_preview};

const LOG_FILE_PREFIX: &str = "preview.log";

#[derive(Parser, Debug)]
#[command(name = "scroll-tabbar-preview", version, about = "Interactive preview of the scrollable tab bar")]
struct Cli {
    #[arg(long = "config", value_name = "PATH")]
    config_path: Option<PathBuf>,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info")]
    log_level: String,
    #[arg(long = "log-dir", value_name = "DIR")]
    log_dir: Option<PathBuf>,
    #[arg(long = "dry-run")]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();

    if args.dry_run {
        init_stderr_tracing(&args.log_level)?;
        let config = load_config(args.config_path.as_deref())?;
        info!(
            tab_count = config.titles.len(),
            initial = %config.titles[config.initial_index],
            "dry-run requested; configuration validated"
        );
        return Ok(());
    }

    let log_dir = match args.log_dir {
        Some(dir) => dir,
        None => default_log_dir()?,
    };
    let _guard = init_file_tracing(&args.log_level, &log_dir)?;
    info!(log_dir = %log_dir.display(), "starting scroll-tabbar-preview");

    let config = load_config(args.config_path.as_deref())?;
    run_preview(config).await.context("run preview")?;
    Ok(())
}

fn init_stderr_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}

/// The terminal is in raw mode while the preview runs, so logs go to a file.
fn init_file_tracing(log_level: &str, log_dir: &Path) -> Result<WorkerGuard> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    std::fs::create_dir_all(log_dir)
        .with_context(|| format!("create log dir {}", log_dir.display()))?;
    let appender = tracing_appender::rolling::daily(log_dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(guard)
}

fn default_log_dir() -> Result<PathBuf> {
    let data_dir = dirs::data_dir().context("no data directory available")?;
    Ok(data_dir.join("scroll-tabbar").join("logs"))
}

fn load_config(path: Option<&Path>) -> Result<PreviewConfig> {
    let config = match path {
        Some(path) => {
            let path_str = path.to_str().context("config path must be valid utf-8")?;
            PreviewConfig::from_file(path_str)
                .with_context(|| format!("load config {path_str}"))?
        }
        None => PreviewConfig::default(),
    };
    config.validate().context("validate config")?;
    Ok(config)
}
