// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use clap::{Parser, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info, warn, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

use pptranslate::app_config::{Config, LogLevel};
use pptranslate::job::{JobCredentials, JobEvent, TranslationJob};

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => LogLevel::Error,
            CliLogLevel::Warn => LogLevel::Warn,
            CliLogLevel::Info => LogLevel::Info,
            CliLogLevel::Debug => LogLevel::Debug,
            CliLogLevel::Trace => LogLevel::Trace,
        }
    }
}

/// pptranslate - PPTX presentation translator
///
/// Translates the English text of a PowerPoint presentation into another
/// language while preserving the document's visual formatting. Writes a
/// translated copy of the document plus a plain-text log of every translated
/// passage next to the input file.
#[derive(Parser, Debug)]
#[command(name = "pptranslate")]
#[command(version = "0.1.0")]
#[command(about = "Formatting-preserving PPTX translation tool")]
#[command(long_about = "pptranslate walks a .pptx file slide by slide, sends English paragraphs
to the Baidu translation API and writes a translated copy alongside a
plain-text audit log.

EXAMPLES:
    pptranslate deck.pptx --app-id ID --secret-key KEY
    BAIDU_APP_ID=ID BAIDU_SECRET_KEY=KEY pptranslate deck.pptx
    pptranslate -s en -t zh deck.pptx          # explicit language pair
    pptranslate --log-level debug deck.pptx    # verbose logging

CONFIGURATION:
    Languages, the API endpoint and the log level are stored in conf.json by
    default (created automatically when missing). Credentials are never
    written to the config file; pass them per run via flags or environment.")]
struct CommandLineOptions {
    /// Input presentation file (.pptx)
    #[arg(value_name = "INPUT_PATH")]
    input_path: PathBuf,

    /// Baidu translate APP ID
    #[arg(long, env = "BAIDU_APP_ID", default_value = "", hide_default_value = true)]
    app_id: String,

    /// Baidu translate secret key
    #[arg(long, env = "BAIDU_SECRET_KEY", default_value = "", hide_default_value = true)]
    secret_key: String,

    /// Source language code (e.g., 'en')
    #[arg(short, long)]
    source_language: Option<String>,

    /// Target language code (e.g., 'zh')
    #[arg(short, long)]
    target_language: Option<String>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S%.3f");
            let color = Self::color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "{}{} {}\x1B[0m", color, now, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the logger once with info level by default.
    // The level is updated after loading the config if needed.
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();
    run_translate(cli).await
}

async fn run_translate(options: CommandLineOptions) -> Result<()> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        let log_level: LogLevel = cmd_log_level.clone().into();
        log::set_max_level(log_level.to_level_filter());
    }

    // Load or create configuration
    let mut config = if Path::new(&options.config_path).exists() {
        Config::from_file(&options.config_path)?
    } else {
        warn!(
            "Config file not found at '{}', creating default config.",
            options.config_path
        );
        let config = Config::default();
        if let Err(e) = config.write_to_file(&options.config_path) {
            warn!("Failed to write default config: {}", e);
        }
        config
    };

    // Override config with CLI options if provided
    if let Some(source_language) = &options.source_language {
        config.source_language = source_language.clone();
    }
    if let Some(target_language) = &options.target_language {
        config.target_language = target_language.clone();
    }
    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    }
    log::set_max_level(config.log_level.to_level_filter());

    info!(
        "pptranslate: {} -> {}",
        config.source_language, config.target_language
    );

    // Validation happens here, before anything starts running
    let credentials = JobCredentials::new(options.app_id.trim(), options.secret_key.trim());
    let job = TranslationJob::new(credentials, options.input_path, &config)
        .map_err(|e| anyhow!("{}", e))?;

    // The job owns the document on its own task; this thread only drains the
    // event channel and renders progress.
    let mut handle = job.start();

    let progress_bar = ProgressBar::new(100);
    let template_result = ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {percent}% {msg}")
        .or_else(|_| ProgressStyle::default_bar().template("[{elapsed_precise}] [{bar:40}] {percent}% {msg}"))
        .unwrap_or_else(|_| ProgressStyle::default_bar());
    progress_bar.set_style(template_result.progress_chars("█▓▒░"));
    progress_bar.set_message("Translating");

    let mut failure: Option<String> = None;
    while let Some(event) = handle.events.recv().await {
        if let Some(percent) = event.percent() {
            progress_bar.set_position(percent.round() as u64);
            continue;
        }
        match event {
            JobEvent::Progress { .. } => {}
            JobEvent::Completed {
                output_path,
                log_path,
            } => {
                progress_bar.finish_and_clear();
                info!("Success: {}", output_path.display());
                info!("Translation log: {}", log_path.display());
            }
            JobEvent::Failed { error } => {
                progress_bar.finish_and_clear();
                error!("Translation failed: {}", error);
                failure = Some(error);
            }
        }
    }

    handle.task.await?;

    match failure {
        Some(error) => Err(anyhow!(error)),
        None => Ok(()),
    }
}
