// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{anyhow, Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{warn, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::fs::File;
use std::io::BufReader;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::app_config::{Config, TranslationProviderKind};
use crate::text::normalize::SongQuery;
use crate::text::vocabulary::VocabularyMode;
use app_controller::Controller;

mod app_config;
mod app_controller;
mod errors;
mod file_utils;
mod language_utils;
mod pipeline;
mod providers;
mod text;
mod translation_service;

/// CLI Wrapper for TranslationProviderKind to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliTranslationProvider {
    Google,
    Mock,
}

impl From<CliTranslationProvider> for TranslationProviderKind {
    fn from(cli_provider: CliTranslationProvider) -> Self {
        match cli_provider {
            CliTranslationProvider::Google => TranslationProviderKind::Google,
            CliTranslationProvider::Mock => TranslationProviderKind::Mock,
        }
    }
}

/// CLI Wrapper for VocabularyMode to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliVocabularyMode {
    Glossary,
    PerOccurrence,
}

impl From<CliVocabularyMode> for VocabularyMode {
    fn from(cli_mode: CliVocabularyMode) -> Self {
        match cli_mode {
            CliVocabularyMode::Glossary => VocabularyMode::Glossary,
            CliVocabularyMode::PerOccurrence => VocabularyMode::PerOccurrence,
        }
    }
}

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Translate and align song lyrics (default command)
    #[command(alias = "translate")]
    Translate(TranslateArgs),

    /// Generate shell completions for lyriclens
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct TranslateArgs {
    /// Input lyric text file or directory to process
    #[arg(value_name = "INPUT_PATH")]
    input_path: Option<PathBuf>,

    /// Translate pasted lyrics instead of a file; report goes to stdout
    #[arg(long, conflicts_with = "input_path")]
    text: Option<String>,

    /// Artist name, used to label the report
    #[arg(long)]
    artist: Option<String>,

    /// Song title, used to label the report
    #[arg(long)]
    title: Option<String>,

    /// Force overwrite of existing output files
    #[arg(short, long)]
    force_overwrite: bool,

    /// Translation provider to use
    #[arg(short, long, value_enum)]
    provider: Option<CliTranslationProvider>,

    /// Source language code (e.g., 'es', 'pt'), or 'auto' to detect
    #[arg(short, long)]
    source_language: Option<String>,

    /// Target language code (e.g., 'en', 'fr')
    #[arg(short, long)]
    target_language: Option<String>,

    /// Vocabulary output variant
    #[arg(long, value_enum)]
    vocabulary_mode: Option<CliVocabularyMode>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// lyriclens - bilingual lyrics alignment
///
/// Translates song lyrics and produces a line-level bilingual alignment
/// plus a study vocabulary, for language learning through music.
#[derive(Parser, Debug)]
#[command(name = "lyriclens")]
#[command(version = "1.0.0")]
#[command(about = "Lyrics translation and alignment tool")]
#[command(long_about = "lyriclens translates song lyrics and pairs every original line with its \
translation, deriving a word glossary along the way.

EXAMPLES:
    lyriclens lyrics.txt                        # Translate one lyric file
    lyriclens --text \"Hola mundo\"               # Translate pasted lyrics to stdout
    lyriclens -s es -t fr lyrics.txt            # Explicit language pair
    lyriclens --vocabulary-mode per-occurrence lyrics.txt
    lyriclens /music/lyrics/                    # Process a whole directory
    lyriclens completions bash > lyriclens.bash # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config-path. If the config file doesn't exist, a default
    one will be created automatically.

SUPPORTED PROVIDERS:
    google - Free Google web translation endpoint (no API key)
    mock   - Offline echo provider, for testing")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input lyric text file or directory to process
    #[arg(value_name = "INPUT_PATH")]
    input_path: Option<PathBuf>,

    /// Translate pasted lyrics instead of a file; report goes to stdout
    #[arg(long, conflicts_with = "input_path")]
    text: Option<String>,

    /// Artist name, used to label the report
    #[arg(long)]
    artist: Option<String>,

    /// Song title, used to label the report
    #[arg(long)]
    title: Option<String>,

    /// Force overwrite of existing output files
    #[arg(short, long)]
    force_overwrite: bool,

    /// Translation provider to use
    #[arg(short, long, value_enum)]
    provider: Option<CliTranslationProvider>,

    /// Source language code (e.g., 'es', 'pt'), or 'auto' to detect
    #[arg(short, long)]
    source_language: Option<String>,

    /// Target language code (e.g., 'en', 'fr')
    #[arg(short, long)]
    target_language: Option<String>,

    /// Vocabulary output variant
    #[arg(long, value_enum)]
    vocabulary_mode: Option<CliVocabularyMode>,

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
    fn get_color_for_level(level: Level) -> &'static str {
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
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let color = Self::get_color_for_level(record.level());

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
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    // Parse command line arguments using clap
    let cli = CommandLineOptions::parse();

    // Handle subcommands
    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "lyriclens", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Translate(args)) => run_translate(args).await,
        None => {
            // Default behavior - use top-level args
            let translate_args = TranslateArgs {
                input_path: cli.input_path,
                text: cli.text,
                artist: cli.artist,
                title: cli.title,
                force_overwrite: cli.force_overwrite,
                provider: cli.provider,
                source_language: cli.source_language,
                target_language: cli.target_language,
                vocabulary_mode: cli.vocabulary_mode,
                config_path: cli.config_path,
                log_level: cli.log_level,
            };
            run_translate(translate_args).await
        }
    }
}

async fn run_translate(options: TranslateArgs) -> Result<()> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        let config_log_level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level_filter_for(&config_log_level));
    }

    // Load or create configuration; fall back to the user config directory
    // when the given path does not exist
    let config_path = if Path::new(&options.config_path).exists() {
        PathBuf::from(&options.config_path)
    } else {
        match Config::default_config_dir_path() {
            Some(user_path) if user_path.exists() => user_path,
            _ => PathBuf::from(&options.config_path),
        }
    };
    let mut config = if config_path.exists() {
        // Load existing configuration
        let file = File::open(&config_path)
            .context(format!("Failed to open config file: {:?}", config_path))?;

        let reader = BufReader::new(file);
        serde_json::from_reader(reader)
            .context(format!("Failed to parse config file: {:?}", config_path))?
    } else {
        // Create default configuration if not exists
        warn!("Config file not found at {:?}, creating default config.", config_path);

        let config = Config::default();
        let config_json = serde_json::to_string_pretty(&config)
            .context("Failed to serialize default config to JSON")?;

        std::fs::write(&config_path, config_json)
            .context(format!("Failed to write default config to file: {:?}", config_path))?;

        config
    };

    // Override config with CLI options if provided
    if let Some(provider) = &options.provider {
        config.translation.provider = provider.clone().into();
    }
    if let Some(source_lang) = &options.source_language {
        config.source_language = source_lang.clone();
    }
    if let Some(target_lang) = &options.target_language {
        config.target_language = target_lang.clone();
    }
    if let Some(mode) = &options.vocabulary_mode {
        config.vocabulary_mode = mode.clone().into();
    }
    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    }

    // Validate the configuration after loading and overriding
    config.validate().context("Configuration validation failed")?;

    // If log level was not set via command line, update it from config now
    if options.log_level.is_none() {
        log::set_max_level(level_filter_for(&config.log_level));
    }

    // Create controller
    let controller = Controller::with_config(config)?;

    // Song query from CLI labels, if any
    let query = match (&options.artist, &options.title) {
        (None, None) => None,
        (artist, title) => Some(SongQuery::new(
            artist.clone().unwrap_or_default(),
            title.clone().unwrap_or_default(),
        )),
    };

    // Pasted lyrics go straight to stdout
    if let Some(text) = &options.text {
        let report = controller.run_text(text, query).await?;
        let json = serde_json::to_string_pretty(&report)
            .context("Failed to serialize translation report")?;
        println!("{}", json);
        return Ok(());
    }

    // Run the controller with the input file(s)
    let input_path = options
        .input_path
        .ok_or_else(|| anyhow!("INPUT_PATH or --text is required"))?;

    if input_path.is_file() {
        // Process a single file
        let output_dir = input_path
            .parent()
            .unwrap_or(Path::new("."))
            .to_path_buf();
        controller
            .run_file(input_path, output_dir, options.force_overwrite, query)
            .await
    } else if input_path.is_dir() {
        // Process a directory
        controller.run_folder(input_path, options.force_overwrite).await
    } else {
        Err(anyhow!("Input path does not exist: {:?}", input_path))
    }
}

fn level_filter_for(level: &app_config::LogLevel) -> LevelFilter {
    match level {
        app_config::LogLevel::Error => LevelFilter::Error,
        app_config::LogLevel::Warn => LevelFilter::Warn,
        app_config::LogLevel::Info => LevelFilter::Info,
        app_config::LogLevel::Debug => LevelFilter::Debug,
        app_config::LogLevel::Trace => LevelFilter::Trace,
    }
}
