use anyhow::{Context, Result};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use log::{error, info, warn};
use std::path::{Path, PathBuf};

use crate::app_config::Config;
use crate::file_utils::FileManager;
use crate::language_utils::language_codes_match;
use crate::pipeline::{LyricsPipeline, TranslationReport};
use crate::text::normalize::{clean_lyrics_metadata, SongQuery};
use crate::translation_service::TranslationService;

// @module: Application controller for lyrics translation

/// Main application controller for lyrics translation and alignment
pub struct Controller {
    // @field: App configuration
    config: Config,
    // @field: Translation provider service
    service: TranslationService,
    // @field: Per-request text pipeline
    pipeline: LyricsPipeline,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        let service = TranslationService::from_config(&config.translation)?;
        Ok(Self::with_service(config, service))
    }

    /// Create a controller over an explicit translation service - used by
    /// tests to inject a mock provider
    pub fn with_service(config: Config, service: TranslationService) -> Self {
        let pipeline = LyricsPipeline::new(config.detection.build_detector(), config.vocabulary_mode);
        Self {
            config,
            service,
            pipeline,
        }
    }

    /// Check if the controller is properly initialized with configuration
    pub fn is_initialized(&self) -> bool {
        !self.config.source_language.is_empty() && !self.config.target_language.is_empty()
    }

    /// Translate and align one block of lyrics.
    ///
    /// Cleans scraper metadata lines, resolves the source language (the
    /// configured code, or detection when set to "auto"), obtains the
    /// translation from the provider, and runs the alignment pipeline.
    /// A supplied song query is normalized and attached to the report.
    pub async fn run_text(
        &self,
        original_text: &str,
        query: Option<SongQuery>,
    ) -> Result<TranslationReport> {
        let cleaned = clean_lyrics_metadata(original_text);

        let source_language = if self.config.source_language == "auto" {
            self.pipeline.detect(&cleaned).to_string()
        } else {
            self.config.source_language.clone()
        };

        if language_codes_match(&source_language, &self.config.target_language) {
            warn!(
                "Source and target languages match ({}), translation will be a no-op",
                source_language
            );
        }

        let translated = self
            .service
            .translate_text(&cleaned, &source_language, &self.config.target_language)
            .await
            .with_context(|| {
                format!(
                    "Translation failed ({} -> {})",
                    source_language, self.config.target_language
                )
            })?;

        let mut report = self.pipeline.process(&cleaned, &translated);

        if let Some(query) = query {
            let normalized = query.normalized();
            info!("Processed \"{}\" by {}", query.display_title(), normalized.artist);
            if !normalized.artist.is_empty() {
                report.artist = Some(normalized.artist);
            }
            report.title = Some(query.display_title());
        }

        Ok(report)
    }

    /// Process one lyric text file and write the report next to it.
    pub async fn run_file(
        &self,
        input_file: PathBuf,
        output_dir: PathBuf,
        force_overwrite: bool,
        query: Option<SongQuery>,
    ) -> Result<()> {
        if !input_file.exists() {
            return Err(anyhow::anyhow!("Input file does not exist: {:?}", input_file));
        }

        FileManager::ensure_dir(&output_dir)?;

        let output_path = FileManager::generate_output_path(
            &input_file,
            &output_dir,
            &self.config.target_language,
            "json",
        );
        if output_path.exists() && !force_overwrite {
            warn!("Skipping file, report already exists (use -f to force overwrite)");
            return Ok(());
        }

        let content = FileManager::read_to_string(&input_file)?;
        let report = self.run_text(&content, query).await?;

        let json = serde_json::to_string_pretty(&report)
            .context("Failed to serialize translation report")?;
        FileManager::write_to_file(&output_path, &json)?;

        info!(
            "Wrote report with {} line pairs: {:?}",
            report.line_pairs.len(),
            output_path
        );

        Ok(())
    }

    /// Process every lyric text file in a directory.
    ///
    /// Failures are logged per file and do not stop the batch; a summary
    /// line is appended to the run log in the input directory.
    pub async fn run_folder(&self, input_dir: PathBuf, force_overwrite: bool) -> Result<()> {
        if !input_dir.is_dir() {
            return Err(anyhow::anyhow!("Input directory does not exist: {:?}", input_dir));
        }

        let files = FileManager::find_files(&input_dir, "txt")?;
        if files.is_empty() {
            warn!("No lyric text files found in {:?}", input_dir);
            return Ok(());
        }

        let multi_progress = MultiProgress::new();
        let progress = multi_progress.add(ProgressBar::new(files.len() as u64));
        progress.set_style(
            ProgressStyle::with_template("{bar:40.cyan/blue} {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );

        let mut processed = 0;
        let mut failed = 0;

        for file in &files {
            progress.set_message(
                file.file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_default(),
            );

            let output_dir = file
                .parent()
                .unwrap_or(Path::new("."))
                .to_path_buf();
            let query = file
                .file_stem()
                .map(|stem| SongQuery::new("", stem.to_string_lossy()));

            match self
                .run_file(file.clone(), output_dir, force_overwrite, query)
                .await
            {
                Ok(()) => processed += 1,
                Err(e) => {
                    error!("Error processing {:?}: {}", file, e);
                    failed += 1;
                }
            }

            progress.inc(1);
        }

        progress.finish_with_message("done");

        let summary = format!(
            "Processed {} of {} files ({} failed)",
            processed,
            files.len(),
            failed
        );
        info!("{}", summary);
        FileManager::append_to_log_file(input_dir.join("lyriclens.log"), &summary)?;

        Ok(())
    }
}
