//! Orchestration of the two generators.
//!
//! `generate_lockups` renders every composition of the brand font in every
//! color variant. `explore` sweeps a list of candidate fonts and collects a
//! catalog for the HTML comparison sheet, skipping fonts that fail to load.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use brandkit_core::layout::{Composition, LayoutError};
use brandkit_core::logomark::LogomarkSpec;
use brandkit_core::variant::{expand, Artifact};
use brandkit_io::config::BrandConfig;
use brandkit_io::emit::{EmitError, Emitter};
use brandkit_io::glyph::{FontLoader, GlyphError, GlyphSource, TextRun};
use brandkit_io::html::{CatalogEntry, ExplorationPage};
use brandkit_io::svg::{Credits, SvgDocument, SvgError};

// ── Errors ────────────────────────────────────────────────────────────

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Missing font resource: {}", .0.display())]
    MissingFontResource(PathBuf),

    #[error(transparent)]
    Glyph(GlyphError),

    #[error("Cannot lay out {composition}: {source}")]
    InvalidMetrics {
        composition: Composition,
        #[source]
        source: LayoutError,
    },

    #[error("Output write failure: {0}")]
    OutputWriteFailure(#[from] EmitError),

    #[error("Failed to render {composition}: {source}")]
    Render {
        composition: Composition,
        #[source]
        source: SvgError,
    },

    #[error("Failed to render exploration page")]
    Page(#[from] fmt::Error),
}

impl From<GlyphError> for PipelineError {
    fn from(err: GlyphError) -> Self {
        match err {
            GlyphError::MissingFont(path) => PipelineError::MissingFontResource(path),
            other => PipelineError::Glyph(other),
        }
    }
}

// ── Lockups ───────────────────────────────────────────────────────────

/// Outcome of a lockup run.
#[derive(Debug, Default)]
pub struct LockupSummary {
    /// File names in emission order.
    pub written: Vec<String>,
    /// Compositions skipped because their text metrics were unusable.
    pub aborted: Vec<PipelineError>,
}

/// Renders horizontal, vertical and logotype artwork in every configured
/// variant. A missing font is fatal; unusable metrics skip only the
/// affected composition; a write failure stops the run.
pub fn generate_lockups<L, E>(
    config: &BrandConfig,
    loader: &L,
    emitter: &mut E,
) -> Result<LockupSummary, PipelineError>
where
    L: FontLoader,
    E: Emitter,
{
    let font = loader.load(&config.font_path)?;
    let wordmark = font.run(&config.wordmark, &config.text)?;
    let full_name = font.run(&config.full_name, &config.text)?;
    let logomark = LogomarkSpec::standard();

    let mut summary = LockupSummary::default();
    for composition in Composition::ALL {
        let text = match composition {
            Composition::Logotype => &full_name,
            _ => &wordmark,
        };
        let artifacts = match compose(config, &logomark, composition, text) {
            Ok(artifacts) => artifacts,
            Err(err @ PipelineError::InvalidMetrics { .. }) => {
                log::error!("{err}");
                summary.aborted.push(err);
                continue;
            }
            Err(err) => return Err(err),
        };
        for artifact in &artifacts {
            emitter.emit(artifact)?;
            log::info!("Created: {}", artifact.filename);
            summary.written.push(artifact.filename.clone());
        }
    }

    log::info!(
        "{} files generated, {} compositions skipped",
        summary.written.len(),
        summary.aborted.len()
    );
    Ok(summary)
}

/// Lays out one composition and expands it into its color variants.
pub fn compose(
    config: &BrandConfig,
    logomark: &LogomarkSpec,
    composition: Composition,
    text: &TextRun,
) -> Result<Vec<Artifact>, PipelineError> {
    let layout = config
        .layout
        .layout(composition, logomark, &text.size())
        .map_err(|source| PipelineError::InvalidMetrics {
            composition,
            source,
        })?;
    let base_name = format!("{}-{}", config.file_prefix, composition.stem());
    let doc = SvgDocument::new(&base_name, layout, logomark, text, credits(config, composition));
    expand(&doc, &config.variants).map_err(|source| PipelineError::Render {
        composition,
        source,
    })
}

fn credits(config: &BrandConfig, composition: Composition) -> Credits {
    let blurb = match composition {
        Composition::Horizontal => {
            format!("Logomark + \"{}\" in {}", config.wordmark, config.font_label)
        }
        Composition::Vertical => format!(
            "Logomark stacked above \"{}\" in {}",
            config.wordmark, config.font_label
        ),
        Composition::Logotype => format!(
            "\"{}\" in {} (text converted to paths)",
            config.full_name, config.font_label
        ),
    };
    Credits {
        brand_name: config.brand_name.clone(),
        homepage: config.homepage.clone(),
        blurb,
    }
}

// ── Exploration ───────────────────────────────────────────────────────

/// A font left out of the exploration sheet.
#[derive(Debug)]
pub struct SkippedFont {
    pub name: String,
    pub path: PathBuf,
    pub reason: PipelineError,
}

#[derive(Debug, Default)]
pub struct ExplorationReport {
    pub entries: Vec<CatalogEntry>,
    pub skipped: Vec<SkippedFont>,
}

impl ExplorationReport {
    pub fn candidate_count(&self) -> usize {
        self.entries.len() + self.skipped.len()
    }
}

/// Shapes the wordmark and full name in every candidate font. Fonts that
/// cannot be loaded or shaped are reported and skipped.
pub fn explore<L: FontLoader>(config: &BrandConfig, loader: &L) -> ExplorationReport {
    let exploration = &config.exploration;
    let mut report = ExplorationReport::default();

    for (i, font) in exploration.fonts.iter().enumerate() {
        let path = exploration.font_path(font);
        let shaped = loader.load(&path).and_then(|face| {
            let wordmark = face.run(&config.wordmark, &exploration.text)?;
            let full_name = face.run(&config.full_name, &exploration.text)?;
            Ok((wordmark, full_name))
        });

        match shaped {
            Ok((wordmark, full_name)) => {
                let size = wordmark.size();
                log::info!(
                    "Generated: {} ({}: {}x{})",
                    font.name,
                    config.wordmark,
                    size.width.round(),
                    size.height.round()
                );
                report.entries.push(CatalogEntry {
                    index: i + 1,
                    name: font.name.clone(),
                    style: font.style.clone(),
                    wordmark,
                    full_name,
                });
            }
            Err(err) => {
                let reason = PipelineError::from(err);
                log::warn!("Skipping {}: {}", font.name, reason);
                report.skipped.push(SkippedFont {
                    name: font.name.clone(),
                    path,
                    reason,
                });
            }
        }
    }

    report
}

/// Runs the sweep and emits the comparison sheet.
pub fn write_exploration<L, E>(
    config: &BrandConfig,
    loader: &L,
    emitter: &mut E,
) -> Result<ExplorationReport, PipelineError>
where
    L: FontLoader,
    E: Emitter,
{
    let report = explore(config, loader);
    let logomark = LogomarkSpec::standard();
    let page = ExplorationPage {
        brand_name: &config.brand_name,
        wordmark: &config.wordmark,
        accent_color: &config.exploration.accent_color,
        brand_color: &config.exploration.brand_color,
        logomark: &logomark,
        entries: &report.entries,
        candidate_count: report.candidate_count(),
    };
    let html = page.render()?;
    emitter.emit(&Artifact::new(config.exploration.html_file.clone(), html))?;

    log::info!("Generated: {}", config.exploration.html_file);
    log::info!(
        "Open in browser to compare {} font options ({} skipped)",
        report.entries.len(),
        report.skipped.len()
    );
    Ok(report)
}
