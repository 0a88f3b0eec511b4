use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use brandkit_core::layout::LayoutEngine;
use brandkit_core::text::TextOptions;
use brandkit_core::variant::ColorVariant;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Malformed config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Settings for the brand lockup generator and the font exploration sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrandConfig {
    pub brand_name: String,
    pub homepage: String,
    /// Prefix for every emitted SVG file name.
    pub file_prefix: String,
    /// Text set next to the logomark in lockups.
    pub wordmark: String,
    /// Text of the standalone logotype.
    pub full_name: String,
    /// How the font is described in file comments.
    pub font_label: String,
    pub font_path: PathBuf,
    pub output_dir: PathBuf,
    pub text: TextOptions,
    /// Spacing used to compose lockups.
    pub layout: LayoutEngine,
    pub variants: Vec<ColorVariant>,
    pub exploration: ExplorationConfig,
}

impl Default for BrandConfig {
    fn default() -> Self {
        Self {
            brand_name: "Bitcraft".to_string(),
            homepage: "https://github.com/bitcraft-apps/brand".to_string(),
            file_prefix: "bitcraft".to_string(),
            wordmark: "itcraft".to_string(),
            full_name: "Bitcraft".to_string(),
            font_label: "Poppins SemiBold".to_string(),
            font_path: PathBuf::from("scripts/fonts/Poppins.ttf"),
            output_dir: PathBuf::from("logo"),
            text: TextOptions::default(),
            layout: LayoutEngine::default(),
            variants: ColorVariant::standard_set(),
            exploration: ExplorationConfig::default(),
        }
    }
}

/// A candidate font for the exploration sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontEntry {
    pub name: String,
    /// File name relative to `fonts_dir`.
    pub file: String,
    /// Short description shown on the comparison card.
    pub style: String,
}

impl FontEntry {
    pub fn new(name: &str, file: &str, style: &str) -> Self {
        Self {
            name: name.to_string(),
            file: file.to_string(),
            style: style.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplorationConfig {
    pub fonts_dir: PathBuf,
    pub output_dir: PathBuf,
    pub html_file: String,
    /// Logomark color on dark preview cards.
    pub accent_color: String,
    /// Logomark and text color on light preview cards.
    pub brand_color: String,
    /// Overrides the lockup text options for the sweep.
    pub text: TextOptions,
    pub fonts: Vec<FontEntry>,
}

impl Default for ExplorationConfig {
    fn default() -> Self {
        Self {
            fonts_dir: PathBuf::from("scripts/fonts"),
            output_dir: PathBuf::from("logo/exploration"),
            html_file: "logotype-exploration.html".to_string(),
            accent_color: "#6B8E23".to_string(),
            brand_color: "#556B2F".to_string(),
            text: TextOptions {
                fill_attribute: Some("currentColor".to_string()),
                ..TextOptions::default()
            },
            fonts: vec![
                FontEntry::new("Inter", "Inter.ttf", "Clean, neutral, highly legible"),
                FontEntry::new("Outfit", "Outfit.ttf", "Modern geometric, friendly"),
                FontEntry::new("Plus Jakarta Sans", "PlusJakartaSans.ttf", "Contemporary, professional"),
                FontEntry::new("Manrope", "Manrope.ttf", "Geometric with character"),
                FontEntry::new("Work Sans", "WorkSans.ttf", "Neutral, workhorse"),
                FontEntry::new("Space Grotesk", "SpaceGrotesk.ttf", "Techy, distinctive"),
                FontEntry::new("Sora", "Sora.ttf", "Modern, slightly rounded"),
                FontEntry::new("DM Sans", "DMSans.ttf", "Clean geometric"),
                FontEntry::new("Poppins", "Poppins.ttf", "Popular, geometric"),
                FontEntry::new("Rubik", "Rubik.ttf", "Rounded, approachable"),
            ],
        }
    }
}

impl ExplorationConfig {
    pub fn font_path(&self, font: &FontEntry) -> PathBuf {
        self.fonts_dir.join(&font.file)
    }
}

impl BrandConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&json)?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.variants.is_empty() {
            return Err(ConfigError::Invalid("at least one color variant is required".into()));
        }
        let mut suffixes = HashSet::new();
        for variant in &self.variants {
            if !suffixes.insert(variant.suffix.as_str()) {
                return Err(ConfigError::Invalid(format!(
                    "duplicate variant suffix '{}'",
                    variant.suffix
                )));
            }
        }
        for (label, options) in [("text", &self.text), ("exploration.text", &self.exploration.text)] {
            if !(options.font_size.is_finite() && options.font_size > 0.0) {
                return Err(ConfigError::Invalid(format!(
                    "{label}.font_size must be positive, got {}",
                    options.font_size
                )));
            }
        }
        let layout = &self.layout;
        for (label, value) in [
            ("horizontal_gap", layout.horizontal_gap),
            ("vertical_gap", layout.vertical_gap),
            ("logomark_visual_offset", layout.logomark_visual_offset),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::Invalid(format!(
                    "layout.{label} must be a non-negative number, got {value}"
                )));
            }
        }
        Ok(())
    }
}
