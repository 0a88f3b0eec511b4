//! # brandkit I/O
//!
//! The collaborators around the layout engine: font loading and glyph
//! outlines (via `ttf-parser`), the SVG and HTML writers, artifact emitters,
//! and the JSON configuration file.

pub mod config;
pub mod emit;
pub mod glyph;
pub mod html;
pub mod svg;

pub use config::{BrandConfig, ConfigError, ExplorationConfig, FontEntry};
pub use emit::{DirEmitter, EmitError, Emitter, MemoryEmitter};
pub use glyph::{FontLoader, GlyphError, GlyphSource, TextMetrics, TextRun, TtfFont, TtfLoader};
pub use html::{CatalogEntry, ExplorationPage};
pub use svg::{Credits, SvgDocument, SvgError, SvgWriter};
