//! # brandkit core
//!
//! Pure layout math for brand artwork: the fixed logomark geometry, text
//! options and metrics, the layout engine that composes lockups and
//! logotypes, and the color variant expander.
//!
//! Nothing in this crate performs I/O. Glyph outlines, markup writing and
//! file emission live in `brandkit-io`.

pub mod geometry;
pub mod layout;
pub mod logomark;
pub mod text;
pub mod variant;

pub use geometry::{BBox, Point, RoundedRect};
pub use layout::{Composition, CompositionLayout, Element, LayoutEngine, LayoutError};
pub use logomark::LogomarkSpec;
pub use text::{Anchor, FontMetrics, HorizontalAnchor, TextOptions, VerticalAnchor};
pub use variant::{expand, Artifact, ColorVariant, VariantTemplate};
