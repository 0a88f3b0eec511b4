//! Layout engine for composed artwork.
//!
//! Given the fixed logomark geometry and the metrics of a rendered text run,
//! computes the canvas size and the translation of every element for each
//! composition. Canvas dimensions are rounded up to whole units so nothing
//! is clipped when the artwork is rasterized at 1x.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geometry::{BBox, Point};
use crate::logomark::LogomarkSpec;
use crate::text::FontMetrics;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("Invalid text metrics: {field} = {value}")]
    InvalidMetrics { field: &'static str, value: f64 },
}

/// The kinds of composed artwork.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Composition {
    /// Logomark on the left, text to its right, vertically centered.
    Horizontal,
    /// Logomark on top, text below.
    Vertical,
    /// Text only.
    Logotype,
}

impl Composition {
    pub const ALL: [Composition; 3] = [
        Composition::Horizontal,
        Composition::Vertical,
        Composition::Logotype,
    ];

    /// File stem used for emitted artifacts.
    pub fn stem(&self) -> &'static str {
        match self {
            Composition::Horizontal => "lockup-horizontal",
            Composition::Vertical => "lockup-vertical",
            Composition::Logotype => "logotype",
        }
    }

    /// Human-readable title used in artifact comments.
    pub fn title(&self) -> &'static str {
        match self {
            Composition::Horizontal => "Lockup Horizontal",
            Composition::Vertical => "Lockup Vertical",
            Composition::Logotype => "Logotype",
        }
    }

    pub fn has_logomark(&self) -> bool {
        !matches!(self, Composition::Logotype)
    }
}

impl fmt::Display for Composition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.stem())
    }
}

/// A positioned element of a composition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Element {
    Logomark,
    Text,
}

/// Canvas size and element placement for one composition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositionLayout {
    pub composition: Composition,
    pub canvas_width: f64,
    pub canvas_height: f64,
    /// Translation applied to each element present in the composition.
    pub offsets: BTreeMap<Element, Point>,
}

impl CompositionLayout {
    pub fn offset(&self, element: Element) -> Option<Point> {
        self.offsets.get(&element).copied()
    }

    /// Union of the placed element boxes.
    pub fn content_bounds(&self, logomark: &LogomarkSpec, text: &FontMetrics) -> Option<BBox> {
        self.offsets
            .iter()
            .map(|(element, at)| match element {
                Element::Logomark => BBox::from_origin(*at, logomark.width, logomark.height),
                Element::Text => BBox::from_origin(*at, text.width, text.height),
            })
            .reduce(|acc, b| acc.union(&b))
    }
}

/// Spacing constants for composing the logomark with text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutEngine {
    /// Space between logomark and text in the horizontal lockup.
    pub horizontal_gap: f64,
    /// Space between logomark and text in the vertical lockup.
    pub vertical_gap: f64,
    /// Extra width reserved around the logomark in the vertical lockup.
    /// An empirical constant for the mark's offset bars, not derived.
    pub logomark_visual_offset: f64,
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self {
            horizontal_gap: 2.0,
            vertical_gap: 16.0,
            logomark_visual_offset: 8.2,
        }
    }
}

impl LayoutEngine {
    pub fn layout(
        &self,
        composition: Composition,
        logomark: &LogomarkSpec,
        text: &FontMetrics,
    ) -> Result<CompositionLayout, LayoutError> {
        text.validate()?;
        let layout = match composition {
            Composition::Horizontal => self.horizontal(logomark, text),
            Composition::Vertical => self.vertical(logomark, text),
            Composition::Logotype => self.logotype(text),
        };
        log::debug!(
            "{} layout: {}x{} canvas, offsets {:?}",
            composition,
            layout.canvas_width,
            layout.canvas_height,
            layout.offsets
        );
        Ok(layout)
    }

    fn horizontal(&self, logomark: &LogomarkSpec, text: &FontMetrics) -> CompositionLayout {
        let text_x = logomark.width + self.horizontal_gap;
        // May go negative when the text is taller than the mark.
        let text_y = (logomark.height - text.height) / 2.0;

        CompositionLayout {
            composition: Composition::Horizontal,
            canvas_width: (text_x + text.width).ceil(),
            canvas_height: logomark.height.max(text.height).ceil(),
            offsets: BTreeMap::from([
                (Element::Logomark, Point::ORIGIN),
                (Element::Text, Point::new(text_x, text_y)),
            ]),
        }
    }

    fn vertical(&self, logomark: &LogomarkSpec, text: &FontMetrics) -> CompositionLayout {
        let width = (logomark.width + self.logomark_visual_offset).max(text.width.ceil());
        let text_y = logomark.height + self.vertical_gap;

        // Centering uses the unrounded width; only the canvas is rounded.
        CompositionLayout {
            composition: Composition::Vertical,
            canvas_width: width.ceil(),
            canvas_height: text_y + text.height.ceil(),
            offsets: BTreeMap::from([
                (Element::Logomark, Point::new((width - logomark.width) / 2.0, 0.0)),
                (Element::Text, Point::new((width - text.width) / 2.0, text_y)),
            ]),
        }
    }

    fn logotype(&self, text: &FontMetrics) -> CompositionLayout {
        CompositionLayout {
            composition: Composition::Logotype,
            canvas_width: text.width.ceil(),
            canvas_height: text.height.ceil(),
            offsets: BTreeMap::from([(Element::Text, Point::ORIGIN)]),
        }
    }
}
