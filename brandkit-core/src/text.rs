use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::layout::LayoutError;

/// Horizontal anchor of a text run relative to its `x` coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HorizontalAnchor {
    #[default]
    Left,
    Center,
    Right,
}

/// Vertical anchor of a text run relative to its `y` coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerticalAnchor {
    #[default]
    Baseline,
    Top,
    Middle,
    Bottom,
}

/// Text anchor, written as `"<horizontal> <vertical>"`, e.g. `"left top"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Anchor {
    pub horizontal: HorizontalAnchor,
    pub vertical: VerticalAnchor,
}

impl Anchor {
    pub const LEFT_TOP: Anchor = Anchor {
        horizontal: HorizontalAnchor::Left,
        vertical: VerticalAnchor::Top,
    };
}

#[derive(Error, Debug, Clone, PartialEq)]
#[error("Invalid anchor '{0}': expected '<left|center|right> <baseline|top|middle|bottom>'")]
pub struct AnchorParseError(pub String);

impl FromStr for Anchor {
    type Err = AnchorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut horizontal = None;
        let mut vertical = None;
        for token in s.split_whitespace() {
            let (h, v) = match token {
                "left" => (Some(HorizontalAnchor::Left), None),
                "center" => (Some(HorizontalAnchor::Center), None),
                "right" => (Some(HorizontalAnchor::Right), None),
                "baseline" => (None, Some(VerticalAnchor::Baseline)),
                "top" => (None, Some(VerticalAnchor::Top)),
                "middle" => (None, Some(VerticalAnchor::Middle)),
                "bottom" => (None, Some(VerticalAnchor::Bottom)),
                _ => return Err(AnchorParseError(s.to_string())),
            };
            // Each axis may be named once.
            if (h.is_some() && horizontal.is_some()) || (v.is_some() && vertical.is_some()) {
                return Err(AnchorParseError(s.to_string()));
            }
            horizontal = horizontal.or(h);
            vertical = vertical.or(v);
        }
        Ok(Anchor {
            horizontal: horizontal.unwrap_or_default(),
            vertical: vertical.unwrap_or_default(),
        })
    }
}

impl TryFrom<String> for Anchor {
    type Error = AnchorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Anchor> for String {
    fn from(anchor: Anchor) -> Self {
        anchor.to_string()
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let h = match self.horizontal {
            HorizontalAnchor::Left => "left",
            HorizontalAnchor::Center => "center",
            HorizontalAnchor::Right => "right",
        };
        let v = match self.vertical {
            VerticalAnchor::Baseline => "baseline",
            VerticalAnchor::Top => "top",
            VerticalAnchor::Middle => "middle",
            VerticalAnchor::Bottom => "bottom",
        };
        write!(f, "{h} {v}")
    }
}

/// Options for converting a string to outlines. Unknown keys are rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TextOptions {
    pub x: f64,
    pub y: f64,
    /// Font size in layout units (em height).
    pub font_size: f64,
    pub anchor: Anchor,
    /// Fill passed through to consumers that paint the path themselves.
    pub fill_attribute: Option<String>,
}

impl Default for TextOptions {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            font_size: 48.0,
            anchor: Anchor::LEFT_TOP,
            fill_attribute: None,
        }
    }
}

/// Bounding box size of a rendered text string.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FontMetrics {
    pub width: f64,
    pub height: f64,
}

impl FontMetrics {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Rejects NaN, infinite and negative dimensions.
    pub fn validate(&self) -> Result<(), LayoutError> {
        for (field, value) in [("width", self.width), ("height", self.height)] {
            if !value.is_finite() || value < 0.0 {
                return Err(LayoutError::InvalidMetrics { field, value });
            }
        }
        Ok(())
    }
}
