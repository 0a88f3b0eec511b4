//! SVG document writer.
//!
//! Renders a composed layout (logomark bars and/or a text run) as a
//! standalone SVG file. One [`SvgDocument`] describes the geometry of a
//! composition; the color is supplied per [`ColorVariant`] when rendering, so
//! every variant of a composition shares byte-identical geometry.
//!
//! ## Document structure
//! `<?xml?>` → `<svg viewBox width height>` → credits comment →
//! `<g fill>` → logomark group + text group → `</g>` → `</svg>`.
//! Logotype documents hold a single filled `<path>` instead of the group.

use std::io;
use std::string::FromUtf8Error;

use thiserror::Error;

use brandkit_core::geometry::{Point, RoundedRect};
use brandkit_core::layout::{Composition, CompositionLayout, Element};
use brandkit_core::logomark::LogomarkSpec;
use brandkit_core::variant::{ColorVariant, VariantTemplate};

use crate::glyph::TextRun;

// ── Errors ────────────────────────────────────────────────────────────

#[derive(Error, Debug)]
pub enum SvgError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Rendered markup is not valid UTF-8: {0}")]
    Utf8(#[from] FromUtf8Error),

    #[error("Layout for {composition} has no offset for {element:?}")]
    MissingOffset {
        composition: Composition,
        element: Element,
    },
}

// ── Document ──────────────────────────────────────────────────────────

/// Descriptive lines written into the comment block of each file.
#[derive(Debug, Clone, PartialEq)]
pub struct Credits {
    pub brand_name: String,
    pub homepage: String,
    /// One-line description of the artwork, e.g. `Logomark + "itcraft" in Poppins`.
    pub blurb: String,
}

/// A composition ready to be rendered in any color.
#[derive(Debug, Clone)]
pub struct SvgDocument<'a> {
    base_name: String,
    layout: CompositionLayout,
    logomark: &'a LogomarkSpec,
    text: &'a TextRun,
    credits: Credits,
}

impl<'a> SvgDocument<'a> {
    pub fn new(
        base_name: &str,
        layout: CompositionLayout,
        logomark: &'a LogomarkSpec,
        text: &'a TextRun,
        credits: Credits,
    ) -> Self {
        Self {
            base_name: base_name.to_string(),
            layout,
            logomark,
            text,
            credits,
        }
    }

    fn offset(&self, element: Element) -> Result<Point, SvgError> {
        self.layout.offset(element).ok_or(SvgError::MissingOffset {
            composition: self.layout.composition,
            element,
        })
    }
}

impl VariantTemplate for SvgDocument<'_> {
    type Error = SvgError;

    fn base_name(&self) -> &str {
        &self.base_name
    }

    fn render(&self, variant: &ColorVariant) -> Result<String, SvgError> {
        let mut buffer: Vec<u8> = Vec::new();
        SvgWriter::new(&mut buffer).write(self, variant)?;
        Ok(String::from_utf8(buffer)?)
    }
}

// ── Writer ────────────────────────────────────────────────────────────

pub struct SvgWriter<W: io::Write> {
    writer: W,
}

impl<W: io::Write> SvgWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Write one color variant of a document.
    pub fn write(&mut self, doc: &SvgDocument<'_>, variant: &ColorVariant) -> Result<(), SvgError> {
        let layout = &doc.layout;
        self.write_header(layout.canvas_width, layout.canvas_height)?;
        self.write_credits(doc, variant)?;

        let fill = escape_attr(&variant.fill);
        if layout.composition.has_logomark() {
            writeln!(self.writer, "  <g fill=\"{}\">", fill)?;
            self.write_logomark(doc.logomark, doc.offset(Element::Logomark)?)?;
            self.write_text_group(doc.text, doc.offset(Element::Text)?)?;
            writeln!(self.writer, "  </g>")?;
        } else {
            // Logotype text always sits at the canvas origin.
            writeln!(
                self.writer,
                "  <path fill=\"{}\" d=\"{}\"/>",
                fill, doc.text.path_data
            )?;
        }

        writeln!(self.writer, "</svg>")?;
        Ok(())
    }

    fn write_header(&mut self, width: f64, height: f64) -> Result<(), SvgError> {
        writeln!(self.writer, "<?xml version=\"1.0\" encoding=\"UTF-8\"?>")?;
        writeln!(
            self.writer,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {w} {h}\" width=\"{w}\" height=\"{h}\">",
            w = width,
            h = height
        )?;
        Ok(())
    }

    fn write_credits(&mut self, doc: &SvgDocument<'_>, variant: &ColorVariant) -> Result<(), SvgError> {
        let credits = &doc.credits;
        writeln!(self.writer, "  <!--")?;
        writeln!(
            self.writer,
            "    {} {} - {}",
            escape_comment(&credits.brand_name),
            doc.layout.composition.title(),
            escape_comment(&variant.description)
        )?;
        writeln!(self.writer, "    {}", escape_comment(&credits.homepage))?;
        writeln!(self.writer, "    {}", escape_comment(&credits.blurb))?;
        writeln!(self.writer, "  -->")?;
        Ok(())
    }

    fn write_logomark(&mut self, logomark: &LogomarkSpec, at: Point) -> Result<(), SvgError> {
        writeln!(self.writer, "    <!-- Logomark -->")?;
        if at == Point::ORIGIN {
            writeln!(self.writer, "    <g>")?;
        } else {
            writeln!(self.writer, "    <g transform=\"{}\">", translate(at))?;
        }
        for rect in &logomark.rects {
            writeln!(self.writer, "    {}", rect_element(rect))?;
        }
        writeln!(self.writer, "    </g>")?;
        Ok(())
    }

    fn write_text_group(&mut self, text: &TextRun, at: Point) -> Result<(), SvgError> {
        writeln!(self.writer, "    <!-- {} text -->", escape_comment(&text.text))?;
        writeln!(self.writer, "    <g transform=\"{}\">", translate(at))?;
        writeln!(self.writer, "      <path d=\"{}\"/>", text.path_data)?;
        writeln!(self.writer, "    </g>")?;
        Ok(())
    }
}

// ── Helpers ───────────────────────────────────────────────────────────

/// `<rect .../>` for one logomark bar.
pub fn rect_element(rect: &RoundedRect) -> String {
    format!(
        "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" rx=\"{}\"/>",
        rect.x, rect.y, rect.width, rect.height, rect.rx
    )
}

fn translate(at: Point) -> String {
    format!("translate({}, {})", at.x, at.y)
}

pub(crate) fn escape_attr(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// XML comments may not contain `--`.
fn escape_comment(value: &str) -> String {
    let mut text = value.to_string();
    while text.contains("--") {
        text = text.replace("--", "- -");
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use brandkit_core::layout::LayoutEngine;
    use brandkit_core::variant::expand;
    use crate::glyph::TextMetrics;

    fn run(text: &str, width: f64, height: f64) -> TextRun {
        TextRun {
            text: text.to_string(),
            path_data: "M0 0L10 0L10 10Z".to_string(),
            metrics: TextMetrics {
                width,
                height,
                ..Default::default()
            },
            fill: None,
        }
    }

    fn credits() -> Credits {
        Credits {
            brand_name: "Bitcraft".to_string(),
            homepage: "https://github.com/bitcraft-apps/brand".to_string(),
            blurb: "Logomark + \"itcraft\" in Poppins SemiBold".to_string(),
        }
    }

    fn document<'a>(
        composition: Composition,
        mark: &'a LogomarkSpec,
        text: &'a TextRun,
    ) -> SvgDocument<'a> {
        let layout = LayoutEngine::default()
            .layout(composition, mark, &text.size())
            .unwrap();
        SvgDocument::new("bitcraft-lockup-horizontal", layout, mark, text, credits())
    }

    #[test]
    fn test_horizontal_markup() {
        let mark = LogomarkSpec::standard();
        let text = run("itcraft", 120.4, 34.0);
        let doc = document(Composition::Horizontal, &mark, &text);
        let svg = doc.render(&ColorVariant::standard_set()[0]).unwrap();

        assert!(svg.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n"));
        assert!(svg.contains("viewBox=\"0 0 168 48\" width=\"168\" height=\"48\""));
        assert!(svg.contains("    Bitcraft Lockup Horizontal - Dark Olive\n"));
        assert!(svg.contains("  <g fill=\"#556B2F\">\n"));
        assert!(svg.contains("    <g>\n    <rect x=\"0\" y=\"0\" width=\"31.5\" height=\"8.2\" rx=\"4.1\"/>"));
        assert!(svg.contains("<g transform=\"translate(47.2, 7)\">"));
        assert!(svg.contains("<path d=\"M0 0L10 0L10 10Z\"/>"));
        assert_eq!(svg.matches("<rect ").count(), 5);
        assert!(svg.ends_with("</svg>\n"));
    }

    #[test]
    fn test_vertical_translates_logomark() {
        let mark = LogomarkSpec::standard();
        let text = run("itcraft", 120.4, 34.0);
        let doc = document(Composition::Vertical, &mark, &text);
        let svg = doc.render(&ColorVariant::standard_set()[2]).unwrap();
        assert!(svg.contains("viewBox=\"0 0 121 98\""));
        assert!(svg.contains("<g transform=\"translate(37.9, 0)\">"));
        assert!(svg.contains("Lockup Vertical - Black (for light backgrounds)"));
        assert!(svg.contains("<g fill=\"#000000\">"));
    }

    #[test]
    fn test_logotype_is_single_path() {
        let mark = LogomarkSpec::standard();
        let text = run("Bitcraft", 190.3, 48.2);
        let doc = document(Composition::Logotype, &mark, &text);
        let svg = doc.render(&ColorVariant::standard_set()[1]).unwrap();
        assert!(svg.contains("viewBox=\"0 0 191 49\""));
        assert!(svg.contains("  <path fill=\"#FFFFFF\" d=\"M0 0L10 0L10 10Z\"/>\n"));
        assert!(!svg.contains("<rect"));
        assert!(!svg.contains("<g"));
    }

    #[test]
    fn test_variants_differ_only_in_fill_and_name() {
        let mark = LogomarkSpec::standard();
        let text = run("itcraft", 120.4, 34.0);
        let variants = ColorVariant::standard_set();
        for composition in Composition::ALL {
            let doc = document(composition, &mark, &text);
            let artifacts = expand(&doc, &variants).unwrap();
            assert_eq!(artifacts.len(), 3);
            let normalized: Vec<String> = artifacts
                .iter()
                .zip(&variants)
                .map(|(a, v)| {
                    a.markup
                        .replace(&v.fill, "FILL")
                        .replace(&v.description, "DESC")
                })
                .collect();
            assert!(normalized.windows(2).all(|w| w[0] == w[1]));
            assert_eq!(artifacts[1].filename, "bitcraft-lockup-horizontal-white.svg");
        }
    }

    #[test]
    fn test_missing_offset_is_an_error() {
        let mark = LogomarkSpec::standard();
        let text = run("itcraft", 120.4, 34.0);
        let mut layout = LayoutEngine::default()
            .layout(Composition::Horizontal, &mark, &text.size())
            .unwrap();
        layout.offsets.remove(&Element::Logomark);
        let doc = SvgDocument::new("x", layout, &mark, &text, credits());
        let err = doc.render(&ColorVariant::standard_set()[0]).unwrap_err();
        assert!(matches!(
            err,
            SvgError::MissingOffset {
                element: Element::Logomark,
                ..
            }
        ));
    }

    #[test]
    fn test_escaping() {
        assert_eq!(escape_attr("a\"b<c>&"), "a&quot;b&lt;c&gt;&amp;");
        assert_eq!(escape_comment("x---y"), "x- - -y");
    }
}
