//! Static HTML comparison sheet for the logotype font exploration.
//!
//! Every successfully processed font gets a pair of cards (dark and light
//! background) showing the logomark next to the wordmark, followed by a
//! second section comparing the full brand name set in each font.

use std::fmt::{self, Write};

use brandkit_core::logomark::LogomarkSpec;

use crate::glyph::TextRun;
use crate::svg::{escape_attr, rect_element};

/// One font that made it through the sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    /// 1-based position of the font in the configured list.
    pub index: usize,
    pub name: String,
    pub style: String,
    /// The wordmark paired with the logomark.
    pub wordmark: TextRun,
    /// The full brand name, for comparison.
    pub full_name: TextRun,
}

/// Colors and labels for the exploration page.
#[derive(Debug, Clone)]
pub struct ExplorationPage<'a> {
    pub brand_name: &'a str,
    pub wordmark: &'a str,
    /// Logomark color on dark cards.
    pub accent_color: &'a str,
    /// Logomark and text color on light cards.
    pub brand_color: &'a str,
    pub logomark: &'a LogomarkSpec,
    pub entries: &'a [CatalogEntry],
    /// Number of fonts requested, including skipped ones.
    pub candidate_count: usize,
}

const STYLE: &str = r#"  <style>
    * { margin: 0; padding: 0; box-sizing: border-box; }
    body { font-family: 'Inter', sans-serif; background: #1a1a1a; color: #fff; padding: 40px; line-height: 1.6; }
    h1 { font-size: 2rem; margin-bottom: 8px; font-weight: 600; }
    .subtitle { color: #6B8E23; margin-bottom: 40px; font-size: 1rem; }
    .section-title { font-size: 0.75rem; text-transform: uppercase; letter-spacing: 0.15em; color: #6B8E23; margin: 48px 0 24px; font-weight: 600; }
    .grid { display: grid; grid-template-columns: repeat(2, 1fr); gap: 24px; }
    .card { background: #2a2a2a; border-radius: 12px; padding: 32px; position: relative; }
    .card-dark { background: #1a1a1a; border: 1px solid #333; }
    .card-light { background: #ffffff; color: #1a1a1a; }
    .card-number { position: absolute; top: 16px; right: 16px; background: #6B8E23; color: white; width: 28px; height: 28px; border-radius: 50%; display: flex; align-items: center; justify-content: center; font-size: 0.75rem; font-weight: 600; }
    .font-name { font-size: 0.875rem; font-weight: 600; margin-bottom: 4px; }
    .font-style { font-size: 0.75rem; color: #888; margin-bottom: 24px; }
    .card-light .font-style { color: #666; }
    .lockup { display: flex; align-items: center; gap: 2px; margin-bottom: 16px; }
    .lockup svg { height: 48px; width: auto; }
    .lockup-label { font-size: 0.625rem; text-transform: uppercase; letter-spacing: 0.1em; color: #666; margin-top: 8px; }
    .card-light .lockup-label { color: #999; }
    .full-wordmark svg { height: 36px; width: auto; }
    .divider { height: 1px; background: #333; margin: 48px 0; }
    .notes { background: #2a2a2a; border-radius: 12px; padding: 24px; margin-top: 48px; }
    .notes h3 { font-size: 1rem; margin-bottom: 12px; }
    .notes ul { padding-left: 20px; color: #aaa; font-size: 0.875rem; }
    .notes li { margin-bottom: 8px; }
  </style>
"#;

#[derive(Clone, Copy)]
enum Card {
    Dark,
    Light,
}

impl Card {
    fn class(self) -> &'static str {
        match self {
            Card::Dark => "card card-dark",
            Card::Light => "card card-light",
        }
    }
}

impl ExplorationPage<'_> {
    pub fn render(&self) -> Result<String, fmt::Error> {
        let mut out = String::new();
        let brand = escape_html(self.brand_name);
        let wordmark = escape_html(self.wordmark);

        writeln!(out, "<!DOCTYPE html>")?;
        writeln!(out, "<html lang=\"en\">")?;
        writeln!(out, "<head>")?;
        writeln!(out, "  <meta charset=\"UTF-8\">")?;
        writeln!(
            out,
            "  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">"
        )?;
        writeln!(out, "  <title>{brand} Logotype Exploration</title>")?;
        writeln!(
            out,
            "  <link href=\"https://fonts.googleapis.com/css2?family=Inter:wght@400;500;600&display=swap\" rel=\"stylesheet\">"
        )?;
        out.push_str(STYLE);
        writeln!(out, "</head>")?;
        writeln!(out, "<body>")?;
        writeln!(out, "  <h1>{brand} Logotype Exploration</h1>")?;
        writeln!(
            out,
            "  <p class=\"subtitle\">Logomark as \"{}\" + \"{wordmark}\" in various fonts</p>",
            escape_html(&self.brand_name.chars().take(1).collect::<String>())
        )?;

        writeln!(
            out,
            "  <p class=\"section-title\">Option A: Logomark + {wordmark} (Recommended Approach)</p>"
        )?;
        writeln!(out, "  <div class=\"grid\">")?;
        for entry in self.entries {
            self.write_lockup_card(&mut out, entry, Card::Dark)?;
            self.write_lockup_card(&mut out, entry, Card::Light)?;
        }
        writeln!(out, "  </div>")?;

        writeln!(out, "  <div class=\"divider\"></div>")?;
        writeln!(
            out,
            "  <p class=\"section-title\">Option B: Full \"{brand}\" Wordmark (For Comparison)</p>"
        )?;
        writeln!(out, "  <div class=\"grid\">")?;
        for entry in self.entries {
            self.write_wordmark_card(&mut out, entry, Card::Dark)?;
            self.write_wordmark_card(&mut out, entry, Card::Light)?;
        }
        writeln!(out, "  </div>")?;

        self.write_notes(&mut out)?;
        writeln!(out, "</body>")?;
        writeln!(out, "</html>")?;
        Ok(out)
    }

    fn write_card_header(&self, out: &mut String, entry: &CatalogEntry, card: Card) -> fmt::Result {
        writeln!(out, "    <div class=\"{}\">", card.class())?;
        writeln!(out, "      <span class=\"card-number\">{}</span>", entry.index)?;
        writeln!(out, "      <p class=\"font-name\">{}</p>", escape_html(&entry.name))?;
        writeln!(out, "      <p class=\"font-style\">{}</p>", escape_html(&entry.style))
    }

    fn write_lockup_card(&self, out: &mut String, entry: &CatalogEntry, card: Card) -> fmt::Result {
        let (mark_color, text_color) = match card {
            Card::Dark => (self.accent_color, "#ffffff"),
            Card::Light => (self.brand_color, self.brand_color),
        };
        self.write_card_header(out, entry, card)?;
        writeln!(out, "      <div class=\"lockup\">")?;
        writeln!(
            out,
            "        <svg viewBox=\"0 0 {} {}\" style=\"color: {};\">",
            self.logomark.width,
            self.logomark.height,
            escape_attr(mark_color)
        )?;
        writeln!(out, "          <g fill=\"currentColor\">")?;
        for rect in &self.logomark.rects {
            writeln!(out, "            {}", rect_element(rect))?;
        }
        writeln!(out, "          </g>")?;
        writeln!(out, "        </svg>")?;
        write_text_svg(out, &entry.wordmark, text_color, "        ")?;
        writeln!(out, "      </div>")?;
        let label = match card {
            Card::Dark => "Dark background",
            Card::Light => "Light background",
        };
        writeln!(out, "      <p class=\"lockup-label\">{label}</p>")?;
        writeln!(out, "    </div>")
    }

    fn write_wordmark_card(&self, out: &mut String, entry: &CatalogEntry, card: Card) -> fmt::Result {
        let color = match card {
            Card::Dark => "#ffffff",
            Card::Light => self.brand_color,
        };
        self.write_card_header(out, entry, card)?;
        writeln!(out, "      <div class=\"full-wordmark\">")?;
        write_text_svg(out, &entry.full_name, color, "        ")?;
        writeln!(out, "      </div>")?;
        writeln!(out, "      <p class=\"lockup-label\">Full wordmark</p>")?;
        writeln!(out, "    </div>")
    }

    fn write_notes(&self, out: &mut String) -> fmt::Result {
        writeln!(out, "  <div class=\"notes\">")?;
        writeln!(out, "    <h3>Notes</h3>")?;
        writeln!(out, "    <ul>")?;
        writeln!(
            out,
            "      <li><strong>Option A (Recommended):</strong> Uses the logomark as the first letter, creating visual unity between mark and wordmark</li>"
        )?;
        writeln!(
            out,
            "      <li><strong>Option B:</strong> Traditional full wordmark approach for comparison</li>"
        )?;
        writeln!(out, "      <li>All text is converted to SVG paths - no font dependency</li>")?;
        writeln!(
            out,
            "      <li>{} of {} candidate fonts shown; missing fonts are skipped</li>",
            self.entries.len(),
            self.candidate_count
        )?;
        writeln!(out, "    </ul>")?;
        writeln!(out, "  </div>")
    }
}

/// Inline SVG of a text run, painted with `currentColor`.
fn write_text_svg(out: &mut String, run: &TextRun, color: &str, indent: &str) -> fmt::Result {
    let size = run.size();
    let fill = run.fill.as_deref().unwrap_or("currentColor");
    writeln!(
        out,
        "{indent}<svg viewBox=\"0 0 {} {}\" style=\"color: {};\">",
        size.width.ceil(),
        size.height.ceil(),
        escape_attr(color)
    )?;
    writeln!(
        out,
        "{indent}  <path d=\"{}\" fill=\"{}\"/>",
        run.path_data,
        escape_attr(fill)
    )?;
    writeln!(out, "{indent}</svg>")
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
