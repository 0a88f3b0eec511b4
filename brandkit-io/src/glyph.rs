//! Text-to-outline conversion backed by `ttf-parser`.
//!
//! A [`FontLoader`] opens a font file and yields a [`GlyphSource`], which
//! measures strings and turns them into SVG path data. Glyphs are placed
//! along a single line using horizontal advances plus pair kerning from the
//! legacy `kern` table. Outlines are scaled from font units to the requested
//! size and flipped into SVG's y-down coordinate space.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use ttf_parser::{Face, GlyphId, OutlineBuilder};

use brandkit_core::text::{FontMetrics, HorizontalAnchor, TextOptions, VerticalAnchor};

#[derive(Error, Debug)]
pub enum GlyphError {
    #[error("Font not found: {}", .0.display())]
    MissingFont(PathBuf),

    #[error("Failed to read font {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid font data in {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },
}

/// Placement and size of a measured string, in output units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextMetrics {
    /// Left edge after applying the horizontal anchor.
    pub x: f64,
    /// Top edge after applying the vertical anchor.
    pub y: f64,
    /// Baseline position, `y + ascender`.
    pub baseline: f64,
    pub width: f64,
    pub height: f64,
    pub ascender: f64,
    /// Negative below the baseline, as stored in the font.
    pub descender: f64,
}

impl TextMetrics {
    pub fn size(&self) -> FontMetrics {
        FontMetrics::new(self.width, self.height)
    }
}

/// A string converted to outlines.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub text: String,
    /// SVG path data, passed through verbatim by the writers.
    pub path_data: String,
    pub metrics: TextMetrics,
    pub fill: Option<String>,
}

impl TextRun {
    pub fn size(&self) -> FontMetrics {
        self.metrics.size()
    }
}

/// Something that can measure and outline text.
pub trait GlyphSource {
    fn metrics(&self, text: &str, options: &TextOptions) -> Result<TextMetrics, GlyphError>;

    fn path_data(&self, text: &str, options: &TextOptions) -> Result<String, GlyphError>;

    fn run(&self, text: &str, options: &TextOptions) -> Result<TextRun, GlyphError> {
        Ok(TextRun {
            text: text.to_string(),
            path_data: self.path_data(text, options)?,
            metrics: self.metrics(text, options)?,
            fill: options.fill_attribute.clone(),
        })
    }
}

/// Opens font resources.
pub trait FontLoader {
    type Font: GlyphSource;

    fn load(&self, path: &Path) -> Result<Self::Font, GlyphError>;
}

/// Loads TrueType / OpenType fonts from disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct TtfLoader;

impl FontLoader for TtfLoader {
    type Font = TtfFont;

    fn load(&self, path: &Path) -> Result<TtfFont, GlyphError> {
        TtfFont::load(path)
    }
}

/// A parsed font file held in memory.
#[derive(Debug, Clone)]
pub struct TtfFont {
    path: PathBuf,
    data: Vec<u8>,
}

impl TtfFont {
    /// Reads the whole file; no handle outlives this call.
    pub fn load(path: &Path) -> Result<Self, GlyphError> {
        let data = fs::read(path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                GlyphError::MissingFont(path.to_path_buf())
            } else {
                GlyphError::Io {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;
        Self::from_bytes(path, data)
    }

    pub fn from_bytes(path: impl Into<PathBuf>, data: Vec<u8>) -> Result<Self, GlyphError> {
        let font = Self {
            path: path.into(),
            data,
        };
        font.face()?;
        Ok(font)
    }

    fn face(&self) -> Result<Face<'_>, GlyphError> {
        Face::parse(&self.data, 0).map_err(|e| GlyphError::Parse {
            path: self.path.clone(),
            message: e.to_string(),
        })
    }
}

/// Glyphs of a string with their pen positions in output units.
struct ShapedLine {
    glyphs: Vec<(GlyphId, f64)>,
    width: f64,
}

fn shape(face: &Face<'_>, text: &str, scale: f64) -> ShapedLine {
    let mut glyphs = Vec::with_capacity(text.len());
    let mut pen = 0.0;
    let mut previous: Option<GlyphId> = None;

    for ch in text.chars() {
        // Unmapped characters fall back to .notdef.
        let glyph = face.glyph_index(ch).unwrap_or(GlyphId(0));
        if let Some(left) = previous {
            pen += f64::from(kerning(face, left, glyph)) * scale;
        }
        glyphs.push((glyph, pen));
        pen += f64::from(face.glyph_hor_advance(glyph).unwrap_or(0)) * scale;
        previous = Some(glyph);
    }

    ShapedLine { glyphs, width: pen }
}

fn kerning(face: &Face<'_>, left: GlyphId, right: GlyphId) -> i16 {
    let Some(kern) = face.tables().kern.as_ref() else {
        return 0;
    };
    kern.subtables
        .into_iter()
        .filter(|s| s.horizontal && !s.variable)
        .find_map(|s| s.glyphs_kerning(left, right))
        .unwrap_or(0)
}

fn measure(face: &Face<'_>, line: &ShapedLine, scale: f64, options: &TextOptions) -> TextMetrics {
    let hhea = &face.tables().hhea;
    let ascender = f64::from(hhea.ascender) * scale;
    let descender = f64::from(hhea.descender) * scale;
    place(line.width, ascender, descender, options)
}

/// Positions a line of the given extent according to the anchor.
///
/// `x`/`y` of the result are the top-left corner of the line box and
/// `baseline` sits `ascender` below the top.
pub fn place(width: f64, ascender: f64, descender: f64, options: &TextOptions) -> TextMetrics {
    let height = ascender - descender;

    let x = match options.anchor.horizontal {
        HorizontalAnchor::Left => options.x,
        HorizontalAnchor::Center => options.x - width / 2.0,
        HorizontalAnchor::Right => options.x - width,
    };
    let y = match options.anchor.vertical {
        VerticalAnchor::Baseline => options.y - ascender,
        VerticalAnchor::Top => options.y,
        VerticalAnchor::Middle => options.y - height / 2.0,
        VerticalAnchor::Bottom => options.y - height,
    };

    TextMetrics {
        x,
        y,
        baseline: y + ascender,
        width,
        height,
        ascender,
        descender,
    }
}

fn font_scale(face: &Face<'_>, options: &TextOptions) -> f64 {
    options.font_size / f64::from(face.units_per_em())
}

impl GlyphSource for TtfFont {
    fn metrics(&self, text: &str, options: &TextOptions) -> Result<TextMetrics, GlyphError> {
        let face = self.face()?;
        let scale = font_scale(&face, options);
        let line = shape(&face, text, scale);
        Ok(measure(&face, &line, scale, options))
    }

    fn path_data(&self, text: &str, options: &TextOptions) -> Result<String, GlyphError> {
        let face = self.face()?;
        let scale = font_scale(&face, options);
        let line = shape(&face, text, scale);
        let metrics = measure(&face, &line, scale, options);

        let mut data = String::new();
        for &(glyph, pen) in &line.glyphs {
            let mut builder = PathDataBuilder::new(&mut data, metrics.x + pen, metrics.baseline, scale);
            face.outline_glyph(glyph, &mut builder);
        }
        Ok(data)
    }
}

/// Serializes outline commands as compact SVG path data.
///
/// Coordinates arrive in font units (y-up) and are written as
/// `origin + point * scale` with y negated.
pub struct PathDataBuilder<'a> {
    out: &'a mut String,
    origin_x: f64,
    baseline: f64,
    scale: f64,
}

impl<'a> PathDataBuilder<'a> {
    pub fn new(out: &'a mut String, origin_x: f64, baseline: f64, scale: f64) -> Self {
        Self {
            out,
            origin_x,
            baseline,
            scale,
        }
    }

    fn command(&mut self, op: char, points: &[(f32, f32)]) {
        self.out.push(op);
        let mut first = true;
        for &(x, y) in points {
            let px = self.origin_x + f64::from(x) * self.scale;
            let py = self.baseline - f64::from(y) * self.scale;
            for value in [px, py] {
                let text = format_coord(value);
                // A leading minus sign already separates the values.
                if !first && !text.starts_with('-') {
                    self.out.push(' ');
                }
                self.out.push_str(&text);
                first = false;
            }
        }
    }
}

impl OutlineBuilder for PathDataBuilder<'_> {
    fn move_to(&mut self, x: f32, y: f32) {
        self.command('M', &[(x, y)]);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.command('L', &[(x, y)]);
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        self.command('Q', &[(x1, y1), (x, y)]);
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        self.command('C', &[(x1, y1), (x2, y2), (x, y)]);
    }

    fn close(&mut self) {
        self.out.push('Z');
    }
}

/// Formats a coordinate with at most two decimals, dropping trailing zeros.
pub fn format_coord(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded == 0.0 {
        return "0".to_string();
    }
    let text = format!("{rounded:.2}");
    let trimmed = text.trim_end_matches('0').trim_end_matches('.');
    trimmed.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use brandkit_core::text::Anchor;

    #[test]
    fn test_format_coord() {
        assert_eq!(format_coord(12.0), "12");
        assert_eq!(format_coord(12.5), "12.5");
        assert_eq!(format_coord(3.14159), "3.14");
        assert_eq!(format_coord(-0.004), "0");
        assert_eq!(format_coord(-7.126), "-7.13");
        assert_eq!(format_coord(0.999), "1");
        assert_eq!(format_coord(100.0), "100");
    }

    #[test]
    fn test_path_builder_scales_and_flips() {
        let mut data = String::new();
        {
            // 1000 units per em at 48px: scale 0.048, baseline at 45.
            let mut b = PathDataBuilder::new(&mut data, 10.0, 45.0, 0.048);
            b.move_to(0.0, 0.0);
            b.line_to(500.0, 0.0);
            b.line_to(500.0, 700.0);
            b.quad_to(250.0, 1000.0, 0.0, 700.0);
            b.close();
        }
        assert_eq!(data, "M10 45L34 45L34 11.4Q22-3 10 11.4Z");
    }

    #[test]
    fn test_path_builder_curve() {
        let mut data = String::new();
        {
            let mut b = PathDataBuilder::new(&mut data, 0.0, 0.0, 1.0);
            b.move_to(1.0, -1.0);
            b.curve_to(2.0, -2.0, 3.0, 3.0, 4.0, -4.0);
        }
        assert_eq!(data, "M1 1C2 2 3-3 4 4");
    }

    #[test]
    fn test_missing_font() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Absent.ttf");
        let err = TtfLoader.load(&path).unwrap_err();
        assert!(matches!(err, GlyphError::MissingFont(p) if p == path));
    }

    #[test]
    fn test_garbage_font_data() {
        let err = TtfFont::from_bytes("garbage.ttf", b"definitely not a font".to_vec()).unwrap_err();
        assert!(matches!(err, GlyphError::Parse { .. }));
        assert!(err.to_string().contains("garbage.ttf"));
    }

    #[test]
    fn test_garbage_file_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Broken.ttf");
        fs::write(&path, [0u8; 64]).unwrap();
        assert!(matches!(TtfLoader.load(&path), Err(GlyphError::Parse { .. })));
    }

    #[test]
    fn test_metrics_size() {
        let m = TextMetrics {
            width: 120.4,
            height: 34.0,
            ..Default::default()
        };
        assert_eq!(m.size(), FontMetrics::new(120.4, 34.0));
    }

    // ── Fixture font ──────────────────────────────────────────────────
    //
    // 1000 units per em, ascender 800, descender -200. Glyph 0 (.notdef)
    // advances 500; 'A' (glyph 1) and 'V' (glyph 2) advance 600 and kern
    // by -100 as the pair A,V. Only 'A' has an outline: a 500 x 700 box.

    fn be16(out: &mut Vec<u8>, v: u16) {
        out.extend_from_slice(&v.to_be_bytes());
    }

    fn be32(out: &mut Vec<u8>, v: u32) {
        out.extend_from_slice(&v.to_be_bytes());
    }

    fn fixture_font() -> Vec<u8> {
        let mut cmap = Vec::new();
        be16(&mut cmap, 0); // version
        be16(&mut cmap, 1); // one encoding record
        be16(&mut cmap, 0); // Unicode platform
        be16(&mut cmap, 3);
        be32(&mut cmap, 12);
        be16(&mut cmap, 0); // format 0
        be16(&mut cmap, 262);
        be16(&mut cmap, 0);
        let mut ids = [0u8; 256];
        ids[usize::from(b'A')] = 1;
        ids[usize::from(b'V')] = 2;
        cmap.extend_from_slice(&ids);

        let mut glyf = Vec::new();
        be16(&mut glyf, 1); // one contour
        for v in [0i16, 0, 500, 700] {
            be16(&mut glyf, v as u16);
        }
        be16(&mut glyf, 3); // last point index
        be16(&mut glyf, 0); // no instructions
        glyf.extend_from_slice(&[1, 1, 1, 1]); // on-curve, long deltas
        for dx in [0i16, 500, 0, -500] {
            be16(&mut glyf, dx as u16);
        }
        for dy in [0i16, 0, 700, 0] {
            be16(&mut glyf, dy as u16);
        }

        let mut head = Vec::new();
        be32(&mut head, 0x0001_0000);
        be32(&mut head, 0x0001_0000);
        be32(&mut head, 0);
        be32(&mut head, 0x5F0F_3CF5);
        be16(&mut head, 0);
        be16(&mut head, 1000); // units per em
        head.extend_from_slice(&[0; 16]); // created, modified
        for v in [0i16, -200, 600, 800] {
            be16(&mut head, v as u16);
        }
        be16(&mut head, 0);
        be16(&mut head, 8);
        be16(&mut head, 2);
        be16(&mut head, 0); // short loca offsets
        be16(&mut head, 0);

        let mut hhea = Vec::new();
        be32(&mut hhea, 0x0001_0000);
        be16(&mut hhea, 800);
        be16(&mut hhea, (-200i16) as u16);
        be16(&mut hhea, 0);
        hhea.extend_from_slice(&[0; 24]);
        be16(&mut hhea, 3); // advance for every glyph

        let mut hmtx = Vec::new();
        for advance in [500, 600, 600] {
            be16(&mut hmtx, advance);
            be16(&mut hmtx, 0);
        }

        let mut kern = Vec::new();
        be16(&mut kern, 0); // version
        be16(&mut kern, 1);
        be16(&mut kern, 0); // subtable version
        be16(&mut kern, 20);
        kern.extend_from_slice(&[0, 1]); // format 0, horizontal
        be16(&mut kern, 1); // one pair
        be16(&mut kern, 6);
        be16(&mut kern, 0);
        be16(&mut kern, 0);
        be16(&mut kern, 1);
        be16(&mut kern, 2);
        be16(&mut kern, (-100i16) as u16);

        let mut loca = Vec::new();
        let glyf_words = (glyf.len() / 2) as u16;
        for offset in [0, 0, glyf_words, glyf_words] {
            be16(&mut loca, offset);
        }

        let mut maxp = Vec::new();
        be32(&mut maxp, 0x0000_5000);
        be16(&mut maxp, 3);

        // Table records must be sorted by tag.
        let tables: [(&[u8; 4], Vec<u8>); 8] = [
            (b"cmap", cmap),
            (b"glyf", glyf),
            (b"head", head),
            (b"hhea", hhea),
            (b"hmtx", hmtx),
            (b"kern", kern),
            (b"loca", loca),
            (b"maxp", maxp),
        ];

        let mut font = Vec::new();
        be32(&mut font, 0x0001_0000);
        be16(&mut font, tables.len() as u16);
        font.extend_from_slice(&[0; 6]);
        let mut offset = 12 + 16 * tables.len();
        let mut body = Vec::new();
        for (tag, data) in &tables {
            font.extend_from_slice(&tag[..]);
            be32(&mut font, 0); // checksum
            be32(&mut font, offset as u32);
            be32(&mut font, data.len() as u32);
            body.extend_from_slice(data);
            while body.len() % 4 != 0 {
                body.push(0);
            }
            offset = 12 + 16 * tables.len() + body.len();
        }
        font.extend_from_slice(&body);
        font
    }

    fn fixture() -> TtfFont {
        TtfFont::from_bytes("Fixture.ttf", fixture_font()).unwrap()
    }

    fn options(anchor: &str) -> TextOptions {
        TextOptions {
            font_size: 100.0,
            anchor: anchor.parse().unwrap(),
            ..Default::default()
        }
    }

    #[test]
    fn test_place_all_anchors() {
        // width 100, ascender 80, descender -20 => height 100
        let horizontal = [("left", 10.0), ("center", -40.0), ("right", -90.0)];
        let vertical = [("baseline", 120.0), ("top", 200.0), ("middle", 150.0), ("bottom", 100.0)];

        for (h, x) in horizontal {
            for (v, y) in vertical {
                let opts = TextOptions {
                    x: 10.0,
                    y: 200.0,
                    anchor: format!("{h} {v}").parse::<Anchor>().unwrap(),
                    ..Default::default()
                };
                let m = place(100.0, 80.0, -20.0, &opts);
                assert_eq!((m.x, m.y), (x, y), "anchor {h} {v}");
                assert_eq!(m.baseline, y + 80.0, "anchor {h} {v}");
                assert_eq!((m.width, m.height), (100.0, 100.0));
                assert_eq!((m.ascender, m.descender), (80.0, -20.0));
            }
        }
    }

    #[test]
    fn test_fixture_vertical_metrics() {
        let m = fixture().metrics("A", &options("left top")).unwrap();
        assert_eq!(m.width, 60.0);
        assert_eq!(m.height, 100.0);
        assert_eq!(m.ascender, 80.0);
        assert_eq!(m.descender, -20.0);
        assert_eq!((m.x, m.y, m.baseline), (0.0, 0.0, 80.0));
    }

    #[test]
    fn test_pair_kerning_tightens_width() {
        let font = fixture();
        let opts = options("left top");
        let a = font.metrics("A", &opts).unwrap().width;
        let v = font.metrics("V", &opts).unwrap().width;
        let av = font.metrics("AV", &opts).unwrap().width;
        let va = font.metrics("VA", &opts).unwrap().width;
        assert_eq!(a + v, 120.0);
        assert_eq!(av, 110.0);
        // The pair is directional.
        assert_eq!(va, 120.0);
    }

    #[test]
    fn test_unmapped_characters_use_notdef() {
        let font = fixture();
        let opts = options("left top");
        assert_eq!(font.metrics("\u{e9}", &opts).unwrap().width, 50.0);
        assert_eq!(font.metrics("\u{20ac}", &opts).unwrap().width, 50.0);
        assert_eq!(font.metrics("A\u{e9}V", &opts).unwrap().width, 170.0);
    }

    #[test]
    fn test_outline_placed_at_pen_position() {
        let font = fixture();
        assert_eq!(
            font.path_data("A", &options("left top")).unwrap(),
            "M0 80L50 80L50 10L0 10L0 80Z"
        );
        // 'V' has no outline but still advances the pen.
        assert_eq!(
            font.path_data("VA", &options("left top")).unwrap(),
            "M60 80L110 80L110 10L60 10L60 80Z"
        );
    }

    #[test]
    fn test_outline_follows_anchor() {
        let font = fixture();
        let run = font.run("A", &options("center middle")).unwrap();
        assert_eq!((run.metrics.x, run.metrics.y), (-30.0, -50.0));
        assert_eq!(run.metrics.baseline, 30.0);
        assert_eq!(run.path_data, "M-30 30L20 30L20-40L-30-40L-30 30Z");
    }
}
