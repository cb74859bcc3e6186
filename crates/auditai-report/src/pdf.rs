//! # PDF Page Writer
//!
//! A small cursor-based layout engine over `printpdf`: text flows top to
//! bottom on A4 pages and spills onto a new page when the cursor reaches
//! the bottom margin. Every page gets a footer with its page number.

use std::path::Path;

use printpdf::path::{PaintMode, WindingOrder};
use printpdf::{
    BuiltinFont, Color, Image, ImageTransform, IndirectFontRef, Line, Mm, PdfDocument,
    PdfDocumentReference, PdfLayerReference, Point, Polygon, Rgb,
};

use crate::error::ReportError;
use crate::text::{chars_per_line, sanitize, wrap};

pub(crate) const PAGE_WIDTH: f32 = 210.0;
pub(crate) const PAGE_HEIGHT: f32 = 297.0;
pub(crate) const MARGIN: f32 = 20.0;
const FOOTER_Y: f32 = 10.0;
const LINE_SPACING: f32 = 1.45;

/// Logo box in the top-right corner: x, y (bottom-left), width, height.
pub(crate) const LOGO_BOX: (f32, f32, f32, f32) = (155.0, 265.0, 35.0, 17.0);

/// NHS blue.
const BADGE_BLUE: (f32, f32, f32) = (0.0, 0.369, 0.722);

fn mm_per_pt(size: f32) -> f32 {
    size * 25.4 / 72.0
}

fn rgb(r: f32, g: f32, b: f32) -> Color {
    Color::Rgb(Rgb::new(r, g, b, None))
}

/// Font face selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Face {
    Regular,
    Bold,
}

pub(crate) struct PageWriter {
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    footer: String,
    page: usize,
    /// Baseline of the next line, in millimetres from the page bottom.
    y: f32,
}

impl PageWriter {
    pub(crate) fn new(title: &str, footer: &str) -> Result<Self, ReportError> {
        let (doc, page, layer) = PdfDocument::new(
            sanitize(title),
            Mm(PAGE_WIDTH),
            Mm(PAGE_HEIGHT),
            "Layer 1".to_string(),
        );
        let regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| ReportError::Pdf(e.to_string()))?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| ReportError::Pdf(e.to_string()))?;
        let layer = doc.get_page(page).get_layer(layer);

        let writer = Self {
            doc,
            layer,
            regular,
            bold,
            footer: sanitize(footer),
            page: 1,
            y: PAGE_HEIGHT - MARGIN,
        };
        writer.draw_footer();
        Ok(writer)
    }

    pub(crate) fn page_count(&self) -> usize {
        self.page
    }

    fn font(&self, face: Face) -> &IndirectFontRef {
        match face {
            Face::Regular => &self.regular,
            Face::Bold => &self.bold,
        }
    }

    fn draw_footer(&self) {
        let text = format!("{} - page {}", self.footer, self.page);
        self.layer.set_fill_color(rgb(0.4, 0.4, 0.4));
        self.layer
            .use_text(text, 8.0, Mm(MARGIN), Mm(FOOTER_Y), &self.regular);
        self.layer.set_fill_color(rgb(0.0, 0.0, 0.0));
    }

    fn new_page(&mut self) {
        let (page, layer) = self
            .doc
            .add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
        self.layer = self.doc.get_page(page).get_layer(layer);
        self.page += 1;
        self.y = PAGE_HEIGHT - MARGIN;
        self.draw_footer();
        tracing::debug!(page = self.page, "started report page");
    }

    /// Start a new page unless `height` millimetres remain above the margin.
    pub(crate) fn ensure_space(&mut self, height: f32) {
        if self.y - height < MARGIN {
            self.new_page();
        }
    }

    /// Move the cursor down.
    pub(crate) fn skip(&mut self, height: f32) {
        self.y -= height;
    }

    /// Write one line at `x` and advance.
    pub(crate) fn line(&mut self, text: &str, size: f32, face: Face, x: f32) {
        let advance = mm_per_pt(size) * LINE_SPACING;
        self.ensure_space(advance);
        self.y -= mm_per_pt(size);
        self.layer
            .use_text(sanitize(text), size, Mm(x), Mm(self.y), self.font(face));
        self.y -= advance - mm_per_pt(size);
    }

    /// Write wrapped text within `[x, right]`, with `hanging` continuation
    /// indent in millimetres.
    pub(crate) fn paragraph(
        &mut self,
        text: &str,
        size: f32,
        face: Face,
        x: f32,
        right: f32,
        hanging: f32,
    ) {
        let first_width = right - x;
        let rest_width = right - x - hanging;
        let clean = sanitize(text);

        let first_lines = wrap(&clean, chars_per_line(first_width, size));
        let (first, remainder) = match first_lines.split_first() {
            Some((first, rest)) => (first.clone(), rest.join(" ")),
            None => (String::new(), String::new()),
        };
        self.line(&first, size, face, x);
        if !remainder.is_empty() {
            for cont in wrap(&remainder, chars_per_line(rest_width, size)) {
                self.line(&cont, size, face, x + hanging);
            }
        }
    }

    /// Two columns on one baseline: `left` at `x`, `right` at `x_right`.
    pub(crate) fn row(
        &mut self,
        left: &str,
        right: &str,
        size: f32,
        face: Face,
        x: f32,
        x_right: f32,
    ) {
        let advance = mm_per_pt(size) * LINE_SPACING;
        self.ensure_space(advance);
        self.y -= mm_per_pt(size);
        let font = self.font(face).clone();
        self.layer
            .use_text(sanitize(left), size, Mm(x), Mm(self.y), &font);
        self.layer
            .use_text(sanitize(right), size, Mm(x_right), Mm(self.y), &font);
        self.y -= advance - mm_per_pt(size);
    }

    /// Horizontal rule across the text block at the cursor.
    pub(crate) fn rule(&mut self, thickness: f32) {
        self.ensure_space(2.0);
        self.y -= 1.0;
        self.layer.set_outline_color(rgb(0.6, 0.6, 0.6));
        self.layer.set_outline_thickness(thickness);
        self.layer.add_line(Line {
            points: vec![
                (Point::new(Mm(MARGIN), Mm(self.y)), false),
                (Point::new(Mm(PAGE_WIDTH - MARGIN), Mm(self.y)), false),
            ],
            is_closed: false,
        });
        self.y -= 1.0;
    }

    /// Draw the fallback badge: a filled blue box with "NHS" in white.
    pub(crate) fn draw_badge(&self) {
        let (x, y, w, h) = LOGO_BOX;
        let (r, g, b) = BADGE_BLUE;
        self.layer.set_fill_color(rgb(r, g, b));
        self.layer.add_polygon(Polygon {
            rings: vec![vec![
                (Point::new(Mm(x), Mm(y)), false),
                (Point::new(Mm(x + w), Mm(y)), false),
                (Point::new(Mm(x + w), Mm(y + h)), false),
                (Point::new(Mm(x), Mm(y + h)), false),
            ]],
            mode: PaintMode::Fill,
            winding_order: WindingOrder::NonZero,
        });
        self.layer.set_fill_color(rgb(1.0, 1.0, 1.0));
        self.layer
            .use_text("NHS", 26.0, Mm(x + 5.0), Mm(y + 4.5), &self.bold);
        self.layer.set_fill_color(rgb(0.0, 0.0, 0.0));
    }

    /// Embed an image file scaled to fit the logo box.
    pub(crate) fn draw_image(&self, path: &Path) -> Result<(), String> {
        let decoded = printpdf::image_crate::open(path).map_err(|e| e.to_string())?;
        let image = Image::from_dynamic_image(&decoded);

        let (x, y, w, h) = LOGO_BOX;
        let px_w = image.image.width.0.max(1) as f32;
        let px_h = image.image.height.0.max(1) as f32;
        // Pick the DPI that makes the image exactly fill the box on its
        // tighter axis.
        let dpi = (px_w * 25.4 / w).max(px_h * 25.4 / h);
        let drawn_w = px_w * 25.4 / dpi;

        image.add_to_layer(
            self.layer.clone(),
            ImageTransform {
                translate_x: Some(Mm(x + w - drawn_w)),
                translate_y: Some(Mm(y)),
                dpi: Some(dpi),
                ..Default::default()
            },
        );
        Ok(())
    }

    /// Serialise the document.
    pub(crate) fn finish(self) -> Result<Vec<u8>, ReportError> {
        self.doc
            .save_to_bytes()
            .map_err(|e| ReportError::Pdf(e.to_string()))
    }
}
