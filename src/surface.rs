//! Drawing backend boundary.
//!
//! Renderers talk to a [`Surface`]: primitive canvas operations plus page
//! management and text-wrap measurement. [`PdfSurface`] is the real backend
//! over `pdf_writer`; [`MeasureSurface`] is a no-op backend that only tracks
//! page count and font state, used to measure flowed content before any ink
//! is committed.
//!
//! Coordinates are top-down: `x` from the left page edge, `y` from the top
//! page edge, both in points. For text, `y` is the top of the line; the
//! baseline is derived from the current font size.

use pdf_writer::{Content, Filter, Name, Pdf, Rect, Ref, Str};

use crate::error::Error;
use crate::fonts::{self, FontStyle};

/// A4 in points.
pub const PAGE_WIDTH: f32 = 595.28;
pub const PAGE_HEIGHT: f32 = 841.89;

/// Fraction of the font size between line top and baseline.
const ASCENT_RATIO: f32 = 0.8;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
}

pub trait Surface {
    fn set_font(&mut self, style: FontStyle, size: f32);
    fn set_text_color(&mut self, rgb: [u8; 3]);
    fn set_fill_color(&mut self, rgb: [u8; 3]);
    fn set_draw_color(&mut self, rgb: [u8; 3]);

    /// Paint one line of text in the current font and text color.
    /// With `Align::Center`, `x` is the center of the rendered text.
    fn draw_text(&mut self, text: &str, x: f32, y: f32, align: Align);

    /// Paint pre-wrapped lines top-down, advancing `line_pitch` per line.
    fn draw_lines(&mut self, lines: &[String], x: f32, y: f32, line_pitch: f32) {
        for (i, line) in lines.iter().enumerate() {
            self.draw_text(line, x, y + i as f32 * line_pitch, Align::Left);
        }
    }

    fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32);
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32);

    /// Wrap `text` to `max_width` using the current font.
    fn wrap_text(&self, text: &str, max_width: f32) -> Vec<String>;

    /// Measure one line of text at the current font.
    fn text_width(&self, text: &str) -> f32;

    fn add_page(&mut self);
    fn page_count(&self) -> usize;
    /// Switch the painting target to an existing page (1-based).
    fn set_current_page(&mut self, page: usize);

    fn page_width(&self) -> f32;
    fn page_height(&self) -> f32;
}

/// Real backend: one `Content` stream per page, serialized by [`finish`].
///
/// [`finish`]: PdfSurface::finish
pub struct PdfSurface {
    pages: Vec<Content>,
    current: usize,
    style: FontStyle,
    size: f32,
    text_color: [u8; 3],
    fill_color: [u8; 3],
    draw_color: [u8; 3],
}

impl PdfSurface {
    pub fn new() -> Self {
        Self {
            pages: Vec::new(),
            current: 0,
            style: FontStyle::Normal,
            size: 10.0,
            text_color: [0, 0, 0],
            fill_color: [0, 0, 0],
            draw_color: [0, 0, 0],
        }
    }

    fn content(&mut self) -> &mut Content {
        &mut self.pages[self.current]
    }

    /// Assemble catalog, page tree, base-14 font dictionaries and the
    /// flate-compressed content streams into the final PDF bytes.
    pub fn finish(self) -> Result<Vec<u8>, Error> {
        if self.pages.is_empty() {
            return Err(Error::EmptyDocument);
        }

        let mut pdf = Pdf::new();
        let mut next_id = 1i32;
        let mut alloc = || {
            let r = Ref::new(next_id);
            next_id += 1;
            r
        };

        let catalog_id = alloc();
        let pages_id = alloc();

        let font_styles = [FontStyle::Normal, FontStyle::Bold, FontStyle::Italic];
        let font_refs: Vec<Ref> = font_styles
            .iter()
            .map(|style| {
                let font_ref = alloc();
                pdf.type1_font(font_ref)
                    .base_font(Name(style.base_font()))
                    .encoding_predefined(Name(b"WinAnsiEncoding"));
                font_ref
            })
            .collect();

        let n = self.pages.len();
        let page_ids: Vec<Ref> = (0..n).map(|_| alloc()).collect();
        let content_ids: Vec<Ref> = (0..n).map(|_| alloc()).collect();

        for (i, content) in self.pages.into_iter().enumerate() {
            let raw = content.finish();
            let compressed = miniz_oxide::deflate::compress_to_vec_zlib(raw.as_slice(), 6);
            pdf.stream(content_ids[i], &compressed)
                .filter(Filter::FlateDecode);
        }

        pdf.catalog(catalog_id).pages(pages_id);
        pdf.pages(pages_id)
            .kids(page_ids.iter().copied())
            .count(n as i32);

        for i in 0..n {
            let mut page = pdf.page(page_ids[i]);
            page.media_box(Rect::new(0.0, 0.0, PAGE_WIDTH, PAGE_HEIGHT))
                .parent(pages_id)
                .contents(content_ids[i]);
            let mut resources = page.resources();
            let mut font_dict = resources.fonts();
            for (style, font_ref) in font_styles.iter().zip(&font_refs) {
                font_dict.pair(Name(style.resource_name()), *font_ref);
            }
        }

        Ok(pdf.finish())
    }
}

impl Default for PdfSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for PdfSurface {
    fn set_font(&mut self, style: FontStyle, size: f32) {
        self.style = style;
        self.size = size;
    }

    fn set_text_color(&mut self, rgb: [u8; 3]) {
        self.text_color = rgb;
    }

    fn set_fill_color(&mut self, rgb: [u8; 3]) {
        self.fill_color = rgb;
    }

    fn set_draw_color(&mut self, rgb: [u8; 3]) {
        self.draw_color = rgb;
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, align: Align) {
        let bytes = fonts::to_winansi_bytes(text);
        if bytes.is_empty() {
            return;
        }
        let start_x = match align {
            Align::Left => x,
            Align::Center => x - self.text_width(text) / 2.0,
        };
        let baseline = PAGE_HEIGHT - y - self.size * ASCENT_RATIO;
        let [r, g, b] = self.text_color;
        let (style, size) = (self.style, self.size);
        let content = self.content();
        content
            .set_fill_rgb(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
            .begin_text()
            .set_font(Name(style.resource_name()), size)
            .next_line(start_x, baseline)
            .show(Str(&bytes))
            .end_text();
        content.set_fill_gray(0.0);
    }

    fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
        let [r, g, b] = self.draw_color;
        let content = self.content();
        content.save_state();
        content
            .set_line_width(0.5)
            .set_stroke_rgb(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
            .move_to(x1, PAGE_HEIGHT - y1)
            .line_to(x2, PAGE_HEIGHT - y2)
            .stroke();
        content.restore_state();
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        let [r, g, b] = self.fill_color;
        let content = self.content();
        content.save_state();
        content
            .set_fill_rgb(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
            .rect(x, PAGE_HEIGHT - y - h, w, h)
            .fill_nonzero();
        content.restore_state();
    }

    fn wrap_text(&self, text: &str, max_width: f32) -> Vec<String> {
        fonts::wrap_to_width(text, self.style, self.size, max_width)
    }

    fn text_width(&self, text: &str) -> f32 {
        fonts::text_width(text, self.style, self.size)
    }

    fn add_page(&mut self) {
        self.pages.push(Content::new());
        self.current = self.pages.len() - 1;
    }

    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn set_current_page(&mut self, page: usize) {
        debug_assert!(page >= 1 && page <= self.pages.len());
        self.current = page - 1;
    }

    fn page_height(&self) -> f32 {
        PAGE_HEIGHT
    }

    fn page_width(&self) -> f32 {
        PAGE_WIDTH
    }
}

/// Height-measurement backend: identical geometry and wrap behavior, no ink.
pub struct MeasureSurface {
    style: FontStyle,
    size: f32,
    pages: usize,
}

impl MeasureSurface {
    /// Seeded with the page count of the surface being mirrored so that page
    /// indices line up between the probe and the real pass.
    pub fn new(pages: usize) -> Self {
        Self {
            style: FontStyle::Normal,
            size: 10.0,
            pages,
        }
    }
}

impl Surface for MeasureSurface {
    fn set_font(&mut self, style: FontStyle, size: f32) {
        self.style = style;
        self.size = size;
    }

    fn set_text_color(&mut self, _rgb: [u8; 3]) {}
    fn set_fill_color(&mut self, _rgb: [u8; 3]) {}
    fn set_draw_color(&mut self, _rgb: [u8; 3]) {}
    fn draw_text(&mut self, _text: &str, _x: f32, _y: f32, _align: Align) {}
    fn draw_line(&mut self, _x1: f32, _y1: f32, _x2: f32, _y2: f32) {}
    fn fill_rect(&mut self, _x: f32, _y: f32, _w: f32, _h: f32) {}

    fn wrap_text(&self, text: &str, max_width: f32) -> Vec<String> {
        fonts::wrap_to_width(text, self.style, self.size, max_width)
    }

    fn text_width(&self, text: &str) -> f32 {
        fonts::text_width(text, self.style, self.size)
    }

    fn add_page(&mut self) {
        self.pages += 1;
    }

    fn page_count(&self) -> usize {
        self.pages
    }

    fn set_current_page(&mut self, _page: usize) {}

    fn page_height(&self) -> f32 {
        PAGE_HEIGHT
    }

    fn page_width(&self) -> f32 {
        PAGE_WIDTH
    }
}
