//! Page flow: the cursor that owns vertical placement and page breaks, the
//! simple block renderers, the boxed styled section, and the footer pass.
//!
//! Pagination policy per block kind: body text, the score grid and the
//! summary table break as whole blocks; bullet lists break per item (an item
//! is never split mid-item). Changing this alters visual output, so the
//! distinction is deliberate and kept explicit at each call site.

use crate::error::Error;
use crate::fonts::FontStyle;
use crate::surface::{Align, MeasureSurface, Surface};

pub(crate) const MARGIN: f32 = 56.0;
pub(crate) const FOOTER_BAND: f32 = 28.0;

pub(crate) const BODY_SIZE: f32 = 10.0;
pub(crate) const LINE_FACTOR: f32 = 1.4;

const HEADING_SIZE: f32 = 20.0;
const HEADING_H: f32 = 30.0;
const SUBHEADING_SIZE: f32 = 14.0;
const SUBHEADING_H: f32 = 22.0;
const SECTION_TITLE_SIZE: f32 = 12.0;
const SECTION_TITLE_H: f32 = 18.0;
const SMALL_SIZE: f32 = 8.0;

const SEPARATOR_PAD: f32 = 7.0;
const BULLET_INDENT: f32 = 14.0;

/// Minimum space reserved before a styled section starts.
const SECTION_MIN_H: f32 = 64.0;
const SECTION_TITLE_GAP: f32 = 4.0;
const SECTION_TRAILING_GAP: f32 = 8.0;
const BOX_PAD: f32 = 6.0;

const RUNNING_TITLE: &str = "HR Candidate Screening";

pub(crate) const HEADING_COLOR: [u8; 3] = [31, 41, 55];
pub(crate) const ACCENT_COLOR: [u8; 3] = [37, 99, 235];
pub(crate) const BODY_COLOR: [u8; 3] = [55, 65, 81];
pub(crate) const MUTED_COLOR: [u8; 3] = [156, 163, 175];
pub(crate) const RULE_COLOR: [u8; 3] = [229, 231, 235];
pub(crate) const SUCCESS_COLOR: [u8; 3] = [22, 163, 74];
const BOX_FILL_COLOR: [u8; 3] = [249, 250, 251];

/// Immutable page geometry for one document.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Geometry {
    pub page_width: f32,
    pub page_height: f32,
    pub margin: f32,
    pub footer_band: f32,
}

impl Geometry {
    pub(crate) fn for_surface(surf: &dyn Surface) -> Self {
        let geo = Self {
            page_width: surf.page_width(),
            page_height: surf.page_height(),
            margin: MARGIN,
            footer_band: FOOTER_BAND,
        };
        debug_assert!(geo.margin > 0.0 && geo.content_width() > 0.0);
        geo
    }

    pub(crate) fn content_width(&self) -> f32 {
        self.page_width - 2.0 * self.margin
    }

    /// Lowest vertical offset content may reach on any page.
    pub(crate) fn bottom_limit(&self) -> f32 {
        self.page_height - self.margin - self.footer_band
    }

    /// Usable content height of a fresh page.
    pub(crate) fn usable_height(&self) -> f32 {
        self.bottom_limit() - self.margin
    }
}

/// The render context: drawing handle, geometry and the sole mutable
/// positioning state (current page index and vertical offset). Passed
/// explicitly through every renderer so tests can construct a fresh one.
pub(crate) struct Flow<'s> {
    pub(crate) surf: &'s mut dyn Surface,
    pub(crate) geo: Geometry,
    /// 1-based; 0 until the first `begin_page`.
    pub(crate) page: usize,
    /// Top-down vertical offset on the current page, in points.
    pub(crate) y: f32,
}

impl<'s> Flow<'s> {
    pub(crate) fn new(surf: &'s mut dyn Surface) -> Self {
        let geo = Geometry::for_surface(surf);
        Self {
            surf,
            geo,
            page: 0,
            y: geo.margin,
        }
    }

    /// Append a page, reset the offset to the top margin, and paint the
    /// fixed page header (runs on every page, including the first).
    pub(crate) fn begin_page(&mut self) {
        self.surf.add_page();
        self.page = self.surf.page_count();
        self.y = self.geo.margin;

        let rule_y = self.geo.margin - 12.0;
        self.surf.set_font(FontStyle::Normal, SMALL_SIZE);
        self.surf.set_text_color(MUTED_COLOR);
        self.surf
            .draw_text(RUNNING_TITLE, self.geo.margin, rule_y - 14.0, Align::Left);
        self.surf.set_draw_color(RULE_COLOR);
        self.surf.draw_line(
            self.geo.margin,
            rule_y,
            self.geo.page_width - self.geo.margin,
            rule_y,
        );
    }

    /// Capacity check: start a new page when `required` does not fit below
    /// the cursor. Paints nothing itself (the page header comes from
    /// `begin_page`). Errs when `required` exceeds even a fresh page.
    pub(crate) fn ensure_space(&mut self, required: f32) -> Result<(), Error> {
        let available = self.geo.usable_height();
        if required > available {
            return Err(Error::BlockTooTall {
                needed: required,
                available,
            });
        }
        if self.y + required > self.geo.bottom_limit() {
            self.begin_page();
        }
        Ok(())
    }

    /// Plain vertical gap. Never breaks the page on its own; the next
    /// block's `ensure_space` deals with any spill.
    pub(crate) fn gap(&mut self, h: f32) {
        self.y += h;
    }

    pub(crate) fn heading(&mut self, text: &str) -> Result<(), Error> {
        self.ensure_space(HEADING_H)?;
        self.surf.set_font(FontStyle::Bold, HEADING_SIZE);
        self.surf.set_text_color(HEADING_COLOR);
        self.surf
            .draw_text(text, self.geo.page_width / 2.0, self.y, Align::Center);
        self.y += HEADING_H;
        Ok(())
    }

    pub(crate) fn subheading(&mut self, text: &str) -> Result<(), Error> {
        self.ensure_space(SUBHEADING_H)?;
        self.surf.set_font(FontStyle::Bold, SUBHEADING_SIZE);
        self.surf.set_text_color(HEADING_COLOR);
        self.surf.draw_text(text, self.geo.margin, self.y, Align::Left);
        self.y += SUBHEADING_H;
        Ok(())
    }

    pub(crate) fn section_title(&mut self, text: &str) -> Result<(), Error> {
        self.ensure_space(SECTION_TITLE_H)?;
        self.surf.set_font(FontStyle::Bold, SECTION_TITLE_SIZE);
        self.surf.set_text_color(ACCENT_COLOR);
        self.surf.draw_text(text, self.geo.margin, self.y, Align::Left);
        self.y += SECTION_TITLE_H;
        Ok(())
    }

    /// Wrapped body text across the content width. Empty or whitespace-only
    /// text renders nothing and advances nothing. Breaks as a whole block.
    pub(crate) fn body_text(
        &mut self,
        text: &str,
        style: FontStyle,
        color: Option<[u8; 3]>,
    ) -> Result<(), Error> {
        if text.trim().is_empty() {
            return Ok(());
        }
        self.surf.set_font(style, BODY_SIZE);
        let lines = self.surf.wrap_text(text, self.geo.content_width());
        let pitch = BODY_SIZE * LINE_FACTOR;
        let h = lines.len() as f32 * pitch;
        self.ensure_space(h)?;
        // A page break leaves the header font active.
        self.surf.set_font(style, BODY_SIZE);
        self.surf.set_text_color(color.unwrap_or(BODY_COLOR));
        self.surf.draw_lines(&lines, self.geo.margin, self.y, pitch);
        self.y += h;
        Ok(())
    }

    /// Bulleted list. Each item is height-checked individually and may start
    /// a new page; items themselves never split. An empty list renders a
    /// single italic placeholder line.
    pub(crate) fn bullet_list(&mut self, items: &[String]) -> Result<(), Error> {
        if items.is_empty() {
            return self.body_text("None listed", FontStyle::Italic, Some(MUTED_COLOR));
        }
        let pitch = BODY_SIZE * LINE_FACTOR;
        let text_w = self.geo.content_width() - BULLET_INDENT;
        for item in items {
            self.surf.set_font(FontStyle::Normal, BODY_SIZE);
            let lines = self.surf.wrap_text(item, text_w);
            if lines.is_empty() {
                continue;
            }
            let h = lines.len() as f32 * pitch;
            self.ensure_space(h)?;
            // A page break leaves the header font active.
            self.surf.set_font(FontStyle::Normal, BODY_SIZE);
            self.surf.set_text_color(BODY_COLOR);
            self.surf
                .draw_text("\u{2022}", self.geo.margin, self.y, Align::Left);
            self.surf
                .draw_lines(&lines, self.geo.margin + BULLET_INDENT, self.y, pitch);
            self.y += h;
        }
        Ok(())
    }

    /// Padding, a rule across the content width, equal padding after.
    pub(crate) fn separator(&mut self) -> Result<(), Error> {
        let h = 2.0 * SEPARATOR_PAD;
        self.ensure_space(h)?;
        self.surf.set_draw_color(RULE_COLOR);
        let rule_y = self.y + SEPARATOR_PAD;
        self.surf.draw_line(
            self.geo.margin,
            rule_y,
            self.geo.page_width - self.geo.margin,
            rule_y,
        );
        self.y += h;
        Ok(())
    }

    /// Titled content group with a light background box when the content
    /// fits on one page.
    ///
    /// The content is first run against a [`MeasureSurface`]-backed probe
    /// flow seeded with the same page and offset, so its extent is known
    /// before any ink. If the probe stayed on the starting page the box is
    /// painted behind and the content once on top; if it crossed a page
    /// boundary no box is painted (a rectangle cannot span two physical
    /// pages) and the content still paints exactly once. The content
    /// procedure therefore runs twice and must be deterministic.
    pub(crate) fn styled_section(
        &mut self,
        title: &str,
        content: &mut dyn FnMut(&mut Flow<'_>) -> Result<(), Error>,
    ) -> Result<(), Error> {
        self.ensure_space(SECTION_MIN_H)?;
        let start_page = self.page;
        let start_y = self.y;

        let mut probe_surf = MeasureSurface::new(self.surf.page_count());
        let (end_page, end_y) = {
            let mut probe = Flow {
                surf: &mut probe_surf,
                geo: self.geo,
                page: start_page,
                y: start_y,
            };
            probe.styled_section_inner(title, &mut *content)?;
            (probe.page, probe.y)
        };

        if end_page == start_page {
            // end_y includes the trailing gap; the box pads the visible
            // content evenly instead.
            let content_h = (end_y - SECTION_TRAILING_GAP) - start_y;
            self.surf.set_fill_color(BOX_FILL_COLOR);
            self.surf.fill_rect(
                self.geo.margin - BOX_PAD,
                start_y - BOX_PAD,
                self.geo.content_width() + 2.0 * BOX_PAD,
                content_h + 2.0 * BOX_PAD,
            );
        }
        self.styled_section_inner(title, content)
    }

    fn styled_section_inner(
        &mut self,
        title: &str,
        content: &mut dyn FnMut(&mut Flow<'_>) -> Result<(), Error>,
    ) -> Result<(), Error> {
        self.section_title(title)?;
        self.gap(SECTION_TITLE_GAP);
        content(self)?;
        self.gap(SECTION_TRAILING_GAP);
        Ok(())
    }

    /// Post-pass once all content is laid out: stamp the page-count-aware
    /// footer on every page. Touches nothing already painted.
    pub(crate) fn finalize_footers(&mut self) {
        let total = self.surf.page_count();
        let rule_y = self.geo.page_height - self.geo.margin - 14.0;
        for i in 1..=total {
            self.surf.set_current_page(i);
            self.surf.set_draw_color(RULE_COLOR);
            self.surf.draw_line(
                self.geo.margin,
                rule_y,
                self.geo.page_width - self.geo.margin,
                rule_y,
            );
            self.surf.set_font(FontStyle::Normal, SMALL_SIZE);
            self.surf.set_text_color(MUTED_COLOR);
            self.surf.draw_text(
                &format!("Page {i} of {total}"),
                self.geo.page_width / 2.0,
                rule_y + 4.0,
                Align::Center,
            );
        }
    }
}
