//! Score grid and summary table renderers. Both are atomic blocks: their
//! full height is reserved before any cell is painted and neither ever
//! splits across a page boundary.

use crate::error::Error;
use crate::fonts::FontStyle;
use crate::model::{Candidate, ScoreSet};
use crate::surface::Align;

use super::flow::{ACCENT_COLOR, BODY_COLOR, Flow, MUTED_COLOR};
use super::fmt_pct;

pub(crate) const ROW_H: f32 = 22.0;
pub(crate) const GRID_H: f32 = 34.0;

const CELL_PAD: f32 = 6.0;
const BAND_COLOR: [u8; 3] = [243, 244, 246];
const BORDER_COLOR: [u8; 3] = [209, 213, 219];

const HEADER_LABELS: [&str; 5] = ["Rank", "Candidate", "Overall", "Skill", "Experience"];

/// Column widths as fixed shares of the content width; they sum to exactly
/// the content width, so the vertical separators land on prefix sums.
pub(crate) fn column_widths(content_width: f32) -> [f32; 5] {
    [0.10, 0.40, 0.18, 0.16, 0.16].map(|share| share * content_width)
}

/// Four equal columns spanning the content width, each centering a bold
/// percentage over a small label. Fixed two-line height, never measured.
pub(crate) fn score_grid(flow: &mut Flow<'_>, scores: &ScoreSet) -> Result<(), Error> {
    let cells = [
        ("Semantic", scores.semantic),
        ("Skills", scores.skill),
        ("Experience", scores.experience),
        ("Education", scores.education),
    ];

    flow.ensure_space(GRID_H)?;
    let col_w = flow.geo.content_width() / cells.len() as f32;
    for (i, (label, value)) in cells.iter().enumerate() {
        let cx = flow.geo.margin + i as f32 * col_w + col_w / 2.0;
        flow.surf.set_font(FontStyle::Bold, 14.0);
        flow.surf.set_text_color(ACCENT_COLOR);
        flow.surf.draw_text(&fmt_pct(*value), cx, flow.y, Align::Center);
        flow.surf.set_font(FontStyle::Normal, 8.0);
        flow.surf.set_text_color(MUTED_COLOR);
        flow.surf.draw_text(label, cx, flow.y + 18.0, Align::Center);
    }
    flow.y += GRID_H;
    Ok(())
}

/// Header row plus one row per candidate. Cells are painted first, then the
/// outer border and column separators are drawn over the finished area once
/// the table's end offset is known.
pub(crate) fn summary_table(flow: &mut Flow<'_>, candidates: &[Candidate]) -> Result<(), Error> {
    let total_h = (candidates.len() + 1) as f32 * ROW_H;
    flow.ensure_space(total_h)?;

    let widths = column_widths(flow.geo.content_width());
    let left = flow.geo.margin;
    let start_y = flow.y;
    let end_y = start_y + total_h;

    // Header band
    flow.surf.set_fill_color(ACCENT_COLOR);
    flow.surf
        .fill_rect(left, start_y, flow.geo.content_width(), ROW_H);
    flow.surf.set_font(FontStyle::Bold, 10.0);
    flow.surf.set_text_color([255, 255, 255]);
    let mut x = left;
    for (label, w) in HEADER_LABELS.iter().zip(widths) {
        flow.surf
            .draw_text(label, x + CELL_PAD, start_y + CELL_PAD, Align::Left);
        x += w;
    }

    // Body rows, banded on odd zero-based indices
    for (i, candidate) in candidates.iter().enumerate() {
        let row_y = start_y + (i + 1) as f32 * ROW_H;
        if i % 2 == 1 {
            flow.surf.set_fill_color(BAND_COLOR);
            flow.surf
                .fill_rect(left, row_y, flow.geo.content_width(), ROW_H);
        }
        let cells = [
            candidate.rank.to_string(),
            candidate.name.clone(),
            fmt_pct(candidate.scores.overall()),
            fmt_pct(candidate.scores.skill),
            fmt_pct(candidate.scores.experience),
        ];
        flow.surf.set_font(FontStyle::Normal, 10.0);
        flow.surf.set_text_color(BODY_COLOR);
        let mut x = left;
        for (cell, w) in cells.iter().zip(widths) {
            flow.surf
                .draw_text(cell, x + CELL_PAD, row_y + CELL_PAD, Align::Left);
            x += w;
        }
    }

    // Grid lines over the finished cells
    let right = left + flow.geo.content_width();
    flow.surf.set_draw_color(BORDER_COLOR);
    flow.surf.draw_line(left, start_y, right, start_y);
    flow.surf.draw_line(left, end_y, right, end_y);
    flow.surf.draw_line(left, start_y, left, end_y);
    flow.surf.draw_line(right, start_y, right, end_y);
    let mut x = left;
    for w in &widths[..widths.len() - 1] {
        x += w;
        flow.surf.draw_line(x, start_y, x, end_y);
    }

    flow.y = end_y;
    Ok(())
}
