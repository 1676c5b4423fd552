//! Report assembly: drives the block renderers over the analysis result in
//! the fixed document outline, then runs the footer pass.

pub(crate) mod flow;
mod table;

use crate::error::Error;
use crate::fonts::FontStyle;
use crate::model::{AnalysisResult, Severity};
use crate::surface::Surface;

use flow::{ACCENT_COLOR, Flow, SUCCESS_COLOR};
use table::{score_grid, summary_table};

/// Space that must remain (or a page break happens) before the closing
/// bias/recommendation sections begin.
const CLOSING_MIN_H: f32 = 140.0;

const BLOCK_GAP: f32 = 6.0;

/// "90%" for whole numbers, "81.5%" otherwise.
pub(crate) fn fmt_pct(value: f64) -> String {
    if (value - value.round()).abs() < 0.05 {
        format!("{:.0}%", value.round())
    } else {
        format!("{value:.1}%")
    }
}

fn severity_color(severity: Severity) -> [u8; 3] {
    match severity {
        Severity::Low => [101, 163, 13],
        Severity::Medium => [217, 119, 6],
        Severity::High => [220, 38, 38],
    }
}

pub(crate) fn build_report(surf: &mut dyn Surface, analysis: &AnalysisResult) -> Result<(), Error> {
    let mut flow = Flow::new(surf);
    flow.begin_page();

    // Cover block
    flow.heading("HR Candidate Screening Report")?;
    if !analysis.job_role.is_empty() {
        flow.body_text(
            &format!("Role: {}", analysis.job_role),
            FontStyle::Bold,
            None,
        )?;
    }
    let generated = chrono::Local::now().format("%B %e, %Y");
    flow.body_text(&format!("Generated on {generated}"), FontStyle::Normal, None)?;
    flow.separator()?;

    // Summary
    flow.subheading("Candidate Summary")?;
    summary_table(&mut flow, &analysis.candidates)?;

    // Detail pages always start fresh
    flow.begin_page();
    flow.subheading("Detailed Candidate Analysis")?;

    for (i, candidate) in analysis.candidates.iter().enumerate() {
        flow.section_title(&format!("{}. {}", candidate.rank, candidate.name))?;
        flow.body_text(
            &format!("Overall Match: {}", fmt_pct(candidate.scores.overall())),
            FontStyle::Bold,
            Some(ACCENT_COLOR),
        )?;
        flow.gap(BLOCK_GAP);
        score_grid(&mut flow, &candidate.scores)?;
        flow.gap(BLOCK_GAP);

        flow.section_title("Reasoning for Rank")?;
        flow.body_text(&candidate.reasoning, FontStyle::Normal, None)?;
        flow.gap(BLOCK_GAP);

        flow.section_title("Strengths")?;
        flow.bullet_list(&candidate.strengths)?;
        flow.gap(BLOCK_GAP);

        flow.section_title("Weaknesses")?;
        flow.bullet_list(&candidate.weaknesses)?;
        flow.gap(BLOCK_GAP);

        flow.section_title("Fit Assessment")?;
        flow.bullet_list(&candidate.fit_assessment)?;

        if i + 1 < analysis.candidates.len() {
            flow.separator()?;
        }
    }

    // Closing sections
    flow.ensure_space(CLOSING_MIN_H)?;
    flow.separator()?;

    flow.styled_section("Bias Analysis Report", &mut |f| {
        if analysis.bias_flags.is_empty() {
            return f.body_text(
                "No concerning biases detected.",
                FontStyle::Normal,
                Some(SUCCESS_COLOR),
            );
        }
        for flag in &analysis.bias_flags {
            let category = if flag.category.is_empty() {
                "General"
            } else {
                &flag.category
            };
            f.body_text(
                &format!("{category} ({})", flag.severity.label()),
                FontStyle::Bold,
                Some(severity_color(flag.severity)),
            )?;
            f.bullet_list(std::slice::from_ref(&flag.flag))?;
        }
        Ok(())
    })?;

    flow.styled_section("Final Recommendation", &mut |f| {
        if !analysis.recommendation.top_candidate.is_empty() {
            f.body_text(
                &format!(
                    "Recommended Candidate: {}",
                    analysis.recommendation.top_candidate
                ),
                FontStyle::Bold,
                None,
            )?;
        }
        f.body_text(&analysis.recommendation.reasoning, FontStyle::Normal, None)
    })?;

    flow.finalize_footers();
    Ok(())
}
