//! Renders HR candidate screening analyses as paginated PDF reports.
//!
//! The input is the JSON produced by the screening pipeline (ranked
//! candidates with per-dimension scores, bias flags and a final
//! recommendation); the output is a multi-page A4 document with a candidate
//! summary table, per-candidate detail blocks and boxed closing sections.

mod error;
mod fonts;
mod model;
mod report;
mod surface;

use std::fs;
use std::path::Path;
use std::time::Instant;

pub use error::Error;
pub use model::{AnalysisResult, BiasFlag, Candidate, Recommendation, ScoreSet, Severity};
pub use surface::{PAGE_HEIGHT, PAGE_WIDTH};

use surface::Surface;

/// Render the analysis into PDF bytes.
pub fn render(analysis: &AnalysisResult) -> Result<Vec<u8>, Error> {
    let start = Instant::now();
    let mut surf = surface::PdfSurface::new();
    report::build_report(&mut surf, analysis)?;
    let pages = surf.page_count();
    let bytes = surf.finish()?;
    log::info!(
        "rendered {} candidate(s) across {pages} page(s) in {:.1?}",
        analysis.candidates.len(),
        start.elapsed()
    );
    Ok(bytes)
}

/// Render the analysis and write it to `path`.
pub fn generate_report(analysis: &AnalysisResult, path: &Path) -> Result<(), Error> {
    let bytes = render(analysis)?;
    fs::write(path, bytes)?;
    Ok(())
}

/// Default output file name for a report: the fixed prefix plus the role
/// with whitespace runs collapsed to underscores.
pub fn report_file_name(job_role: &str) -> String {
    let role: Vec<&str> = job_role.split_whitespace().collect();
    if role.is_empty() {
        "HR_Screening_Report.pdf".to_string()
    } else {
        format!("HR_Screening_Report_{}.pdf", role.join("_"))
    }
}
