use serde::Deserialize;

/// Weights for the overall composite score. Must sum to 1.0.
pub const WEIGHT_SEMANTIC: f64 = 0.45;
pub const WEIGHT_SKILL: f64 = 0.30;
pub const WEIGHT_EXPERIENCE: f64 = 0.20;
pub const WEIGHT_EDUCATION: f64 = 0.05;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Deserialize)]
pub enum Severity {
    #[serde(alias = "low")]
    Low,
    #[serde(alias = "medium")]
    Medium,
    #[serde(alias = "high")]
    High,
}

impl Severity {
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
        }
    }
}

/// Component scores in [0, 100]. The upstream producer is expected to
/// pre-clamp, but `overall()` clamps again before weighting so a stray
/// out-of-range value cannot skew the composite.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
pub struct ScoreSet {
    #[serde(default)]
    pub semantic: f64,
    #[serde(default)]
    pub skill: f64,
    #[serde(default)]
    pub experience: f64,
    #[serde(default)]
    pub education: f64,
    /// Composite supplied by the producer, if any. When absent the
    /// weighted sum of the four components is used instead.
    #[serde(default)]
    pub overall: Option<f64>,
}

fn clamp_score(v: f64) -> f64 {
    v.clamp(0.0, 100.0)
}

impl ScoreSet {
    pub fn overall(&self) -> f64 {
        self.overall.unwrap_or_else(|| {
            WEIGHT_SEMANTIC * clamp_score(self.semantic)
                + WEIGHT_SKILL * clamp_score(self.skill)
                + WEIGHT_EXPERIENCE * clamp_score(self.experience)
                + WEIGHT_EDUCATION * clamp_score(self.education)
        })
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Candidate {
    /// 1-based, contiguous, assigned externally by descending overall score.
    pub rank: u32,
    pub name: String,
    #[serde(default)]
    pub scores: ScoreSet,
    #[serde(default)]
    pub reasoning: String,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub weaknesses: Vec<String>,
    #[serde(default)]
    pub fit_assessment: Vec<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct BiasFlag {
    pub flag: String,
    #[serde(default)]
    pub category: String,
    pub severity: Severity,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Recommendation {
    #[serde(default)]
    pub top_candidate: String,
    #[serde(default)]
    pub reasoning: String,
}

/// The analysis result consumed read-only by the report engine. Constructed
/// entirely before rendering begins; the engine never mutates it.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct AnalysisResult {
    #[serde(default)]
    pub job_role: String,
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(default)]
    pub bias_flags: Vec<BiasFlag>,
    #[serde(default)]
    pub recommendation: Recommendation,
}
