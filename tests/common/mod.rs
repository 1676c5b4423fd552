//! Shared fixtures plus a small PDF text extractor for asserting on
//! rendered page content.

use hr_screening_report::{AnalysisResult, BiasFlag, Candidate, Recommendation, ScoreSet, Severity};

pub fn scores(semantic: f64, skill: f64, experience: f64, education: f64) -> ScoreSet {
    ScoreSet {
        semantic,
        skill,
        experience,
        education,
        overall: None,
    }
}

pub fn candidate(rank: u32, name: &str) -> Candidate {
    Candidate {
        rank,
        name: name.to_string(),
        scores: scores(90.0, 80.0, 70.0, 60.0),
        reasoning: format!("{name} ranked on combined scoring."),
        strengths: vec!["Distributed systems".to_string(), "Mentoring".to_string()],
        weaknesses: vec!["Limited cloud exposure".to_string()],
        fit_assessment: vec!["Solid fit for the role".to_string()],
    }
}

pub fn sample_analysis(candidates: usize) -> AnalysisResult {
    AnalysisResult {
        job_role: "Backend Engineer".to_string(),
        candidates: (1..=candidates as u32)
            .map(|rank| candidate(rank, &format!("Candidate {rank}")))
            .collect(),
        bias_flags: vec![BiasFlag {
            flag: "Reasoning references graduation year".to_string(),
            category: "Age".to_string(),
            severity: Severity::Medium,
        }],
        recommendation: Recommendation {
            top_candidate: "Candidate 1".to_string(),
            reasoning: "Best balance of skills and experience.".to_string(),
        },
    }
}

/// Decompressed, decoded text of every page content stream, in page order.
///
/// Content streams are the only streams in the document and carry a
/// `/Length` in their dictionary, so extraction is a linear scan.
pub fn page_texts(pdf: &[u8]) -> Vec<String> {
    let mut pages = Vec::new();
    let mut at = 0;
    while let Some(rel) = find(&pdf[at..], b"stream\n") {
        let dict_start = at;
        let data_start = at + rel + b"stream\n".len();
        let len = stream_length(&pdf[dict_start..at + rel])
            .expect("stream dictionary must carry /Length");
        let data = &pdf[data_start..data_start + len];
        let raw = miniz_oxide::inflate::decompress_to_vec_zlib(data)
            .expect("content stream must inflate");
        pages.push(shown_text(&raw));
        let tail = data_start + len;
        at = tail
            + find(&pdf[tail..], b"endstream").expect("stream must be terminated")
            + b"endstream".len();
    }
    pages
}

pub fn all_text(pdf: &[u8]) -> String {
    page_texts(pdf).join("\n")
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

fn stream_length(dict: &[u8]) -> Option<usize> {
    let at = dict
        .windows(b"/Length ".len())
        .rposition(|w| w == b"/Length ")?;
    let digits: Vec<u8> = dict[at + b"/Length ".len()..]
        .iter()
        .copied()
        .take_while(u8::is_ascii_digit)
        .collect();
    String::from_utf8(digits).ok()?.parse().ok()
}

/// Collect the operands of every `Tj` in a content stream, joined with
/// newlines. Handles both literal and hex string forms.
fn shown_text(content: &[u8]) -> String {
    let mut out = Vec::new();
    let mut i = 0;
    while i < content.len() {
        match content[i] {
            b'(' => {
                let (s, next) = literal_string(content, i + 1);
                if content[next..].starts_with(b" Tj") {
                    out.push(s);
                }
                i = next;
            }
            b'<' if content.get(i + 1) != Some(&b'<') => {
                let (s, next) = hex_string(content, i + 1);
                if content[next..].starts_with(b" Tj") {
                    out.push(s);
                }
                i = next;
            }
            _ => i += 1,
        }
    }
    out.join("\n")
}

fn literal_string(content: &[u8], mut i: usize) -> (String, usize) {
    let mut bytes = Vec::new();
    // Balanced parentheses are legal inside a literal string without
    // escaping, so track nesting depth.
    let mut depth = 0usize;
    while i < content.len() {
        match content[i] {
            b'(' => {
                depth += 1;
                bytes.push(b'(');
                i += 1;
            }
            b')' if depth > 0 => {
                depth -= 1;
                bytes.push(b')');
                i += 1;
            }
            b')' => return (decode(&bytes), i + 1),
            b'\\' => {
                if let Some(&escaped) = content.get(i + 1) {
                    bytes.push(match escaped {
                        b'n' => b'\n',
                        b'r' => b'\r',
                        b't' => b'\t',
                        other => other,
                    });
                }
                i += 2;
            }
            byte => {
                bytes.push(byte);
                i += 1;
            }
        }
    }
    (decode(&bytes), i)
}

fn hex_string(content: &[u8], mut i: usize) -> (String, usize) {
    let mut digits = Vec::new();
    while i < content.len() && content[i] != b'>' {
        if content[i].is_ascii_hexdigit() {
            digits.push(content[i]);
        }
        i += 1;
    }
    let bytes: Vec<u8> = digits
        .chunks(2)
        .map(|pair| {
            let hi = (pair[0] as char).to_digit(16).unwrap() as u8;
            let lo = pair
                .get(1)
                .map_or(0, |d| (*d as char).to_digit(16).unwrap() as u8);
            hi << 4 | lo
        })
        .collect();
    (decode(&bytes), i + 1)
}

/// WinAnsi is close enough to Latin-1 for what the assertions look at.
fn decode(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|&b| match b {
            0x95 => '\u{2022}',
            other => other as char,
        })
        .collect()
}
