use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use hr_screening_report::{AnalysisResult, Error, generate_report, report_file_name};

/// Render a candidate screening analysis (JSON) as a PDF report.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Path to the screening analysis JSON file
    input: PathBuf,

    /// Directory the report is written to (defaults to the current directory)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,
}

fn run(args: &Args) -> Result<PathBuf, Error> {
    let json = fs::read_to_string(&args.input)?;
    let analysis: AnalysisResult = serde_json::from_str(&json)?;

    let dir = args.output_dir.clone().unwrap_or_else(|| PathBuf::from("."));
    let path = dir.join(report_file_name(&analysis.job_role));
    generate_report(&analysis, &path)?;
    Ok(path)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    match run(&args) {
        Ok(path) => {
            println!("{}", path.display());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
