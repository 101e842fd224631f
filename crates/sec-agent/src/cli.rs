use clap::{Parser, Subcommand, ValueEnum};
use serde_json::Number;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Sets the level of tracing.
    #[arg(short, long, global = true)]
    pub trace: Option<TraceLevel>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch the latest filings, classify them and save each analysis to a file.
    ///
    /// Flags override the matching environment variables (or `.env` entries).
    Run {
        /// Central Index Key of the filer [env: SEC_CIK].
        #[arg(short, long)]
        cik: Option<String>,

        /// us-gaap concept to fetch [env: SEC_METRIC].
        #[arg(short, long)]
        metric: Option<String>,

        /// Maximum number of filings to analyse [env: SEC_LIMIT].
        #[arg(short, long)]
        limit: Option<usize>,

        /// Company-concept API base URL [env: SEC_BASE_URL].
        #[arg(long)]
        base_url: Option<String>,

        /// Identifying User-Agent sent to the SEC [env: USER_AGENT].
        #[arg(short, long)]
        user_agent: Option<String>,

        /// Directory the analysis files are written to.
        #[arg(short, long, default_value = ".")]
        out_dir: PathBuf,
    },

    /// Classify a single value offline and print the analysis.
    Classify {
        /// Reported asset value, in USD.
        #[arg(allow_negative_numbers = true, value_parser = parse_value)]
        value: Number,

        /// Period end date of the filing.
        #[arg(short, long, default_value = "")]
        date: String,
    },
}

/// Integers are kept exact; anything else must be a finite float.
fn parse_value(s: &str) -> Result<Number, String> {
    if let Ok(int) = s.parse::<i64>() {
        return Ok(Number::from(int));
    }
    if let Ok(int) = s.parse::<u64>() {
        return Ok(Number::from(int));
    }
    s.parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .ok_or_else(|| format!("{s:?} is not a finite number"))
}

#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
#[clap(rename_all = "UPPERCASE")]
pub enum TraceLevel {
    DEBUG,
    ERROR,
    INFO,
    TRACE,
    WARN,
}
