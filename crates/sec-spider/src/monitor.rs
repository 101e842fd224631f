use crate::analysis::{classify, Action};
use crate::stock::sec::Spider;
use colored::Colorize;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// What a single run produced.
#[derive(Debug, Default)]
pub struct Report {
    pub filings: usize,
    pub written: Vec<PathBuf>,
    /// Set when the fetch failed and the run carried on with no filings.
    pub fetch_error: Option<String>,
}

/// Fetch the configured filings, classify each one and write it to `out_dir`.
///
/// A failed fetch is reported on the console and counts as zero filings. Only a failed write is
/// returned as an error.
pub async fn run(spider: &Spider, out_dir: impl AsRef<Path>, tui: bool) -> anyhow::Result<Report> {
    let time = std::time::Instant::now();
    let out_dir = out_dir.as_ref();
    let config = spider.config();

    if tui {
        println!("{}", crate::tui::banner("SEC Monitoring Agent"));
    }
    crate::tui::status(
        tui,
        format!(
            "Starting SEC Monitoring Agent for CIK{} ({}) ...",
            config.cik, config.metric
        ),
    );

    let pb = crate::tui::spinner(tui, format!("fetching {} ...", spider.url()));
    let fetched = spider.fetch().await;
    pb.finish_and_clear();

    let (filings, fetch_error) = match fetched {
        Ok(filings) => (filings, None),
        Err(err) => {
            crate::tui::failure(tui, format!("Error getting filings: {err}"));
            (vec![], Some(err.to_string()))
        }
    };

    crate::tui::status(tui, format!("Found {} filings", filings.len()));

    let mut report = Report {
        filings: filings.len(),
        written: Vec::with_capacity(filings.len()),
        fetch_error,
    };
    for filing in &filings {
        trace!("classifying filing {filing:?}");
        let analysis = classify(filing);

        let echo = serde_json::to_string(&analysis)?;
        if tui {
            println!("Analysis: {echo} {}", paint(analysis.action));
        } else {
            crate::tui::status(tui, format!("Analysis: {echo}"));
        }

        let path = crate::fs::write_analysis(out_dir, &analysis).await?;
        crate::tui::status(tui, format!("Saved analysis to {}", path.display()));
        report.written.push(path);
    }

    crate::tui::status(tui, "Agent run complete!");
    debug!(
        "{} analyses written to {out_dir:?}, {}",
        report.written.len(),
        crate::time_elapsed(time)
    );

    Ok(report)
}

fn paint(action: Action) -> colored::ColoredString {
    let label = action.to_string();
    match action {
        Action::MajorBuy => label.green().bold(),
        Action::Buy => label.green(),
        Action::Sell => label.red(),
        Action::Hold => label.white(),
    }
}
