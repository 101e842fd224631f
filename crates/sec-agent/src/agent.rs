use sec_spider::analysis;
use sec_spider::config::Config;
use sec_spider::stock::sec::{concept::DEFAULT_FORM, FilingRecord, Spider};
use serde_json::Number;
use std::path::Path;
use tracing::{debug, error, info, trace};

/// CLI values that take precedence over the environment.
#[derive(Debug, Default)]
pub(crate) struct Overrides {
    pub(crate) cik: Option<String>,
    pub(crate) metric: Option<String>,
    pub(crate) limit: Option<usize>,
    pub(crate) base_url: Option<String>,
    pub(crate) user_agent: Option<String>,
}

impl Overrides {
    fn apply(self, mut config: Config) -> anyhow::Result<Config> {
        if let Some(cik) = self.cik {
            config = config.with_cik(&cik)?;
        }
        if let Some(metric) = self.metric {
            config.metric = metric;
        }
        if let Some(limit) = self.limit {
            config.limit = limit;
        }
        if let Some(base_url) = self.base_url {
            config.base_url = base_url;
        }
        if let Some(user_agent) = self.user_agent {
            config.user_agent = user_agent;
        }
        Ok(config)
    }
}

/// One full monitoring pass.
pub(crate) async fn run(overrides: Overrides, out_dir: &Path, tui: bool) -> anyhow::Result<()> {
    let time = std::time::Instant::now();

    let config = overrides.apply(Config::from_env()?)?;
    trace!("resolved config: {config:?}");

    let spider = Spider::new(config).map_err(|err| {
        error!("failed to build spider, {err}");
        err
    })?;

    let report = sec_spider::monitor::run(&spider, out_dir, tui).await?;

    info!(
        "{} filings analysed, time elapsed: {:?}",
        report.filings,
        time.elapsed()
    );

    Ok(())
}

/// Classify `value` without touching the network, printing the analysis as JSON.
pub(crate) fn classify(value: Number, date: String) -> anyhow::Result<()> {
    let record = FilingRecord {
        date,
        value,
        form: DEFAULT_FORM.to_string(),
    };
    debug!("classifying {record:?}");

    let analysis = analysis::classify(&record);
    println!("{}", serde_json::to_string_pretty(&analysis)?);

    Ok(())
}
