use crate::http::var;
use anyhow::{anyhow, Context};
use std::time::Duration;

/// Base of the SEC XBRL company-concept API.
pub const SEC_CONCEPT_URL: &str = "https://data.sec.gov/api/xbrl/companyconcept";

/// The SEC asks every client to identify itself; override with `USER_AGENT`.
pub const DEFAULT_USER_AGENT: &str = "YourName your.email@example.com";

/// BlackRock.
pub const DEFAULT_CIK: &str = "0001364742";

pub const DEFAULT_METRIC: &str = "Assets";

/// Number of `units.USD` entries kept from a response.
pub const DEFAULT_LIMIT: usize = 10;

/// Everything the spider needs to know about where, and as whom, it fetches.
///
/// Values are resolved in the order: CLI flag > environment (or `.env`) > default.
///
/// | env                | default                                         |
/// |--------------------|-------------------------------------------------|
/// | `SEC_BASE_URL`     | `https://data.sec.gov/api/xbrl/companyconcept`  |
/// | `USER_AGENT`       | `YourName your.email@example.com`               |
/// | `SEC_CIK`          | `0001364742`                                    |
/// | `SEC_METRIC`       | `Assets`                                        |
/// | `SEC_LIMIT`        | `10`                                            |
/// | `SEC_TIMEOUT_SECS` | none, the http client's default                 |
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub base_url: String,
    pub user_agent: String,
    pub cik: String,
    pub metric: String,
    pub limit: usize,
    pub timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: SEC_CONCEPT_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            cik: DEFAULT_CIK.to_string(),
            metric: DEFAULT_METRIC.to_string(),
            limit: DEFAULT_LIMIT,
            timeout: None,
        }
    }
}

impl Config {
    /// Read the config from the process environment; call `dotenv::dotenv()` first to pick up
    /// a `.env` file.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| var(key).ok())
    }

    /// Build the config from any key lookup, falling back to defaults for missing keys.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(base_url) = lookup("SEC_BASE_URL") {
            config.base_url = base_url;
        }
        if let Some(user_agent) = lookup("USER_AGENT") {
            config.user_agent = user_agent;
        }
        if let Some(cik) = lookup("SEC_CIK") {
            config.cik = normalize_cik(&cik)?;
        }
        if let Some(metric) = lookup("SEC_METRIC") {
            config.metric = metric;
        }
        if let Some(limit) = lookup("SEC_LIMIT") {
            config.limit = limit
                .trim()
                .parse()
                .with_context(|| format!("invalid SEC_LIMIT {limit:?}"))?;
        }
        if let Some(secs) = lookup("SEC_TIMEOUT_SECS") {
            let secs: u64 = secs
                .trim()
                .parse()
                .with_context(|| format!("invalid SEC_TIMEOUT_SECS {secs:?}"))?;
            config.timeout = Some(Duration::from_secs(secs));
        }

        Ok(config)
    }

    pub fn with_cik(mut self, cik: &str) -> anyhow::Result<Self> {
        self.cik = normalize_cik(cik)?;
        Ok(self)
    }

    /// `{base_url}/CIK{cik}/us-gaap/{metric}.json`
    pub fn url(&self) -> String {
        format!(
            "{base}/CIK{cik}/us-gaap/{metric}.json",
            base = self.base_url.trim_end_matches('/'),
            cik = self.cik,
            metric = self.metric
        )
    }
}

/// Pad a CIK to the 10 digits the SEC paths expect; a leading `CIK` is tolerated.
pub fn normalize_cik(cik: &str) -> anyhow::Result<String> {
    let digits = cik.trim();
    let digits = digits.strip_prefix("CIK").unwrap_or(digits);

    if digits.is_empty() || digits.len() > 10 || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(anyhow!("invalid CIK {cik:?}, expected up to 10 digits"));
    }

    Ok(format!("{digits:0>10}"))
}
