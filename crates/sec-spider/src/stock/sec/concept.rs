use crate::config::Config;
use crate::http::*;
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use thiserror::Error;
use tracing::{debug, trace};

/// Form type assumed when a data point carries none.
pub const DEFAULT_FORM: &str = "13F-HR";

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("failed to build http client, error({0})")]
    Client(#[source] reqwest::Error),

    #[error("request failed, error({0})")]
    Request(#[from] reqwest::Error),

    #[error("unexpected response status {0}")]
    Status(reqwest::StatusCode),

    #[error("failed to parse JSON, error({0})")]
    Parse(#[from] serde_json::Error),
}

/// One reported data point of the fetched metric.
///
/// `value` keeps the number exactly as reported, so integers stay integers when written back out.
/// A missing `val` becomes `0`, so an absent value cannot be told apart from a reported zero.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FilingRecord {
    pub date: String,
    pub value: Number,
    pub form: String,
}

/// HTTP side of the company-concept endpoint.
pub struct Spider {
    http_client: HttpClient,
    config: Config,
}

impl Spider {
    pub fn new(config: Config) -> Result<Self, FetchError> {
        let mut builder = reqwest::ClientBuilder::new().user_agent(config.user_agent.as_str());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder.build().map_err(FetchError::Client)?;

        Ok(Self {
            http_client,
            config,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn url(&self) -> String {
        self.config.url()
    }

    /// GET the concept and return its first `limit` USD data points, in upstream order.
    pub async fn fetch(&self) -> Result<Vec<FilingRecord>, FetchError> {
        let time = std::time::Instant::now();
        let url = self.url();

        debug!("fetching SEC company concept from {url}");
        let response = self.http_client.get(&url).send().await?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(FetchError::Status(status));
        }

        let body = response.bytes().await?;
        trace!("{} bytes received; deserializing ...", body.len());
        let concept: Concept = serde_json::from_slice(&body)?;
        let filings = concept.into_filings(self.config.limit)?;

        debug!(
            "{} filings fetched for CIK{}, {}",
            filings.len(),
            self.config.cik,
            crate::time_elapsed(time)
        );

        Ok(filings)
    }
}

// de
// -------------------------------------------------------------------------------------------------

// {
//      "cik": 1364742,
//      "taxonomy": "us-gaap",
//      "tag": "Assets",
//      "label": "Assets",
//      "entityName": "BlackRock Inc.",
//      "units": {
#[derive(Deserialize, Debug)]
struct Concept {
    #[serde(default)]
    units: Units,
}

//          "USD": [
//
// entries stay untyped until they are taken, so anything past `limit` is never inspected
#[derive(Deserialize, Debug, Default)]
struct Units {
    #[serde(rename = "USD", default)]
    usd: Vec<Value>,
}

//              {
//                  "end": "2009-12-31",
//                  "val": 178459000000,
//                  "accn": "0001364742-10-000011",
//                  "fy": 2009,
//                  "fp": "FY",
//                  "form": "10-K",
//                  "filed": "2010-02-26",
//                  "frame": "CY2009Q4I"
//              },
//              ...
//          ]
//      }
// }
#[derive(Deserialize, Debug)]
struct DataCell {
    #[serde(rename = "end", default)]
    dated: Option<String>,
    #[serde(default)]
    val: Option<Number>,
    #[serde(default)]
    form: Option<String>,
}

impl Concept {
    fn into_filings(self, limit: usize) -> Result<Vec<FilingRecord>, serde_json::Error> {
        self.units
            .usd
            .into_iter()
            .take(limit)
            .map(|cell| serde_json::from_value::<DataCell>(cell).map(FilingRecord::from))
            .collect()
    }
}

impl From<DataCell> for FilingRecord {
    fn from(cell: DataCell) -> Self {
        Self {
            date: cell.dated.unwrap_or_default(),
            value: cell.val.unwrap_or_else(|| Number::from(0u64)),
            form: cell.form.unwrap_or_else(|| DEFAULT_FORM.to_string()),
        }
    }
}
