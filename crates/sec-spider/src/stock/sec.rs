/// Company-concept filings: one metric, for one CIK, in USD.
pub mod concept;

pub use concept::{FetchError, FilingRecord, Spider};
