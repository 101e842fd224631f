/// US company filings from the [SEC]; XBRL company-concept data for a single entity & metric.
///
/// [SEC]: https://www.sec.gov/search-filings/edgar-application-programming-interfaces
pub mod sec;
