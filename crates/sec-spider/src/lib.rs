pub mod analysis;
pub mod config;
pub mod fs;
pub mod monitor;
pub mod stock;
pub(crate) mod tui;

/// Shortcut for required API elements.
pub mod http {
    pub use dotenv::var;
    pub use reqwest::Client as HttpClient;
}

pub(crate) fn time_elapsed(time: std::time::Instant) -> String {
    format!("time elapsed: {:?}", time.elapsed())
}
