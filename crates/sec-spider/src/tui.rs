use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use tracing::{error, info};

/// `name`, centred between two bars.
pub(crate) fn banner(name: &str) -> String {
    format!("{bar}\n{name:^40}\n{bar}", bar = "=".repeat(40))
}

/// Console line in tui mode; an `info!` event otherwise.
pub(crate) fn status(tui: bool, msg: impl std::fmt::Display) {
    if tui {
        println!("{msg}");
    } else {
        info!("{msg}");
    }
}

/// Failure line on stderr in tui mode; an `error!` event otherwise.
pub(crate) fn failure(tui: bool, msg: impl std::fmt::Display) {
    if tui {
        eprintln!("{}", msg.to_string().red());
    } else {
        error!("{msg}");
    }
}

/// Spinner shown while `msg` is in progress; hidden outside tui mode.
pub(crate) fn spinner(tui: bool, msg: String) -> ProgressBar {
    if !tui {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new_spinner().with_message(msg).with_style(
        ProgressStyle::default_spinner()
            .template("{msg} {spinner:.magenta}")
            .expect("failed to set spinner style"),
    );
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_is_centred() {
        let banner = banner("SEC Monitor");
        let lines: Vec<&str> = banner.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "=".repeat(40));
        assert_eq!(lines[1].len(), 40);
        assert_eq!(lines[1].trim(), "SEC Monitor");
    }
}
