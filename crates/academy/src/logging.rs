//! Helpers to log in the same style as the Maudit build output.
//!
//! The logger itself is installed by [`maudit::coronate`], anything logged before the build starts is dropped.
use std::time::Duration;

use colored::{ColoredString, Colorize};
use log::{Level, info, log};

use crate::errors::ValidationErrors;

pub struct FormatElapsedTimeOptions {
    pub sec_yellow_threshold: u64,
    pub sec_red_threshold: u64,
    pub millis_yellow_threshold: Option<u128>,
    pub millis_red_threshold: Option<u128>,
}

impl Default for FormatElapsedTimeOptions {
    fn default() -> Self {
        Self {
            sec_yellow_threshold: 1,
            sec_red_threshold: 2,
            millis_yellow_threshold: Some(100),
            millis_red_threshold: Some(500),
        }
    }
}

pub fn format_elapsed_time(
    elapsed: Duration,
    options: &FormatElapsedTimeOptions,
) -> ColoredString {
    match elapsed.as_secs() {
        secs if secs >= 60 => format!("{}m{}s", secs / 60, secs % 60).red(),
        secs if secs > options.sec_red_threshold => format!("{}s", secs).red(),
        secs if secs > options.sec_yellow_threshold => format!("{}s", secs).yellow(),
        secs if secs > 0 => format!("{}s", secs).normal(),
        _ => match elapsed.as_millis() {
            millis
                if options
                    .millis_red_threshold
                    .is_some_and(|threshold| millis > threshold) =>
            {
                format!("{}ms", millis).red()
            }
            millis
                if options
                    .millis_yellow_threshold
                    .is_some_and(|threshold| millis > threshold) =>
            {
                format!("{}ms", millis).yellow()
            }
            millis if millis > 0 => format!("{}ms", millis).normal(),
            _ => format!("{}μs", elapsed.as_micros()).normal(),
        },
    }
}

/// Print a section banner, matching the ones Maudit prints between build steps.
pub fn print_title(title: &str) {
    info!(target: "SKIP_FORMAT", "{}", "");
    info!(target: "SKIP_FORMAT", "{}", format!(" {} ", title).on_blue().bold());
}

/// Log every problem on its own line at `level`.
pub fn log_problems(errors: &ValidationErrors, level: Level) {
    for error in errors.iter() {
        log!(target: "validate", level, "{}", error);
    }
}
