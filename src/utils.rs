use std::time::Duration;

use chrono::Local;
use indicatif::{ProgressBar, ProgressStyle};
use tabled::{Table, builder::Builder, settings::Style};
use tracing_subscriber::EnvFilter;

use crate::{config, types::Listing};

/// Local time as sent in the `timestamp` query parameter.
pub fn local_timestamp() -> String {
    Local::now().format("%Y-%m-%dT%H:%M:%S").to_string()
}

/// Renders a listing as a two-column table headed `name` and `id`/`uri`.
pub fn listing_table(listing: &Listing) -> Table {
    let mut builder = Builder::default();
    builder.push_record(["name".to_string(), listing.value.label().to_string()]);
    for row in &listing.rows {
        builder.push_record([row.name.clone(), row.value.clone()]);
    }

    let mut table = builder.build();
    table.with(Style::rounded());
    table
}

/// Spinner shown on stderr while a request is in flight.
pub fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb
}

/// Installs the diagnostic log subscriber. Verbosity comes from `SPOCLI_LOG`
/// (e.g. `SPOCLI_LOG=spocli=debug`) and defaults to warnings only.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_env(config::LOG_VAR).unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
