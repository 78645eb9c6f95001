use clap::Parser;

use segugio_core::{HostError, TickInterval, interval, log_error, log_warn};

#[derive(Parser)]
#[command(
    name = "segugio",
    version,
    about = "Prints cursor position, window bounds, and DPI for a tracked window at a fixed interval"
)]
struct Cli {
    /// Sampling interval in seconds (default 0.1, floor 0.01)
    ///
    /// Taken as a plain string so a malformed value degrades to the
    /// default instead of aborting with a usage error.
    interval_seconds: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    let (interval, config_error) = interval::parse(cli.interval_seconds.as_deref());
    if let Some(error) = config_error {
        log_warn!("{error}; using the default 0.1s interval");
    }

    if let Err(error) = run(interval) {
        log_error!("{error}");
        std::process::exit(1);
    }
}

#[cfg(windows)]
fn run(interval: TickInterval) -> Result<(), HostError> {
    // DPI awareness must be configured before the window exists.
    segugio_windows::dpi::enable_dpi_awareness();
    segugio_windows::ctrl_c::install_exit_handler();

    let host = segugio_windows::TrackerHost::new(interval)?;
    host.start();
    Ok(())
}

#[cfg(not(windows))]
fn run(_interval: TickInterval) -> Result<(), HostError> {
    Err(HostError::Unsupported)
}
