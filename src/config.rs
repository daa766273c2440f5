use atm::Result;

use log::LevelFilter;
use simple_logger::SimpleLogger;

/// Logs go to stderr so they never interleave with the terminal UI on stdout.
/// Level defaults to `warn`, override with `RUST_LOG`.
pub fn configure_app() -> Result {
    SimpleLogger::new()
        .with_level(LevelFilter::Warn)
        .env()
        .init()?;

    return Ok(());
}
