//! File-based logging bootstrap.
//!
//! Log lines go to `habitloop.log` in the working directory so they never
//! interleave with the interactive menu. A failed init downgrades to no
//! logging instead of aborting the program.

use flexi_logger::{FileSpec, Logger, LoggerHandle, WriteMode};
use log::info;

pub fn init() -> Option<LoggerHandle> {
    let handle = Logger::try_with_str("info")
        .ok()?
        .log_to_file(
            FileSpec::default()
                .basename("habitloop")
                .suppress_timestamp(),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .append()
        .start()
        .ok()?;
    info!(
        "habitloop started, version={} platform={}",
        env!("CARGO_PKG_VERSION"),
        std::env::consts::OS
    );
    Some(handle)
}
