#![cfg(feature = "std")]

use std::env;
use std::io::Write;

use log::{self, LevelFilter, Metadata, Record};

/// Environment variable holding the log level.
pub const LOG_ENV: &str = "BROADSIDE_LOG";

struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            // stdout belongs to the game itself.
            let _ = writeln!(
                std::io::stderr(),
                "{:<5} {} - {}",
                record.level(),
                record.target(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

static LOGGER: StderrLogger = StderrLogger;

/// Level named by `value`, falling back to `info` when unset or invalid.
pub fn parse_level(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|lvl| lvl.trim().parse().ok())
        .unwrap_or(LevelFilter::Info)
}

/// Initialize logging with a level taken from the `BROADSIDE_LOG` environment variable.
/// Defaults to `info` if the variable is not set or invalid.
pub fn init_logging() {
    let level = parse_level(env::var(LOG_ENV).ok().as_deref());
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}
