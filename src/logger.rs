//! `log` backend writing through a [`Console`].

use crate::console::Console;
use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};

pub struct UartLogger {
    console: &'static Console,
    level: LevelFilter,
}

impl UartLogger {
    pub const fn new(console: &'static Console, level: LevelFilter) -> Self {
        Self { console, level }
    }

    pub const fn level(&self) -> LevelFilter {
        self.level
    }
}

impl Log for UartLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }

        // an uninstalled console drops the record
        let _ = self.console.print_fmt(format_args!(
            "[{}] {}: {}\n",
            record.level(),
            record.target(),
            record.args()
        ));
    }

    fn flush(&self) {}
}

/// Registers `logger` with the `log` facade.
///
/// # Safety
///
/// Must be called before any other thread or interrupt handler can log, since
/// targets without compare-and-swap cannot register a logger atomically.
pub unsafe fn init(logger: &'static UartLogger) -> Result<(), SetLoggerError> {
    unsafe { log::set_logger_racy(logger)? };
    log::set_max_level(logger.level());
    Ok(())
}
