use std::io::{self, Write};
use log::{
    LevelFilter,
    Metadata,
    Record
};

// Records go to stderr; stdout belongs to the menu dialogue.
static STDERR_LOGGER: StderrLogger = StderrLogger;
struct StderrLogger;
impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            _ = writeln!(
                io::stderr(),
                "[{}] [{}] {}",
                record.target(),
                record.level(),
                record.args()
            );
        }
    }
    fn flush(&self) {
        _ = io::stderr().flush();
    }
}

/// Installs the stderr logger. Calling it again only changes the level.
pub fn init(level: LevelFilter) {
    _ = log::set_logger(&STDERR_LOGGER);
    log::set_max_level(level);
}
