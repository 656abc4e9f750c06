use chrono::Local;
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::io::Write;

/// A logger that writes to stdout, routing warnings and errors to stderr.
///
/// The pipeline reserves stderr for failure messages, so diagnostic records
/// follow the same split: Info and below on stdout, Warn and Error on stderr.
pub struct StdoutLogger;

impl Log for StdoutLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        let timestamp = Local::now().format("%Y-%m-%dT%H:%M:%S");
        let line = format!("{} [{}] {}", timestamp, record.level(), record.args());

        if record.level() <= Level::Warn {
            eprintln!("{}", line);
        } else {
            println!("{}", line);
        }
    }

    fn flush(&self) {
        std::io::stdout().flush().ok();
        std::io::stderr().flush().ok();
    }
}

/// Initialize the global logger with StdoutLogger
///
/// Sets the max level based on build mode:
/// - Debug builds: LevelFilter::Debug (all levels active)
/// - Release builds: LevelFilter::Info (Debug suppressed)
///
/// This can only be called once per process. Subsequent calls are silently ignored.
pub fn init_stdout_logger() {
    static LOGGER: StdoutLogger = StdoutLogger;

    let max_level = if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(max_level);
    }
}
