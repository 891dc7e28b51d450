use crate::{FIELD_TARGET, LogFields, LogLevel, Logger, LoggerError, LoggerErrorResult};

use log::{LevelFilter, Log, Metadata, Record};

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        self.is_enabled(LogLevel::from(metadata.level()))
    }

    fn log(&self, record: &Record) {
        let level = LogLevel::from(record.level());
        if !self.is_enabled(level) {
            return;
        }

        let fields = LogFields::new().with(FIELD_TARGET, record.target());
        Logger::log(self, level, record.args().to_string(), fields);
    }

    fn flush(&self) {}
}

impl Logger {
    /// Route the `log` facade (`log::info!` and friends) into this logger.
    ///
    /// Fails if a process-wide logger is already set. On success the
    /// effective configuration is logged through the new route.
    pub fn install(self) -> LoggerErrorResult<()> {
        let max_level = LevelFilter::from(self.config().level);
        let config = self.config().clone();

        log::set_boxed_logger(Box::new(self)).map_err(|e| LoggerError::install(e.to_string()))?;
        log::set_max_level(max_level);
        config.log_summary();

        Ok(())
    }
}
