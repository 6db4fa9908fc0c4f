// src/logging.rs

use crate::config::get_config;
use crate::errors::{ChatError, ChatResult};
use flexi_logger::{FileSpec, Logger, LoggerHandle};

/// Starts the file logger. The TUI owns the terminal, so everything the
/// browser client would have sent to the console goes to `parley.log`
/// instead. The returned handle must stay alive for the duration of the
/// program.
pub fn init() -> ChatResult<LoggerHandle> {
    let config = get_config();

    let logger = Logger::try_with_env_or_str("info")
        .map_err(|e| ChatError::config_error(format!("Failed to configure logger: {}", e)))?;

    let logger = if config.log_to_file {
        logger.log_to_file(FileSpec::default().basename("parley").suppress_timestamp())
    } else {
        logger.do_not_log()
    };

    logger
        .start()
        .map_err(|e| ChatError::config_error(format!("Failed to start logger: {}", e)))
}
