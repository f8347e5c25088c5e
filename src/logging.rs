use crate::error::{MaskError, Result};
use log::info;
use std::env;

/*
 * Names a log4rs YAML file. When unset, env_logger reads RUST_LOG instead.
 */
pub const LOG_CONFIG_VAR: &str = "SQUARE_MASKS_LOG_CONFIG";

const DEFAULT_FILTER: &str = "warn";

pub fn init() -> Result<()> {
    let config = env::var(LOG_CONFIG_VAR).ok();
    init_with(config.as_deref().filter(|path| !path.is_empty()))
}

pub fn init_with(config: Option<&str>) -> Result<()> {
    match config {
        Some(path) => {
            log4rs::init_file(path, Default::default()).map_err(|e| {
                MaskError::LoggingError(format!("Could not load log config '{}': {}", path, e))
            })?;
            info!("Logging configured from {}", path);
        }
        None => {
            env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(DEFAULT_FILTER),
            )
            .try_init()?;
        }
    }

    log_panics::init();

    Ok(())
}

#[test]
fn test_missing_log_config_is_logging_error() {
    let result = init_with(Some("no/such/dir/log4rs.yaml"));

    match result {
        Err(MaskError::LoggingError(msg)) => {
            assert!(msg.starts_with("Could not load log config 'no/such/dir/log4rs.yaml'"))
        }
        other => panic!("Expected LoggingError, got {:?}", other),
    }
}
