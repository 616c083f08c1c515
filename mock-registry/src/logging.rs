use tracing_subscriber::{fmt, EnvFilter};

use crate::error::MockError;

pub fn init() -> Result<(), MockError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .map_err(MockError::logging_init)
}
