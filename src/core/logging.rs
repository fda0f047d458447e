//! Logging initialization and utilities

/// Initialize the logging system
///
/// Uses env_logger with default filter level of `info`.
/// Override with RUST_LOG environment variable.
///
/// # Example
/// ```
/// brickwork::core::logging::init();
/// log::info!("Layout started");
/// ```
pub fn init() {
    builder().init();
}

/// Like [`init`], but does nothing if a logger is already installed.
pub fn try_init() {
    let _ = builder().try_init();
}

fn builder() -> env_logger::Builder {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_init_is_idempotent() {
        try_init();
        try_init();
        log::debug!("logger installed twice without panicking");
    }
}
