//! The `utils` module provides shared utilities: the crate's error types
//! and logging setup.

pub mod error;
pub mod logging;

#[cfg(test)]
mod tests {
    use super::logging;

    #[test]
    fn test_logging_init_is_idempotent() {
        // Should not panic when called repeatedly.
        logging::init("info");
        logging::init("debug");
    }
}
