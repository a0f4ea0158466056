//! Error Extension Tests

use std::io;

use quack_domain::error::{Error, Result};
use quack_infrastructure::error_ext::ErrorContext;

fn not_found() -> std::result::Result<(), io::Error> {
    Err(io::Error::new(io::ErrorKind::NotFound, "file not found"))
}

#[test]
fn test_io_context_keeps_source() {
    let result: Result<()> = not_found().io_context("failed to read file");

    match result {
        Err(Error::Io { message, source }) => {
            assert_eq!(message, "failed to read file: file not found");
            assert!(source.is_some());
        }
        other => panic!("Expected Io error, got {other:?}"),
    }
}

#[test]
fn test_config_context_produces_configuration_error() {
    let err = not_found().config_context("bad config").unwrap_err();

    assert!(matches!(err, Error::Configuration { source: Some(_), .. }));
    assert!(err.to_string().starts_with("Configuration error: bad config"));
}

#[test]
fn test_ok_passes_through() {
    let value: std::result::Result<u8, io::Error> = Ok(7);
    assert_eq!(value.io_context("unused").unwrap(), 7);

    let value: std::result::Result<&str, io::Error> = Ok("quack");
    assert_eq!(value.config_context("unused").unwrap(), "quack");
}
