use std::error::Error;

use hello_services::errors::ServiceError;

#[test]
fn test_service_error_implements_error_trait() {
    fn assert_error<T: Error + Send + Sync + 'static>(_: &T) {}

    let error = ServiceError::Config("test error".to_string());
    assert_error(&error);
}

#[test]
fn test_service_error_display() {
    let error = ServiceError::Config("LOG_FORMAT: bad".to_string());
    assert_eq!(format!("{error}"), "Invalid configuration: LOG_FORMAT: bad");

    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let error = ServiceError::from(json_err);
    assert!(format!("{error}").starts_with("Failed to serialize response body: "));
}

#[test]
fn test_service_error_converts_into_lambda_error() {
    let error = ServiceError::Config("boom".to_string());
    let lambda_err: lambda_runtime::Error = error.into();
    assert!(lambda_err.to_string().contains("boom"));
}
