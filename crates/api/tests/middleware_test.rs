use axum::http::StatusCode;

use garagebook_api::middleware::error_handling::map_error;
use garagebook_core::errors::BookingError;

#[tokio::test]
async fn test_error_handling_not_found() {
    let error = BookingError::NotFound("Resource not found".to_string());

    let response = map_error(error);

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_error_handling_validation() {
    let error = BookingError::Validation("Invalid input".to_string());

    let response = map_error(error);

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_error_handling_slot_not_offered() {
    let response = map_error(BookingError::SlotNotOffered);

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_error_handling_slot_conflict() {
    // A conflict is distinguishable from a plain bad request so clients can
    // re-query availability and resubmit.
    let response = map_error(BookingError::SlotConflict);

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_error_handling_service_unavailable() {
    let error = BookingError::ServiceUnavailable("Timing belt replacement".to_string());

    let response = map_error(error);

    assert_eq!(response.status(), StatusCode::GONE);
}

#[tokio::test]
async fn test_error_handling_database() {
    let error = BookingError::Database(eyre::eyre!("connection refused"));

    let response = map_error(error);

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
