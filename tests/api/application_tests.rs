//! Application API Tests
//!
//! Placeholder tests for the submission and review endpoints. The
//! submission workflow itself is covered by unit tests against mocked
//! repositories; these exercise the HTTP wiring once a test database is
//! available.
//! TODO: Implement full integration tests with TestApp infrastructure.

/// Test submission with a fresh email creates candidate and application
#[tokio::test]
async fn test_submit_creates_candidate_and_application() {
    // Arrange
    // let app = TestApp::new().await;
    // let body = json!({
    //     "fullName": "Tran Thi B",
    //     "dateOfBirth": "1997-02-20",
    //     "email": unique_email(),
    //     "phone": unique_phone(),
    //     "position": "Lecturer",
    //     "department": "Physics",
    //     "address": "3 Science Avenue",
    //     "cpa": 3.6,
    //     "sex": "Female",
    //     "cvPath": "/uploads/cv/some.pdf",
    //     "positionID": 1
    // });

    // Act
    // let response = app.post_json("/api/applications/submit", &body.to_string()).await;

    // Assert
    // assert_eq!(response.status(), StatusCode::OK);
    // Response body carries {message, data} with status "Pending"
    assert!(true); // Placeholder
}

/// Test submission against a missing position returns 400
#[tokio::test]
async fn test_submit_with_unknown_position_is_rejected() {
    // Arrange
    // let app = TestApp::new().await;
    // ...body with "positionID": 999999...

    // Act
    // let response = app.post_json("/api/applications/submit", &body.to_string()).await;

    // Assert
    // assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    // No candidate row may exist for the submitted email afterwards
    assert!(true); // Placeholder
}

/// Test listing applications requires authentication
#[tokio::test]
async fn test_application_listing_requires_auth() {
    // Arrange
    // let app = TestApp::new().await;

    // Act
    // let response = app.get("/api/applications").await;

    // Assert
    // assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(true); // Placeholder
}

/// Test status update persists and clears the rejection reason
#[tokio::test]
async fn test_status_update_reason_lifecycle() {
    // Arrange - submit an application, authenticate as staff
    // let app = TestApp::new().await;

    // Act - reject with a reason, then move back to "Pending"
    // let response = app.put_json_auth(
    //     "/api/applications/1/status",
    //     r#"{"status": "Rejected", "rejectionReason": "CPA below minimum"}"#,
    //     "hr", "password",
    // ).await;

    // Assert
    // First update stores the reason, the second clears it
    assert!(true); // Placeholder
}
