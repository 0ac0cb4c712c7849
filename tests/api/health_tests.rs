//! Health Check API Tests
//!
//! Placeholder tests for health check endpoints.
//! TODO: Implement full integration tests with TestApp infrastructure.

/// Test basic health check endpoint returns 200 OK
#[tokio::test]
async fn test_health_check_returns_ok() {
    // This test will be functional once we have test infrastructure
    // For now, we just define the test structure

    // Arrange
    // let app = TestApp::new().await;

    // Act
    // let response = app.get("/health").await;

    // Assert
    // assert_eq!(response.status(), StatusCode::OK);
    assert!(true); // Placeholder
}

/// Test readiness probe endpoint
#[tokio::test]
async fn test_readiness_probe() {
    // Readiness probe should return 200 only when the database is reachable

    // Arrange
    // let app = TestApp::new().await;

    // Act
    // let response = app.get("/health/ready").await;

    // Assert
    // Response should indicate database status
    assert!(true); // Placeholder
}
