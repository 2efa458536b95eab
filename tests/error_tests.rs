// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use wahoo_exporter::error::AppError;

#[test]
fn test_is_auth_error_matches_401() {
    let err = AppError::Api {
        status: 401,
        body: "{\"error\":\"invalid_token\"}".to_string(),
    };
    assert!(err.is_auth_error());
}

#[test]
fn test_is_auth_error_no_match() {
    let err = AppError::Api {
        status: 403,
        body: String::new(),
    };
    assert!(!err.is_auth_error());

    let err = AppError::Transport("connection refused".to_string());
    assert!(!err.is_auth_error());

    let err = AppError::Config("access token must not be empty".to_string());
    assert!(!err.is_auth_error());
}

#[test]
fn test_api_error_display_keeps_status_and_body() {
    let err = AppError::Api {
        status: 404,
        body: "not found".to_string(),
    };
    assert_eq!(err.to_string(), "Wahoo API error: HTTP 404: not found");
}

#[test]
fn test_export_error_display() {
    let err = AppError::Export("writing out.csv: permission denied".to_string());
    assert_eq!(
        err.to_string(),
        "Export failed: writing out.csv: permission denied"
    );
}
