//! Custom assertion macros and utilities

/// Assert a response's status code and its `{ "message": ... }` body
#[macro_export]
macro_rules! assert_error_response {
    ($response:expr, $status:expr, $message:expr) => {{
        let response = $response;
        assert_eq!(response.status_code(), $status);
        let body: serde_json::Value = response.json();
        assert_eq!(body, serde_json::json!({ "message": $message }));
    }};
}

/// Assert that a string contains a substring
#[macro_export]
macro_rules! assert_contains {
    ($haystack:expr, $needle:expr) => {
        assert!(
            $haystack.contains($needle),
            "Expected '{}' to contain '{}'",
            $haystack,
            $needle
        );
    };
}
