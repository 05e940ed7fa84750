//! Custom assertion macros
//!
//! Macros with more descriptive failure output than plain `assert!`.

/// Assert that a result is ok and return the value
#[macro_export]
macro_rules! assert_ok {
    ($result:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
    ($result:expr, $message:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("{}: {:?}", $message, e),
        }
    };
}

/// Assert that a string contains a substring
#[macro_export]
macro_rules! assert_contains {
    ($haystack:expr, $needle:expr) => {{
        let haystack = &$haystack;
        let needle = $needle;
        assert!(
            haystack.contains(needle),
            "Expected '{}' to contain '{}'",
            haystack,
            needle
        );
    }};
}

/// Assert that a string does not contain a substring
#[macro_export]
macro_rules! assert_not_contains {
    ($haystack:expr, $needle:expr) => {{
        let haystack = &$haystack;
        let needle = $needle;
        assert!(
            !haystack.contains(needle),
            "Expected '{}' not to contain '{}'",
            haystack,
            needle
        );
    }};
}

/// Assert that a value is within a half-open range
#[macro_export]
macro_rules! assert_in_range {
    ($value:expr, $min:expr, $max:expr) => {{
        let (value, min, max) = ($value, $min, $max);
        assert!(
            value >= min && value < max,
            "Value {} is not in range [{}, {})",
            value,
            min,
            max
        );
    }};
}

/// Assert a response status with the body in the failure message
#[macro_export]
macro_rules! assert_status {
    ($response:expr, $status:expr) => {{
        let response = $response;
        let status = response.status();
        if status != $status {
            let body = $crate::common::app::body_text(response).await;
            panic!("Expected status {}, got {}: {}", $status, status, body);
        }
        response
    }};
}
