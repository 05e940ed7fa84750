//! Integration tests against the assembled router

pub mod concurrency_test;
pub mod detection_test;
pub mod guard_test;
pub mod pages_test;
