//! Test suite for PCB Inspect
//!
//! Integration tests drive the real router with `tower::ServiceExt::oneshot`;
//! property tests exercise the credential and repository layers directly.

#[macro_use]
pub mod common;
#[cfg(feature = "ssr")]
pub mod integration;
