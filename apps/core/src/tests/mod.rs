//! Test Module
//!
//! Scenario tests that cross module boundaries.
//!
//! ## Test Categories
//! - `analysis_tests`: End-to-end analysis properties with mock classifiers
//! - `remote_tests`: Remote classifier over HTTP (wiremock), degradation paths
//! - `models_tests`: Check-in payloads, stored records and mood trends

pub mod remote_tests;
