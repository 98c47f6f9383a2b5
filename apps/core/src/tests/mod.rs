//! Test Module
//!
//! Cross-module tests for the Mailwise core.
//!
//! ## Test Categories
//! - `analysis_tests`: lexicon behavior, sentiment boundaries, urgency tiers, question extraction
//! - `composer_tests`: end-to-end reply drafting through the agent
//! - `validation_tests`: form validation and error messages
//! - `config_tests`: configuration from the process environment
//! - `http_tests`: routes, status codes and error bodies

pub mod composer_tests;
pub mod validation_tests;
