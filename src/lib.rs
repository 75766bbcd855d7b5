//! Position-aware validation of account identifiers and passwords.
//!
//! The [`domain::credentials`] module holds the two validators; the rest of
//! the crate exposes them over HTTP.

pub mod application;
pub mod config;
pub mod domain;
pub mod presentation;

pub use domain::credentials::{ValidationResult, evaluate_password, validate_identifier};
