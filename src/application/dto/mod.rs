// src/application/dto/mod.rs
mod credentials;

pub use credentials::{CredentialReviewDto, ValidationResultDto};
