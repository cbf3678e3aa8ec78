//! Rust client for the MorphoSource digital repository REST API.
//!
//! MorphoSource exposes read-only JSON endpoints for media records (3D scans
//! and other digital assets), the physical objects they were derived from,
//! and media search. This crate wraps those three GET operations in a small
//! blocking client and models the two response-envelope shapes the live and
//! mock backends produce.
//!
//! # Architecture
//!
//! - **config**: Configuration management from environment variables
//! - **error**: Custom error types for precise error handling
//! - **client**: Blocking HTTP client for the three API operations
//! - **models**: Envelope classification and typed record views

pub mod client;
pub mod config;
pub mod error;
pub mod models;

pub use client::{MorphoSourceClient, UrlStrategy};
pub use config::Config;
pub use error::{ApiError, ApiResult, ConfigError, ConfigResult, EnvelopeError};
pub use models::{Envelope, MediaRecord, PageInfo, PhysicalObjectRecord};
