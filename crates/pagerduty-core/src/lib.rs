//! # pagerduty-core
//!
//! Core types and utilities for working with the PagerDuty REST API.
//!
//! This crate provides configuration, the HTTP connection, error
//! classification and shared object shapes used by the `pagerduty` client.
//!
//! ## Modules
//!
//! - [`config`] - Client configuration and environment-derived defaults
//! - [`connection`] - Request building, transport handle and response decoding
//! - [`error`] - Error types and HTTP status code classification
//! - [`http`] - Transport tuning (timeouts, pooling, compression, logging)
//! - [`query`] - Query parameter builder
//! - [`types`] - References shared across resources

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod connection;
pub mod error;
pub mod http;
pub mod query;
pub mod types;

// Re-export commonly used types
pub use config::Config;
pub use connection::{Connection, LastResponse, Request};
pub use error::{ApiError, Error, ErrorKind, Result};
