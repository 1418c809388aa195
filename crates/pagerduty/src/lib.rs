//! Typed asynchronous client for the PagerDuty REST API v2.
//!
//! [`PagerDutyClient`] wraps a [`pagerduty_core::Connection`] and exposes one
//! async method per supported endpoint. Each call performs a single HTTP
//! round trip and returns the unwrapped resource from the response envelope.
//!
//! ```no_run
//! use pagerduty::{PagerDutyClient, api::IncidentListParams};
//!
//! # async fn run() -> pagerduty::Result<()> {
//! let client = PagerDutyClient::builder().with_token("y_NbAkKc66ryYTWUXYEu").build();
//! let open = client
//!     .incidents(&IncidentListParams {
//!         team_ids: vec!["P1HE60B".to_string()],
//!         ..IncidentListParams::default()
//!     })
//!     .await?;
//! println!("{} incidents", open.len());
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]

pub mod api;
pub mod client;
pub mod models;

pub use client::{PagerDutyClient, PagerDutyClientBuilder};
pub use pagerduty_core::config::{Config, ConnectionOptions};
pub use pagerduty_core::http::HttpConfig;
pub use pagerduty_core::{ApiError, Error, ErrorKind, LastResponse};

/// Convenient result alias matching the shared PagerDuty error type.
pub type Result<T> = pagerduty_core::Result<T>;
