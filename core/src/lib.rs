//! Client for the REC Registry public-register API.
//!
//! # Overview
//! The registry publishes, one calendar day at a time, the certificate
//! actions (creation, transfer, surrender, ...) it completed. This crate
//! builds the `certificate-actions` request for a date, sends it through a
//! pluggable `Transport`, and decodes the JSON envelope into typed records.
//!
//! # Design
//! - `RegistryClient` holds only immutable configuration and a shared
//!   transport; calls from many threads are independent.
//! - `build_list_actions` / `parse_list_actions` keep the I/O boundary
//!   explicit, so URL shape and decoding are testable without a network.
//! - Transport, decode and registry-reported failures are distinct
//!   `RegistryError` variants.
//!
//! ```no_run
//! use recreg::{first_date, RegistryClient};
//!
//! let client = RegistryClient::new(None);
//! let actions = client.list_actions(first_date()?)?;
//! println!("{} actions", actions.len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod client;
pub mod config;
pub mod decode;
pub mod error;
pub mod http;
pub mod request;
pub mod types;

pub use client::{RegistryClient, CERTIFICATE_ACTIONS};
pub use config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_USER_AGENT};
pub use decode::decode_actions;
pub use error::RegistryError;
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport, TransportError, UreqTransport};
pub use request::build_url;
pub use types::{first_date, Action, Range, FIRST_DATE, ISO8601_DATE};
