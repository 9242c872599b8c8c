//! HTTP client for the StatCounter web analytics API.
//!
//! This crate provides the request/response pipeline:
//!
//! - [`url::signed_url`] - Constructs signed request URLs
//! - [`query::QueryParams`] - Ordered, signature-covered query parameters
//! - [`StatCounterClient`] - API client with one method per endpoint
//! - [`ClientConfig`] - Transport configuration
//! - [`StatCounterError`] - The operation error taxonomy

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/counterworks/statcounter-rs/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod api;
mod client;
mod error;
pub mod query;
mod response;
pub mod url;

pub use client::{ClientConfig, StatCounterClient};
pub use error::{Result, StatCounterError};
