//! Rust client for the StatCounter web analytics API.
//!
//! This is a facade crate that re-exports functionality from the workspace
//! crates for convenient access.
//!
//! # Quick Start
//!
//! ```ignore
//! use statcounter::{Credentials, StatCounterClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = StatCounterClient::new(Credentials::new("username", "password"))?;
//!
//!     for project in client.user_projects().await? {
//!         println!("{}: {}", project.project_id, project.project_name);
//!     }
//!
//!     Ok(())
//! }
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/counterworks/statcounter-rs/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use statcounter_types::*;

// Re-export the client, its configuration, and the error taxonomy
pub use statcounter_client::{ClientConfig, Result, StatCounterClient, StatCounterError};

// Re-export the request-building modules for callers that need raw URLs
pub use statcounter_client::{query, url};
