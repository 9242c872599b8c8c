//! Core types for the StatCounter API client.
//!
//! This crate provides the fundamental data structures used throughout the
//! workspace:
//!
//! - [`Credentials`] - account username and shared secret
//! - [`DateRange`] - inclusive date range for statistics queries
//! - [`Device`] - device filter for statistics endpoints
//! - [`InvalidParameterError`] - local validation failures
//! - Record shapes ([`Project`], [`Visitor`], [`DailySummary`], ...) mapping
//!   the repeated `<sc_data>` nodes of each XML response

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/counterworks/statcounter-rs/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod credentials;
mod date;
mod device;
mod error;
mod records;
mod timezone;

pub use credentials::Credentials;
pub use date::{DateRange, parse_mdy, validate_not_future};
pub use device::Device;
pub use error::InvalidParameterError;
pub use records::{
    BrowserStats, DailySummary, DownloadLink, ExitLink, NewProject, OsStats, PageStats,
    PageloadEntry, Project, Referrer, UserDetails, Visitor,
};
pub use timezone::validate_timezone;
