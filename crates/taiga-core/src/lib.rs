//! # taiga-core
//!
//! Core types and utilities for talking to the Taiga REST API.
//!
//! This crate provides the error type, client configuration, URL construction and the
//! HTTP transport shared by every Taiga entity service.
//!
//! ## Modules
//!
//! - [`error`] - Error types and HTTP status code mapping
//! - [`config`] - Validated client configuration
//! - [`url_builder`] - Resource URL construction
//! - [`query`] - Query parameter builder
//! - [`types`] - Endpoint names and project references
//! - [`client`] - HTTP transport ([`TaigaClient`])

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod config;
pub mod error;
pub mod query;
pub mod types;
pub mod url_builder;

// Re-export commonly used types
pub use client::{TaigaClient, TaigaClientBuilder};
pub use config::TaigaClientConfig;
pub use error::{Error, Result};
pub use query::{QueryParams, QueryString};
pub use types::{Endpoint, ProjectRef};
pub use url_builder::UrlBuilder;
