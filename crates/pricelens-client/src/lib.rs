//! # Pricelens Client
//!
//! Async HTTP client for the Azure Retail Prices REST API.
//!
//! The API is a single public GET endpoint taking an OData `$filter`, an
//! optional `currencyCode`, and a `$top` page size; large result sets
//! continue through an absolute `NextPageLink` URL. [`PricingClient`]
//! issues those requests and merges continuation pages into one
//! [`pricelens_core::types::PriceSheet`] bounded by an item limit and a
//! page count.
//!
//! Every fetch is independent: no retries, no shared mutable state, one
//! timeout per request.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::uninlined_format_args)]

pub mod client;
pub mod config;
pub mod error;

pub use client::{PricePage, PriceQuery, PricingClient};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
