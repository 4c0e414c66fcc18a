//! # Pricelens Analytics
//!
//! Response shaping for the Retail Prices gateway. This crate consolidates
//! the client-side half of every tool call:
//!
//! - **Rendering**: price sheets as grouped markdown or a JSON envelope
//! - **Truncation**: size-bounding oversized responses while preserving
//!   structure
//! - **Comparison**: per-SKU cheapest/most-expensive region deltas
//! - **Savings**: savings-plan ROI arithmetic and term recommendations
//! - **Families**: service-family discovery from sampled price data
//!
//! Everything here is a pure function over already-fetched data; no module
//! performs I/O.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::uninlined_format_args)]

pub mod compare;
pub mod error;
pub mod families;
pub mod render;
pub mod savings;
pub mod truncate;

pub use error::{AnalyticsError, AnalyticsResult};
