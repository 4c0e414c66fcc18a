//! # Pricelens Core
//!
//! Core types and query construction for the Azure Retail Prices gateway.
//!
//! This crate provides the foundational building blocks used throughout
//! Pricelens:
//!
//! - **Types**: wire-faithful price records, merged price sheets, and the
//!   enumerated parameter sets accepted by the upstream API
//! - **Filters**: OData `$filter` expression construction
//! - **Formatting**: currency-aware price display
//!
//! ## Design Philosophy
//!
//! Price data is relayed verbatim from the upstream API; nothing here
//! validates or enriches it beyond what filtering and display require.
//!
//! ## Example
//!
//! ```rust
//! use pricelens_core::filter::{FilterField, FilterSet};
//!
//! let filter = FilterSet::new()
//!     .eq(FilterField::ServiceName, "Virtual Machines")
//!     .eq(FilterField::ArmRegionName, "eastus")
//!     .build();
//! assert_eq!(
//!     filter.as_deref(),
//!     Some("serviceName eq 'Virtual Machines' and armRegionName eq 'eastus'")
//! );
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod filter;
pub mod format;
pub mod limits;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::filter::{FilterField, FilterSet};
    pub use crate::format::format_amount;
    pub use crate::limits::{CHARACTER_LIMIT, DEFAULT_LIMIT, MAX_LIMIT, MAX_PAGES};
    pub use crate::types::{
        Currency, PriceRecord, PriceSheet, PriceType, ResponseFormat, SavingsPlanRate,
        ServiceFamily, Truncation,
    };
}
