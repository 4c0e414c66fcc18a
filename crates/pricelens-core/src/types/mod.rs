//! Domain types for the Retail Prices gateway.
//!
//! This module provides typed representations of the upstream API's
//! request and response shapes:
//!
//! - [`PriceRecord`]: one upstream price item, relayed verbatim
//! - [`PriceSheet`]: merged multi-page result with truncation metadata
//! - [`Currency`]: the enumerated currency parameter set
//! - [`PriceType`]: pay-as-you-go, reservation, dev/test pricing tiers
//! - [`ServiceFamily`]: common Azure service families
//! - [`ResponseFormat`]: markdown or JSON output

mod currency;
mod price_type;
mod record;
mod response_format;
mod service_family;
mod sheet;

pub use currency::Currency;
pub use price_type::PriceType;
pub use record::{PriceRecord, SavingsPlanRate};
pub use response_format::ResponseFormat;
pub use service_family::ServiceFamily;
pub use sheet::{PriceSheet, Truncation};
