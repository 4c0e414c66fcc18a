//! # Pricelens MCP Server
//!
//! Model Context Protocol (MCP) server for Azure retail pricing lookups.
//!
//! This crate exposes the Azure Retail Prices REST API through the MCP
//! protocol, enabling cost analysis from AI assistants like Claude
//! Desktop, Claude Code, Cursor, and other MCP-compatible clients.
//!
//! ## Tools
//!
//! - **azure_get_service_prices**: filtered price lookup
//! - **azure_compare_region_prices**: cross-region comparison
//! - **azure_search_sku_prices**: substring SKU search
//! - **azure_get_service_families**: service family discovery
//! - **azure_calculate_savings_plan**: savings-plan ROI analysis
//!
//! ## Quick Start
//!
//! ```bash
//! # Run with stdio transport (for Claude Desktop)
//! pricelens-mcp-server
//!
//! # Run with HTTP transport (for remote hosting)
//! pricelens-mcp-server --http --port 8080
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::uninlined_format_args)]

pub mod params;
pub mod server;

pub use server::PricelensMcpServer;

/// Server name for the MCP protocol.
pub const SERVER_NAME: &str = "pricelens-mcp";

/// Server version (same as crate version).
pub const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");
