//! MCP Server implementation for Pricelens.

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use tracing::warn;

use pricelens_analytics::compare::{compare_regions, render_comparison_markdown};
use pricelens_analytics::families::{
    discover_families, render_families_json, render_families_markdown,
};
use pricelens_analytics::savings::{
    render_savings_markdown, SavingsAnalysis, NO_ELIGIBLE_ITEMS_MARKDOWN,
};
use pricelens_analytics::truncate::shape_response;
use pricelens_client::{ClientConfig, ClientResult, PriceQuery, PricingClient};
use pricelens_core::filter::{FilterField, FilterSet};
use pricelens_core::limits::clamp_top;
use pricelens_core::types::{PriceRecord, ResponseFormat};

use crate::params::{
    RegionComparisonParams, SavingsPlanParams, ServiceFamiliesParams, ServicePricesParams,
    SkuSearchParams,
};
use crate::{SERVER_NAME, SERVER_VERSION};

/// Items fetched per region during a comparison.
const COMPARISON_FETCH_LIMIT: usize = 100;

/// Items fetched for a savings-plan analysis.
const SAVINGS_FETCH_LIMIT: usize = 200;

/// MCP server for Azure retail pricing lookups.
#[derive(Clone)]
pub struct PricelensMcpServer {
    /// Shared upstream client.
    client: PricingClient,
    /// Tool router for MCP tools.
    tool_router: ToolRouter<Self>,
}

impl PricelensMcpServer {
    /// Creates a server around an existing client.
    pub fn new(client: PricingClient) -> Self {
        Self {
            client,
            tool_router: Self::tool_router(),
        }
    }

    /// Creates a server from the given client configuration.
    pub fn with_config(config: ClientConfig) -> ClientResult<Self> {
        Ok(Self::new(PricingClient::new(config)?))
    }

    /// The upstream client in use.
    pub fn client(&self) -> &PricingClient {
        &self.client
    }

    /// Create a success result with text content.
    pub fn text_result(text: impl Into<String>) -> CallToolResult {
        CallToolResult::success(vec![Content::text(text.into())])
    }

    fn invalid(err: impl ToString) -> McpError {
        McpError::invalid_params(err.to_string(), None)
    }

    fn internal(err: impl ToString) -> McpError {
        McpError::internal_error(err.to_string(), None)
    }
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl PricelensMcpServer {
    /// Filtered retail price lookup.
    #[tool(
        description = "Get Azure retail prices with filtering by service name, service family, \
                       region, SKU, price type, and currency. Returns markdown or JSON."
    )]
    pub async fn azure_get_service_prices(
        &self,
        Parameters(params): Parameters<ServicePricesParams>,
    ) -> Result<CallToolResult, McpError> {
        params.validate().map_err(Self::invalid)?;

        let filter = FilterSet::new()
            .eq_opt(FilterField::ServiceName, params.service_name.as_deref())
            .eq_opt(
                FilterField::ServiceFamily,
                params.service_family.map(|f| f.as_str()),
            )
            .eq_opt(FilterField::ArmRegionName, params.region.as_deref())
            .eq_opt(FilterField::SkuName, params.sku_name.as_deref())
            .eq_opt(
                FilterField::PriceType,
                params.price_type.map(|p| p.as_str()),
            )
            .build();

        let query = PriceQuery::new()
            .with_filter(filter)
            .in_currency(params.currency);
        let sheet = self
            .client
            .fetch(&query, params.limit)
            .await
            .map_err(Self::internal)?;

        let title = format!("Azure Service Prices ({})", params.currency.code());
        let text = shape_response(&sheet, params.response_format, &title)
            .map_err(Self::internal)?;
        Ok(Self::text_result(text))
    }

    /// Cross-region price comparison.
    #[tool(
        description = "Compare Azure service prices across 2-10 regions. Shows per-SKU price \
                       tables with deltas from the cheapest region and a maximum-savings summary."
    )]
    pub async fn azure_compare_region_prices(
        &self,
        Parameters(params): Parameters<RegionComparisonParams>,
    ) -> Result<CallToolResult, McpError> {
        params.validate().map_err(Self::invalid)?;

        let regions = params.normalized_regions();
        let mut region_items: Vec<(String, Vec<PriceRecord>)> = Vec::new();

        for region in &regions {
            let filter = FilterSet::new()
                .eq(FilterField::ServiceName, &params.service_name)
                .eq(FilterField::ArmRegionName, region)
                .eq_opt(FilterField::SkuName, params.sku_name.as_deref())
                .eq_opt(
                    FilterField::PriceType,
                    params.price_type.map(|p| p.as_str()),
                )
                .build();
            let query = PriceQuery::new()
                .with_filter(filter)
                .in_currency(params.currency);

            // A failed region degrades to an empty column instead of
            // failing the whole comparison.
            match self.client.fetch(&query, COMPARISON_FETCH_LIMIT).await {
                Ok(sheet) => region_items.push((region.clone(), sheet.items)),
                Err(err) => {
                    warn!(region = %region, error = %err, "failed to fetch region pricing");
                    region_items.push((region.clone(), Vec::new()));
                }
            }
        }

        let text = match params.response_format {
            ResponseFormat::Json => {
                let mut map = serde_json::Map::new();
                for (region, items) in &region_items {
                    map.insert(
                        region.clone(),
                        serde_json::to_value(items).map_err(Self::internal)?,
                    );
                }
                serde_json::to_string_pretty(&serde_json::Value::Object(map))
                    .map_err(Self::internal)?
            }
            ResponseFormat::Markdown => {
                let comparisons = compare_regions(&region_items);
                render_comparison_markdown(
                    &params.service_name,
                    params.sku_name.as_deref(),
                    params.price_type.map_or("All", |p| p.as_str()),
                    params.currency,
                    &comparisons,
                )
            }
        };
        Ok(Self::text_result(text))
    }

    /// Substring SKU search.
    #[tool(
        description = "Search Azure SKU pricing by substring match on the SKU name, optionally \
                       narrowed by service family and region. Useful when the exact SKU name is \
                       unknown."
    )]
    pub async fn azure_search_sku_prices(
        &self,
        Parameters(params): Parameters<SkuSearchParams>,
    ) -> Result<CallToolResult, McpError> {
        params.validate().map_err(Self::invalid)?;

        let filter = FilterSet::new()
            .eq_opt(
                FilterField::ServiceFamily,
                params.service_family.map(|f| f.as_str()),
            )
            .eq_opt(FilterField::ArmRegionName, params.region.as_deref())
            .contains(FilterField::SkuName, &params.search_term)
            .build();

        let query = PriceQuery::new()
            .with_filter(filter)
            .in_currency(params.currency);
        let mut sheet = self
            .client
            .fetch(&query, params.limit)
            .await
            .map_err(Self::internal)?;

        if !params.include_savings_plans {
            sheet.items.retain(|item| !item.has_savings_plan());
        }

        let title = format!("Azure SKU Search Results: '{}'", params.search_term);
        let text = shape_response(&sheet, params.response_format, &title)
            .map_err(Self::internal)?;
        Ok(Self::text_result(text))
    }

    /// Service family discovery.
    #[tool(
        description = "List Azure service families discovered from sampled pricing data, with \
                       their services, example SKUs, and observed price ranges."
    )]
    pub async fn azure_get_service_families(
        &self,
        Parameters(params): Parameters<ServiceFamiliesParams>,
    ) -> Result<CallToolResult, McpError> {
        params.validate().map_err(Self::invalid)?;

        // Families are discovered, not listed upstream: sample wide (10x
        // the family limit, capped at one page) and group what comes back.
        let sample_limit = clamp_top(params.limit.saturating_mul(10));
        let sheet = self
            .client
            .fetch(&PriceQuery::new(), sample_limit)
            .await
            .map_err(Self::internal)?;

        let families = discover_families(&sheet.items);
        let text = match params.response_format {
            ResponseFormat::Markdown => render_families_markdown(&families, params.limit),
            ResponseFormat::Json => {
                render_families_json(&families, params.limit).map_err(Self::internal)?
            }
        };
        Ok(Self::text_result(text))
    }

    /// Savings-plan ROI analysis.
    #[tool(
        description = "Calculate savings-plan benefits for a service versus pay-as-you-go \
                       pricing: per-term savings tables, accumulated 1-year and 3-year totals, \
                       and a term recommendation."
    )]
    pub async fn azure_calculate_savings_plan(
        &self,
        Parameters(params): Parameters<SavingsPlanParams>,
    ) -> Result<CallToolResult, McpError> {
        params.validate().map_err(Self::invalid)?;

        let filter = FilterSet::new()
            .eq(FilterField::ServiceName, &params.service_name)
            .eq_opt(FilterField::SkuName, params.sku_name.as_deref())
            .eq_opt(FilterField::ArmRegionName, params.region.as_deref())
            .build();
        let query = PriceQuery::new()
            .with_filter(filter)
            .in_currency(params.currency);
        let sheet = self
            .client
            .fetch(&query, SAVINGS_FETCH_LIMIT)
            .await
            .map_err(Self::internal)?;

        let text = match SavingsAnalysis::from_records(&sheet.items) {
            None => match params.response_format {
                ResponseFormat::Json => serde_json::to_string_pretty(&serde_json::json!({
                    "error": "No savings plan eligible items found for the specified criteria"
                }))
                .map_err(Self::internal)?,
                ResponseFormat::Markdown => NO_ELIGIBLE_ITEMS_MARKDOWN.to_string(),
            },
            Some(analysis) => match params.response_format {
                ResponseFormat::Json => {
                    let eligible: Vec<&PriceRecord> = sheet
                        .items
                        .iter()
                        .filter(|item| item.has_savings_plan())
                        .collect();
                    serde_json::to_string_pretty(&serde_json::json!({
                        "items_with_savings_plans": eligible
                    }))
                    .map_err(Self::internal)?
                }
                ResponseFormat::Markdown => render_savings_markdown(
                    &params.service_name,
                    params.sku_name.as_deref(),
                    params.region.as_deref(),
                    params.currency,
                    &analysis,
                ),
            },
        };
        Ok(Self::text_result(text))
    }
}

#[tool_handler]
impl ServerHandler for PricelensMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: SERVER_NAME.to_string(),
                version: SERVER_VERSION.to_string(),
                title: Some("Azure Retail Prices".to_string()),
                icons: None,
                website_url: Some("https://github.com/pricelens/pricelens".to_string()),
            },
            instructions: Some(
                "Pricelens MCP Server - Azure retail pricing lookups. \
                 Query service prices with azure_get_service_prices, compare regions with \
                 azure_compare_region_prices, search SKUs with azure_search_sku_prices, \
                 discover service families with azure_get_service_families, and analyze \
                 commitment discounts with azure_calculate_savings_plan. All tools are \
                 read-only against the public Retail Prices API."
                    .to_string(),
            ),
        }
    }
}
