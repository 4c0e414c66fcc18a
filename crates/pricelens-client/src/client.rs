//! The Retail Prices API client.

use reqwest::Client;
use serde::Deserialize;
use tracing::debug;
use url::Url;

use pricelens_core::limits::clamp_top;
use pricelens_core::types::{Currency, PriceRecord, PriceSheet};

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};

/// One page of the upstream response envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct PricePage {
    /// Billing currency for all prices in the page.
    #[serde(rename = "BillingCurrency", default)]
    pub billing_currency: Option<String>,
    /// Customer entity identifier (always "Default" for the public API).
    #[serde(rename = "CustomerEntityId", default)]
    pub customer_entity_id: Option<String>,
    /// Customer entity type (always "Retail" for the public API).
    #[serde(rename = "CustomerEntityType", default)]
    pub customer_entity_type: Option<String>,
    /// Price items in this page.
    #[serde(rename = "Items", default)]
    pub items: Vec<PriceRecord>,
    /// Absolute URL of the next page, when more data is available.
    #[serde(rename = "NextPageLink", default)]
    pub next_page_link: Option<String>,
    /// Item count reported for this page.
    #[serde(rename = "Count", default)]
    pub count: Option<u64>,
}

/// A filtered price lookup.
#[derive(Debug, Clone, Default)]
pub struct PriceQuery {
    /// OData `$filter` expression, if any.
    pub filter: Option<String>,
    /// Billing currency to quote in.
    pub currency: Currency,
}

impl PriceQuery {
    /// Creates an unfiltered USD query.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the `$filter` expression.
    #[must_use]
    pub fn with_filter(mut self, filter: Option<String>) -> Self {
        self.filter = filter;
        self
    }

    /// Sets the billing currency.
    #[must_use]
    pub fn in_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }
}

/// Async client for the Retail Prices API.
///
/// Cheap to clone; the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct PricingClient {
    http: Client,
    config: ClientConfig,
}

impl PricingClient {
    /// Builds a client from the given configuration.
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self { http, config })
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Fetches up to `limit` items matching `query`, following
    /// continuation links.
    ///
    /// Pages are merged in upstream order. The loop stops once `limit`
    /// items are collected, the upstream stops linking further pages, or
    /// the configured page bound is hit; merged items are then cut to
    /// `limit`.
    pub async fn fetch(&self, query: &PriceQuery, limit: usize) -> ClientResult<PriceSheet> {
        let mut items: Vec<PriceRecord> = Vec::new();
        let mut total_count: Option<u64> = None;
        let mut billing_currency: Option<String> = None;
        let mut next_link: Option<Url> = None;

        for page_index in 0..self.config.max_pages {
            let page = match next_link.take() {
                None => self.fetch_first_page(query, limit).await?,
                Some(link) => self.fetch_page(link).await?,
            };

            debug!(
                page = page_index,
                items = page.items.len(),
                has_next = page.next_page_link.is_some(),
                "fetched pricing page"
            );

            if billing_currency.is_none() {
                billing_currency = page.billing_currency;
            }
            if let Some(count) = page.count {
                total_count = Some(total_count.unwrap_or(0) + count);
            }
            items.extend(page.items);

            if items.len() >= limit {
                break;
            }
            match page.next_page_link.as_deref() {
                Some(link) if !link.is_empty() => next_link = Some(Url::parse(link)?),
                _ => break,
            }
        }

        items.truncate(limit);
        Ok(PriceSheet {
            items,
            total_count,
            billing_currency,
            truncation: None,
        })
    }

    /// Issues the initial request with the full query-parameter set.
    async fn fetch_first_page(&self, query: &PriceQuery, limit: usize) -> ClientResult<PricePage> {
        let mut params: Vec<(&str, String)> =
            vec![("api-version", self.config.api_version.clone())];
        if query.currency != Currency::USD {
            // The upstream expects the code as a quoted literal.
            params.push(("currencyCode", format!("'{}'", query.currency.code())));
        }
        if let Some(filter) = &query.filter {
            params.push(("$filter", filter.clone()));
        }
        params.push(("$top", clamp_top(limit).to_string()));

        let request = self.http.get(self.config.base_url.clone()).query(&params);
        Self::decode(request.send().await?).await
    }

    /// Follows a continuation link; the URL already carries its state.
    async fn fetch_page(&self, link: Url) -> ClientResult<PricePage> {
        Self::decode(self.http.get(link).send().await?).await
    }

    async fn decode(response: reqwest::Response) -> ClientResult<PricePage> {
        let status = response.status();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        if !status.is_success() {
            return Err(ClientError::Api {
                status: status.as_u16(),
                message: body,
            });
        }
        Ok(serde_json::from_str(&body)?)
    }
}
