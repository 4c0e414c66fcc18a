//! OData `$filter` expression construction.
//!
//! The Retail Prices API accepts a restricted OData filter syntax: `eq`
//! comparisons on a fixed set of fields, `contains` for substring matching,
//! and `and`/`or` combinators. This module builds those expressions from
//! typed parts so user input can never escape its quoted literal.

use std::fmt;

/// Filterable fields of the Retail Prices API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterField {
    /// `serviceName` - e.g. "Virtual Machines".
    ServiceName,
    /// `serviceFamily` - e.g. "Compute".
    ServiceFamily,
    /// `armRegionName` - e.g. "eastus".
    ArmRegionName,
    /// `skuName` - e.g. "Standard_D2s_v3".
    SkuName,
    /// `priceType` - e.g. "Consumption".
    PriceType,
}

impl FilterField {
    /// Returns the upstream field name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterField::ServiceName => "serviceName",
            FilterField::ServiceFamily => "serviceFamily",
            FilterField::ArmRegionName => "armRegionName",
            FilterField::SkuName => "skuName",
            FilterField::PriceType => "priceType",
        }
    }
}

impl fmt::Display for FilterField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Escapes an OData string literal: embedded single quotes are doubled.
#[must_use]
pub fn escape_literal(value: &str) -> String {
    value.replace('\'', "''")
}

/// Builder for a conjunction of OData filter clauses.
///
/// Clauses are joined with `and` in insertion order. An empty set builds to
/// `None` so callers can omit the `$filter` query parameter entirely.
#[derive(Debug, Clone, Default)]
pub struct FilterSet {
    clauses: Vec<String>,
}

impl FilterSet {
    /// Creates an empty filter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a `field eq 'value'` clause.
    #[must_use]
    pub fn eq(mut self, field: FilterField, value: &str) -> Self {
        self.clauses
            .push(format!("{} eq '{}'", field, escape_literal(value)));
        self
    }

    /// Adds an equality clause only when a value is present.
    #[must_use]
    pub fn eq_opt(self, field: FilterField, value: Option<&str>) -> Self {
        match value {
            Some(v) => self.eq(field, v),
            None => self,
        }
    }

    /// Adds a parenthesized `or`-group matching any of the given values.
    ///
    /// A single value degenerates to a plain equality clause; an empty
    /// slice adds nothing.
    #[must_use]
    pub fn any_of(mut self, field: FilterField, values: &[&str]) -> Self {
        match values {
            [] => self,
            [only] => self.eq(field, only),
            many => {
                let parts: Vec<String> = many
                    .iter()
                    .map(|v| format!("{} eq '{}'", field, escape_literal(v)))
                    .collect();
                self.clauses.push(format!("({})", parts.join(" or ")));
                self
            }
        }
    }

    /// Adds a `contains(field, 'term')` substring clause.
    #[must_use]
    pub fn contains(mut self, field: FilterField, term: &str) -> Self {
        self.clauses
            .push(format!("contains({}, '{}')", field, escape_literal(term)));
        self
    }

    /// Returns true when no clauses have been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Builds the `$filter` value, or `None` for an empty set.
    #[must_use]
    pub fn build(self) -> Option<String> {
        if self.clauses.is_empty() {
            None
        } else {
            Some(self.clauses.join(" and "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_empty_set_builds_none() {
        assert!(FilterSet::new().build().is_none());
        assert!(FilterSet::new().is_empty());
    }

    #[test]
    fn test_single_eq() {
        let filter = FilterSet::new()
            .eq(FilterField::ServiceName, "Virtual Machines")
            .build();
        assert_eq!(filter.as_deref(), Some("serviceName eq 'Virtual Machines'"));
    }

    #[test]
    fn test_and_join_preserves_insertion_order() {
        let filter = FilterSet::new()
            .eq(FilterField::ServiceName, "Storage")
            .eq(FilterField::ArmRegionName, "westeurope")
            .eq(FilterField::PriceType, "Consumption")
            .build()
            .unwrap();
        assert_eq!(
            filter,
            "serviceName eq 'Storage' and armRegionName eq 'westeurope' and priceType eq 'Consumption'"
        );
    }

    #[test]
    fn test_eq_opt() {
        let filter = FilterSet::new()
            .eq_opt(FilterField::SkuName, None)
            .eq_opt(FilterField::ArmRegionName, Some("uksouth"))
            .build();
        assert_eq!(filter.as_deref(), Some("armRegionName eq 'uksouth'"));
    }

    #[test]
    fn test_or_group() {
        let filter = FilterSet::new()
            .any_of(FilterField::ArmRegionName, &["eastus", "westus2"])
            .build();
        assert_eq!(
            filter.as_deref(),
            Some("(armRegionName eq 'eastus' or armRegionName eq 'westus2')")
        );
    }

    #[test]
    fn test_or_group_single_value_degenerates() {
        let filter = FilterSet::new()
            .any_of(FilterField::ArmRegionName, &["eastus"])
            .build();
        assert_eq!(filter.as_deref(), Some("armRegionName eq 'eastus'"));
    }

    #[test]
    fn test_or_group_empty_adds_nothing() {
        let filter = FilterSet::new()
            .any_of(FilterField::ArmRegionName, &[])
            .build();
        assert!(filter.is_none());
    }

    #[test]
    fn test_contains() {
        let filter = FilterSet::new()
            .contains(FilterField::SkuName, "D2s")
            .build();
        assert_eq!(filter.as_deref(), Some("contains(skuName, 'D2s')"));
    }

    #[test]
    fn test_contains_combined_with_eq() {
        let filter = FilterSet::new()
            .eq(FilterField::ServiceFamily, "Compute")
            .contains(FilterField::SkuName, "v5")
            .build()
            .unwrap();
        assert_eq!(
            filter,
            "serviceFamily eq 'Compute' and contains(skuName, 'v5')"
        );
    }

    #[test]
    fn test_quote_escaping() {
        let filter = FilterSet::new()
            .eq(FilterField::ServiceName, "O'Brien's Service")
            .build();
        assert_eq!(
            filter.as_deref(),
            Some("serviceName eq 'O''Brien''s Service'")
        );
    }

    proptest! {
        // A quoted literal must contain no lone single quote, whatever the
        // caller feeds in.
        #[test]
        fn prop_escaped_literal_never_breaks_quoting(value in ".*") {
            let escaped = escape_literal(&value);
            let mut lone = false;
            let mut chars = escaped.chars().peekable();
            while let Some(c) = chars.next() {
                if c == '\'' {
                    if chars.peek() == Some(&'\'') {
                        chars.next();
                    } else {
                        lone = true;
                    }
                }
            }
            prop_assert!(!lone);
        }

        #[test]
        fn prop_filter_always_joined_with_and(a in "[a-zA-Z0-9]{1,20}", b in "[a-zA-Z0-9]{1,20}") {
            let filter = FilterSet::new()
                .eq(FilterField::ServiceName, &a)
                .eq(FilterField::ArmRegionName, &b)
                .build()
                .unwrap();
            prop_assert_eq!(filter.matches(" and ").count(), 1);
        }
    }
}
