//! Typed response payloads for the analytics API.
//!
//! Every endpoint wraps its payload in an `{ "data": ... }` envelope. Shapes
//! are validated at decode time; a mismatch is a decode error rather than a
//! silently-missing field.

use serde::{Deserialize, Deserializer};

/// Envelope wrapper used by every analytics endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    pub data: Option<T>,
}

/// Aggregate business metrics shown in the KPI tiles.
///
/// Individual fields may be null when the backend has no data for them yet;
/// null fields render as "N/A".
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct KpiSummary {
    #[serde(default, deserialize_with = "opt_amount")]
    pub total_revenue: Option<f64>,
    pub total_orders: Option<u64>,
    pub total_customers: Option<u64>,
    pub new_customers: Option<u64>,
}

/// One day of aggregated revenue. The server returns these in chronological
/// order and the client does not re-sort them.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SalesPoint {
    pub date: String,
    #[serde(deserialize_with = "amount")]
    pub daily_revenue: f64,
}

/// Order count for a single status value.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StatusCount {
    pub status: String,
    pub count: u64,
}

/// Per-product sales totals, ordered by revenue (descending) by the server.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProductSummary {
    pub product_name: String,
    pub total_units_sold: u64,
    #[serde(deserialize_with = "amount")]
    pub total_revenue: f64,
    #[serde(default, deserialize_with = "opt_amount")]
    pub total_profit: Option<f64>,
}

/// Monetary amounts arrive as plain JSON numbers on some endpoints and as
/// decimal strings on others (DRF DecimalField coercion). Accept both.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawAmount {
    Number(f64),
    Text(String),
}

impl RawAmount {
    fn into_f64<E: serde::de::Error>(self) -> Result<f64, E> {
        match self {
            RawAmount::Number(n) => Ok(n),
            RawAmount::Text(s) => s.trim().parse::<f64>().map_err(E::custom),
        }
    }
}

fn amount<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    RawAmount::deserialize(deserializer)?.into_f64()
}

fn opt_amount<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    match Option::<RawAmount>::deserialize(deserializer)? {
        Some(raw) => raw.into_f64().map(Some),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::{format_count, format_currency};

    #[test]
    // Null KPI fields must decode to None and format as "N/A".
    fn test_kpi_envelope_with_null_fields() {
        let body = r#"{"data":{"total_revenue":1000,"total_orders":null,"total_customers":5,"new_customers":2}}"#;
        let envelope: Envelope<KpiSummary> = serde_json::from_str(body).unwrap();
        let kpis = envelope.data.unwrap();

        assert_eq!(format_currency(kpis.total_revenue), "$1,000");
        assert_eq!(format_count(kpis.total_orders), "N/A");
        assert_eq!(format_count(kpis.total_customers), "5");
        assert_eq!(format_count(kpis.new_customers), "2");
    }

    #[test]
    // An envelope whose data member is null decodes, but carries no payload.
    fn test_envelope_with_null_data() {
        let envelope: Envelope<KpiSummary> = serde_json::from_str(r#"{"data":null}"#).unwrap();
        assert!(envelope.data.is_none());

        let envelope: Envelope<KpiSummary> = serde_json::from_str(r#"{}"#).unwrap();
        assert!(envelope.data.is_none());
    }

    #[test]
    fn test_sales_points_preserve_server_order() {
        let body = r#"{"data":[
            {"date":"2026-07-01","daily_revenue":120.5},
            {"date":"2026-07-02","daily_revenue":80.0},
            {"date":"2026-07-03","daily_revenue":310.25}
        ]}"#;
        let envelope: Envelope<Vec<SalesPoint>> = serde_json::from_str(body).unwrap();
        let points = envelope.data.unwrap();

        assert_eq!(points.len(), 3);
        assert_eq!(points[0].date, "2026-07-01");
        assert_eq!(points[2].daily_revenue, 310.25);
    }

    #[test]
    // The products endpoint serializes decimal amounts as strings, and adds
    // fields (product_id) this dashboard does not display.
    fn test_product_amounts_decode_from_strings() {
        let body = r#"{"data":[{
            "product_id":"7e2a9f9e-33a1-4f0e-9c25-27e8f8e2ab11",
            "product_name":"Canvas Tote",
            "total_units_sold":42,
            "total_revenue":"1234.50",
            "total_profit":"400.00"
        }]}"#;
        let envelope: Envelope<Vec<ProductSummary>> = serde_json::from_str(body).unwrap();
        let products = envelope.data.unwrap();

        assert_eq!(products[0].total_revenue, 1234.5);
        assert_eq!(products[0].total_profit, Some(400.0));
    }

    #[test]
    fn test_malformed_payload_is_a_decode_error() {
        let body = r#"{"data":{"total_revenue":"not a number"}}"#;
        let result: Result<Envelope<KpiSummary>, _> = serde_json::from_str(body);
        assert!(result.is_err());
    }
}
