use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Payload for `POST /sales`.
#[derive(Debug, Clone, Serialize)]
pub struct NewSale {
    pub product_id: i64,
    pub quantity: i64,
}

/// Response for a recorded sale.
#[derive(Debug, Clone, Deserialize)]
pub struct SaleRecorded {
    pub message: String,
    #[serde(default)]
    pub sale_id: Option<i64>,
}

/// One product-grouped row of `GET /sales/report`. One row per product
/// with at least one matching sale in the filtered window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleReportRow {
    pub product_id: i64,
    pub product_name: String,
    pub total_quantity_sold: i64,
    pub total_revenue: Decimal,
}

/// One date-grouped row of `GET /sales/report?group_by=date`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateReportRow {
    pub sale_date: NaiveDate,
    #[serde(default)]
    pub total_quantity: i64,
    pub total_revenue: Decimal,
}

/// Filter state for the sales report. Absent fields impose no bound; with
/// neither date set the service falls back to the current month.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportFilter {
    pub from: Option<String>,
    pub to: Option<String>,
    pub product_id: Option<i64>,
}

impl ReportFilter {
    /// Query parameters for `GET /sales/report`. Empty strings count as
    /// absent. `extra` pairs are appended as-is; the filter itself is not
    /// touched (`group_by=date` and `export=csv` ride on the same filter).
    pub fn query_pairs(&self, extra: &[(&'static str, &str)]) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(from) = self.from.as_deref().filter(|s| !s.is_empty()) {
            pairs.push(("from", from.to_string()));
        }
        if let Some(to) = self.to.as_deref().filter(|s| !s.is_empty()) {
            pairs.push(("to", to.to_string()));
        }
        if let Some(id) = self.product_id {
            pairs.push(("product_id", id.to_string()));
        }
        for (key, value) in extra {
            pairs.push((key, value.to_string()));
        }
        pairs
    }

    /// Percent-encoded query string (no leading `?`).
    pub fn to_query_string(&self, extra: &[(&'static str, &str)]) -> String {
        encode_pairs(&self.query_pairs(extra))
    }
}

/// Encode pairs into `k=v&k=v` form, percent-escaping values.
pub fn encode_pairs(pairs: &[(&'static str, String)]) -> String {
    pairs
        .iter()
        .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(pairs: &[(&'static str, String)]) -> Vec<&'static str> {
        pairs.iter().map(|(key, _)| *key).collect()
    }

    #[test]
    fn empty_filter_yields_no_params() {
        let filter = ReportFilter::default();
        assert!(filter.query_pairs(&[]).is_empty());
        assert_eq!(filter.to_query_string(&[]), "");
    }

    #[test]
    fn partial_filter_emits_only_present_fields() {
        let filter = ReportFilter {
            from: Some("2024-01-01".to_string()),
            to: None,
            product_id: None,
        };
        let pairs = filter.query_pairs(&[("group_by", "date")]);
        assert_eq!(keys(&pairs), vec!["from", "group_by"]);
        assert_eq!(pairs[0].1, "2024-01-01");
        assert_eq!(pairs[1].1, "date");
    }

    #[test]
    fn empty_strings_count_as_absent() {
        let filter = ReportFilter {
            from: Some(String::new()),
            to: Some(String::new()),
            product_id: Some(7),
        };
        let pairs = filter.query_pairs(&[]);
        assert_eq!(keys(&pairs), vec!["product_id"]);
        assert_eq!(pairs[0].1, "7");
    }

    #[test]
    fn extra_pairs_do_not_mutate_filter() {
        let filter = ReportFilter {
            from: Some("2024-03-01".to_string()),
            to: Some("2024-03-31".to_string()),
            product_id: Some(2),
        };
        let before = filter.clone();
        let _ = filter.query_pairs(&[("export", "csv")]);
        assert_eq!(filter, before);
        assert_eq!(filter.query_pairs(&[]).len(), 3);
    }

    #[test]
    fn query_string_percent_encodes_values() {
        let pairs = vec![("from", "2024 01 01".to_string())];
        assert_eq!(encode_pairs(&pairs), "from=2024%2001%2001");
    }

    #[test]
    fn report_rows_deserialize_service_payloads() {
        let json = r#"[
            {"product_id": 1, "product_name": "Marble Tile",
             "total_quantity_sold": 10, "total_revenue": 100.0},
            {"product_id": 2, "product_name": "Granite Tile",
             "total_quantity_sold": 3, "total_revenue": 30.0}
        ]"#;
        let rows: Vec<SaleReportRow> = serde_json::from_str(json).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].total_revenue, Decimal::from(100));

        let json = r#"[{"sale_date": "2024-03-05", "total_quantity": 4,
                        "total_revenue": 40.5}]"#;
        let rows: Vec<DateReportRow> = serde_json::from_str(json).unwrap();
        assert_eq!(rows[0].sale_date.to_string(), "2024-03-05");
        assert_eq!(rows[0].total_revenue, "40.5".parse().unwrap());
    }
}
