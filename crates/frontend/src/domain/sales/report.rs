//! Derived-report computation for the sales dashboard.
//!
//! The service returns rows already grouped by product or by date; this
//! module only folds those rows into display totals and chart-ready series.
//! Everything here is pure: no fetching, no storage, no signals.

use contracts::domain::sales::{DateReportRow, ReportFilter, SaleReportRow};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::shared::components::charts::ChartSeries;

/// Totals and top seller derived from the currently loaded product rows.
/// Recomputed wholesale whenever the row set is replaced; never cached
/// across filter changes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportSummary {
    pub total_quantity: i64,
    pub total_revenue: Decimal,
    pub top_product: Option<SaleReportRow>,
}

impl ReportSummary {
    /// Name shown on the "Top Product" card; "N/A" when no rows are loaded.
    pub fn top_product_name(&self) -> &str {
        self.top_product
            .as_ref()
            .map(|row| row.product_name.as_str())
            .unwrap_or("N/A")
    }
}

/// Fold the product-grouped rows into totals and the top seller.
///
/// The top pick is a left fold that only moves on a strictly greater
/// quantity, so equal quantities keep the earliest row in server order.
/// Revenue is summed in `Decimal`; rounding happens at render time only.
pub fn summarize(rows: &[SaleReportRow]) -> ReportSummary {
    let mut summary = ReportSummary::default();
    for row in rows {
        summary.total_quantity += row.total_quantity_sold;
        summary.total_revenue += row.total_revenue;
        let beats_best = summary
            .top_product
            .as_ref()
            .map(|best| row.total_quantity_sold > best.total_quantity_sold)
            .unwrap_or(true);
        if beats_best {
            summary.top_product = Some(row.clone());
        }
    }
    summary
}

/// Quantity-by-product bars, one entry per row, server order preserved.
pub fn to_bar_series(rows: &[SaleReportRow]) -> ChartSeries {
    ChartSeries {
        labels: rows.iter().map(|row| row.product_name.clone()).collect(),
        values: rows
            .iter()
            .map(|row| row.total_quantity_sold as f64)
            .collect(),
    }
}

/// Revenue-by-date line points, one entry per row, server order preserved.
/// Decimal revenue becomes `f64` only here, at the pixel boundary.
pub fn to_line_series(rows: &[DateReportRow]) -> ChartSeries {
    ChartSeries {
        labels: rows.iter().map(|row| row.sale_date.to_string()).collect(),
        values: rows
            .iter()
            .map(|row| row.total_revenue.to_f64().unwrap_or(0.0))
            .collect(),
    }
}

/// Download link for the CSV rendition of the same query.
pub fn build_export_url(base_url: &str, filter: &ReportFilter) -> String {
    format!(
        "{}/sales/report?{}",
        base_url,
        filter.to_query_string(&[("export", "csv")])
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product_row(id: i64, name: &str, quantity: i64, revenue: &str) -> SaleReportRow {
        SaleReportRow {
            product_id: id,
            product_name: name.to_string(),
            total_quantity_sold: quantity,
            total_revenue: revenue.parse().unwrap(),
        }
    }

    fn date_row(date: &str, revenue: &str) -> DateReportRow {
        DateReportRow {
            sale_date: date.parse().unwrap(),
            total_quantity: 0,
            total_revenue: revenue.parse().unwrap(),
        }
    }

    #[test]
    fn summarize_empty_rows() {
        let summary = summarize(&[]);
        assert_eq!(summary.total_quantity, 0);
        assert_eq!(summary.total_revenue, Decimal::ZERO);
        assert_eq!(summary.top_product, None);
        assert_eq!(summary.top_product_name(), "N/A");
    }

    #[test]
    fn summarize_totals_and_top_product() {
        let rows = vec![
            product_row(1, "Marble Tile", 5, "50"),
            product_row(2, "Granite Tile", 9, "30"),
        ];
        let summary = summarize(&rows);
        assert_eq!(summary.total_quantity, 14);
        assert_eq!(summary.total_revenue, Decimal::from(80));
        assert_eq!(summary.top_product_name(), "Granite Tile");
    }

    #[test]
    fn summarize_keeps_earliest_row_on_tie() {
        let rows = vec![
            product_row(1, "Marble Tile", 5, "50"),
            product_row(2, "Granite Tile", 5, "70"),
        ];
        assert_eq!(summarize(&rows).top_product_name(), "Marble Tile");
    }

    #[test]
    fn summarize_sums_cents_exactly() {
        let rows = vec![
            product_row(1, "A", 1, "0.10"),
            product_row(2, "B", 1, "0.20"),
        ];
        assert_eq!(summarize(&rows).total_revenue, "0.30".parse().unwrap());
    }

    #[test]
    fn series_preserve_order_and_length() {
        let rows = vec![
            product_row(1, "Marble Tile", 5, "50"),
            product_row(2, "Granite Tile", 9, "30"),
            product_row(3, "Ceramic Tile", 2, "20"),
        ];
        let series = to_bar_series(&rows);
        assert_eq!(series.labels.len(), rows.len());
        assert_eq!(series.values.len(), rows.len());
        assert_eq!(series.labels[0], "Marble Tile");
        assert_eq!(series.values[2], 2.0);

        let rows = vec![date_row("2024-03-02", "40"), date_row("2024-03-01", "20")];
        let series = to_line_series(&rows);
        assert_eq!(series.labels, vec!["2024-03-02", "2024-03-01"]);
        assert_eq!(series.values, vec![40.0, 20.0]);

        assert!(to_bar_series(&[]).is_empty());
        assert!(to_line_series(&[]).is_empty());
    }

    #[test]
    fn export_url_round_trips_the_filter() {
        let filter = ReportFilter {
            from: Some("2024-03-01".to_string()),
            to: Some("2024-03-31".to_string()),
            product_id: Some(7),
        };
        let url = build_export_url("http://localhost:5000", &filter);
        let query = url
            .strip_prefix("http://localhost:5000/sales/report?")
            .unwrap();

        let mut parsed = ReportFilter::default();
        let mut saw_export = false;
        for pair in query.split('&') {
            let (key, value) = pair.split_once('=').unwrap();
            let value = urlencoding::decode(value).unwrap().into_owned();
            match key {
                "from" => parsed.from = Some(value),
                "to" => parsed.to = Some(value),
                "product_id" => parsed.product_id = value.parse().ok(),
                "export" => saw_export = value == "csv",
                other => panic!("unexpected query key {other}"),
            }
        }
        assert!(saw_export);
        assert_eq!(parsed, filter);
    }

    #[test]
    fn march_scenario_end_to_end() {
        let product_rows = vec![
            product_row(1, "Marble Tile", 10, "100.00"),
            product_row(2, "Granite Tile", 3, "30.00"),
        ];
        let date_rows = vec![
            date_row("2024-03-01", "50.00"),
            date_row("2024-03-10", "40.00"),
            date_row("2024-03-21", "40.00"),
        ];

        let summary = summarize(&product_rows);
        assert_eq!(summary.total_quantity, 13);
        assert_eq!(format!("{:.2}", summary.total_revenue), "130.00");
        assert_eq!(summary.top_product_name(), "Marble Tile");

        assert_eq!(to_bar_series(&product_rows).values.len(), 2);
        assert_eq!(to_line_series(&date_rows).values.len(), 3);
    }
}
