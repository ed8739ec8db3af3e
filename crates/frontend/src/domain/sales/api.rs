use contracts::domain::sales::{DateReportRow, NewSale, ReportFilter, SaleRecorded, SaleReportRow};
use futures::future::try_join;

use crate::shared::api_client::{ApiClient, ApiError};

/// Record a sale; the service checks and decrements stock.
pub async fn record_sale(client: &ApiClient, sale: &NewSale) -> Result<SaleRecorded, ApiError> {
    client.post("/sales", sale).await
}

/// Both report groupings for one filter, fetched concurrently. Either both
/// arrive or the whole call fails; partial results never reach the view.
pub async fn fetch_report(
    client: &ApiClient,
    filter: &ReportFilter,
) -> Result<(Vec<SaleReportRow>, Vec<DateReportRow>), ApiError> {
    let product_path = report_path(filter, &[]);
    let date_path = report_path(filter, &[("group_by", "date")]);
    try_join(
        client.get::<Vec<SaleReportRow>>(&product_path),
        client.get::<Vec<DateReportRow>>(&date_path),
    )
    .await
}

fn report_path(filter: &ReportFilter, extra: &[(&'static str, &str)]) -> String {
    let query = filter.to_query_string(extra);
    if query.is_empty() {
        "/sales/report".to_string()
    } else {
        format!("/sales/report?{query}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_path_without_filter_has_no_query() {
        assert_eq!(report_path(&ReportFilter::default(), &[]), "/sales/report");
    }

    #[test]
    fn report_path_carries_grouping() {
        let filter = ReportFilter {
            from: Some("2024-03-01".to_string()),
            ..Default::default()
        };
        assert_eq!(
            report_path(&filter, &[("group_by", "date")]),
            "/sales/report?from=2024-03-01&group_by=date"
        );
    }
}
