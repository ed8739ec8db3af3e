use contracts::domain::products::{LowStockCount, Product};

use crate::shared::api_client::{ApiClient, ApiError};

/// Products at or below their minimum stock, filtered server-side.
pub async fn fetch_low_stock(client: &ApiClient) -> Result<Vec<Product>, ApiError> {
    client.get("/products/low-stock").await
}

/// Count variant used by the navbar badge.
pub async fn fetch_count(client: &ApiClient) -> Result<LowStockCount, ApiError> {
    client.get("/products/low-stock/count").await
}
