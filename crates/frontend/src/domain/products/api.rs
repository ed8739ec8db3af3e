use contracts::domain::products::{Product, ProductInput, ProductSaved, StockUpdate};
use contracts::system::auth::MessageResponse;

use crate::shared::api_client::{ApiClient, ApiError};

pub async fn fetch_products(client: &ApiClient) -> Result<Vec<Product>, ApiError> {
    client.get("/products").await
}

pub async fn create_product(
    client: &ApiClient,
    input: &ProductInput,
) -> Result<ProductSaved, ApiError> {
    client.post("/products", input).await
}

pub async fn update_product(
    client: &ApiClient,
    id: i64,
    input: &ProductInput,
) -> Result<ProductSaved, ApiError> {
    client.put(&format!("/products/{id}"), input).await
}

/// Quick stock set used by the dashboard. The new quantity is computed
/// client-side from the displayed stock (see DESIGN.md on the race).
pub async fn update_stock(
    client: &ApiClient,
    id: i64,
    stock_qty: i64,
) -> Result<ProductSaved, ApiError> {
    client
        .put(&format!("/products/{id}"), &StockUpdate { stock_qty })
        .await
}

pub async fn delete_product(client: &ApiClient, id: i64) -> Result<MessageResponse, ApiError> {
    client.delete(&format!("/products/{id}")).await
}
