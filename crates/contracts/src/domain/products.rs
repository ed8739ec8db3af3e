use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One inventory row as returned by `GET /products` and
/// `GET /products/low-stock`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub size: String,
    pub price: Decimal,
    pub stock_qty: i64,
    pub min_stock: i64,
}

/// Create/update payload for `POST /products` and `PUT /products/:id`.
///
/// `min_stock` is omitted when blank so the service applies its
/// category-based default.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProductInput {
    pub name: String,
    pub category: String,
    pub size: String,
    pub price: Decimal,
    pub stock_qty: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_stock: Option<i64>,
}

/// Partial `PUT /products/:id` body used by the quick stock update; every
/// field left out keeps its current server-side value.
#[derive(Debug, Clone, Serialize)]
pub struct StockUpdate {
    pub stock_qty: i64,
}

/// `{message, product}` envelope returned by product create/update.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductSaved {
    pub message: String,
    pub product: Product,
}

/// Response of `GET /products/low-stock/count`.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct LowStockCount {
    pub count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_deserializes_float_price() {
        let json = r#"{
            "id": 3,
            "name": "Marble Tile",
            "category": "Tiles",
            "size": "60x60 cm",
            "price": 12.5,
            "stock_qty": 80,
            "min_stock": 40
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.price, "12.5".parse().unwrap());
        assert_eq!(product.stock_qty, 80);
    }

    #[test]
    fn input_omits_blank_min_stock() {
        let input = ProductInput {
            name: "Marble Tile".to_string(),
            category: "Tiles".to_string(),
            size: "60x60 cm".to_string(),
            price: "12.5".parse().unwrap(),
            stock_qty: 80,
            min_stock: None,
        };
        let json = serde_json::to_string(&input).unwrap();
        assert!(!json.contains("min_stock"));

        let input = ProductInput {
            min_stock: Some(25),
            ..input
        };
        let json = serde_json::to_string(&input).unwrap();
        assert!(json.contains("\"min_stock\":25"));
    }
}
