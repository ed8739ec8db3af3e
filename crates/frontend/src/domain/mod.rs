pub mod low_stock;
pub mod products;
pub mod sales;
