pub mod products;
pub mod sales;
