pub mod cart;
pub mod money;
pub mod product;
pub mod seed;
pub mod user;
