pub mod cache;
pub mod domain;
pub mod forms;
pub mod middleware;
pub mod models;
pub mod repository;
pub mod routes;
pub mod sample_data;
pub mod schema;
pub mod services;

/// Name of the cookie holding the anonymous session cart id.
pub const SESSION_CART_COOKIE: &str = "sessionCartId";
