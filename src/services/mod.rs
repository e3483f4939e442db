pub use pushkind_common::services::errors::{ServiceError, ServiceResult};

pub mod actions;
pub mod cart;
pub mod catalog;
pub mod seed;
pub mod users;
