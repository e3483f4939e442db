use pushkind_common::db::{DbConnection, DbPool};
use pushkind_common::repository::errors::RepositoryResult;

use crate::domain::cart::{Cart, CartOwner, NewCart, UpdateCart};
use crate::domain::product::{NewProduct, Product, ProductListQuery};
use crate::domain::seed::SeedSummary;
use crate::domain::user::{NewUser, User};

pub mod cart;
pub mod product;
pub mod seed;
pub mod user;

#[cfg(test)]
pub mod mock;

#[derive(Clone)]
/// Diesel-backed repository implementation that wraps an r2d2 pool.
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository using the provided connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Read-only operations over product records.
pub trait ProductReader {
    fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<Product>>;
    fn get_product_by_slug(&self, slug: &str) -> RepositoryResult<Option<Product>>;
    /// Products matching `query`, newest first, with the unpaginated total.
    fn list_products(&self, query: ProductListQuery) -> RepositoryResult<(usize, Vec<Product>)>;
}

/// Write operations over product records.
pub trait ProductWriter {
    /// Insert a product; `None` when its slug is already taken.
    fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<Option<Product>>;
}

/// Read-only operations over cart records.
pub trait CartReader {
    /// Most recently updated cart belonging to `owner`.
    fn find_cart(&self, owner: &CartOwner) -> RepositoryResult<Option<Cart>>;
}

/// Write operations over cart records.
pub trait CartWriter {
    fn create_cart(&self, new_cart: &NewCart) -> RepositoryResult<Cart>;
    /// Replace the items and prices of an existing cart.
    fn update_cart(&self, cart_id: i32, updates: &UpdateCart) -> RepositoryResult<Cart>;
}

/// Read-only operations over user records.
pub trait UserReader {
    fn get_user_by_email(&self, email: &str) -> RepositoryResult<Option<User>>;
}

/// Write operations over user records.
pub trait UserWriter {
    /// Insert a user; `None` when the email is already registered.
    fn create_user(&self, new_user: &NewUser) -> RepositoryResult<Option<User>>;
}

/// Bulk replacement of the catalog and user tables.
pub trait SeedWriter {
    /// Delete every product and user (with their accounts, sessions and
    /// verification tokens), then insert `products` and `users`. Runs in a
    /// single transaction, so a failing insert keeps the previous rows.
    fn replace_catalog(
        &self,
        products: &[NewProduct],
        users: &[NewUser],
    ) -> RepositoryResult<SeedSummary>;
}
