use mockall::mock;

use super::{
    CartReader, CartWriter, ProductReader, ProductWriter, SeedWriter, UserReader, UserWriter,
};
use crate::domain::{
    cart::{Cart, CartOwner, NewCart, UpdateCart},
    product::{NewProduct, Product, ProductListQuery},
    seed::SeedSummary,
    user::{NewUser, User},
};
use pushkind_common::repository::errors::RepositoryResult;

mock! {
    pub ProductReader {}

    impl ProductReader for ProductReader {
        fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<Product>>;
        fn get_product_by_slug(&self, slug: &str) -> RepositoryResult<Option<Product>>;
        fn list_products(&self, query: ProductListQuery) -> RepositoryResult<(usize, Vec<Product>)>;
    }
}

mock! {
    pub ProductWriter {}

    impl ProductWriter for ProductWriter {
        fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<Option<Product>>;
    }
}

mock! {
    pub CartReader {}

    impl CartReader for CartReader {
        fn find_cart(&self, owner: &CartOwner) -> RepositoryResult<Option<Cart>>;
    }
}

mock! {
    pub CartWriter {}

    impl CartWriter for CartWriter {
        fn create_cart(&self, new_cart: &NewCart) -> RepositoryResult<Cart>;
        fn update_cart(&self, cart_id: i32, updates: &UpdateCart) -> RepositoryResult<Cart>;
    }
}

mock! {
    pub UserReader {}

    impl UserReader for UserReader {
        fn get_user_by_email(&self, email: &str) -> RepositoryResult<Option<User>>;
    }
}

mock! {
    pub UserWriter {}

    impl UserWriter for UserWriter {
        fn create_user(&self, new_user: &NewUser) -> RepositoryResult<Option<User>>;
    }
}

mock! {
    pub SeedWriter {}

    impl SeedWriter for SeedWriter {
        fn replace_catalog(
            &self,
            products: &[NewProduct],
            users: &[NewUser],
        ) -> RepositoryResult<SeedSummary>;
    }
}
