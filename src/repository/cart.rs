use diesel::prelude::*;
use pushkind_common::repository::errors::{RepositoryError, RepositoryResult};

use crate::{
    domain::cart::{
        Cart as DomainCart, CartOwner, NewCart as DomainNewCart, UpdateCart as DomainUpdateCart,
    },
    models::cart::{Cart as DbCart, NewCart as DbNewCart, UpdateCart as DbUpdateCart},
    repository::{CartReader, CartWriter, DieselRepository},
};

impl CartReader for DieselRepository {
    fn find_cart(&self, owner: &CartOwner) -> RepositoryResult<Option<DomainCart>> {
        use crate::schema::carts;

        let mut conn = self.conn()?;

        let mut query = carts::table.into_boxed::<diesel::sqlite::Sqlite>();
        query = match owner {
            CartOwner::User(user_id) => query.filter(carts::user_id.eq(user_id.as_str())),
            CartOwner::Session(session_cart_id) => {
                query.filter(carts::session_cart_id.eq(session_cart_id.as_str()))
            }
        };

        let cart = query
            .order((carts::updated_at.desc(), carts::id.desc()))
            .first::<DbCart>(&mut conn)
            .optional()?;

        cart.map(DomainCart::try_from)
            .transpose()
            .map_err(RepositoryError::from)
    }
}

impl CartWriter for DieselRepository {
    fn create_cart(&self, new_cart: &DomainNewCart) -> RepositoryResult<DomainCart> {
        use crate::schema::carts;

        let mut conn = self.conn()?;
        let db_new = DbNewCart::try_from(new_cart)?;

        let created = diesel::insert_into(carts::table)
            .values(&db_new)
            .get_result::<DbCart>(&mut conn)?;

        Ok(DomainCart::try_from(created)?)
    }

    fn update_cart(
        &self,
        cart_id: i32,
        updates: &DomainUpdateCart,
    ) -> RepositoryResult<DomainCart> {
        use crate::schema::carts;

        let mut conn = self.conn()?;
        let db_updates = DbUpdateCart::try_from(updates)?;

        let updated = diesel::update(carts::table.find(cart_id))
            .set(&db_updates)
            .get_result::<DbCart>(&mut conn)
            .optional()?;

        match updated {
            Some(cart) => Ok(DomainCart::try_from(cart)?),
            None => Err(RepositoryError::NotFound),
        }
    }
}
