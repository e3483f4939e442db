use diesel::prelude::*;
use pushkind_common::repository::errors::{RepositoryError, RepositoryResult};

use crate::{
    domain::{
        product::NewProduct as DomainNewProduct, seed::SeedSummary,
        user::NewUser as DomainNewUser,
    },
    models::{product::NewProduct as DbNewProduct, user::NewUser as DbNewUser},
    repository::{DieselRepository, SeedWriter},
};

impl SeedWriter for DieselRepository {
    fn replace_catalog(
        &self,
        products: &[DomainNewProduct],
        users: &[DomainNewUser],
    ) -> RepositoryResult<SeedSummary> {
        use crate::schema::{accounts, products, sessions, users, verification_tokens};

        let mut conn = self.conn()?;

        let db_products = products
            .iter()
            .map(DbNewProduct::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        let db_users = users.iter().map(DbNewUser::from).collect::<Vec<_>>();

        conn.transaction::<SeedSummary, RepositoryError, _>(|conn| {
            let products_deleted = diesel::delete(products::table).execute(conn)?;
            diesel::delete(accounts::table).execute(conn)?;
            diesel::delete(sessions::table).execute(conn)?;
            diesel::delete(verification_tokens::table).execute(conn)?;
            let users_deleted = diesel::delete(users::table).execute(conn)?;

            let products_created = diesel::insert_into(products::table)
                .values(&db_products)
                .execute(conn)?;
            let users_created = diesel::insert_into(users::table)
                .values(&db_users)
                .execute(conn)?;

            Ok(SeedSummary {
                products_deleted,
                users_deleted,
                products_created,
                users_created,
            })
        })
    }
}
