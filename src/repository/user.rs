use diesel::prelude::*;
use pushkind_common::repository::errors::{RepositoryError, RepositoryResult};

use crate::{
    domain::user::{NewUser as DomainNewUser, User as DomainUser},
    models::user::{NewUser as DbNewUser, User as DbUser},
    repository::{DieselRepository, UserReader, UserWriter},
};

impl UserReader for DieselRepository {
    fn get_user_by_email(&self, email: &str) -> RepositoryResult<Option<DomainUser>> {
        use crate::schema::users;

        let mut conn = self.conn()?;
        let user = users::table
            .filter(users::email.eq(email.to_lowercase()))
            .first::<DbUser>(&mut conn)
            .optional()?;

        Ok(user.map(Into::into))
    }
}

impl UserWriter for DieselRepository {
    fn create_user(&self, new_user: &DomainNewUser) -> RepositoryResult<Option<DomainUser>> {
        use crate::schema::users;

        let mut conn = self.conn()?;
        let db_new = DbNewUser::from(new_user);

        conn.transaction::<Option<DomainUser>, RepositoryError, _>(|conn| {
            let inserted = diesel::insert_into(users::table)
                .values(&db_new)
                .on_conflict_do_nothing()
                .execute(conn)?;
            if inserted == 0 {
                return Ok(None);
            }

            let created = users::table
                .filter(users::email.eq(db_new.email))
                .first::<DbUser>(conn)?;

            Ok(Some(created.into()))
        })
    }
}
