use diesel::prelude::*;
use pushkind_common::repository::errors::{RepositoryError, RepositoryResult};

use crate::{
    domain::product::{NewProduct as DomainNewProduct, Product as DomainProduct, ProductListQuery},
    models::product::{NewProduct as DbNewProduct, Product as DbProduct},
    repository::{DieselRepository, ProductReader, ProductWriter},
};

impl ProductReader for DieselRepository {
    fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<DomainProduct>> {
        use crate::schema::products;

        let mut conn = self.conn()?;
        let product = products::table
            .find(id)
            .first::<DbProduct>(&mut conn)
            .optional()?;

        product
            .map(DomainProduct::try_from)
            .transpose()
            .map_err(RepositoryError::from)
    }

    fn get_product_by_slug(&self, slug: &str) -> RepositoryResult<Option<DomainProduct>> {
        use crate::schema::products;

        let mut conn = self.conn()?;
        let product = products::table
            .filter(products::slug.eq(slug))
            .first::<DbProduct>(&mut conn)
            .optional()?;

        product
            .map(DomainProduct::try_from)
            .transpose()
            .map_err(RepositoryError::from)
    }

    fn list_products(
        &self,
        query: ProductListQuery,
    ) -> RepositoryResult<(usize, Vec<DomainProduct>)> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let search_pattern = query.search.as_ref().map(|term| format!("%{term}%"));

        let query_builder = || {
            let mut items = products::table.into_boxed::<diesel::sqlite::Sqlite>();

            if let Some(pattern) = &search_pattern {
                items = items.filter(
                    products::name
                        .like(pattern.clone())
                        .or(products::description.like(pattern.clone())),
                );
            }

            if let Some(category) = &query.category {
                items = items.filter(products::category.eq(category.clone()));
            }
            items
        };

        let total = query_builder().count().get_result::<i64>(&mut conn)? as usize;

        let mut items = query_builder().order((products::created_at.desc(), products::id.desc()));

        if let Some(pagination) = &query.pagination {
            let offset = ((pagination.page.max(1) - 1) * pagination.per_page) as i64;
            let limit = pagination.per_page as i64;
            items = items.offset(offset).limit(limit);
        }

        let db_products = items.load::<DbProduct>(&mut conn)?;

        let products = db_products
            .into_iter()
            .map(DomainProduct::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((total, products))
    }
}

impl ProductWriter for DieselRepository {
    fn create_product(
        &self,
        new_product: &DomainNewProduct,
    ) -> RepositoryResult<Option<DomainProduct>> {
        use crate::schema::products;

        let mut conn = self.conn()?;
        let db_new = DbNewProduct::try_from(new_product)?;

        conn.transaction::<Option<DomainProduct>, RepositoryError, _>(|conn| {
            let inserted = diesel::insert_into(products::table)
                .values(&db_new)
                .on_conflict_do_nothing()
                .execute(conn)?;
            if inserted == 0 {
                return Ok(None);
            }

            let created = products::table
                .filter(products::slug.eq(db_new.slug))
                .first::<DbProduct>(conn)?;

            Ok(Some(DomainProduct::try_from(created)?))
        })
    }
}
