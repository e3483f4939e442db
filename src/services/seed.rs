use std::collections::HashSet;

use crate::forms::products::AddProductForm;
use crate::forms::users::AddUserForm;
use crate::repository::SeedWriter;
use crate::sample_data::SampleData;
use crate::services::actions::ActionError;

pub use crate::domain::seed::SeedSummary;

/// Replaces the catalog and user tables with `data`.
///
/// Every sample row is validated, and every password hashed, before the
/// database is touched. The wipe and the inserts then run as one transaction:
/// a failure leaves the previous products and users in place.
pub fn seed_database<R>(repo: &R, data: SampleData) -> Result<SeedSummary, ActionError>
where
    R: SeedWriter + ?Sized,
{
    let products = data
        .products
        .into_iter()
        .map(AddProductForm::into_new_product)
        .collect::<Result<Vec<_>, _>>()?;
    let users = data
        .users
        .into_iter()
        .map(AddUserForm::into_new_user)
        .collect::<Result<Vec<_>, _>>()?;

    ensure_distinct(products.iter().map(|product| product.slug.as_str()), "slug")?;
    ensure_distinct(users.iter().map(|user| user.email.as_str()), "email")?;

    let summary = repo.replace_catalog(&products, &users)?;

    log::info!(
        "Removed {} products and {} users",
        summary.products_deleted,
        summary.users_deleted
    );
    log::info!(
        "Database has been seeded with {} products and {} users",
        summary.products_created,
        summary.users_created
    );

    Ok(summary)
}

fn ensure_distinct<'a>(
    values: impl IntoIterator<Item = &'a str>,
    field: &'static str,
) -> Result<(), ActionError> {
    let mut seen = HashSet::new();
    for value in values {
        if !seen.insert(value) {
            log::debug!("Duplicate {field} in sample data: {value}");
            return Err(ActionError::AlreadyExists { field });
        }
    }
    Ok(())
}
