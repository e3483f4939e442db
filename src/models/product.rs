use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::money::format_money;
use crate::domain::product::{NewProduct as DomainNewProduct, Product as DomainProduct};
use crate::models::{ModelError, decode_amount, decode_json, encode_json};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::products)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub category: String,
    pub brand: String,
    pub description: String,
    pub stock: i32,
    pub images: String,
    pub price: String,
    pub rating: String,
    pub num_reviews: i32,
    pub is_featured: bool,
    pub banner: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::products)]
pub struct NewProduct<'a> {
    pub name: &'a str,
    pub slug: &'a str,
    pub category: &'a str,
    pub brand: &'a str,
    pub description: &'a str,
    pub stock: i32,
    pub images: String,
    pub price: String,
    pub rating: String,
    pub num_reviews: i32,
    pub is_featured: bool,
    pub banner: Option<&'a str>,
}

impl TryFrom<Product> for DomainProduct {
    type Error = ModelError;

    fn try_from(value: Product) -> Result<Self, Self::Error> {
        Ok(Self {
            images: decode_json("images", &value.images)?,
            price: decode_amount("price", &value.price)?,
            rating: decode_amount("rating", &value.rating)?,
            id: value.id,
            name: value.name,
            slug: value.slug,
            category: value.category,
            brand: value.brand,
            description: value.description,
            stock: value.stock,
            num_reviews: value.num_reviews,
            is_featured: value.is_featured,
            banner: value.banner,
            created_at: value.created_at,
        })
    }
}

impl<'a> TryFrom<&'a DomainNewProduct> for NewProduct<'a> {
    type Error = ModelError;

    fn try_from(value: &'a DomainNewProduct) -> Result<Self, Self::Error> {
        Ok(Self {
            name: value.name.as_str(),
            slug: value.slug.as_str(),
            category: value.category.as_str(),
            brand: value.brand.as_str(),
            description: value.description.as_str(),
            stock: value.stock,
            images: encode_json("images", &value.images)?,
            price: format_money(value.price),
            rating: format_money(value.rating),
            num_reviews: value.num_reviews,
            is_featured: value.is_featured,
            banner: value.banner.as_deref(),
        })
    }
}
