use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::cart::{
    Cart as DomainCart, CartPrices, NewCart as DomainNewCart, UpdateCart as DomainUpdateCart,
};
use crate::domain::money::format_money;
use crate::models::{ModelError, decode_amount, decode_json, encode_json};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::carts)]
pub struct Cart {
    pub id: i32,
    pub user_id: Option<String>,
    pub session_cart_id: String,
    pub items: String,
    pub items_price: String,
    pub total_price: String,
    pub shipping_price: String,
    pub tax_price: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::carts)]
pub struct NewCart<'a> {
    pub user_id: Option<&'a str>,
    pub session_cart_id: &'a str,
    pub items: String,
    pub items_price: String,
    pub total_price: String,
    pub shipping_price: String,
    pub tax_price: String,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::carts)]
pub struct UpdateCart {
    pub items: String,
    pub items_price: String,
    pub total_price: String,
    pub shipping_price: String,
    pub tax_price: String,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<Cart> for DomainCart {
    type Error = ModelError;

    fn try_from(value: Cart) -> Result<Self, Self::Error> {
        let prices = CartPrices {
            items_price: decode_amount("items_price", &value.items_price)?,
            shipping_price: decode_amount("shipping_price", &value.shipping_price)?,
            tax_price: decode_amount("tax_price", &value.tax_price)?,
            total_price: decode_amount("total_price", &value.total_price)?,
        };

        Ok(Self {
            id: value.id,
            user_id: value.user_id,
            session_cart_id: value.session_cart_id,
            items: decode_json("items", &value.items)?,
            prices,
            created_at: value.created_at,
            updated_at: value.updated_at,
        })
    }
}

impl<'a> TryFrom<&'a DomainNewCart> for NewCart<'a> {
    type Error = ModelError;

    fn try_from(value: &'a DomainNewCart) -> Result<Self, Self::Error> {
        Ok(Self {
            user_id: value.user_id.as_deref(),
            session_cart_id: value.session_cart_id.as_str(),
            items: encode_json("items", &value.items)?,
            items_price: format_money(value.prices.items_price),
            total_price: format_money(value.prices.total_price),
            shipping_price: format_money(value.prices.shipping_price),
            tax_price: format_money(value.prices.tax_price),
        })
    }
}

impl TryFrom<&DomainUpdateCart> for UpdateCart {
    type Error = ModelError;

    fn try_from(value: &DomainUpdateCart) -> Result<Self, Self::Error> {
        Ok(Self {
            items: encode_json("items", &value.items)?,
            items_price: format_money(value.prices.items_price),
            total_price: format_money(value.prices.total_price),
            shipping_price: format_money(value.prices.shipping_price),
            tax_price: format_money(value.prices.tax_price),
            updated_at: value.updated_at,
        })
    }
}
