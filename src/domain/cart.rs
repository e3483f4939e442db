use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::money::{format_money, round_money};

/// Orders at or below this amount pay the flat shipping fee.
pub const FREE_SHIPPING_THRESHOLD: Decimal = Decimal::ONE_HUNDRED;

/// Flat shipping fee charged below the free shipping threshold.
pub const FLAT_SHIPPING_PRICE: Decimal = Decimal::TEN;

/// Tax rate applied to the items subtotal (15%).
pub const TAX_RATE: Decimal = Decimal::from_parts(15, 0, 0, false, 2);

/// A single line of a cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    /// Identifier of the product this line refers to.
    pub product_id: i32,
    /// Product name captured when the line was added.
    pub name: String,
    /// Product slug captured when the line was added.
    pub slug: String,
    /// Number of units in the cart.
    pub qty: i32,
    /// Product image captured when the line was added.
    pub image: String,
    /// Unit price captured when the line was added.
    pub price: Decimal,
}

impl CartItem {
    /// Price of the whole line, unit price times quantity; `None` on overflow.
    pub fn line_total(&self) -> Option<Decimal> {
        self.price.checked_mul(Decimal::from(self.qty))
    }
}

/// Cart amounts exceeded the range of the decimal type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Cart total is out of range")]
pub struct PriceOverflow;

/// Derived prices of a cart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartPrices {
    pub items_price: Decimal,
    pub shipping_price: Decimal,
    pub tax_price: Decimal,
    pub total_price: Decimal,
}

impl CartPrices {
    /// Compute the prices for `items`.
    ///
    /// Every component is rounded half-up to two decimals before it is used in
    /// the next step, so `total == items + shipping + tax` holds exactly.
    pub fn calculate(items: &[CartItem]) -> Result<Self, PriceOverflow> {
        let items_price = items
            .iter()
            .try_fold(Decimal::ZERO, |sum, item| {
                item.line_total().and_then(|line| sum.checked_add(line))
            })
            .map(round_money)
            .ok_or(PriceOverflow)?;
        let shipping_price = if items_price > FREE_SHIPPING_THRESHOLD {
            Decimal::ZERO
        } else {
            FLAT_SHIPPING_PRICE
        };
        let shipping_price = round_money(shipping_price);
        let tax_price = items_price
            .checked_mul(TAX_RATE)
            .map(round_money)
            .ok_or(PriceOverflow)?;
        let total_price = items_price
            .checked_add(shipping_price)
            .and_then(|sum| sum.checked_add(tax_price))
            .map(round_money)
            .ok_or(PriceOverflow)?;

        Ok(Self {
            items_price,
            shipping_price,
            tax_price,
            total_price,
        })
    }

    /// String-formatted view of the prices, two decimals each.
    pub fn formatted(&self) -> FormattedCartPrices {
        FormattedCartPrices {
            items_price: format_money(self.items_price),
            shipping_price: format_money(self.shipping_price),
            tax_price: format_money(self.tax_price),
            total_price: format_money(self.total_price),
        }
    }
}

/// Cart prices rendered as two-decimal strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormattedCartPrices {
    pub items_price: String,
    pub shipping_price: String,
    pub tax_price: String,
    pub total_price: String,
}

/// Identity a cart is looked up by.
///
/// An authenticated user always takes precedence over the anonymous session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartOwner {
    User(String),
    Session(String),
}

impl CartOwner {
    /// Resolve the owner from an optional user id and the session cart id.
    pub fn resolve(user_id: Option<&str>, session_cart_id: &str) -> Self {
        match user_id {
            Some(user_id) => Self::User(user_id.to_string()),
            None => Self::Session(session_cart_id.to_string()),
        }
    }
}

/// Domain representation of a persisted cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    /// Unique identifier of the cart.
    pub id: i32,
    /// Subject of the authenticated user owning the cart, if any.
    pub user_id: Option<String>,
    /// Anonymous session identifier the cart was created for.
    pub session_cart_id: String,
    /// Ordered cart lines.
    pub items: Vec<CartItem>,
    /// Derived prices stored alongside the items.
    pub prices: CartPrices,
    /// Timestamp for when the cart was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the cart.
    pub updated_at: NaiveDateTime,
}

impl Cart {
    /// Line for `product_id`, if present.
    pub fn item(&self, product_id: i32) -> Option<&CartItem> {
        self.items.iter().find(|item| item.product_id == product_id)
    }

    /// Quantity of `product_id` in the cart, zero when absent.
    pub fn quantity_of(&self, product_id: i32) -> i32 {
        self.item(product_id).map(|item| item.qty).unwrap_or(0)
    }

    /// Total number of units across all lines.
    pub fn total_quantity(&self) -> i32 {
        self.items
            .iter()
            .fold(0i32, |total, item| total.saturating_add(item.qty))
    }
}

/// Payload required to insert a new cart.
#[derive(Debug, Clone)]
pub struct NewCart {
    pub user_id: Option<String>,
    pub session_cart_id: String,
    pub items: Vec<CartItem>,
    pub prices: CartPrices,
}

impl NewCart {
    /// Build a cart payload with prices computed from `items`.
    pub fn new(
        session_cart_id: impl Into<String>,
        items: Vec<CartItem>,
    ) -> Result<Self, PriceOverflow> {
        let prices = CartPrices::calculate(&items)?;
        Ok(Self {
            user_id: None,
            session_cart_id: session_cart_id.into(),
            items,
            prices,
        })
    }

    /// Attach the authenticated user owning the cart.
    pub fn with_user_id(mut self, user_id: Option<String>) -> Self {
        self.user_id = user_id;
        self
    }
}

/// Replacement item list for an existing cart with recomputed prices.
#[derive(Debug, Clone)]
pub struct UpdateCart {
    pub items: Vec<CartItem>,
    pub prices: CartPrices,
    /// Timestamp captured when the patch was created.
    pub updated_at: NaiveDateTime,
}

impl UpdateCart {
    /// Build a patch replacing the cart items and recomputing prices.
    pub fn new(items: Vec<CartItem>) -> Result<Self, PriceOverflow> {
        let prices = CartPrices::calculate(&items)?;
        let now = chrono::Local::now().naive_utc();
        Ok(Self {
            items,
            prices,
            updated_at: now,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(product_id: i32, price: &str, qty: i32) -> CartItem {
        CartItem {
            product_id,
            name: format!("Product {product_id}"),
            slug: format!("product-{product_id}"),
            qty,
            image: "/images/p.jpg".to_string(),
            price: price.parse().unwrap(),
        }
    }

    #[test]
    fn prices_below_free_shipping_threshold() {
        let prices = CartPrices::calculate(&[item(1, "25.00", 2)]).unwrap();
        let formatted = prices.formatted();

        assert_eq!(formatted.items_price, "50.00");
        assert_eq!(formatted.shipping_price, "10.00");
        assert_eq!(formatted.tax_price, "7.50");
        assert_eq!(formatted.total_price, "67.50");
    }

    #[test]
    fn prices_above_free_shipping_threshold() {
        let prices = CartPrices::calculate(&[item(1, "100.00", 1), item(2, "10.00", 2)]).unwrap();
        let formatted = prices.formatted();

        assert_eq!(formatted.items_price, "120.00");
        assert_eq!(formatted.shipping_price, "0.00");
        assert_eq!(formatted.tax_price, "18.00");
        assert_eq!(formatted.total_price, "138.00");
    }

    #[test]
    fn exactly_one_hundred_still_pays_shipping() {
        let prices = CartPrices::calculate(&[item(1, "100.00", 1)]).unwrap();

        assert_eq!(prices.shipping_price, Decimal::TEN);
    }

    #[test]
    fn empty_cart_pays_only_shipping() {
        let formatted = CartPrices::calculate(&[]).unwrap().formatted();

        assert_eq!(formatted.items_price, "0.00");
        assert_eq!(formatted.tax_price, "0.00");
        assert_eq!(formatted.total_price, "10.00");
    }

    #[test]
    fn tax_rounds_half_up() {
        // 0.15 * 33.33 = 4.9995
        let prices = CartPrices::calculate(&[item(1, "33.33", 1)]).unwrap();

        assert_eq!(prices.tax_price, "5.00".parse::<Decimal>().unwrap());
        assert_eq!(prices.total_price, "48.33".parse::<Decimal>().unwrap());
    }

    #[test]
    fn total_is_sum_of_components_for_assorted_carts() {
        let carts = vec![
            vec![item(1, "59.99", 1)],
            vec![item(1, "59.99", 3), item(2, "0.01", 7)],
            vec![item(1, "99.95", 1), item(2, "0.05", 1), item(3, "0.01", 1)],
            vec![item(1, "12.34", 0)],
        ];

        for items in carts {
            let prices = CartPrices::calculate(&items).unwrap();
            assert_eq!(
                prices.total_price,
                round_money(prices.items_price + prices.shipping_price + prices.tax_price)
            );
            let expected_shipping = if prices.items_price > FREE_SHIPPING_THRESHOLD {
                Decimal::ZERO
            } else {
                FLAT_SHIPPING_PRICE
            };
            assert_eq!(prices.shipping_price, expected_shipping);
        }
    }

    #[test]
    fn overflowing_amounts_are_rejected() {
        let huge = CartItem {
            price: Decimal::MAX,
            ..item(1, "1.00", 3)
        };

        assert_eq!(CartPrices::calculate(&[huge.clone()]), Err(PriceOverflow));
        assert!(huge.line_total().is_none());

        let mut max_line = huge.clone();
        max_line.qty = 1;
        assert_eq!(
            CartPrices::calculate(&[max_line.clone(), max_line]),
            Err(PriceOverflow)
        );
        assert!(UpdateCart::new(vec![huge]).is_err());
    }

    #[test]
    fn owner_prefers_user() {
        assert_eq!(
            CartOwner::resolve(Some("user-1"), "session-1"),
            CartOwner::User("user-1".to_string())
        );
        assert_eq!(
            CartOwner::resolve(None, "session-1"),
            CartOwner::Session("session-1".to_string())
        );
    }

    #[test]
    fn quantity_of_missing_item_is_zero() {
        let cart = Cart {
            id: 1,
            user_id: None,
            session_cart_id: "s".to_string(),
            items: vec![item(1, "1.00", 3)],
            prices: CartPrices::calculate(&[]).unwrap(),
            created_at: NaiveDateTime::default(),
            updated_at: NaiveDateTime::default(),
        };

        assert_eq!(cart.quantity_of(1), 3);
        assert_eq!(cart.quantity_of(2), 0);
        assert_eq!(cart.total_quantity(), 3);
    }
}
