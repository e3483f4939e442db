use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::cart::CartItem;
use crate::domain::money::parse_money;
use crate::forms::{FormError, FormResult, validate_money};

/// Line submitted by the "Add to cart" button.
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct CartItemForm {
    #[validate(range(min = 1, message = "Product is required"))]
    pub product_id: i32,
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Slug is required"))]
    pub slug: String,
    #[validate(range(min = 0, message = "Quantity must be a positive number"))]
    pub qty: i32,
    #[validate(length(min = 1, message = "Image is required"))]
    pub image: String,
    #[validate(custom(function = "validate_money"))]
    pub price: String,
}

impl CartItemForm {
    /// Validates the payload into a domain `CartItem`.
    pub fn into_cart_item(self) -> FormResult<CartItem> {
        self.validate()?;

        let price = parse_money(&self.price).map_err(|_| FormError::InvalidAmount)?;

        Ok(CartItem {
            product_id: self.product_id,
            name: self.name.trim().to_string(),
            slug: self.slug.trim().to_string(),
            qty: self.qty,
            image: self.image.trim().to_string(),
            price,
        })
    }
}

/// Payload of the "Remove from cart" button.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoveCartItemForm {
    pub product_id: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> CartItemForm {
        CartItemForm {
            product_id: 3,
            name: " Polo Shirt ".to_string(),
            slug: "polo-shirt".to_string(),
            qty: 1,
            image: "/images/p1.jpg".to_string(),
            price: "59.9".to_string(),
        }
    }

    #[test]
    fn converts_valid_form() {
        let item = form().into_cart_item().expect("expected conversion to succeed");

        assert_eq!(item.product_id, 3);
        assert_eq!(item.name, "Polo Shirt");
        assert_eq!(item.qty, 1);
        assert_eq!(item.price, "59.90".parse().unwrap());
    }

    #[test]
    fn rejects_negative_quantity() {
        let mut form = form();
        form.qty = -1;

        let err = form.into_cart_item().expect_err("expected validation to fail");

        assert_eq!(err.to_string(), "Quantity must be a positive number");
    }

    #[test]
    fn joins_every_field_message() {
        let mut form = form();
        form.image = String::new();
        form.price = "abc".to_string();
        form.product_id = 0;

        let err = form.into_cart_item().expect_err("expected validation to fail");

        assert_eq!(
            err.to_string(),
            "Image is required. Must be a valid number with up to 2 decimal places. Product is required"
        );
    }
}
