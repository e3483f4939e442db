use pushkind_common::routes::empty_string_as_none;
use serde::Deserialize;
use validator::Validate;

use crate::domain::money::parse_money;
use crate::domain::product::NewProduct;
use crate::forms::{FormError, FormResult, validate_money};

/// Form payload describing a product to insert.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AddProductForm {
    #[validate(length(min = 3, max = 255, message = "Name must be between 3 and 255 characters"))]
    pub name: String,
    #[validate(length(min = 3, max = 255, message = "Slug must be between 3 and 255 characters"))]
    pub slug: String,
    #[validate(length(
        min = 3,
        max = 255,
        message = "Category must be between 3 and 255 characters"
    ))]
    pub category: String,
    #[validate(length(min = 3, max = 255, message = "Brand must be between 3 and 255 characters"))]
    pub brand: String,
    #[validate(length(
        min = 3,
        max = 255,
        message = "Description must be between 3 and 255 characters"
    ))]
    pub description: String,
    #[validate(range(min = 0, message = "Stock cannot be negative"))]
    pub stock: i32,
    #[validate(length(min = 1, message = "At least one image is required"))]
    pub images: Vec<String>,
    #[validate(custom(function = "validate_money"))]
    pub price: String,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub banner: Option<String>,
}

impl AddProductForm {
    /// Validates and normalizes the payload into a domain `NewProduct`.
    pub fn into_new_product(self) -> FormResult<NewProduct> {
        self.validate()?;

        let price = parse_money(&self.price).map_err(|_| FormError::InvalidAmount)?;
        let images = self
            .images
            .into_iter()
            .map(|image| image.trim().to_string())
            .filter(|image| !image.is_empty())
            .collect();

        let mut product = NewProduct::new(
            self.name.trim(),
            self.slug.trim().to_lowercase(),
            self.category.trim(),
            self.brand.trim(),
            self.description.trim(),
            price,
        )
        .with_stock(self.stock)
        .with_images(images);

        if self.is_featured {
            product = product.featured(self.banner);
        }

        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> AddProductForm {
        AddProductForm {
            name: "Polo Sporting Stretch Shirt".to_string(),
            slug: " Polo-Sporting-Stretch-Shirt ".to_string(),
            category: "Men's Dress Shirts".to_string(),
            brand: "Polo".to_string(),
            description: "Classic Polo style with modern comfort".to_string(),
            stock: 5,
            images: vec!["/images/p1-1.jpg".to_string(), " ".to_string()],
            price: "59.99".to_string(),
            is_featured: true,
            banner: Some("banner-1.jpg".to_string()),
        }
    }

    #[test]
    fn converts_valid_form() {
        let product = form().into_new_product().expect("expected conversion to succeed");

        assert_eq!(product.slug, "polo-sporting-stretch-shirt");
        assert_eq!(product.images, vec!["/images/p1-1.jpg".to_string()]);
        assert_eq!(product.price, "59.99".parse().unwrap());
        assert!(product.is_featured);
        assert_eq!(product.banner.as_deref(), Some("banner-1.jpg"));
    }

    #[test]
    fn banner_is_dropped_for_regular_products() {
        let mut form = form();
        form.is_featured = false;

        let product = form.into_new_product().expect("expected conversion to succeed");

        assert!(!product.is_featured);
        assert!(product.banner.is_none());
    }

    #[test]
    fn rejects_short_fields_and_missing_images() {
        let mut form = form();
        form.brand = "P".to_string();
        form.images.clear();

        let err = form.into_new_product().expect_err("expected validation to fail");

        assert_eq!(
            err.to_string(),
            "Brand must be between 3 and 255 characters. At least one image is required"
        );
    }
}
