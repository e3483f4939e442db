use chrono::NaiveDateTime;
use pushkind_common::pagination::Pagination;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Domain representation of a product listed in the storefront.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Product {
    /// Unique identifier of the product.
    pub id: i32,
    /// Human-readable name of the product.
    pub name: String,
    /// URL-safe unique handle used in product page paths.
    pub slug: String,
    /// Category the product is listed under.
    pub category: String,
    /// Brand or manufacturer name.
    pub brand: String,
    /// Longer description shown on the product page.
    pub description: String,
    /// Units available for sale.
    pub stock: i32,
    /// Image URLs, the first one is used as the thumbnail.
    pub images: Vec<String>,
    /// Unit price with two decimal places.
    pub price: Decimal,
    /// Average review rating.
    pub rating: Decimal,
    /// Number of reviews received.
    pub num_reviews: i32,
    /// Whether the product is promoted on the home page.
    pub is_featured: bool,
    /// Optional banner image used for featured products.
    pub banner: Option<String>,
    /// Timestamp for when the product record was created.
    pub created_at: NaiveDateTime,
}

impl Product {
    /// Path of the product detail page.
    pub fn page_path(&self) -> String {
        product_page_path(&self.slug)
    }

    /// First image of the product, used for thumbnails and cart lines.
    pub fn thumbnail(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

/// Build the detail page path for a product slug.
pub fn product_page_path(slug: &str) -> String {
    format!("/products/{slug}")
}

/// Payload required to insert a new product.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub slug: String,
    pub category: String,
    pub brand: String,
    pub description: String,
    pub stock: i32,
    pub images: Vec<String>,
    pub price: Decimal,
    pub rating: Decimal,
    pub num_reviews: i32,
    pub is_featured: bool,
    pub banner: Option<String>,
}

impl NewProduct {
    /// Build a new product payload with no stock, images, rating or banner.
    pub fn new(
        name: impl Into<String>,
        slug: impl Into<String>,
        category: impl Into<String>,
        brand: impl Into<String>,
        description: impl Into<String>,
        price: Decimal,
    ) -> Self {
        Self {
            name: name.into(),
            slug: slug.into(),
            category: category.into(),
            brand: brand.into(),
            description: description.into(),
            stock: 0,
            images: Vec::new(),
            price,
            rating: Decimal::ZERO,
            num_reviews: 0,
            is_featured: false,
            banner: None,
        }
    }

    /// Set the number of units available.
    pub fn with_stock(mut self, stock: i32) -> Self {
        self.stock = stock;
        self
    }

    /// Replace the product images.
    pub fn with_images(mut self, images: Vec<String>) -> Self {
        self.images = images;
        self
    }

    /// Set the review summary of the product.
    pub fn with_rating(mut self, rating: Decimal, num_reviews: i32) -> Self {
        self.rating = rating;
        self.num_reviews = num_reviews;
        self
    }

    /// Mark the product as featured with an optional banner image.
    pub fn featured(mut self, banner: Option<String>) -> Self {
        self.is_featured = true;
        self.banner = banner;
        self
    }
}

/// Query definition used to list storefront products, newest first.
#[derive(Debug, Clone, Default)]
pub struct ProductListQuery {
    /// Optional name or description search term.
    pub search: Option<String>,
    /// Optional exact category filter.
    pub category: Option<String>,
    /// Optional pagination options applied to the query.
    pub pagination: Option<Pagination>,
}

impl ProductListQuery {
    /// Construct a query that targets every product.
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter the results by a search term applied to the name or description.
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    /// Filter the results by an exact category match.
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Apply pagination to the query with the given page number and page size.
    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}
