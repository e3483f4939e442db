use pushkind_common::pagination::{DEFAULT_ITEMS_PER_PAGE, Paginated};
use serde::{Deserialize, Serialize};

use crate::domain::money::format_money;
use crate::domain::product::{Product, ProductListQuery};
use crate::forms::products::AddProductForm;
use crate::repository::{CartReader, ProductReader, ProductWriter};
use crate::services::actions::ActionError;
use crate::services::cart::Visitor;
use crate::services::{ServiceError, ServiceResult};

/// Number of products shown in the home page "Newest Arrivals" section.
pub const LATEST_PRODUCTS_LIMIT: usize = 4;

/// Title of the home page product list.
pub const LATEST_PRODUCTS_TITLE: &str = "Newest Arrivals";

/// Data required to render the home page.
pub struct HomePageData {
    pub title: &'static str,
    pub products: Vec<ProductCardView>,
}

/// Loads the newest products for the home page.
pub fn load_home_page<R>(repo: &R, limit: usize) -> ServiceResult<HomePageData>
where
    R: ProductReader + ?Sized,
{
    let query = ProductListQuery::new().paginate(1, limit);
    let (_, products) = repo.list_products(query).map_err(ServiceError::from)?;

    Ok(HomePageData {
        title: LATEST_PRODUCTS_TITLE,
        products: products.iter().map(ProductCardView::from).collect(),
    })
}

/// Query parameters accepted by the catalog page.
#[derive(Debug, Default, Deserialize)]
pub struct CatalogQuery {
    /// Optional search string entered by the visitor.
    pub search: Option<String>,
    /// Optional exact category filter.
    pub category: Option<String>,
    /// Page requested by the UI (1-based).
    pub page: Option<usize>,
}

/// Data required to render the catalog template.
pub struct CatalogPageData {
    pub products: Paginated<ProductCardView>,
    pub search: Option<String>,
    pub category: Option<String>,
}

/// Loads one page of the product catalog.
pub fn load_catalog_page<R>(repo: &R, query: CatalogQuery) -> ServiceResult<CatalogPageData>
where
    R: ProductReader + ?Sized,
{
    let CatalogQuery {
        search,
        category,
        page,
    } = query;

    let search = search.filter(|term| !term.trim().is_empty());
    let category = category.filter(|value| !value.trim().is_empty());

    let page = page.unwrap_or(1).max(1);
    let mut list_query = ProductListQuery::new().paginate(page, DEFAULT_ITEMS_PER_PAGE);

    if let Some(term) = search.as_ref() {
        list_query = list_query.search(term.trim());
    }

    if let Some(category) = category.as_ref() {
        list_query = list_query.category(category.trim());
    }

    let (total, items) = repo.list_products(list_query).map_err(ServiceError::from)?;

    let cards = items.iter().map(ProductCardView::from).collect();
    let total_pages = total.div_ceil(DEFAULT_ITEMS_PER_PAGE);

    Ok(CatalogPageData {
        products: Paginated::new(cards, page, total_pages),
        search,
        category,
    })
}

/// Data required to render a product detail page.
#[derive(Debug, Serialize)]
pub struct ProductPageData {
    pub product: ProductView,
    /// Units of this product already in the visitor's cart.
    pub in_cart: i32,
}

/// Loads a product by slug together with the visitor's cart quantity.
pub fn load_product_page<R>(
    repo: &R,
    visitor: &Visitor,
    slug: &str,
) -> ServiceResult<ProductPageData>
where
    R: ProductReader + CartReader + ?Sized,
{
    let product = repo
        .get_product_by_slug(slug)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)?;

    // Visitors without a cart cookie simply have nothing in their cart yet.
    let in_cart = match visitor.owner() {
        Ok(owner) => repo
            .find_cart(&owner)
            .map_err(ServiceError::from)?
            .map(|cart| cart.quantity_of(product.id))
            .unwrap_or(0),
        Err(_) => 0,
    };

    Ok(ProductPageData {
        product: ProductView::from(&product),
        in_cart,
    })
}

/// Validates and persists a new product, rejecting duplicate slugs.
///
/// A slug taken between the lookup and the insert is caught by the unique
/// index and reported the same way.
pub fn create_product<R>(repo: &R, form: AddProductForm) -> Result<Product, ActionError>
where
    R: ProductReader + ProductWriter + ?Sized,
{
    let payload = form.into_new_product()?;

    if repo.get_product_by_slug(&payload.slug)?.is_some() {
        return Err(ActionError::AlreadyExists { field: "slug" });
    }

    repo.create_product(&payload)?
        .ok_or(ActionError::AlreadyExists { field: "slug" })
}

/// Compact product representation used by product lists.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ProductCardView {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub brand: String,
    pub image: Option<String>,
    pub price: String,
    pub rating: String,
    pub in_stock: bool,
    pub url: String,
}

impl From<&Product> for ProductCardView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            slug: product.slug.clone(),
            brand: product.brand.clone(),
            image: product.thumbnail().map(str::to_string),
            price: format_money(product.price),
            rating: format_money(product.rating),
            in_stock: product.stock > 0,
            url: product.page_path(),
        }
    }
}

/// Full product representation used by the detail page.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ProductView {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub category: String,
    pub brand: String,
    pub description: String,
    pub stock: i32,
    pub images: Vec<String>,
    pub price: String,
    pub rating: String,
    pub num_reviews: i32,
    pub url: String,
}

impl From<&Product> for ProductView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            slug: product.slug.clone(),
            category: product.category.clone(),
            brand: product.brand.clone(),
            description: product.description.clone(),
            stock: product.stock,
            images: product.images.clone(),
            price: format_money(product.price),
            rating: format_money(product.rating),
            num_reviews: product.num_reviews,
            url: product.page_path(),
        }
    }
}
