use actix_web::{HttpRequest, HttpResponse, Responder, get, web};
use actix_web_flash_messages::IncomingFlashMessages;
use pushkind_common::domain::auth::AuthenticatedUser;
use pushkind_common::routes::render_template;
use tera::{Context, Tera};

use crate::cache::PageCache;
use crate::models::config::StoreConfig;
use crate::repository::DieselRepository;
use crate::routes::{store_context, visitor};
use crate::services::{ServiceError, catalog};

#[get("/products")]
pub async fn show_products(
    params: web::Query<catalog::CatalogQuery>,
    user: Option<AuthenticatedUser>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    store: web::Data<StoreConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    match catalog::load_catalog_page(repo.get_ref(), params.into_inner()) {
        Ok(data) => {
            let mut context = store_context(&flash_messages, user.as_ref(), &store, "products");
            let has_active_filters = data.search.is_some() || data.category.is_some();
            context.insert("products", &data.products);
            context.insert("search", &data.search);
            context.insert("category", &data.category);
            context.insert("has_active_filters", &has_active_filters);
            render_template(&tera, "products/index.html", &context)
        }
        Err(err) => {
            log::error!("Failed to list products: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/products/{slug}")]
pub async fn show_product(
    req: HttpRequest,
    slug: web::Path<String>,
    user: Option<AuthenticatedUser>,
    repo: web::Data<DieselRepository>,
    pages: web::Data<PageCache>,
    flash_messages: IncomingFlashMessages,
    store: web::Data<StoreConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let visitor = visitor(&req, user.as_ref());

    let data = match catalog::load_product_page(repo.get_ref(), &visitor, &slug) {
        Ok(data) => data,
        Err(ServiceError::NotFound) => {
            let context = store_context(&flash_messages, user.as_ref(), &store, "products");
            let body = tera
                .render("errors/not_found.html", &context)
                .unwrap_or_else(|_| "Product not found".to_string());
            return HttpResponse::NotFound()
                .content_type("text/html; charset=utf-8")
                .body(body);
        }
        Err(err) => {
            log::error!("Failed to load product {slug}: {err}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    // The detail fragment holds nothing visitor-specific, so it is shared
    // until a cart action revalidates the product path.
    let detail = pages.get_or_render(&data.product.url,|| {
        let mut fragment = Context::new();
        fragment.insert("product", &data.product);
        tera.render("products/detail.html", &fragment)
    });

    let detail = match detail {
        Ok(detail) => detail,
        Err(err) => {
            log::error!("Failed to render product {slug}: {err}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    let mut context = store_context(&flash_messages, user.as_ref(), &store, "products");
    context.insert("product", &data.product);
    context.insert("in_cart", &data.in_cart);
    context.insert("detail", &detail);
    render_template(&tera, "products/show.html", &context)
}
