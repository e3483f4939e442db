use actix_web::{HttpResponse, Responder, get, web};
use actix_web_flash_messages::IncomingFlashMessages;
use pushkind_common::domain::auth::AuthenticatedUser;
use pushkind_common::routes::render_template;
use tera::Tera;

use crate::models::config::StoreConfig;
use crate::repository::DieselRepository;
use crate::routes::store_context;
use crate::services::catalog;

#[get("/")]
pub async fn show_index(
    user: Option<AuthenticatedUser>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    store: web::Data<StoreConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    match catalog::load_home_page(repo.get_ref(), store.latest_products_limit) {
        Ok(data) => {
            let mut context = store_context(&flash_messages, user.as_ref(), &store, "index");
            context.insert("title", data.title);
            context.insert("products", &data.products);
            render_template(&tera, "main/index.html", &context)
        }
        Err(err) => {
            log::error!("Failed to load the home page: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
