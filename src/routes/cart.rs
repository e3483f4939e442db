use actix_web::{HttpRequest, HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use pushkind_common::domain::auth::AuthenticatedUser;
use pushkind_common::routes::{redirect, render_template};
use serde::Deserialize;
use tera::Tera;

use crate::cache::PageCache;
use crate::domain::product::product_page_path;
use crate::forms::cart::{CartItemForm, RemoveCartItemForm};
use crate::models::config::StoreConfig;
use crate::repository::DieselRepository;
use crate::routes::{store_context, visitor};
use crate::services::actions::ActionResult;
use crate::services::cart;

#[get("/cart")]
pub async fn show_cart(
    req: HttpRequest,
    user: Option<AuthenticatedUser>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    store: web::Data<StoreConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let visitor = visitor(&req, user.as_ref());

    match cart::load_cart_view(repo.get_ref(), &visitor) {
        Ok(cart) => {
            let mut context = store_context(&flash_messages, user.as_ref(), &store, "cart");
            context.insert("cart", &cart);
            render_template(&tera, "cart/index.html", &context)
        }
        Err(err) => {
            log::error!("Failed to load cart: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// Optional `?next=` target of the cart forms.
#[derive(Debug, Default, Deserialize)]
pub struct ReturnTo {
    pub next: Option<String>,
}

impl ReturnTo {
    /// The requested target when it is a path on this site.
    fn local_next(self) -> Option<String> {
        self.next
            .filter(|next| next.starts_with('/') && !next.starts_with("//"))
    }
}

#[post("/cart/add")]
pub async fn add_to_cart(
    req: HttpRequest,
    params: web::Query<ReturnTo>,
    user: Option<AuthenticatedUser>,
    repo: web::Data<DieselRepository>,
    pages: web::Data<PageCache>,
    web::Form(form): web::Form<CartItemForm>,
) -> impl Responder {
    let visitor = visitor(&req, user.as_ref());
    let back_to = params
        .into_inner()
        .local_next()
        .unwrap_or_else(|| product_page_path(form.slug.trim()));

    let result = cart::add_item_to_cart(repo.get_ref(), pages.get_ref(), &visitor, form);
    send_flash(&result);

    redirect(&back_to)
}

#[post("/cart/remove")]
pub async fn remove_from_cart(
    req: HttpRequest,
    params: web::Query<ReturnTo>,
    user: Option<AuthenticatedUser>,
    repo: web::Data<DieselRepository>,
    pages: web::Data<PageCache>,
    web::Form(form): web::Form<RemoveCartItemForm>,
) -> impl Responder {
    let visitor = visitor(&req, user.as_ref());

    let result =
        cart::remove_item_from_cart(repo.get_ref(), pages.get_ref(), &visitor, form.product_id);
    send_flash(&result);

    redirect(&params.into_inner().local_next().unwrap_or_else(|| "/cart".to_string()))
}

fn send_flash(result: &ActionResult) {
    if result.success {
        FlashMessage::success(result.message.clone()).send();
    } else {
        FlashMessage::error(result.message.clone()).send();
    }
}
