use actix_web::{HttpRequest, HttpResponse, Responder, delete, get, post, web};
use pushkind_common::domain::auth::AuthenticatedUser;

use crate::cache::PageCache;
use crate::forms::cart::CartItemForm;
use crate::repository::DieselRepository;
use crate::routes::visitor;
use crate::services::actions::{ActionError, ActionResult};
use crate::services::cart;

#[get("/v1/cart")]
/// Return the visitor's cart as JSON, `null` when there is none yet.
pub async fn api_v1_cart(
    req: HttpRequest,
    user: Option<AuthenticatedUser>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let visitor = visitor(&req, user.as_ref());

    match cart::load_cart_view(repo.get_ref(), &visitor) {
        Ok(cart) => HttpResponse::Ok().json(cart),
        Err(err @ ActionError::MissingSession) => {
            HttpResponse::BadRequest().json(ActionResult::failure(err.to_string()))
        }
        Err(err) => {
            log::error!("Failed to load cart: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/v1/cart/items")]
/// Add an item to the visitor's cart.
///
/// Always answers `200 OK` with an [`ActionResult`]; failures are reported in
/// its `success` flag and message.
pub async fn api_v1_add_cart_item(
    req: HttpRequest,
    user: Option<AuthenticatedUser>,
    repo: web::Data<DieselRepository>,
    pages: web::Data<PageCache>,
    web::Json(form): web::Json<CartItemForm>,
) -> impl Responder {
    let visitor = visitor(&req, user.as_ref());

    HttpResponse::Ok().json(cart::add_item_to_cart(
        repo.get_ref(),
        pages.get_ref(),
        &visitor,
        form,
    ))
}

#[delete("/v1/cart/items/{product_id}")]
/// Take one unit of a product out of the visitor's cart.
pub async fn api_v1_remove_cart_item(
    req: HttpRequest,
    product_id: web::Path<i32>,
    user: Option<AuthenticatedUser>,
    repo: web::Data<DieselRepository>,
    pages: web::Data<PageCache>,
) -> impl Responder {
    let visitor = visitor(&req, user.as_ref());

    HttpResponse::Ok().json(cart::remove_item_from_cart(
        repo.get_ref(),
        pages.get_ref(),
        &visitor,
        product_id.into_inner(),
    ))
}
