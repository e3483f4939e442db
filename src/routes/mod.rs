use actix_web::{HttpMessage, HttpRequest};
use actix_web_flash_messages::{IncomingFlashMessages, Level};
use chrono::Datelike;
use pushkind_common::domain::auth::AuthenticatedUser;
use serde::Serialize;
use tera::Context;

use crate::SESSION_CART_COOKIE;
use crate::middleware::IssuedSessionCartId;
use crate::models::config::StoreConfig;
use crate::services::cart::Visitor;

pub mod api;
pub mod cart;
pub mod main;
pub mod products;

#[derive(Serialize)]
struct AlertView<'a> {
    level: &'static str,
    message: &'a str,
}

fn level_class(level: Level) -> &'static str {
    match level {
        Level::Error => "danger",
        Level::Warning => "warning",
        Level::Success => "success",
        _ => "info",
    }
}

/// Template context shared by every storefront page: header, footer and
/// flash alerts.
pub fn store_context(
    flash_messages: &IncomingFlashMessages,
    user: Option<&AuthenticatedUser>,
    store: &StoreConfig,
    current_page: &str,
) -> Context {
    let alerts: Vec<AlertView> = flash_messages
        .iter()
        .map(|message| AlertView {
            level: level_class(message.level()),
            message: message.content(),
        })
        .collect();

    let mut context = Context::new();
    context.insert("alerts", &alerts);
    context.insert("current_user", &user);
    context.insert("current_page", current_page);
    context.insert("app_name", &store.app_name);
    context.insert("sign_in_url", &store.sign_in_url);
    context.insert("current_year", &chrono::Local::now().year());
    context
}

/// Visitor identity of `req`: the session cart cookie, or the id issued by
/// the middleware on this request, plus the authenticated subject.
pub fn visitor(req: &HttpRequest, user: Option<&AuthenticatedUser>) -> Visitor {
    let session_cart_id = req
        .cookie(SESSION_CART_COOKIE)
        .map(|cookie| cookie.value().to_string())
        .filter(|value| !value.trim().is_empty())
        .or_else(|| {
            req.extensions()
                .get::<IssuedSessionCartId>()
                .map(|issued| issued.0.clone())
        });

    Visitor::new(session_cart_id, user.map(|user| user.sub.clone()))
}

#[cfg(test)]
mod tests {
    use actix_web::cookie::Cookie;
    use actix_web::test::TestRequest;

    use super::*;

    #[test]
    fn visitor_prefers_cookie_over_issued_id() {
        let req = TestRequest::default()
            .cookie(Cookie::new(SESSION_CART_COOKIE, "from-cookie"))
            .to_http_request();
        req.extensions_mut()
            .insert(IssuedSessionCartId("issued".to_string()));

        let visitor = visitor(&req, None);

        assert_eq!(visitor.session_cart_id.as_deref(), Some("from-cookie"));
        assert!(visitor.user_id.is_none());
    }

    #[test]
    fn visitor_falls_back_to_issued_id() {
        let req = TestRequest::default().to_http_request();
        req.extensions_mut()
            .insert(IssuedSessionCartId("issued".to_string()));

        assert_eq!(
            visitor(&req, None).session_cart_id.as_deref(),
            Some("issued")
        );
    }

    #[test]
    fn visitor_without_any_id() {
        let req = TestRequest::default().to_http_request();

        assert_eq!(visitor(&req, None), Visitor::default());
    }
}
