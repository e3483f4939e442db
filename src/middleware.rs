use actix_web::body::MessageBody;
use actix_web::cookie::time::Duration;
use actix_web::cookie::{Cookie, SameSite};
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::middleware::Next;
use actix_web::{Error, HttpMessage};
use uuid::Uuid;

use crate::SESSION_CART_COOKIE;

/// Lifetime of an issued session cart cookie.
pub const SESSION_CART_MAX_AGE_DAYS: i64 = 30;

/// Session cart id issued during the current request.
///
/// Lets handlers act on the very first request, before the browser has had a
/// chance to send the cookie back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedSessionCartId(pub String);

/// Issue a `sessionCartId` cookie to visitors that do not carry one yet.
pub async fn ensure_session_cart_id(
    req: ServiceRequest,
    next: Next<impl MessageBody>,
) -> Result<ServiceResponse<impl MessageBody>, Error> {
    let has_cookie = req
        .cookie(SESSION_CART_COOKIE)
        .is_some_and(|cookie| !cookie.value().trim().is_empty());

    let issued = if has_cookie {
        None
    } else {
        let session_cart_id = Uuid::new_v4().to_string();
        req.extensions_mut()
            .insert(IssuedSessionCartId(session_cart_id.clone()));
        Some(session_cart_id)
    };

    let mut res = next.call(req).await?;

    if let Some(session_cart_id) = issued {
        let cookie = session_cart_cookie(session_cart_id);
        if let Err(err) = res.response_mut().add_cookie(&cookie) {
            log::error!("Failed to issue session cart cookie: {err}");
        }
    }

    Ok(res)
}

fn session_cart_cookie(value: String) -> Cookie<'static> {
    Cookie::build(SESSION_CART_COOKIE, value)
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(Duration::days(SESSION_CART_MAX_AGE_DAYS))
        .finish()
}

#[cfg(test)]
mod tests {
    use actix_web::middleware::from_fn;
    use actix_web::{App, HttpRequest, HttpResponse, test, web};

    use super::*;

    async fn echo_session(req: HttpRequest) -> HttpResponse {
        let from_cookie = req
            .cookie(SESSION_CART_COOKIE)
            .map(|cookie| cookie.value().to_string());
        let issued = req
            .extensions()
            .get::<IssuedSessionCartId>()
            .map(|id| id.0.clone());
        HttpResponse::Ok().body(from_cookie.or(issued).unwrap_or_default())
    }

    #[actix_web::test]
    async fn issues_cookie_when_missing() {
        let app = test::init_service(
            App::new()
                .wrap(from_fn(ensure_session_cart_id))
                .route("/", web::get().to(echo_session)),
        )
        .await;

        let res = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;

        let cookie = res
            .response()
            .cookies()
            .find(|cookie| cookie.name() == SESSION_CART_COOKIE)
            .expect("expected a session cart cookie");
        let issued = cookie.value().to_string();
        assert!(Uuid::parse_str(&issued).is_ok());
        assert_eq!(cookie.path(), Some("/"));

        let body = test::read_body(res).await;
        assert_eq!(body, issued.as_bytes());
    }

    #[actix_web::test]
    async fn keeps_existing_cookie() {
        let app = test::init_service(
            App::new()
                .wrap(from_fn(ensure_session_cart_id))
                .route("/", web::get().to(echo_session)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/")
            .cookie(Cookie::new(SESSION_CART_COOKIE, "existing"))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert!(
            res.response()
                .cookies()
                .all(|cookie| cookie.name() != SESSION_CART_COOKIE)
        );
        let body = test::read_body(res).await;
        assert_eq!(body, "existing".as_bytes());
    }
}
