use std::env;

use actix_files::Files;
use actix_identity::IdentityMiddleware;
use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::Key;
use actix_web::middleware::from_fn;
use actix_web::{App, HttpServer, middleware, web};
use actix_web_flash_messages::{FlashMessagesFramework, storage::CookieMessageStore};
use dotenvy::dotenv;
use pushkind_common::db::establish_connection_pool;
use pushkind_common::models::config::CommonServerConfig;
use tera::Tera;

use pushkind_storefront::cache::PageCache;
use pushkind_storefront::middleware::ensure_session_cart_id;
use pushkind_storefront::models::config::StoreConfig;
use pushkind_storefront::repository::DieselRepository;
use pushkind_storefront::routes::api::{
    api_v1_add_cart_item, api_v1_cart, api_v1_remove_cart_item,
};
use pushkind_storefront::routes::cart::{add_to_cart, remove_from_cart, show_cart};
use pushkind_storefront::routes::main::show_index;
use pushkind_storefront::routes::products::{show_product, show_products};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    dotenv().ok(); // Load .env file

    let database_url = env::var("DATABASE_URL").unwrap_or("app.db".to_string());
    let port = env::var("PORT").unwrap_or("8080".to_string());
    let port = port.parse::<u16>().unwrap_or(8080);
    let address = env::var("ADDRESS").unwrap_or("127.0.0.1".to_string());

    let secret = env::var("SECRET_KEY");
    let secret_key = match &secret {
        Ok(key) => Key::from(key.as_bytes()),
        Err(_) => Key::generate(),
    };

    let auth_service_url = env::var("AUTH_SERVICE_URL");
    let auth_service_url = match auth_service_url {
        Ok(auth_service_url) => auth_service_url,
        Err(_) => {
            log::error!("AUTH_SERVICE_URL environment variable not set");
            std::process::exit(1);
        }
    };

    let common_config = CommonServerConfig {
        secret: secret.unwrap_or_default(),
        auth_service_url,
    };
    let store_config =
        StoreConfig::from_env().with_sign_in_url(common_config.auth_service_url.clone());

    let domain = env::var("DOMAIN").unwrap_or("localhost".to_string());

    let pool = match establish_connection_pool(&database_url) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database connection: {e}");
            std::process::exit(1);
        }
    };
    let repo = DieselRepository::new(pool);
    let pages = web::Data::new(PageCache::new());

    let message_store = CookieMessageStore::builder(secret_key.clone()).build();
    let message_framework = FlashMessagesFramework::builder(message_store).build();

    let tera = match Tera::new("templates/**/*") {
        Ok(t) => t,
        Err(e) => {
            log::error!("Parsing error(s): {e}");
            std::process::exit(1);
        }
    };

    log::info!("Starting {} on {address}:{port}", store_config.app_name);

    HttpServer::new(move || {
        App::new()
            .wrap(from_fn(ensure_session_cart_id))
            .wrap(message_framework.clone())
            .wrap(IdentityMiddleware::default())
            .wrap(
                SessionMiddleware::builder(CookieSessionStore::default(), secret_key.clone())
                    .cookie_secure(false) // set to true in prod
                    .cookie_domain(Some(format!(".{domain}")))
                    .build(),
            )
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(Files::new("/assets", "./assets"))
            .service(
                web::scope("/api")
                    .service(api_v1_cart)
                    .service(api_v1_add_cart_item)
                    .service(api_v1_remove_cart_item),
            )
            .service(show_index)
            .service(show_products)
            .service(show_product)
            .service(show_cart)
            .service(add_to_cart)
            .service(remove_from_cart)
            .app_data(web::Data::new(tera.clone()))
            .app_data(web::Data::new(repo.clone()))
            .app_data(pages.clone())
            .app_data(web::Data::new(common_config.clone()))
            .app_data(web::Data::new(store_config.clone()))
    })
    .bind((address, port))?
    .run()
    .await
}
