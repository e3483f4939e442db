//! Clears the catalog and user tables and loads the sample data.

use std::env;

use dotenvy::dotenv;
use pushkind_common::db::establish_connection_pool;

use pushkind_storefront::repository::DieselRepository;
use pushkind_storefront::sample_data::SampleData;
use pushkind_storefront::services::seed::seed_database;

fn main() {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    dotenv().ok(); // Load .env file

    let database_url = env::var("DATABASE_URL").unwrap_or("app.db".to_string());

    let pool = match establish_connection_pool(&database_url) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database connection: {e}");
            std::process::exit(1);
        }
    };
    let repo = DieselRepository::new(pool);

    match seed_database(&repo, SampleData::default()) {
        Ok(summary) => log::info!(
            "Seeded {} products and {} users into {database_url}",
            summary.products_created,
            summary.users_created
        ),
        Err(e) => {
            log::error!("Failed to seed the database: {e}");
            std::process::exit(1);
        }
    }
}
