use diesel::prelude::*;
use diesel::sql_types::BigInt;

mod common;

#[derive(QueryableByName)]
struct Count {
    #[diesel(sql_type = BigInt)]
    count: i64,
}

#[test]
fn test_creates_and_removes_db_files() {
    let base = "test_storefront_db_files.db";

    {
        let test_db = common::TestDb::new(base);
        let conn = test_db.pool().get();
        assert!(conn.is_ok());
    }

    let db_path = std::path::Path::new(base);
    assert!(!db_path.exists());
    assert!(!std::path::Path::new(&format!("{base}-shm")).exists());
    assert!(!std::path::Path::new(&format!("{base}-wal")).exists());
}

#[test]
fn test_migrations_create_storefront_tables() {
    let test_db = common::TestDb::new("test_storefront_tables.db");
    let mut conn = test_db.pool().get().expect("connection");

    for table in [
        "products",
        "users",
        "accounts",
        "sessions",
        "verification_tokens",
        "carts",
    ] {
        let found = diesel::sql_query(
            "SELECT COUNT(*) AS count FROM sqlite_master WHERE type = 'table' AND name = ?",
        )
        .bind::<diesel::sql_types::Text, _>(table)
        .get_result::<Count>(&mut conn)
        .expect("query sqlite_master");
        assert_eq!(found.count, 1, "missing table {table}");
    }
}
