use diesel::prelude::*;
use pushkind_members::db::{establish_connection_pool, get_connection};
use pushkind_members::schema::{members, teams};

mod common;

#[test]
fn test_creates_and_removes_db_files() {
    let test_db = common::TestDb::new("test_creates_and_removes_db_files.db");
    let conn = test_db.pool().get();
    assert!(conn.is_ok());
}

#[test]
fn test_migrations_create_empty_tables() {
    let test_db = common::TestDb::new("test_migrations_create_empty_tables.db");
    let mut conn = test_db.pool().get().unwrap();

    let teams: i64 = teams::table.count().get_result(&mut conn).unwrap();
    let members: i64 = members::table.count().get_result(&mut conn).unwrap();

    assert_eq!(teams, 0);
    assert_eq!(members, 0);
}

#[test]
fn test_default_pool_enforces_foreign_keys() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("test_default_pool.db");
    let pool = establish_connection_pool(path.to_str().unwrap()).unwrap();
    let mut conn = get_connection(&pool).unwrap();

    let enabled: i32 = diesel::select(diesel::dsl::sql::<diesel::sql_types::Integer>(
        "foreign_keys FROM pragma_foreign_keys",
    ))
    .get_result(&mut conn)
    .unwrap();

    assert_eq!(enabled, 1);
}

#[test]
fn test_negative_age_is_rejected_by_schema() {
    let test_db = common::TestDb::new("test_negative_age_is_rejected_by_schema.db");
    let mut conn = test_db.pool().get().unwrap();

    let result = diesel::insert_into(members::table)
        .values((members::username.eq("member1"), members::age.eq(-1)))
        .execute(&mut conn);

    assert!(result.is_err());
}
