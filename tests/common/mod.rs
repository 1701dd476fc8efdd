use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use pushkind_members::db::{ConnectionOptions, DbPool, establish_connection_pool_with};
use tempfile::TempDir;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// SQLite database living in a temporary directory, migrated on creation
/// and removed on drop.
pub struct TestDb {
    pool: DbPool,
    _dir: TempDir,
}

impl TestDb {
    pub fn new(name: &str) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join(name);
        let url = path.to_str().expect("utf-8 temp path").to_string();

        // WAL side files are not needed for a throwaway database.
        let options = ConnectionOptions {
            enable_wal: false,
            ..ConnectionOptions::default()
        };
        let pool = establish_connection_pool_with(&url, options).expect("create pool");
        let mut conn = pool.get().expect("get connection");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("run migrations");

        Self { pool, _dir: dir }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }
}
