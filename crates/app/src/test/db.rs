//! Per-test Postgres databases on a shared container.

use std::env;

use once_cell::sync::Lazy;
use sqlx::{Connection, PgConnection, PgPool};
use testcontainers::{ContainerAsync, ImageExt, runners::AsyncRunner};
use testcontainers_modules::postgres::Postgres as PostgresImage;
use tokio::sync::{OnceCell, mpsc};
use uuid::Uuid;

const USER: &str = "meet_test";
const PASSWORD: &str = "meet_test_password";

/// Started on first use and shared by every test in the binary.
static POSTGRES: Lazy<OnceCell<ContainerAsync<PostgresImage>>> = Lazy::new(OnceCell::new);

/// Databases queued for `DROP DATABASE` once their `TestDb` goes away.
static DROP_QUEUE: Lazy<OnceCell<mpsc::UnboundedSender<String>>> = Lazy::new(OnceCell::new);

async fn start_postgres() -> ContainerAsync<PostgresImage> {
    PostgresImage::default()
        .with_user(USER)
        .with_password(PASSWORD)
        .with_db_name(USER)
        .with_env_var("POSTGRES_INITDB_ARGS", "--auth-host=trust")
        .start()
        .await
        .expect("Failed to start PostgreSQL container")
}

async fn start_drop_queue() -> mpsc::UnboundedSender<String> {
    let (sender, mut receiver) = mpsc::unbounded_channel::<String>();

    tokio::spawn(async move {
        while let Some(name) = receiver.recv().await {
            if let Err(err) = drop_database(&name).await {
                eprintln!("Failed to drop test database '{name}': {err}");
            }
        }
    });

    sender
}

/// Connection string for `database` on the shared container.
async fn server_url(database: &str) -> Option<String> {
    let port = POSTGRES.get()?.get_host_port_ipv4(5432).await.ok()?;
    let host = env::var("TESTCONTAINERS_HOST_OVERRIDE").unwrap_or_else(|_| "localhost".into());

    Some(format!("postgresql://{USER}:{PASSWORD}@{host}:{port}/{database}"))
}

async fn drop_database(name: &str) -> Result<(), sqlx::Error> {
    let Some(url) = server_url("postgres").await else {
        return Ok(());
    };

    let mut conn = PgConnection::connect(&url).await?;

    sqlx::query(&format!("DROP DATABASE IF EXISTS \"{name}\""))
        .execute(&mut conn)
        .await?;

    conn.close().await
}

/// A freshly migrated database owned by one test.
///
/// Services commit their own transactions, so isolation comes from every test
/// getting its own database. It is dropped in the background when this value goes away.
#[derive(Debug)]
pub struct TestDb {
    pool: PgPool,
    name: String,
}

impl Drop for TestDb {
    fn drop(&mut self) {
        if let Some(queue) = DROP_QUEUE.get() {
            _ = queue.send(self.name.clone());
        }
    }
}

impl TestDb {
    pub async fn new() -> Self {
        DROP_QUEUE.get_or_init(start_drop_queue).await;
        POSTGRES.get_or_init(start_postgres).await;

        // simple hyphen-free hex keeps the name a valid unquoted identifier
        let name = format!("meet_test_{}", Uuid::now_v7().simple());

        let admin_url = server_url("postgres")
            .await
            .expect("Failed to resolve container address");

        let mut admin = PgConnection::connect(&admin_url)
            .await
            .expect("Failed to connect to postgres database");

        sqlx::query(&format!("CREATE DATABASE \"{name}\""))
            .execute(&mut admin)
            .await
            .expect("Failed to create test database");

        admin
            .close()
            .await
            .expect("Failed to close admin connection");

        let url = server_url(&name)
            .await
            .expect("Failed to resolve container address");

        let pool = PgPool::connect(&url)
            .await
            .expect("Failed to create pool for database");

        sqlx::migrate!("../../migrations")
            .run(&pool)
            .await
            .expect("Failed to run migrations on database");

        Self { pool, name }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[tokio::test]
    async fn migrations_create_the_schema() -> TestResult {
        let db = TestDb::new().await;

        let tables: Vec<String> = sqlx::query_scalar(
            "SELECT table_name::text FROM information_schema.tables
             WHERE table_schema = 'public' AND table_name <> '_sqlx_migrations'
             ORDER BY table_name",
        )
        .fetch_all(db.pool())
        .await?;

        assert_eq!(
            tables,
            [
                "file_metadata",
                "models",
                "owned_resources",
                "pack_payment_methods",
                "packs",
                "payment_orders",
                "persons",
            ]
        );

        Ok(())
    }

    #[tokio::test]
    async fn databases_are_isolated() -> TestResult {
        let first = TestDb::new().await;
        let second = TestDb::new().await;

        sqlx::query(
            "INSERT INTO persons (uuid, email, first_name, last_name, profile_code)
             VALUES ($1, 'iso@example.com', 'Iso', 'Lated', 4)",
        )
        .bind(Uuid::now_v7())
        .execute(first.pool())
        .await?;

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM persons")
            .fetch_one(second.pool())
            .await?;

        assert_eq!(count, 0);

        Ok(())
    }
}
