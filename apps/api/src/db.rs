use anyhow::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

/// Creates and returns a PostgreSQL connection pool.
pub async fn create_pool(database_url: &str) -> Result<PgPool> {
    info!("Connecting to PostgreSQL...");

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await?;

    info!("PostgreSQL connection pool established");
    Ok(pool)
}

const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS branches (
        id             BIGSERIAL PRIMARY KEY,
        name           VARCHAR(100) NOT NULL UNIQUE,
        code           VARCHAR(10) NOT NULL UNIQUE,
        description    TEXT NOT NULL DEFAULT '',
        placement_2024 INTEGER NOT NULL DEFAULT 0,
        placement_2026 INTEGER NOT NULL DEFAULT 0,
        salary_2024    DOUBLE PRECISION NOT NULL DEFAULT 0,
        future_trends  TEXT NOT NULL DEFAULT '',
        future_skills  TEXT NOT NULL DEFAULT '',
        icon           VARCHAR(10) NOT NULL DEFAULT '📚',
        created_at     TIMESTAMPTZ NOT NULL DEFAULT now(),
        updated_at     TIMESTAMPTZ NOT NULL DEFAULT now()
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS companies (
        id          BIGSERIAL PRIMARY KEY,
        name        VARCHAR(200) NOT NULL,
        branch_id   BIGINT NOT NULL REFERENCES branches(id) ON DELETE CASCADE,
        description TEXT NOT NULL DEFAULT '',
        website     TEXT NOT NULL DEFAULT '',
        UNIQUE (name, branch_id)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS courses (
        id           BIGSERIAL PRIMARY KEY,
        name         VARCHAR(200) NOT NULL,
        platform     VARCHAR(50) NOT NULL,
        branch_id    BIGINT NOT NULL REFERENCES branches(id) ON DELETE CASCADE,
        level        VARCHAR(20) NOT NULL,
        duration     VARCHAR(100) NOT NULL DEFAULT '',
        is_free      BOOLEAN NOT NULL DEFAULT FALSE,
        free_details VARCHAR(100) NOT NULL DEFAULT ''
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS projects (
        id          BIGSERIAL PRIMARY KEY,
        name        VARCHAR(200) NOT NULL,
        branch_id   BIGINT NOT NULL REFERENCES branches(id) ON DELETE CASCADE,
        description TEXT NOT NULL DEFAULT '',
        difficulty  VARCHAR(50) NOT NULL DEFAULT 'Medium'
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS feedback_logs (
        id           UUID PRIMARY KEY,
        user_input   TEXT NOT NULL,
        bot_response TEXT NOT NULL,
        timestamp    TIMESTAMPTZ NOT NULL DEFAULT now()
    )
    "#,
];

/// Creates the catalog tables if they do not exist yet.
pub async fn ensure_schema(pool: &PgPool) -> Result<()> {
    for statement in SCHEMA {
        sqlx::query(statement).execute(pool).await?;
    }
    info!("Database schema ready");
    Ok(())
}
