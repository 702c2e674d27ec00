//! Persistence gateway: pool ownership, schema init, request-scoped sessions.

use crate::config::Settings;
use crate::model::{Goods, GoodsCreate};
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Postgres, Transaction};

const SCHEMA_DDL: &str = r#"
CREATE TABLE IF NOT EXISTS goods (
    id SERIAL PRIMARY KEY,
    name TEXT NOT NULL,
    description TEXT,
    price DOUBLE PRECISION,
    quantity INTEGER,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
)
"#;

const GOODS_COLUMNS: &str = "id, name, description, price, quantity, created_at";

/// Ensure the configured database exists; create it if not. Connects to the
/// server's default `postgres` database to run CREATE DATABASE. Call before
/// `Store::connect`.
pub async fn ensure_database_exists(settings: &Settings) -> Result<(), sqlx::Error> {
    use sqlx::ConnectOptions;
    use std::str::FromStr;

    let opts = sqlx::postgres::PgConnectOptions::from_str(&settings.admin_url())?;
    let mut conn = opts.connect().await?;
    let exists: (bool,) =
        sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
            .bind(&settings.db_name)
            .fetch_one(&mut conn)
            .await?;
    if !exists.0 {
        sqlx::query(&format!(
            "CREATE DATABASE {}",
            quote_ident(&settings.db_name)
        ))
        .execute(&mut conn)
        .await?;
    }
    Ok(())
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('\\', "\\\\").replace('"', "\\\""))
}

/// Owns the connection pool. Cheap to clone; all clones share the pool.
#[derive(Clone)]
pub struct Store {
    pool: PgPool,
}

impl Store {
    /// Open a pool against the configured database.
    pub async fn connect(settings: &Settings) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(&settings.database_url())
            .await?;
        Ok(Self { pool })
    }

    /// Wrap an existing pool. Used by tests and by callers that manage
    /// their own pool options.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Idempotently create the goods table. Must succeed before the server
    /// starts accepting requests.
    pub async fn init_schema(&self) -> Result<(), sqlx::Error> {
        sqlx::query(SCHEMA_DDL).execute(&self.pool).await?;
        Ok(())
    }

    /// Begin a request-scoped unit of work. Dropping the session on any
    /// exit path rolls back and returns the connection to the pool.
    pub async fn session(&self) -> Result<Session, sqlx::Error> {
        Ok(Session {
            tx: self.pool.begin().await?,
        })
    }

    /// Close the pool, waiting for checked-out connections to return.
    pub async fn close(&self) {
        self.pool.close().await;
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

/// One request's unit of work over a pooled connection.
pub struct Session {
    tx: Transaction<'static, Postgres>,
}

impl Session {
    /// Insert a new row; storage assigns the id.
    pub async fn insert(&mut self, input: &GoodsCreate) -> Result<Goods, sqlx::Error> {
        sqlx::query_as::<_, Goods>(&format!(
            "INSERT INTO goods (name, description, price, quantity) \
             VALUES ($1, $2, $3, $4) RETURNING {GOODS_COLUMNS}"
        ))
        .bind(&input.name)
        .bind(&input.description)
        .bind(input.price)
        .bind(input.quantity)
        .fetch_one(&mut *self.tx)
        .await
    }

    pub async fn by_id(&mut self, id: i32) -> Result<Option<Goods>, sqlx::Error> {
        sqlx::query_as::<_, Goods>(&format!(
            "SELECT {GOODS_COLUMNS} FROM goods WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&mut *self.tx)
        .await
    }

    /// One page in id order. `skip` and `limit` come straight from the list
    /// query parameters.
    pub async fn page(&mut self, skip: u32, limit: u32) -> Result<Vec<Goods>, sqlx::Error> {
        sqlx::query_as::<_, Goods>(&format!(
            "SELECT {GOODS_COLUMNS} FROM goods ORDER BY id OFFSET $1 LIMIT $2"
        ))
        .bind(i64::from(skip))
        .bind(i64::from(limit))
        .fetch_all(&mut *self.tx)
        .await
    }

    /// Write a merged row back. The row must already exist.
    pub async fn update(&mut self, goods: &Goods) -> Result<Goods, sqlx::Error> {
        sqlx::query_as::<_, Goods>(&format!(
            "UPDATE goods SET name = $2, description = $3, price = $4, quantity = $5 \
             WHERE id = $1 RETURNING {GOODS_COLUMNS}"
        ))
        .bind(goods.id)
        .bind(&goods.name)
        .bind(&goods.description)
        .bind(goods.price)
        .bind(goods.quantity)
        .fetch_one(&mut *self.tx)
        .await
    }

    /// Delete by id. Returns whether a row existed.
    pub async fn delete(&mut self, id: i32) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM goods WHERE id = $1")
            .bind(id)
            .execute(&mut *self.tx)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Commit the unit of work. On failure the caller must not assume the
    /// write reached storage; the error propagates.
    pub async fn commit(self) -> Result<(), sqlx::Error> {
        self.tx.commit().await
    }
}

#[cfg(test)]
mod tests {
    use super::quote_ident;

    #[test]
    fn quote_ident_escapes_quotes() {
        assert_eq!(quote_ident("goods"), "\"goods\"");
        assert_eq!(quote_ident("go\"ods"), "\"go\\\"ods\"");
    }
}
