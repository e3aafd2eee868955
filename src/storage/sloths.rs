use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use tracing::info;

/// A persisted sloth record. Columns are nullable, matching the table schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Sloth {
    pub id: i64,
    pub name: Option<String>,
    pub age: Option<i64>,
    pub image: Option<String>,
}

/// Incoming sloth fields for insert/update. Any subset may be present.
///
/// `age` is kept as raw JSON rather than `i64` so that a non-numeric value
/// reaches the database and is rejected there as a type error, instead of
/// being rejected up front by deserialization.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct SlothPayload {
    pub name: Option<String>,
    pub age: Option<Value>,
    pub image: Option<String>,
}

impl SlothPayload {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.age.is_none() && self.image.is_none()
    }
}

/// Data-access handle for the sloths table, backed by a sqlx connection pool.
#[derive(Clone)]
pub struct SlothStore {
    pool: SqlitePool,
}

impl SlothStore {
    pub async fn connect(url: &str) -> sqlx::Result<Self> {
        // An in-memory SQLite database exists per connection, so the pool
        // must be pinned to a single long-lived connection for it.
        let options = if url.contains(":memory:") {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(5)
        };

        let pool = options.connect(url).await?;
        Ok(Self { pool })
    }

    /// Create the sloths table if it does not exist yet.
    ///
    /// STRICT enforces column types at insert time, so a text age is a
    /// database error rather than a silent coercion.
    pub async fn migrate(&self) -> sqlx::Result<()> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS sloths (
                id    INTEGER PRIMARY KEY AUTOINCREMENT,
                name  TEXT,
                age   INTEGER,
                image TEXT
            ) STRICT",
        )
        .execute(&self.pool)
        .await?;

        info!("Sloths table ready");
        Ok(())
    }

    /// All sloths in insertion order.
    pub async fn list(&self) -> sqlx::Result<Vec<Sloth>> {
        sqlx::query_as::<_, Sloth>("SELECT id, name, age, image FROM sloths ORDER BY id")
            .fetch_all(&self.pool)
            .await
    }

    pub async fn find(&self, id: i64) -> sqlx::Result<Option<Sloth>> {
        sqlx::query_as::<_, Sloth>("SELECT id, name, age, image FROM sloths WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn count(&self) -> sqlx::Result<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM sloths")
            .fetch_one(&self.pool)
            .await
    }

    /// Insert a new sloth and return it with its generated id.
    pub async fn insert(&self, payload: &SlothPayload) -> sqlx::Result<Sloth> {
        let mut qb: QueryBuilder<Sqlite> = if payload.is_empty() {
            QueryBuilder::new("INSERT INTO sloths DEFAULT VALUES")
        } else {
            let mut qb = QueryBuilder::new("INSERT INTO sloths (");
            {
                let mut cols = qb.separated(", ");
                if payload.name.is_some() {
                    cols.push("name");
                }
                if payload.age.is_some() {
                    cols.push("age");
                }
                if payload.image.is_some() {
                    cols.push("image");
                }
            }
            qb.push(") VALUES (");
            {
                let mut vals = qb.separated(", ");
                if let Some(name) = &payload.name {
                    vals.push_bind(name.clone());
                }
                if let Some(age) = &payload.age {
                    match age {
                        Value::Null => vals.push_bind(None::<i64>),
                        Value::Number(n) if n.is_i64() => {
                            vals.push_bind(n.as_i64().unwrap_or_default())
                        }
                        Value::String(s) => vals.push_bind(s.clone()),
                        other => vals.push_bind(other.to_string()),
                    };
                }
                if let Some(image) = &payload.image {
                    vals.push_bind(image.clone());
                }
            }
            qb.push(")");
            qb
        };

        qb.push(" RETURNING id, name, age, image");
        qb.build_query_as::<Sloth>().fetch_one(&self.pool).await
    }

    /// Apply the given fields to the matching row. Returns `None` when no
    /// row has this id.
    pub async fn update(&self, id: i64, payload: &SlothPayload) -> sqlx::Result<Option<Sloth>> {
        let mut qb: QueryBuilder<Sqlite> = QueryBuilder::new("UPDATE sloths SET ");
        {
            let mut sets = qb.separated(", ");
            if let Some(name) = &payload.name {
                sets.push("name = ");
                sets.push_bind_unseparated(name.clone());
            }
            if let Some(age) = &payload.age {
                sets.push("age = ");
                match age {
                    Value::Null => sets.push_bind_unseparated(None::<i64>),
                    Value::Number(n) if n.is_i64() => {
                        sets.push_bind_unseparated(n.as_i64().unwrap_or_default())
                    }
                    Value::String(s) => sets.push_bind_unseparated(s.clone()),
                    other => sets.push_bind_unseparated(other.to_string()),
                };
            }
            if let Some(image) = &payload.image {
                sets.push("image = ");
                sets.push_bind_unseparated(image.clone());
            }
        }
        qb.push(" WHERE id = ");
        qb.push_bind(id);
        qb.push(" RETURNING id, name, age, image");

        qb.build_query_as::<Sloth>().fetch_optional(&self.pool).await
    }

    /// Remove the matching row, returning its prior field values. Returns
    /// `None` when no row has this id.
    pub async fn delete(&self, id: i64) -> sqlx::Result<Option<Sloth>> {
        sqlx::query_as::<_, Sloth>(
            "DELETE FROM sloths WHERE id = ? RETURNING id, name, age, image",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }
}
