use sqlx::sqlite::SqlitePool;
use crate::models::*;

#[derive(Debug, thiserror::Error)]
pub enum DaoError {
    #[error("not found")]
    NotFound,
    #[error(transparent)]
    Database(#[from] sqlx::Error),
    #[error("corrupt player document: {0}")]
    Document(#[from] serde_json::Error),
}

/// Data access for the `players` collection.
///
/// Cloning is cheap and every clone shares the same pool.
#[derive(Clone)]
pub struct PlayerDao {
    pool: SqlitePool,
}

impl PlayerDao {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn connect(url: &str) -> Result<Self, DaoError> {
        let pool = SqlitePool::connect(url).await?;
        Ok(Self::new(pool))
    }

    pub async fn init_schema(&self) -> Result<(), DaoError> {
        sqlx::query(
            r#"CREATE TABLE IF NOT EXISTS players (
                   id TEXT PRIMARY KEY NOT NULL,
                   document TEXT NOT NULL
               )"#
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_all(&self) -> Result<Vec<Player>, DaoError> {
        let rows = sqlx::query_as::<_, PlayerRow>(
            r#"SELECT document FROM players ORDER BY rowid"#
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(|r| r.to_player().map_err(DaoError::from))
            .collect()
    }

    pub async fn insert(&self, player: &Player) -> Result<(), DaoError> {
        let document = serde_json::to_string(player)?;

        sqlx::query(
            r#"INSERT INTO players (id, document) VALUES (?, ?)"#
        )
        .bind(&player.id)
        .bind(document)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    // Whole-document replace, fields missing from `player` are dropped
    pub async fn update(&self, player: &Player) -> Result<(), DaoError> {
        let document = serde_json::to_string(player)?;

        let result = sqlx::query(
            r#"UPDATE players SET document = ? WHERE id = ?"#
        )
        .bind(document)
        .bind(&player.id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DaoError::NotFound);
        }
        Ok(())
    }

    pub async fn delete(&self, player: &Player) -> Result<(), DaoError> {
        let result = sqlx::query(
            r#"DELETE FROM players WHERE id = ?"#
        )
        .bind(&player.id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DaoError::NotFound);
        }
        Ok(())
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Player, DaoError> {
        let row = sqlx::query_as::<_, PlayerRow>(
            r#"SELECT document FROM players WHERE id = ?"#
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(DaoError::NotFound)?;

        Ok(row.to_player()?)
    }
}

#[cfg(test)]
pub(crate) mod test_helpers {
    use super::PlayerDao;
    use sqlx::sqlite::SqlitePoolOptions;

    /// Fresh in-memory database with the schema applied.
    ///
    /// A single connection that never expires: every in-memory connection
    /// is its own database.
    pub async fn memory_dao() -> PlayerDao {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        let dao = PlayerDao::new(pool);
        dao.init_schema().await.unwrap();
        dao
    }
}
