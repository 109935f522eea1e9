use sqlx::{Postgres, Transaction};
use std::sync::Arc;
use tokio::sync::Mutex;

use roster_app::repository::PlayerRepository;
use roster_core::{ApplicationError, DbError};
use roster_game::models::player::{Player, PlayerId};

use crate::models::{self as db_models};

const PLAYER_COLUMNS: &str = "id, name, title, race, profession, birthday, banned, experience, level, until_next_level";

/// Implements PlayerRepository and operates on transactions.
#[derive(Clone)]
pub struct PostgresPlayerRepository<'a> {
    tx: Arc<Mutex<Transaction<'a, Postgres>>>,
}

impl<'a> PostgresPlayerRepository<'a> {
    pub fn new(tx: Arc<Mutex<Transaction<'a, Postgres>>>) -> Self {
        Self { tx }
    }

    async fn insert(&self, player: &Player) -> Result<Player, ApplicationError> {
        let mut tx_guard = self.tx.lock().await;
        let sql = format!(
            r#"
              INSERT INTO players (name, title, race, profession, birthday, banned, experience, level, until_next_level)
              VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
              RETURNING {PLAYER_COLUMNS}
            "#
        );

        let row = sqlx::query_as::<_, db_models::Player>(&sql)
            .bind(&player.name)
            .bind(&player.title)
            .bind(db_models::Race::from(player.race))
            .bind(db_models::Profession::from(player.profession))
            .bind(player.birthday)
            .bind(player.banned)
            .bind(player.experience)
            .bind(player.level)
            .bind(player.until_next_level)
            .fetch_one(&mut *tx_guard.as_mut())
            .await
            .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;

        tracing::debug!(player_id = row.id, "Inserted player row");
        Ok(row.try_into()?)
    }

    async fn update(&self, id: PlayerId, player: &Player) -> Result<Player, ApplicationError> {
        let mut tx_guard = self.tx.lock().await;
        let sql = format!(
            r#"
              UPDATE players
              SET name = $2, title = $3, race = $4, profession = $5, birthday = $6,
                  banned = $7, experience = $8, level = $9, until_next_level = $10
              WHERE id = $1
              RETURNING {PLAYER_COLUMNS}
            "#
        );

        let row = sqlx::query_as::<_, db_models::Player>(&sql)
            .bind(id.get())
            .bind(&player.name)
            .bind(&player.title)
            .bind(db_models::Race::from(player.race))
            .bind(db_models::Profession::from(player.profession))
            .bind(player.birthday)
            .bind(player.banned)
            .bind(player.experience)
            .bind(player.level)
            .bind(player.until_next_level)
            .fetch_optional(&mut *tx_guard.as_mut())
            .await
            .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;

        let Some(row) = row else {
            tracing::debug!(player_id = %id, "Update matched no player row");
            return Err(ApplicationError::Db(DbError::PlayerNotFound(id.get())));
        };

        Ok(row.try_into()?)
    }
}

#[async_trait::async_trait]
impl<'a> PlayerRepository for PostgresPlayerRepository<'a> {
    async fn find_all(&self) -> Result<Vec<Player>, ApplicationError> {
        let mut tx_guard = self.tx.lock().await;
        let sql = format!("SELECT {PLAYER_COLUMNS} FROM players");

        let rows = sqlx::query_as::<_, db_models::Player>(&sql)
            .fetch_all(&mut *tx_guard.as_mut())
            .await
            .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;

        rows.into_iter()
            .map(|row| Player::try_from(row).map_err(ApplicationError::from))
            .collect()
    }

    async fn find_by_id(&self, id: PlayerId) -> Result<Option<Player>, ApplicationError> {
        let mut tx_guard = self.tx.lock().await;
        let sql = format!("SELECT {PLAYER_COLUMNS} FROM players WHERE id = $1");

        let row = sqlx::query_as::<_, db_models::Player>(&sql)
            .bind(id.get())
            .fetch_optional(&mut *tx_guard.as_mut())
            .await
            .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;

        match row {
            Some(row) => Ok(Some(row.try_into()?)),
            None => Ok(None),
        }
    }

    async fn exists_by_id(&self, id: PlayerId) -> Result<bool, ApplicationError> {
        let mut tx_guard = self.tx.lock().await;

        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM players WHERE id = $1)",
        )
        .bind(id.get())
        .fetch_one(&mut *tx_guard.as_mut())
        .await
        .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;

        Ok(exists)
    }

    async fn save(&self, player: &Player) -> Result<Player, ApplicationError> {
        match player.id {
            Some(id) => self.update(id, player).await,
            None => self.insert(player).await,
        }
    }

    async fn delete_by_id(&self, id: PlayerId) -> Result<(), ApplicationError> {
        let mut tx_guard = self.tx.lock().await;

        let result = sqlx::query("DELETE FROM players WHERE id = $1")
            .bind(id.get())
            .execute(&mut *tx_guard.as_mut())
            .await
            .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;

        if result.rows_affected() == 0 {
            tracing::debug!(player_id = %id, "Delete matched no player row");
            return Err(ApplicationError::Db(DbError::PlayerNotFound(id.get())));
        }

        Ok(())
    }
}
