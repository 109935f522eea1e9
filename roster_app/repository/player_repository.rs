use roster_core::ApplicationError;
use roster_game::models::player::{Player, PlayerId};

#[async_trait::async_trait]
pub trait PlayerRepository: Send + Sync {
    /// Returns every stored player, in no particular order.
    async fn find_all(&self) -> Result<Vec<Player>, ApplicationError>;

    async fn find_by_id(&self, id: PlayerId) -> Result<Option<Player>, ApplicationError>;

    async fn exists_by_id(&self, id: PlayerId) -> Result<bool, ApplicationError>;

    /// Inserts a player without id (assigning a fresh one) or updates an
    /// existing one. Returns the stored form.
    async fn save(&self, player: &Player) -> Result<Player, ApplicationError>;

    /// Fails with `DbError::PlayerNotFound` when nothing was deleted.
    async fn delete_by_id(&self, id: PlayerId) -> Result<(), ApplicationError>;
}
