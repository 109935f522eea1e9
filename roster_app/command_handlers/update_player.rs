use std::sync::Arc;

use roster_core::{ApplicationError, DbError, Result};
use roster_game::models::player::Player;

use crate::{
    config::Config,
    cqrs::{CommandHandler, commands::UpdatePlayer},
    uow::UnitOfWork,
};

pub struct UpdatePlayerCommandHandler {}

impl Default for UpdatePlayerCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl UpdatePlayerCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<UpdatePlayer> for UpdatePlayerCommandHandler {
    async fn handle(
        &self,
        command: UpdatePlayer,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<Player, ApplicationError> {
        let mut player = uow
            .players()
            .find_by_id(command.id)
            .await?
            .ok_or(DbError::PlayerNotFound(command.id.get()))?;

        if command.changes.is_empty() {
            tracing::debug!(player_id = %command.id, "Empty update, nothing to write");
            return Ok(player);
        }

        // Nothing is written unless every supplied field passes.
        player.apply_changes(command.changes)?;
        let player = uow.players().save(&player).await?;

        tracing::info!(player_id = %command.id, "Player updated");
        Ok(player)
    }
}
