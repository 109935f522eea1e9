use std::sync::Arc;

use roster_core::{ApplicationError, DbError, Result};

use crate::{
    config::Config,
    cqrs::{CommandHandler, commands::DeletePlayer},
    uow::UnitOfWork,
};

pub struct DeletePlayerCommandHandler {}

impl Default for DeletePlayerCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl DeletePlayerCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<DeletePlayer> for DeletePlayerCommandHandler {
    async fn handle(
        &self,
        command: DeletePlayer,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<(), ApplicationError> {
        let repo = uow.players();

        if !repo.exists_by_id(command.id).await? {
            return Err(DbError::PlayerNotFound(command.id.get()).into());
        }
        repo.delete_by_id(command.id).await?;

        tracing::info!(player_id = %command.id, "Player deleted");
        Ok(())
    }
}
