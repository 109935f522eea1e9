use async_trait::async_trait;
use std::sync::Arc;

use roster_core::ApplicationError;

use crate::{
    config::Config,
    cqrs::{Query, QueryHandler, queries::ListPlayers},
    uow::UnitOfWork,
};

pub struct ListPlayersHandler {}

impl ListPlayersHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl QueryHandler<ListPlayers> for ListPlayersHandler {
    async fn handle(
        &self,
        query: ListPlayers,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        config: &Arc<Config>,
    ) -> Result<<ListPlayers as Query>::Output, ApplicationError> {
        let mut query = query.query;
        query.pagination = query.pagination.limited_to(config.max_page_size)?;

        let players = uow.players().find_all().await?;
        let total = players.len();
        let page = query.run(players);

        tracing::debug!(
            total,
            returned = page.len(),
            order = %query.order,
            page_number = query.pagination.page_number,
            page_size = query.pagination.page_size,
            "Listed players"
        );
        Ok(page)
    }
}
