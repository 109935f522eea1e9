use async_trait::async_trait;
use std::sync::Arc;

use roster_core::ApplicationError;

use crate::{
    config::Config,
    cqrs::{Query, QueryHandler, queries::CountPlayers},
    uow::UnitOfWork,
};

pub struct CountPlayersHandler {}

impl CountPlayersHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl QueryHandler<CountPlayers> for CountPlayersHandler {
    async fn handle(
        &self,
        query: CountPlayers,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<<CountPlayers as Query>::Output, ApplicationError> {
        let players = uow.players().find_all().await?;
        Ok(query.filter.apply(players).len())
    }
}

#[cfg(test)]
mod tests {
    use roster_game::{
        query::PlayerFilter,
        test_utils::{PlayerFactoryOptions, player_factory},
    };

    use super::*;
    use crate::test_utils::tests::MockUnitOfWork;

    #[tokio::test]
    async fn counts_matches_without_paging() {
        let config = Arc::new(Config::from_env());
        let mock_uow: Box<dyn UnitOfWork<'_> + '_> = Box::new(MockUnitOfWork::new());

        for banned in [true, false, false, true, false] {
            mock_uow
                .players()
                .save(&player_factory(PlayerFactoryOptions {
                    banned: Some(banned),
                    ..Default::default()
                }))
                .await
                .unwrap();
        }

        let handler = CountPlayersHandler::new();
        let all = handler
            .handle(
                CountPlayers {
                    filter: PlayerFilter::default(),
                },
                &mock_uow,
                &config,
            )
            .await
            .unwrap();
        assert_eq!(all, 5);

        let banned = handler
            .handle(
                CountPlayers {
                    filter: PlayerFilter {
                        banned: Some(true),
                        ..Default::default()
                    },
                },
                &mock_uow,
                &config,
            )
            .await
            .unwrap();
        assert_eq!(banned, 2);
    }
}
