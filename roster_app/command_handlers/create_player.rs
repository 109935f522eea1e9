use std::sync::Arc;

use roster_core::{ApplicationError, Result};
use roster_game::models::player::Player;

use crate::{
    config::Config,
    cqrs::{CommandHandler, commands::CreatePlayer},
    uow::UnitOfWork,
};

pub struct CreatePlayerCommandHandler {}

impl Default for CreatePlayerCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl CreatePlayerCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<CreatePlayer> for CreatePlayerCommandHandler {
    async fn handle(
        &self,
        command: CreatePlayer,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<Player, ApplicationError> {
        let player = command.player.validate()?;
        let player = uow.players().save(&player).await?;

        tracing::info!(
            player_id = ?player.id,
            level = player.level,
            "Player {} created",
            player.name
        );
        Ok(player)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use std::sync::Arc;

    use roster_core::ValidationError;
    use roster_game::validation::NewPlayer;
    use roster_types::{Profession, Race};

    use super::*;
    use crate::{config::Config, test_utils::tests::MockUnitOfWork};

    fn vasya() -> NewPlayer {
        NewPlayer {
            name: Some("Vasya".to_string()),
            title: Some("Bandit".to_string()),
            race: Some(Race::Human),
            profession: Some(Profession::Warrior),
            birthday: Some(Utc.with_ymd_and_hms(2020, 3, 1, 0, 0, 0).unwrap()),
            banned: None,
            experience: Some(0),
        }
    }

    #[tokio::test]
    async fn test_create_player_assigns_id_and_level() {
        let config = Arc::new(Config::from_env());
        let mock_uow: Box<dyn UnitOfWork<'_> + '_> = Box::new(MockUnitOfWork::new());
        let handler = CreatePlayerCommandHandler::new();

        let player = handler
            .handle(CreatePlayer { player: vasya() }, &mock_uow, &config)
            .await
            .unwrap();

        let id = player.id.expect("saved player has an id");
        assert_eq!(player.level, 0);
        assert_eq!(player.until_next_level, 100);
        assert!(!player.banned);

        let stored = mock_uow.players().find_by_id(id).await.unwrap();
        assert_eq!(stored, Some(player));
    }

    #[tokio::test]
    async fn test_create_player_with_high_experience() {
        let config = Arc::new(Config::from_env());
        let mock_uow: Box<dyn UnitOfWork<'_> + '_> = Box::new(MockUnitOfWork::new());
        let handler = CreatePlayerCommandHandler::new();

        let command = CreatePlayer {
            player: NewPlayer {
                experience: Some(5_000_000),
                ..vasya()
            },
        };
        let player = handler.handle(command, &mock_uow, &config).await.unwrap();

        assert_eq!(player.level, 315);
        assert_eq!(player.until_next_level, 8_600);
        assert_eq!(
            player.until_next_level,
            50 * (player.level + 1) * (player.level + 2) - player.experience
        );
    }

    #[tokio::test]
    async fn test_ids_are_never_reused() {
        let config = Arc::new(Config::from_env());
        let mock_uow: Box<dyn UnitOfWork<'_> + '_> = Box::new(MockUnitOfWork::new());
        let handler = CreatePlayerCommandHandler::new();

        let first = handler
            .handle(CreatePlayer { player: vasya() }, &mock_uow, &config)
            .await
            .unwrap();
        let first_id = first.id.unwrap();
        mock_uow.players().delete_by_id(first_id).await.unwrap();

        let second = handler
            .handle(CreatePlayer { player: vasya() }, &mock_uow, &config)
            .await
            .unwrap();
        assert!(second.id.unwrap() > first_id);
    }

    #[tokio::test]
    async fn test_invalid_player_is_not_stored() {
        let config = Arc::new(Config::from_env());
        let mock_uow: Box<dyn UnitOfWork<'_> + '_> = Box::new(MockUnitOfWork::new());
        let handler = CreatePlayerCommandHandler::new();

        let command = CreatePlayer {
            player: NewPlayer {
                birthday: Some(Utc.with_ymd_and_hms(1999, 12, 31, 0, 0, 0).unwrap()),
                ..vasya()
            },
        };
        let result = handler.handle(command, &mock_uow, &config).await;

        match result.unwrap_err() {
            ApplicationError::Validation(ValidationError::BirthdayOutOfRange(1999)) => {}
            e => panic!("Expected BirthdayOutOfRange error, got: {:?}", e),
        }
        assert!(mock_uow.players().find_all().await.unwrap().is_empty());
    }
}
