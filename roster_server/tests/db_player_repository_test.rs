
use roster_core::{ApplicationError, DbError};
use roster_game::{
    models::player::PlayerId,
    query::PlayerQuery,
    test_utils::{PlayerFactoryOptions, player_factory},
};
use roster_types::Race;

use crate::test_utils::tests::setup_db_provider;

#[tokio::test]
#[ignore = "needs a Postgres database at TEST_DATABASE_URL"]
async fn test_save_assigns_id_and_updates_in_place() -> Result<(), ApplicationError> {
    let uow_provider = setup_db_provider().await?;
    let uow = uow_provider.begin().await?;
    let repo = uow.players();

    let player = player_factory(PlayerFactoryOptions {
        name: Some("Boromir"),
        race: Some(Race::Human),
        experience: Some(1_000),
        ..Default::default()
    });
    let saved = repo.save(&player).await?;
    let id = saved.id.expect("saved player has an id");
    assert_eq!(saved.level, 4);
    assert_eq!(saved.until_next_level, 500);

    let mut changed = saved.clone();
    changed.banned = true;
    let updated = repo.save(&changed).await?;
    assert_eq!(updated.id, Some(id));
    assert!(updated.banned);

    let found = repo.find_by_id(id).await?;
    assert_eq!(found, Some(updated));
    assert!(repo.exists_by_id(id).await?);
    Ok(())
}

#[tokio::test]
#[ignore = "needs a Postgres database at TEST_DATABASE_URL"]
async fn test_delete_and_missing_ids() -> Result<(), ApplicationError> {
    let uow_provider = setup_db_provider().await?;
    let uow = uow_provider.begin().await?;
    let repo = uow.players();

    let saved = repo
        .save(&player_factory(PlayerFactoryOptions::default()))
        .await?;
    let id = saved.id.expect("saved player has an id");

    repo.delete_by_id(id).await?;
    assert!(!repo.exists_by_id(id).await?);
    assert_eq!(repo.find_by_id(id).await?, None);

    let result = repo.delete_by_id(id).await;
    assert!(matches!(
        result,
        Err(ApplicationError::Db(DbError::PlayerNotFound(missing))) if missing == id.get()
    ));

    let unknown = PlayerId::new(i64::MAX)?;
    let mut ghost = saved.clone();
    ghost.id = Some(unknown);
    assert!(repo.save(&ghost).await.unwrap_err().is_not_found());
    Ok(())
}

#[tokio::test]
#[ignore = "needs a Postgres database at TEST_DATABASE_URL"]
async fn test_find_all_feeds_the_query_engine() -> Result<(), ApplicationError> {
    let uow_provider = setup_db_provider().await?;
    let uow = uow_provider.begin().await?;
    let repo = uow.players();

    for name in ["Merry", "Pippin", "Sam"] {
        repo.save(&player_factory(PlayerFactoryOptions {
            name: Some(name),
            race: Some(Race::Hobbit),
            ..Default::default()
        }))
        .await?;
    }

    let mut query = PlayerQuery::default();
    query.filter.race = Some(Race::Hobbit);
    query.pagination.page_size = 10;

    let hobbits = query.run(repo.find_all().await?);
    assert!(hobbits.len() >= 3);
    assert!(hobbits.windows(2).all(|w| w[0].id < w[1].id));
    Ok(())
}
