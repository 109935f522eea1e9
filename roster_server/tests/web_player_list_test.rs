
use chrono::{TimeZone, Utc};
use reqwest::StatusCode;

use roster_core::ApplicationError;
use roster_game::models::player::Player;

use crate::test_utils::tests::{TestServer, sample_roster, setup_web_app};

async fn list(server: &TestServer, query: &str) -> Vec<Player> {
    let res = server
        .client
        .get(server.url(&format!("/rest/players?{query}")))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK, "query {query}");
    res.json().await.unwrap()
}

async fn count(server: &TestServer, query: &str) -> usize {
    let res = server
        .client
        .get(server.url(&format!("/rest/players/count?{query}")))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK, "query {query}");
    res.json().await.unwrap()
}

fn ids(players: &[Player]) -> Vec<i64> {
    players.iter().filter_map(|p| p.id.map(|id| id.get())).collect()
}

#[tokio::test]
async fn test_default_list_is_first_page_by_id() -> Result<(), ApplicationError> {
    let server = setup_web_app().await?;
    server.seed(sample_roster());

    assert_eq!(ids(&list(&server, "").await), vec![1, 2, 3]);
    assert_eq!(ids(&list(&server, "order=id").await), vec![1, 2, 3]);
    Ok(())
}

#[tokio::test]
async fn test_filters() -> Result<(), ApplicationError> {
    let server = setup_web_app().await?;
    server.seed(sample_roster());

    assert_eq!(ids(&list(&server, "minLevel=5&maxLevel=5&pageSize=5").await), vec![1, 3]);
    assert_eq!(ids(&list(&server, "name=o&pageSize=5").await), vec![1, 2, 4, 5]);
    assert!(list(&server, "name=O").await.is_empty());
    assert_eq!(ids(&list(&server, "title=of&pageSize=5").await), vec![1, 2, 3]);
    assert_eq!(ids(&list(&server, "race=elf").await), vec![2]);
    assert_eq!(ids(&list(&server, "profession=ROGUE").await), vec![2, 4]);
    assert_eq!(ids(&list(&server, "banned=true").await), vec![3, 5]);
    assert_eq!(ids(&list(&server, "banned=false&pageSize=5").await), vec![1, 2, 4]);
    assert_eq!(
        ids(&list(&server, "minExperience=300&maxExperience=1500").await),
        vec![1, 2]
    );

    let after = Utc.with_ymd_and_hms(2006, 1, 1, 0, 0, 0).unwrap();
    let before = Utc.with_ymd_and_hms(2500, 1, 1, 0, 0, 0).unwrap();
    let query = format!(
        "after={}&before={}&pageSize=5",
        after.timestamp_millis(),
        before.timestamp_millis()
    );
    assert_eq!(ids(&list(&server, &query).await), vec![2, 4]);
    Ok(())
}

#[tokio::test]
async fn test_ordering() -> Result<(), ApplicationError> {
    let server = setup_web_app().await?;
    server.seed(sample_roster());

    let query = "order=EXPERIENCE&pageSize=5";
    assert_eq!(ids(&list(&server, query).await), vec![4, 2, 1, 3, 5]);

    let query = "order=birthday&pageSize=5";
    assert_eq!(ids(&list(&server, query).await), vec![3, 1, 2, 4, 5]);

    // Aragorn and Gimli share level 5, their relative order is unspecified.
    let query = "order=level&pageSize=5";
    let mut by_level = ids(&list(&server, query).await);
    assert_eq!(&by_level[..2], &[4, 2]);
    assert_eq!(by_level[4], 5);
    by_level[2..4].sort();
    assert_eq!(&by_level[2..4], &[1, 3]);
    Ok(())
}

#[tokio::test]
async fn test_pagination_covers_every_player_once() -> Result<(), ApplicationError> {
    let server = setup_web_app().await?;
    server.seed(sample_roster());

    let mut seen = Vec::new();
    for page in 0..3 {
        let players = list(&server, &format!("pageSize=2&pageNumber={page}")).await;
        seen.extend(ids(&players));
    }
    assert_eq!(seen, vec![1, 2, 3, 4, 5]);

    assert!(list(&server, "pageSize=2&pageNumber=7").await.is_empty());
    assert!(list(&server, "pageSize=0").await.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_count_ignores_pagination() -> Result<(), ApplicationError> {
    let server = setup_web_app().await?;
    server.seed(sample_roster());

    assert_eq!(count(&server, "").await, 5);
    assert_eq!(count(&server, "pageSize=1&pageNumber=3").await, 5);
    assert_eq!(count(&server, "banned=true").await, 2);
    assert_eq!(count(&server, "race=ORC").await, 0);
    Ok(())
}

#[tokio::test]
async fn test_bad_query_parameters_are_rejected() -> Result<(), ApplicationError> {
    let server = setup_web_app().await?;
    server.seed(sample_roster());

    for query in [
        "race=GOBLIN",
        "profession=bard",
        "order=name",
        "minLevel=high",
        "banned=maybe",
        "pageNumber=-1",
        "pageSize=-2",
        "pageSize=1000",
    ] {
        let res = server
            .client
            .get(server.url(&format!("/rest/players?{query}")))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST, "query {query}");
    }

    let res = server
        .client
        .get(server.url("/rest/players/count?race=GOBLIN"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    Ok(())
}
