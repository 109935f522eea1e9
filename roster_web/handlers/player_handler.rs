use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use axum_extra::extract::{Query, WithRejection};

use roster_app::{
    command_handlers::{
        CreatePlayerCommandHandler, DeletePlayerCommandHandler, UpdatePlayerCommandHandler,
    },
    cqrs::{
        commands::{CreatePlayer, DeletePlayer, UpdatePlayer},
        queries::{CountPlayers, GetPlayerById, ListPlayers},
    },
    queries_handlers::{CountPlayersHandler, GetPlayerByIdHandler, ListPlayersHandler},
};
use roster_game::{
    models::player::{Player, PlayerId},
    validation::{NewPlayer, PlayerChanges},
};

use crate::{error::ApiError, handlers::PlayerListParams, http::AppState};

/// GET /rest/players
pub async fn list_players(
    State(state): State<AppState>,
    WithRejection(Query(params), _): WithRejection<Query<PlayerListParams>, ApiError>,
) -> Result<Json<Vec<Player>>, ApiError> {
    let default_page_size = state.app_bus.config().default_page_size;
    let query = params.to_query(default_page_size)?;

    let players = state
        .app_bus
        .query(ListPlayers { query }, ListPlayersHandler::new())
        .await?;
    Ok(Json(players))
}

/// GET /rest/players/count
pub async fn count_players(
    State(state): State<AppState>,
    WithRejection(Query(params), _): WithRejection<Query<PlayerListParams>, ApiError>,
) -> Result<Json<usize>, ApiError> {
    let filter = params.to_filter()?;

    let count = state
        .app_bus
        .query(CountPlayers { filter }, CountPlayersHandler::new())
        .await?;
    Ok(Json(count))
}

/// GET /rest/players/{id}
pub async fn get_player(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Player>, ApiError> {
    let id = PlayerId::parse(&id)?;

    let player = state
        .app_bus
        .query(GetPlayerById { id }, GetPlayerByIdHandler::new())
        .await?;
    Ok(Json(player))
}

/// POST /rest/players
pub async fn create_player(
    State(state): State<AppState>,
    WithRejection(Json(player), _): WithRejection<Json<NewPlayer>, ApiError>,
) -> Result<Json<Player>, ApiError> {
    let player = state
        .app_bus
        .execute(CreatePlayer { player }, CreatePlayerCommandHandler::new())
        .await?;
    Ok(Json(player))
}

/// POST /rest/players/{id}
pub async fn update_player(
    State(state): State<AppState>,
    Path(id): Path<String>,
    WithRejection(Json(changes), _): WithRejection<Json<PlayerChanges>, ApiError>,
) -> Result<Json<Player>, ApiError> {
    let id = PlayerId::parse(&id)?;

    let player = state
        .app_bus
        .execute(UpdatePlayer { id, changes }, UpdatePlayerCommandHandler::new())
        .await?;
    Ok(Json(player))
}

/// DELETE /rest/players/{id}
pub async fn delete_player(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = PlayerId::parse(&id)?;

    state
        .app_bus
        .execute(DeletePlayer { id }, DeletePlayerCommandHandler::new())
        .await?;
    Ok(StatusCode::OK)
}
