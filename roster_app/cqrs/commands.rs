use roster_game::{
    models::player::{Player, PlayerId},
    validation::{NewPlayer, PlayerChanges},
};

use crate::cqrs::Command;

/// Registers a new player from a full, not yet validated payload.
#[derive(Debug, Clone)]
pub struct CreatePlayer {
    pub player: NewPlayer,
}

impl Command for CreatePlayer {
    type Output = Player;
}

/// Applies a partial update to an existing player.
#[derive(Debug, Clone)]
pub struct UpdatePlayer {
    pub id: PlayerId,
    pub changes: PlayerChanges,
}

impl Command for UpdatePlayer {
    type Output = Player;
}

#[derive(Debug, Clone)]
pub struct DeletePlayer {
    pub id: PlayerId,
}

impl Command for DeletePlayer {
    type Output = ();
}
