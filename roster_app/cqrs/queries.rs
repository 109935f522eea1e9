use roster_game::{
    models::player::{Player, PlayerId},
    query::{PlayerFilter, PlayerQuery},
};

use crate::cqrs::Query;

/// Fetch the player entity by player id.
pub struct GetPlayerById {
    pub id: PlayerId,
}

impl Query for GetPlayerById {
    type Output = Player;
}

/// One sorted page of the players matching a filter.
pub struct ListPlayers {
    pub query: PlayerQuery,
}

impl Query for ListPlayers {
    type Output = Vec<Player>;
}

/// How many players match a filter, ignoring pagination.
pub struct CountPlayers {
    pub filter: PlayerFilter,
}

impl Query for CountPlayers {
    type Output = usize;
}
