mod params;
mod player_handler;

pub use params::PlayerListParams;
pub use player_handler::{
    count_players, create_player, delete_player, get_player, list_players, update_player,
};
