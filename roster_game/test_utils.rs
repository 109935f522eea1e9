use chrono::{DateTime, TimeZone, Utc};
use rand::Rng;

use roster_types::{Profession, Race};

use crate::models::player::{Player, PlayerId};

#[derive(Default, Clone)]
pub struct PlayerFactoryOptions<'a> {
    pub id: Option<i64>,
    pub name: Option<&'a str>,
    pub title: Option<&'a str>,
    pub race: Option<Race>,
    pub profession: Option<Profession>,
    pub experience: Option<i32>,
    pub birthday: Option<DateTime<Utc>>,
    pub banned: Option<bool>,
}

/// Builds a consistent player. Unset fields get random or fixed defaults;
/// `id` stays `None` unless given.
pub fn player_factory(options: PlayerFactoryOptions) -> Player {
    let mut rng = rand::thread_rng();
    let default_name = format!("user_{}", rng.gen_range(0..100_000));
    let default_birthday = Utc
        .with_ymd_and_hms(rng.gen_range(2000..=2999), 1, 1, 0, 0, 0)
        .single()
        .unwrap_or_else(Utc::now);

    let mut player = Player::new(
        options.name.map_or(default_name, |s| s.to_string()),
        options.title.unwrap_or("Adventurer").to_string(),
        options.race.unwrap_or(Race::Human),
        options.profession.unwrap_or(Profession::Warrior),
        options.birthday.unwrap_or(default_birthday),
        options.banned.unwrap_or(false),
        options
            .experience
            .unwrap_or_else(|| rng.gen_range(0..=10_000_000)),
    );
    player.id = options.id.and_then(|id| PlayerId::new(id).ok());
    player
}
