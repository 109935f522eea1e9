use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(sqlx::Type, Debug, Clone, Copy, PartialEq, Eq)]
#[sqlx(type_name = "race", rename_all = "UPPERCASE")]
pub enum Race {
    Human,
    Dwarf,
    Elf,
    Giant,
    Orc,
    Troll,
    Hobbit,
}

#[derive(sqlx::Type, Debug, Clone, Copy, PartialEq, Eq)]
#[sqlx(type_name = "profession", rename_all = "UPPERCASE")]
pub enum Profession {
    Warrior,
    Rogue,
    Sorcerer,
    Cleric,
    Paladin,
    Nazgul,
    Warlock,
    Druid,
}

#[derive(Debug, FromRow, Clone)]
pub struct Player {
    pub id: i64,
    pub name: String,
    pub title: String,
    pub race: Race,
    pub profession: Profession,
    pub birthday: DateTime<Utc>,
    pub banned: bool,
    pub experience: i32,
    pub level: i32,
    pub until_next_level: i32,
}
