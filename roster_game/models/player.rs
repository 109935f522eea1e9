use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use roster_core::ValidationError;
use roster_types::{Profession, Race};

use crate::{leveling, validation::PlayerChanges};

/// Identifier assigned by the store on first save. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(i64);

impl PlayerId {
    pub fn new(id: i64) -> Result<Self, ValidationError> {
        if id <= 0 {
            return Err(ValidationError::InvalidId);
        }
        Ok(Self(id))
    }

    /// Parses an id coming from a URL segment. Anything that isn't a
    /// positive integer is rejected.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let id = raw
            .trim()
            .parse::<i64>()
            .map_err(|_| ValidationError::InvalidId)?;
        Self::new(id)
    }

    pub fn get(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PlayerId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    /// `None` until the player has been saved.
    pub id: Option<PlayerId>,
    pub name: String,
    pub title: String,
    pub race: Race,
    pub profession: Profession,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub birthday: DateTime<Utc>,
    pub banned: bool,
    pub experience: i32,
    pub level: i32,
    pub until_next_level: i32,
}

impl Player {
    /// Builds an unsaved player. Inputs are trusted here, see
    /// [`crate::validation::NewPlayer`] for the checked path.
    pub fn new(
        name: String,
        title: String,
        race: Race,
        profession: Profession,
        birthday: DateTime<Utc>,
        banned: bool,
        experience: i32,
    ) -> Self {
        let mut player = Self {
            id: None,
            name,
            title,
            race,
            profession,
            birthday,
            banned,
            experience,
            level: 0,
            until_next_level: 0,
        };
        player.recompute_level();
        player
    }

    /// Overwrites `level` and `until_next_level` from the current experience.
    pub fn recompute_level(&mut self) {
        self.level = leveling::level_for(self.experience);
        self.until_next_level = leveling::until_next_level(self.level, self.experience);
    }

    /// Applies a partial update. Every supplied field is checked before any
    /// of them is written, so a rejected update leaves the player untouched.
    pub fn apply_changes(&mut self, changes: PlayerChanges) -> Result<(), ValidationError> {
        changes.validate()?;

        if let Some(name) = changes.name {
            self.name = name;
        }
        if let Some(title) = changes.title {
            self.title = title;
        }
        if let Some(race) = changes.race {
            self.race = race;
        }
        if let Some(profession) = changes.profession {
            self.profession = profession;
        }
        if let Some(experience) = changes.experience {
            // validate() keeps this within 0..=10_000_000
            self.experience = experience as i32;
        }
        if let Some(birthday) = changes.birthday {
            self.birthday = birthday;
        }
        if let Some(banned) = changes.banned {
            self.banned = banned;
        }

        self.recompute_level();
        Ok(())
    }
}
