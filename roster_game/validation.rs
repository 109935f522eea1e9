use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

use roster_core::ValidationError;
use roster_types::{Profession, Race};

use crate::models::player::Player;

pub const NAME_MAX_CHARS: usize = 12;
pub const TITLE_MAX_CHARS: usize = 30;
pub const MAX_EXPERIENCE: i64 = 10_000_000;
pub const BIRTHDAY_YEARS: std::ops::RangeInclusive<i32> = 2000..=3000;

/// Full player payload for creation. Everything is optional so that a
/// missing field surfaces as a [`ValidationError`] instead of a decoding
/// failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPlayer {
    pub name: Option<String>,
    pub title: Option<String>,
    pub race: Option<Race>,
    pub profession: Option<Profession>,
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub birthday: Option<DateTime<Utc>>,
    pub banned: Option<bool>,
    pub experience: Option<i64>,
}

impl NewPlayer {
    /// Checks every rule and builds the unsaved player, with `banned`
    /// defaulting to false and level fields derived.
    pub fn validate(self) -> Result<Player, ValidationError> {
        let name = self.name.ok_or(ValidationError::MissingField("name"))?;
        let title = self.title.ok_or(ValidationError::MissingField("title"))?;
        let race = self.race.ok_or(ValidationError::MissingField("race"))?;
        let profession = self
            .profession
            .ok_or(ValidationError::MissingField("profession"))?;
        let experience = self
            .experience
            .ok_or(ValidationError::MissingField("experience"))?;
        let birthday = self
            .birthday
            .ok_or(ValidationError::MissingField("birthday"))?;

        check_name(&name)?;
        check_title(&title)?;
        let experience = check_experience(experience)?;
        check_birthday(&birthday)?;

        Ok(Player::new(
            name,
            title,
            race,
            profession,
            birthday,
            self.banned.unwrap_or(false),
            experience,
        ))
    }
}

/// Partial player payload for updates. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerChanges {
    pub name: Option<String>,
    pub title: Option<String>,
    pub race: Option<Race>,
    pub profession: Option<Profession>,
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub birthday: Option<DateTime<Utc>>,
    pub banned: Option<bool>,
    pub experience: Option<i64>,
}

impl PlayerChanges {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(name) = &self.name {
            check_name(name)?;
        }
        if let Some(title) = &self.title {
            check_title(title)?;
        }
        if let Some(experience) = self.experience {
            check_experience(experience)?;
        }
        if let Some(birthday) = &self.birthday {
            check_birthday(birthday)?;
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.title.is_none()
            && self.race.is_none()
            && self.profession.is_none()
            && self.birthday.is_none()
            && self.banned.is_none()
            && self.experience.is_none()
    }
}

fn check_name(name: &str) -> Result<(), ValidationError> {
    let len = name.chars().count();
    if len == 0 || len > NAME_MAX_CHARS {
        return Err(ValidationError::NameLength);
    }
    Ok(())
}

fn check_title(title: &str) -> Result<(), ValidationError> {
    let len = title.chars().count();
    if len == 0 || len > TITLE_MAX_CHARS {
        return Err(ValidationError::TitleLength);
    }
    Ok(())
}

fn check_experience(experience: i64) -> Result<i32, ValidationError> {
    if !(0..=MAX_EXPERIENCE).contains(&experience) {
        return Err(ValidationError::ExperienceOutOfRange(experience));
    }
    Ok(experience as i32)
}

fn check_birthday(birthday: &DateTime<Utc>) -> Result<(), ValidationError> {
    let year = birthday.year();
    if !BIRTHDAY_YEARS.contains(&year) {
        return Err(ValidationError::BirthdayOutOfRange(year));
    }
    Ok(())
}
