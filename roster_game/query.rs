//! Filtering, sorting and paging over a full player collection.
//!
//! The store hands over a fresh copy of every player; the functions here
//! consume it and keep nothing between calls.

use chrono::{DateTime, Utc};

use roster_core::ValidationError;
use roster_types::{PlayerOrder, Profession, Race};

use crate::models::player::Player;

pub const DEFAULT_PAGE_SIZE: u32 = 3;

/// Optional constraints on a player. Only supplied criteria apply and all
/// of them must hold.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerFilter {
    pub name: Option<String>,
    pub title: Option<String>,
    pub race: Option<Race>,
    pub profession: Option<Profession>,
    pub after: Option<DateTime<Utc>>,
    pub before: Option<DateTime<Utc>>,
    pub banned: Option<bool>,
    pub min_experience: Option<i32>,
    pub max_experience: Option<i32>,
    pub min_level: Option<i32>,
    pub max_level: Option<i32>,
}

impl PlayerFilter {
    pub fn matches(&self, player: &Player) -> bool {
        self.name
            .as_deref()
            .is_none_or(|name| player.name.contains(name))
            && self
                .title
                .as_deref()
                .is_none_or(|title| player.title.contains(title))
            && self.race.is_none_or(|race| player.race == race)
            && self
                .profession
                .is_none_or(|profession| player.profession == profession)
            && self.after.is_none_or(|after| player.birthday > after)
            && self.before.is_none_or(|before| player.birthday < before)
            && self.banned.is_none_or(|banned| player.banned == banned)
            && self
                .min_experience
                .is_none_or(|min| player.experience >= min)
            && self
                .max_experience
                .is_none_or(|max| player.experience <= max)
            && self.min_level.is_none_or(|min| player.level >= min)
            && self.max_level.is_none_or(|max| player.level <= max)
    }

    pub fn apply(&self, players: Vec<Player>) -> Vec<Player> {
        players.into_iter().filter(|p| self.matches(p)).collect()
    }
}

/// A zero-based page window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page_number: u32,
    pub page_size: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page_number: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Pagination {
    pub fn new(page_number: i64, page_size: i64) -> Result<Self, ValidationError> {
        let page_number =
            u32::try_from(page_number).map_err(|_| ValidationError::InvalidPagination)?;
        let page_size = u32::try_from(page_size).map_err(|_| ValidationError::InvalidPagination)?;

        Ok(Self {
            page_number,
            page_size,
        })
    }

    pub fn limited_to(self, max_page_size: u32) -> Result<Self, ValidationError> {
        if self.page_size > max_page_size {
            return Err(ValidationError::PageSizeTooLarge(self.page_size));
        }
        Ok(self)
    }

    pub fn offset(&self) -> usize {
        (self.page_number as usize).saturating_mul(self.page_size as usize)
    }
}

/// Stable ascending sort on the selected field.
pub fn sort_players(players: &mut [Player], order: PlayerOrder) {
    match order {
        PlayerOrder::Id => players.sort_by_key(|p| p.id),
        PlayerOrder::Birthday => players.sort_by_key(|p| p.birthday),
        PlayerOrder::Experience => players.sort_by_key(|p| p.experience),
        PlayerOrder::Level => players.sort_by_key(|p| p.level),
    }
}

/// Cuts one page out of an already sorted collection. Pages past the end
/// are empty.
pub fn paginate(players: Vec<Player>, pagination: Pagination) -> Vec<Player> {
    players
        .into_iter()
        .skip(pagination.offset())
        .take(pagination.page_size as usize)
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerQuery {
    pub filter: PlayerFilter,
    pub order: PlayerOrder,
    pub pagination: Pagination,
}

impl PlayerQuery {
    /// filter, then sort, then page.
    pub fn run(&self, players: Vec<Player>) -> Vec<Player> {
        let mut matching = self.filter.apply(players);
        sort_players(&mut matching, self.order);
        paginate(matching, self.pagination)
    }
}
