use chrono::{DateTime, Utc};
use serde::Deserialize;

use roster_core::ValidationError;
use roster_game::query::{Pagination, PlayerFilter, PlayerQuery};
use roster_types::{PlayerOrder, Profession, Race};

/// Query string of the list and count endpoints. Enum names and timestamps
/// arrive raw and are parsed here so bad values surface as validation errors.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerListParams {
    pub name: Option<String>,
    pub title: Option<String>,
    pub race: Option<String>,
    pub profession: Option<String>,
    pub after: Option<i64>,
    pub before: Option<i64>,
    pub banned: Option<bool>,
    pub min_experience: Option<i32>,
    pub max_experience: Option<i32>,
    pub min_level: Option<i32>,
    pub max_level: Option<i32>,
    pub order: Option<String>,
    pub page_number: Option<i64>,
    pub page_size: Option<i64>,
}

impl PlayerListParams {
    pub fn to_filter(&self) -> Result<PlayerFilter, ValidationError> {
        Ok(PlayerFilter {
            name: self.name.clone(),
            title: self.title.clone(),
            race: self.race.as_deref().map(str::parse::<Race>).transpose()?,
            profession: self
                .profession
                .as_deref()
                .map(str::parse::<Profession>)
                .transpose()?,
            after: self.after.map(from_millis).transpose()?,
            before: self.before.map(from_millis).transpose()?,
            banned: self.banned,
            min_experience: self.min_experience,
            max_experience: self.max_experience,
            min_level: self.min_level,
            max_level: self.max_level,
        })
    }

    pub fn to_query(&self, default_page_size: u32) -> Result<PlayerQuery, ValidationError> {
        let order = match self.order.as_deref() {
            Some(raw) => raw.parse::<PlayerOrder>()?,
            None => PlayerOrder::default(),
        };
        let pagination = Pagination::new(
            self.page_number.unwrap_or(0),
            self.page_size.unwrap_or(i64::from(default_page_size)),
        )?;

        Ok(PlayerQuery {
            filter: self.to_filter()?,
            order,
            pagination,
        })
    }
}

fn from_millis(millis: i64) -> Result<DateTime<Utc>, ValidationError> {
    DateTime::from_timestamp_millis(millis)
        .ok_or_else(|| ValidationError::MalformedRequest(format!("invalid timestamp {millis}")))
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    #[test]
    fn empty_params_give_default_query() {
        let query = PlayerListParams::default().to_query(3).unwrap();
        assert_eq!(query, PlayerQuery::default());
    }

    #[test]
    fn parses_enums_case_insensitively() {
        let params = PlayerListParams {
            race: Some("elf".to_string()),
            profession: Some("Druid".to_string()),
            order: Some("LEVEL".to_string()),
            ..Default::default()
        };

        let query = params.to_query(3).unwrap();
        assert_eq!(query.filter.race, Some(Race::Elf));
        assert_eq!(query.filter.profession, Some(Profession::Druid));
        assert_eq!(query.order, PlayerOrder::Level);
    }

    #[test]
    fn converts_millis_to_birthday_bounds() {
        let after = Utc.with_ymd_and_hms(2005, 1, 1, 0, 0, 0).unwrap();
        let params = PlayerListParams {
            after: Some(after.timestamp_millis()),
            ..Default::default()
        };

        assert_eq!(params.to_filter().unwrap().after, Some(after));
    }

    #[test]
    fn unknown_race_is_a_validation_error() {
        let params = PlayerListParams {
            race: Some("GOBLIN".to_string()),
            ..Default::default()
        };

        assert!(matches!(
            params.to_filter(),
            Err(ValidationError::UnknownValue(_))
        ));
    }

    #[test]
    fn uses_given_default_page_size() {
        let query = PlayerListParams::default().to_query(10).unwrap();
        assert_eq!(query.pagination.page_size, 10);

        let params = PlayerListParams {
            page_number: Some(2),
            page_size: Some(5),
            ..Default::default()
        };
        let pagination = params.to_query(10).unwrap().pagination;
        assert_eq!((pagination.page_number, pagination.page_size), (2, 5));
    }

    #[test]
    fn rejects_negative_page_number() {
        let params = PlayerListParams {
            page_number: Some(-1),
            ..Default::default()
        };

        assert_eq!(
            params.to_query(3).unwrap_err(),
            ValidationError::InvalidPagination
        );
    }

    #[test]
    fn accepts_zero_page_size() {
        let params = PlayerListParams {
            page_size: Some(0),
            ..Default::default()
        };

        assert_eq!(params.to_query(3).unwrap().pagination.page_size, 0);
    }
}
