use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::parse::UnknownVariant;

/// Field a player listing is sorted by. Sorting is always ascending.
#[derive(Debug, Clone, Copy, Default, Hash, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "UPPERCASE", try_from = "String")]
pub enum PlayerOrder {
    #[default]
    Id,
    Birthday,
    Experience,
    Level,
}

impl PlayerOrder {
    pub const ALL: [PlayerOrder; 4] = [
        PlayerOrder::Id,
        PlayerOrder::Birthday,
        PlayerOrder::Experience,
        PlayerOrder::Level,
    ];

    /// Name of the player field this order sorts by.
    pub fn field_name(&self) -> &'static str {
        match self {
            PlayerOrder::Id => "id",
            PlayerOrder::Birthday => "birthday",
            PlayerOrder::Experience => "experience",
            PlayerOrder::Level => "level",
        }
    }
}

impl fmt::Display for PlayerOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field_name())
    }
}

/// Accepts both the field name (`experience`) and the variant name
/// (`EXPERIENCE`), ignoring case.
impl FromStr for PlayerOrder {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PlayerOrder::ALL
            .into_iter()
            .find(|order| order.field_name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownVariant::new("order", s))
    }
}

impl TryFrom<String> for PlayerOrder {
    type Error = UnknownVariant;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_id() {
        assert_eq!(PlayerOrder::default(), PlayerOrder::Id);
    }

    #[test]
    fn parses_field_and_variant_names() {
        assert_eq!("id".parse::<PlayerOrder>(), Ok(PlayerOrder::Id));
        assert_eq!("BIRTHDAY".parse::<PlayerOrder>(), Ok(PlayerOrder::Birthday));
        assert_eq!("Experience".parse::<PlayerOrder>(), Ok(PlayerOrder::Experience));
        assert_eq!("level".parse::<PlayerOrder>(), Ok(PlayerOrder::Level));
    }

    #[test]
    fn every_variant_maps_to_its_own_field() {
        let names: Vec<_> = PlayerOrder::ALL.iter().map(|o| o.field_name()).collect();
        assert_eq!(names, vec!["id", "birthday", "experience", "level"]);
    }

    #[test]
    fn rejects_unknown_fields() {
        let err = "name".parse::<PlayerOrder>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown order 'name'");
    }
}
