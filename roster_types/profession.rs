use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::parse::UnknownVariant;

#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "UPPERCASE", try_from = "String")]
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

impl Profession {
    pub const ALL: [Profession; 8] = [
        Profession::Warrior,
        Profession::Rogue,
        Profession::Sorcerer,
        Profession::Cleric,
        Profession::Paladin,
        Profession::Nazgul,
        Profession::Warlock,
        Profession::Druid,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Profession::Warrior => "WARRIOR",
            Profession::Rogue => "ROGUE",
            Profession::Sorcerer => "SORCERER",
            Profession::Cleric => "CLERIC",
            Profession::Paladin => "PALADIN",
            Profession::Nazgul => "NAZGUL",
            Profession::Warlock => "WARLOCK",
            Profession::Druid => "DRUID",
        }
    }
}

impl fmt::Display for Profession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Profession {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Profession::ALL
            .into_iter()
            .find(|profession| profession.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownVariant::new("profession", s))
    }
}

impl TryFrom<String> for Profession {
    type Error = UnknownVariant;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_variant_round_trips_through_its_name() {
        for profession in Profession::ALL {
            assert_eq!(profession.as_str().parse::<Profession>(), Ok(profession));
        }
    }

    #[test]
    fn rejects_unknown_names() {
        assert!("Clerk".parse::<Profession>().is_err());
        assert!("".parse::<Profession>().is_err());
    }
}
