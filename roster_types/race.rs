use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::parse::UnknownVariant;

#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "UPPERCASE", try_from = "String")]
pub enum Race {
    Human,
    Dwarf,
    Elf,
    Giant,
    Orc,
    Troll,
    Hobbit,
}

impl Race {
    pub const ALL: [Race; 7] = [
        Race::Human,
        Race::Dwarf,
        Race::Elf,
        Race::Giant,
        Race::Orc,
        Race::Troll,
        Race::Hobbit,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Race::Human => "HUMAN",
            Race::Dwarf => "DWARF",
            Race::Elf => "ELF",
            Race::Giant => "GIANT",
            Race::Orc => "ORC",
            Race::Troll => "TROLL",
            Race::Hobbit => "HOBBIT",
        }
    }
}

impl fmt::Display for Race {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Race {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Race::ALL
            .into_iter()
            .find(|race| race.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownVariant::new("race", s))
    }
}

impl TryFrom<String> for Race {
    type Error = UnknownVariant;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
