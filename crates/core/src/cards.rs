use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct CardId(pub u32);

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for CardId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum CardKind {
    Monster,
    Spell,
    Trap,
}

impl CardKind {
    /// Classifies a catalog type line such as "Effect Monster" or "Quick-Play Spell Card".
    pub fn from_type_line(type_line: &str) -> Self {
        let upper = type_line.to_ascii_uppercase();
        if upper.contains("SPELL") {
            Self::Spell
        } else if upper.contains("TRAP") {
            Self::Trap
        } else {
            Self::Monster
        }
    }

    pub fn is_monster(self) -> bool {
        matches!(self, Self::Monster)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Card {
    pub id: CardId,
    pub name: String,
    pub kind: CardKind,
    pub race: String,
    pub attribute: String,
    #[serde(default)]
    pub level: i32,
    #[serde(default)]
    pub atk: i32,
    #[serde(default)]
    pub def: i32,
}

impl Card {
    pub fn monster(
        id: u32,
        name: impl Into<String>,
        race: impl Into<String>,
        attribute: impl Into<String>,
        level: i32,
        atk: i32,
        def: i32,
    ) -> Self {
        Self {
            id: CardId(id),
            name: name.into(),
            kind: CardKind::Monster,
            race: race.into(),
            attribute: attribute.into(),
            level,
            atk,
            def,
        }
    }

    pub fn is_monster(&self) -> bool {
        self.kind.is_monster()
    }
}
