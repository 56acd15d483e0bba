use crate::Card;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The five properties Small World compares.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Property {
    Race,
    Attribute,
    Level,
    Atk,
    Def,
}

impl Property {
    pub const ALL: [Property; 5] = [
        Property::Race,
        Property::Attribute,
        Property::Level,
        Property::Atk,
        Property::Def,
    ];

    fn bit(self) -> u8 {
        1 << self as u8
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Race => "type",
            Self::Attribute => "attribute",
            Self::Level => "level",
            Self::Atk => "ATK",
            Self::Def => "DEF",
        }
    }

    fn matches(self, a: &Card, b: &Card) -> bool {
        match self {
            Self::Race => a.race == b.race,
            Self::Attribute => a.attribute == b.attribute,
            Self::Level => a.level == b.level,
            Self::Atk => a.atk == b.atk,
            Self::Def => a.def == b.def,
        }
    }
}

/// Set of properties two cards have in common.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SharedProperties(u8);

impl SharedProperties {
    pub fn contains(self, property: Property) -> bool {
        self.0 & property.bit() != 0
    }

    pub fn count(self) -> u32 {
        self.0.count_ones()
    }

    pub fn iter(self) -> impl Iterator<Item = Property> {
        Property::ALL
            .into_iter()
            .filter(move |property| self.contains(*property))
    }
}

impl fmt::Display for SharedProperties {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels: Vec<&str> = self.iter().map(Property::label).collect();
        if labels.is_empty() {
            f.write_str("nothing")
        } else {
            f.write_str(&labels.join(", "))
        }
    }
}

pub fn shared_properties(a: &Card, b: &Card) -> SharedProperties {
    let mut bits = 0u8;
    for property in Property::ALL {
        if property.matches(a, b) {
            bits |= property.bit();
        }
    }
    SharedProperties(bits)
}

/// Two cards may bridge iff they share exactly one property.
pub fn small_world_legal(a: &Card, b: &Card) -> bool {
    shared_properties(a, b).count() == 1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn warrior_earth() -> Card {
        Card::monster(1, "A", "Warrior", "EARTH", 4, 1800, 1200)
    }

    #[test]
    fn single_shared_property_is_legal() {
        let a = warrior_earth();
        let b = Card::monster(2, "B", "Warrior", "FIRE", 6, 1500, 1800);
        let shared = shared_properties(&a, &b);
        assert_eq!(shared.count(), 1);
        assert!(shared.contains(Property::Race));
        assert!(small_world_legal(&a, &b));
    }

    #[test]
    fn zero_shared_properties_is_not_legal() {
        let a = warrior_earth();
        let b = Card::monster(2, "B", "Dragon", "DARK", 8, 3000, 2500);
        assert_eq!(shared_properties(&a, &b), SharedProperties::default());
        assert!(!small_world_legal(&a, &b));
    }

    #[test]
    fn two_shared_properties_is_not_legal() {
        let a = warrior_earth();
        let b = Card::monster(2, "B", "Warrior", "FIRE", 4, 1500, 1300);
        assert_eq!(shared_properties(&a, &b).count(), 2);
        assert!(!small_world_legal(&a, &b));
    }

    #[test]
    fn identical_stats_are_not_legal() {
        let a = warrior_earth();
        let mut b = warrior_earth();
        b.id = crate::CardId(2);
        assert_eq!(shared_properties(&a, &b).count(), 5);
        assert!(!small_world_legal(&a, &b));
    }

    #[test]
    fn display_lists_shared_labels_in_order() {
        let a = warrior_earth();
        let b = Card::monster(2, "B", "Beast", "EARTH", 4, 1800, 1300);
        assert_eq!(shared_properties(&a, &b).to_string(), "attribute, level, ATK");
    }
}
