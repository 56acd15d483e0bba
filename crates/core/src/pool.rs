use crate::{Card, CardId};
use std::collections::{HashMap, HashSet};

/// Resolves card ids to monster records. Unknown ids and spells/traps yield `None`.
pub trait CatalogLookup {
    fn resolve(&self, id: CardId) -> Option<Card>;
}

impl CatalogLookup for HashMap<CardId, Card> {
    fn resolve(&self, id: CardId) -> Option<Card> {
        self.get(&id).filter(|card| card.is_monster()).cloned()
    }
}

impl<T: CatalogLookup + ?Sized> CatalogLookup for &T {
    fn resolve(&self, id: CardId) -> Option<Card> {
        (**self).resolve(id)
    }
}

/// Ordered, duplicate-free set of monsters under analysis.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardPool {
    cards: Vec<Card>,
}

#[derive(Debug, Clone, Default)]
pub struct PoolBuild {
    pub pool: CardPool,
    pub unresolved: Vec<CardId>,
    pub duplicates: Vec<CardId>,
}

impl CardPool {
    /// Builds a pool from raw deck ids, keeping the first copy of each resolvable monster.
    pub fn from_ids<I, L>(ids: I, lookup: &L) -> PoolBuild
    where
        I: IntoIterator<Item = CardId>,
        L: CatalogLookup + ?Sized,
    {
        let mut seen = HashSet::new();
        let mut cards = Vec::new();
        let mut unresolved = Vec::new();
        let mut duplicates = Vec::new();
        for id in ids {
            if seen.contains(&id) {
                duplicates.push(id);
                continue;
            }
            match lookup.resolve(id) {
                Some(card) if card.is_monster() => {
                    seen.insert(id);
                    cards.push(card);
                }
                _ => {
                    if !unresolved.contains(&id) {
                        unresolved.push(id);
                    }
                }
            }
        }
        PoolBuild {
            pool: CardPool { cards },
            unresolved,
            duplicates,
        }
    }

    /// Builds a pool from already resolved cards, dropping non-monsters and repeated ids.
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        let mut seen = HashSet::new();
        let cards = cards
            .into_iter()
            .filter(|card| card.is_monster() && seen.insert(card.id))
            .collect();
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn get(&self, pos: usize) -> Option<&Card> {
        self.cards.get(pos)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    pub fn position(&self, id: CardId) -> Option<usize> {
        self.cards.iter().position(|card| card.id == id)
    }

    pub fn contains(&self, id: CardId) -> bool {
        self.position(id).is_some()
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Card> {
        self.cards.iter().find(|card| card.name == name)
    }
}

impl std::ops::Index<usize> for CardPool {
    type Output = Card;

    fn index(&self, pos: usize) -> &Card {
        &self.cards[pos]
    }
}

impl<'a> IntoIterator for &'a CardPool {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
