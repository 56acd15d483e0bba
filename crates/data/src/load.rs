use crate::deck::{parse_deck, DeckList};
use crate::schema::{CardDef, CatalogFile};
use anyhow::Context;
use serde::de::DeserializeOwned;
use smallworld_core::{Card, CardId, CardPool, CatalogLookup, PoolBuild};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

pub const DEFAULT_CATALOG_FILE: &str = "cardinfo.php.json";
pub const DEFAULT_DECK_FILE: &str = "deck.ydk";

/// In-memory card database keyed by id.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    cards: HashMap<CardId, CardDef>,
}

impl Catalog {
    /// Later records with an id already seen are ignored.
    pub fn from_defs(defs: impl IntoIterator<Item = CardDef>) -> Self {
        let mut cards = HashMap::new();
        for def in defs {
            cards.entry(CardId(def.id)).or_insert(def);
        }
        Self { cards }
    }

    pub fn get(&self, id: CardId) -> Option<&CardDef> {
        self.cards.get(&id)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl CatalogLookup for Catalog {
    fn resolve(&self, id: CardId) -> Option<Card> {
        let def = self.get(id)?;
        if !def.kind().is_monster() {
            debug!(%id, name = %def.name, "skipping non-monster");
            return None;
        }
        Some(def.to_card())
    }
}

pub fn load_catalog(path: &Path) -> anyhow::Result<Catalog> {
    let file: CatalogFile = load_json(path)?;
    let catalog = Catalog::from_defs(file.data);
    info!(path = %path.display(), cards = catalog.len(), "loaded card catalog");
    Ok(catalog)
}

pub fn load_deck(path: &Path) -> anyhow::Result<DeckList> {
    let raw = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let deck = parse_deck(&raw).with_context(|| format!("parse {}", path.display()))?;
    debug!(path = %path.display(), entries = deck.main.len(), "read deck list");
    Ok(deck)
}

/// Resolves a deck list against the catalog, reporting ids that were dropped.
pub fn build_pool(deck: &DeckList, catalog: &Catalog) -> PoolBuild {
    let built = CardPool::from_ids(deck.main.iter().copied(), catalog);
    for id in &built.unresolved {
        warn!(%id, "card id is unknown or not a monster; excluded from the pool");
    }
    if !built.duplicates.is_empty() {
        debug!(count = built.duplicates.len(), "collapsed repeated deck entries");
    }
    info!(monsters = built.pool.len(), "built card pool");
    built
}

pub fn load_pool(catalog_path: &Path, deck_path: &Path) -> anyhow::Result<PoolBuild> {
    let catalog = load_catalog(catalog_path)?;
    let deck = load_deck(deck_path)?;
    Ok(build_pool(&deck, &catalog))
}

fn load_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> anyhow::Result<T> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let value = serde_json::from_str(&raw).with_context(|| format!("parse {}", path.display()))?;
    Ok(value)
}
