use crate::{Card, CardId, ResolvedRoute, RouteSet};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("no starter at position {index} ({available} available)")]
    NoSuchStarter { index: usize, available: usize },
    #[error("no target at position {index} ({available} available)")]
    NoSuchTarget { index: usize, available: usize },
    #[error("no route uses a card named {0:?}")]
    UnknownName(String),
}

/// Starter and target views over a route set, keyed by card id.
#[derive(Debug, Clone)]
pub struct RouteIndex<'a> {
    routes: &'a RouteSet,
    starters: Vec<CardId>,
    targets: Vec<CardId>,
}

impl<'a> RouteIndex<'a> {
    pub fn build(routes: &'a RouteSet) -> Self {
        let mut starters: Vec<CardId> = Vec::new();
        let mut targets: Vec<CardId> = Vec::new();
        for route in routes.iter() {
            if !starters.contains(&route.starter.id) {
                starters.push(route.starter.id);
            }
            if !targets.contains(&route.target.id) {
                targets.push(route.target.id);
            }
        }
        Self {
            routes,
            starters,
            targets,
        }
    }

    pub fn route_set(&self) -> &'a RouteSet {
        self.routes
    }

    pub fn starter_ids(&self) -> &[CardId] {
        &self.starters
    }

    pub fn target_ids(&self) -> &[CardId] {
        &self.targets
    }

    pub fn starters(&self) -> Vec<&'a Card> {
        self.cards_for(&self.starters)
    }

    pub fn targets(&self) -> Vec<&'a Card> {
        self.cards_for(&self.targets)
    }

    pub fn starter_names(&self) -> Vec<&'a str> {
        self.starters().into_iter().map(|card| card.name.as_str()).collect()
    }

    pub fn target_names(&self) -> Vec<&'a str> {
        self.targets().into_iter().map(|card| card.name.as_str()).collect()
    }

    pub fn has_starter(&self, id: CardId) -> bool {
        self.starters.contains(&id)
    }

    pub fn has_target(&self, id: CardId) -> bool {
        self.targets.contains(&id)
    }

    pub fn select_starter(&self, index: usize) -> Result<&'a Card, QueryError> {
        self.starters
            .get(index)
            .and_then(|id| self.card(*id))
            .ok_or(QueryError::NoSuchStarter {
                index,
                available: self.starters.len(),
            })
    }

    pub fn select_target(&self, index: usize) -> Result<&'a Card, QueryError> {
        self.targets
            .get(index)
            .and_then(|id| self.card(*id))
            .ok_or(QueryError::NoSuchTarget {
                index,
                available: self.targets.len(),
            })
    }

    /// First starter carrying `name`; later cards with the same name are shadowed.
    pub fn starter_by_name(&self, name: &str) -> Result<&'a Card, QueryError> {
        self.starters()
            .into_iter()
            .find(|card| card.name == name)
            .ok_or_else(|| QueryError::UnknownName(name.to_string()))
    }

    /// First target carrying `name`; later cards with the same name are shadowed.
    pub fn target_by_name(&self, name: &str) -> Result<&'a Card, QueryError> {
        self.targets()
            .into_iter()
            .find(|card| card.name == name)
            .ok_or_else(|| QueryError::UnknownName(name.to_string()))
    }

    pub fn routes_from(&self, starter: CardId) -> Vec<ResolvedRoute<'a>> {
        self.routes
            .iter()
            .filter(|route| route.starter.id == starter)
            .collect()
    }

    pub fn routes_to(&self, target: CardId) -> Vec<ResolvedRoute<'a>> {
        self.routes
            .iter()
            .filter(|route| route.target.id == target)
            .collect()
    }

    fn card(&self, id: CardId) -> Option<&'a Card> {
        let pool = self.routes.pool();
        pool.position(id).map(|pos| &pool[pos])
    }

    fn cards_for(&self, ids: &[CardId]) -> Vec<&'a Card> {
        ids.iter().filter_map(|id| self.card(*id)).collect()
    }
}
