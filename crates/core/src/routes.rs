use crate::{small_world_legal, BridgeIndex, Card, CardId, CardPool};
use serde::Serialize;
use std::collections::HashSet;

/// A starter -> bridge -> target path, stored as positions in the owning pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Route {
    pub starter: usize,
    pub bridge: usize,
    pub target: usize,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct ResolvedRoute<'a> {
    pub starter: &'a Card,
    pub bridge: &'a Card,
    pub target: &'a Card,
}

/// Every route found over one pool, ordered by starter, then bridge, then target.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteSet {
    pool: CardPool,
    routes: Vec<Route>,
}

pub fn enumerate_routes(pool: &CardPool) -> RouteSet {
    enumerate_routes_with(pool, small_world_legal)
}

pub fn enumerate_routes_with<F>(pool: &CardPool, legal: F) -> RouteSet
where
    F: Fn(&Card, &Card) -> bool,
{
    let bridges = BridgeIndex::with_predicate(pool, legal);
    let mut routes = Vec::new();
    for (starter, card) in pool.iter().enumerate() {
        for &bridge in bridges.bridges_of(starter) {
            for &target in bridges.bridges_of(bridge) {
                if pool[target].id == card.id {
                    continue;
                }
                routes.push(Route {
                    starter,
                    bridge,
                    target,
                });
            }
        }
    }
    RouteSet {
        pool: pool.clone(),
        routes,
    }
}

impl RouteSet {
    pub fn pool(&self) -> &CardPool {
        &self.pool
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn resolve(&self, route: &Route) -> ResolvedRoute<'_> {
        ResolvedRoute {
            starter: &self.pool[route.starter],
            bridge: &self.pool[route.bridge],
            target: &self.pool[route.target],
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = ResolvedRoute<'_>> + '_ {
        self.routes.iter().map(move |route| self.resolve(route))
    }

    /// Every bridge linking `starter` to `target`, one entry per route.
    pub fn bridges_between(&self, starter: CardId, target: CardId) -> Vec<&Card> {
        self.iter()
            .filter(|route| route.starter.id == starter && route.target.id == target)
            .map(|route| route.bridge)
            .collect()
    }

    /// Distinct targets reachable from `starter`, in first-occurrence order.
    pub fn reachable_from(&self, starter: CardId) -> Vec<&Card> {
        let mut seen = HashSet::new();
        self.iter()
            .filter(|route| route.starter.id == starter)
            .map(|route| route.target)
            .filter(|target| seen.insert(target.id))
            .collect()
    }
}
