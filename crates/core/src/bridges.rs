use crate::{small_world_legal, Card, CardPool};

/// Pool positions of every other card that may bridge from `source`, in pool order.
pub fn find_bridges(source: &Card, pool: &CardPool) -> Vec<usize> {
    find_bridges_with(source, pool, small_world_legal)
}

pub fn find_bridges_with<F>(source: &Card, pool: &CardPool, legal: F) -> Vec<usize>
where
    F: Fn(&Card, &Card) -> bool,
{
    pool.iter()
        .enumerate()
        .filter(|&(_, candidate)| candidate.id != source.id && legal(source, candidate))
        .map(|(pos, _)| pos)
        .collect()
}

/// Per-position bridge lists for one immutable pool.
#[derive(Debug, Clone)]
pub struct BridgeIndex {
    adjacency: Vec<Vec<usize>>,
}

impl BridgeIndex {
    pub fn new(pool: &CardPool) -> Self {
        Self::with_predicate(pool, small_world_legal)
    }

    pub fn with_predicate<F>(pool: &CardPool, legal: F) -> Self
    where
        F: Fn(&Card, &Card) -> bool,
    {
        let adjacency = pool
            .iter()
            .map(|card| find_bridges_with(card, pool, &legal))
            .collect();
        Self { adjacency }
    }

    pub fn bridges_of(&self, pos: usize) -> &[usize] {
        self.adjacency.get(pos).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}
