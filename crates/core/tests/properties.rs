use proptest::prelude::*;
use smallworld_core::{
    enumerate_routes, find_bridges, small_world_legal, Card, CardPool, RouteIndex,
};
use std::collections::HashSet;

// Small value ranges so that partial matches are common.
fn arb_card(id: u32) -> impl Strategy<Value = Card> {
    (
        prop::sample::select(vec!["Warrior", "Dragon", "Zombie"]),
        prop::sample::select(vec!["EARTH", "DARK", "LIGHT"]),
        1i32..5,
        prop::sample::select(vec![0, 1000, 1800]),
        prop::sample::select(vec![0, 1200, 2000]),
    )
        .prop_map(move |(race, attribute, level, atk, def)| {
            Card::monster(id, format!("Card {id}"), race, attribute, level, atk, def)
        })
}

fn arb_pool() -> impl Strategy<Value = CardPool> {
    (0usize..9).prop_flat_map(|len| {
        (0..len as u32)
            .map(arb_card)
            .collect::<Vec<_>>()
            .prop_map(|cards| CardPool::from_cards(cards))
    })
}

proptest! {
    #[test]
    fn legality_is_symmetric(a in arb_card(1), b in arb_card(2)) {
        prop_assert_eq!(small_world_legal(&a, &b), small_world_legal(&b, &a));
    }

    #[test]
    fn no_card_bridges_to_itself(pool in arb_pool()) {
        for (pos, card) in pool.iter().enumerate() {
            prop_assert!(!find_bridges(card, &pool).contains(&pos));
        }
    }

    #[test]
    fn every_route_is_distinct_and_legal(pool in arb_pool()) {
        for route in enumerate_routes(&pool).iter() {
            prop_assert_ne!(route.starter.id, route.bridge.id);
            prop_assert_ne!(route.bridge.id, route.target.id);
            prop_assert_ne!(route.starter.id, route.target.id);
            prop_assert!(small_world_legal(route.starter, route.bridge));
            prop_assert!(small_world_legal(route.bridge, route.target));
        }
    }

    #[test]
    fn enumeration_is_repeatable(pool in arb_pool()) {
        prop_assert_eq!(enumerate_routes(&pool), enumerate_routes(&pool));
    }

    #[test]
    fn route_order_follows_pool_positions(pool in arb_pool()) {
        let routes = enumerate_routes(&pool);
        let keys: Vec<_> = routes
            .routes()
            .iter()
            .map(|route| (route.starter, route.bridge, route.target))
            .collect();
        let mut sorted = keys.clone();
        sorted.sort();
        prop_assert_eq!(keys, sorted);
    }

    #[test]
    fn index_views_are_duplicate_free_first_occurrence(pool in arb_pool()) {
        let routes = enumerate_routes(&pool);
        let index = RouteIndex::build(&routes);

        let mut expected_starters = Vec::new();
        let mut expected_targets = Vec::new();
        for route in routes.iter() {
            if !expected_starters.contains(&route.starter.id) {
                expected_starters.push(route.starter.id);
            }
            if !expected_targets.contains(&route.target.id) {
                expected_targets.push(route.target.id);
            }
        }
        prop_assert_eq!(index.starter_ids(), expected_starters.as_slice());
        prop_assert_eq!(index.target_ids(), expected_targets.as_slice());

        let unique: HashSet<_> = index.starter_ids().iter().collect();
        prop_assert_eq!(unique.len(), index.starter_ids().len());
    }
}
