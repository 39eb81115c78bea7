use proptest::prelude::*;
use std::collections::HashSet;
use trophy_core::{InMemoryTrophyRepository, Trophy, TrophyListQuery, TrophyRepository};

#[derive(Debug, Clone)]
enum Op {
    Add { caller_id: i32, year: i32 },
    Remove { id: i32 },
    Update { id: i32, year: i32 },
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (-3i32..20, 1970i32..=2025).prop_map(|(caller_id, year)| Op::Add { caller_id, year }),
        (0i32..30).prop_map(|id| Op::Remove { id }),
        (0i32..30, 1970i32..=2025).prop_map(|(id, year)| Op::Update { id, year }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    })]

    /// Property: ids stay pairwise distinct and are never reissued.
    #[test]
    fn ids_stay_unique_across_operations(ops in prop::collection::vec(op_strategy(), 0..60)) {
        let mut repo = InMemoryTrophyRepository::try_new().unwrap();
        let mut ever_assigned: HashSet<i32> = (1..=5).collect();

        for op in ops {
            match op {
                Op::Add { caller_id, year } => {
                    let trophy = Trophy::new(caller_id, "Copa del Rey", year).unwrap();
                    // Colliding caller ids are rejected; others get a fresh id.
                    if let Ok(stored) = repo.add_trophy(Some(trophy)) {
                        prop_assert!(ever_assigned.insert(stored.id()));
                    }
                }
                Op::Remove { id } => {
                    repo.remove_trophy(id);
                }
                Op::Update { id, year } => {
                    let replacement = Trophy::new(0, "Coppa Italia", year).unwrap();
                    if let Ok(updated) = repo.update_trophy(id, Some(replacement)) {
                        prop_assert_eq!(updated.id(), id);
                    }
                }
            }

            let ids: Vec<i32> = repo
                .list_trophies(&TrophyListQuery::default())
                .iter()
                .map(Trophy::id)
                .collect();
            let distinct: HashSet<i32> = ids.iter().copied().collect();
            prop_assert_eq!(distinct.len(), ids.len());
            prop_assert!(ids.iter().all(|id| ever_assigned.contains(id)));
        }
    }
}
