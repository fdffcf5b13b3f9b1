//! Ordering and random selection over the game collection.
//!
//! Both operations only read the collection. `order_for_display` is the single
//! source of truth for the list order in every view, and it is re-derived from
//! scratch after each mutation because toggling `played` moves a game between
//! partitions.

use std::cmp::Reverse;

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::error::{LibraryError, Result};
use crate::models::Game;

/// Unplayed games newest first, followed by played games oldest first.
pub fn order_for_display(games: &[Game]) -> Vec<&Game> {
    let (mut unplayed, mut played): (Vec<&Game>, Vec<&Game>) =
        games.iter().partition(|game| !game.played);

    unplayed.sort_by_key(|game| Reverse(game.created_at_or_zero()));
    played.sort_by_key(|game| game.created_at_or_zero());

    unplayed.extend(played);
    unplayed
}

/// Pick one member of `pool` uniformly at random.
pub fn pick_random<'a, T, R>(pool: &'a [T], rng: &mut R) -> Result<&'a T>
where
    R: Rng + ?Sized,
{
    pool.choose(rng).ok_or(LibraryError::EmptyPool)
}

/// Which games the roulette may land on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PickPool {
    #[default]
    All,
    UnplayedOnly,
}

impl PickPool {
    /// Eligible games, in display order.
    pub fn eligible<'a>(&self, games: &'a [Game]) -> Vec<&'a Game> {
        order_for_display(games)
            .into_iter()
            .filter(|game| match self {
                PickPool::All => true,
                PickPool::UnplayedOnly => !game.played,
            })
            .collect()
    }

    pub fn toggled(self) -> Self {
        match self {
            PickPool::All => PickPool::UnplayedOnly,
            PickPool::UnplayedOnly => PickPool::All,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PickPool::All => "all games",
            PickPool::UnplayedOnly => "unplayed games",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn game(id: &str, played: bool, created_at: Option<i64>) -> Game {
        Game {
            id: id.to_string(),
            name: id.to_string(),
            description: format!("{id} description"),
            max_players: 4,
            available_on_hydra: false,
            image_url: String::new(),
            added_by: "tester".to_string(),
            played,
            created_at,
        }
    }

    fn ids(games: &[&Game]) -> Vec<String> {
        games.iter().map(|game| game.id.clone()).collect()
    }

    #[test]
    fn orders_unplayed_newest_first_then_played_oldest_first() {
        let games = vec![
            game("A", false, Some(100)),
            game("B", true, Some(50)),
            game("C", false, Some(200)),
        ];
        assert_eq!(ids(&order_for_display(&games)), ["C", "A", "B"]);
    }

    #[test]
    fn missing_created_at_sorts_as_oldest() {
        let games = vec![
            game("legacy", false, None),
            game("new", false, Some(5)),
            game("played-new", true, Some(5)),
            game("played-legacy", true, None),
        ];
        assert_eq!(
            ids(&order_for_display(&games)),
            ["new", "legacy", "played-legacy", "played-new"]
        );
    }

    #[test]
    fn empty_collection_orders_to_empty() {
        assert!(order_for_display(&[]).is_empty());
    }

    #[test]
    fn pick_from_empty_pool_fails() {
        let pool: Vec<Game> = Vec::new();
        let mut rng = StdRng::seed_from_u64(7);
        assert!(matches!(
            pick_random(&pool, &mut rng),
            Err(LibraryError::EmptyPool)
        ));
    }

    #[test]
    fn pick_from_single_entry_pool_returns_it() {
        let pool = vec![game("only", true, Some(1))];
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(pick_random(&pool, &mut rng).unwrap().id, "only");
    }

    #[test]
    fn unplayed_only_pool_skips_played_games() {
        let games = vec![
            game("A", false, Some(1)),
            game("B", true, Some(2)),
            game("C", false, Some(3)),
        ];
        assert_eq!(ids(&PickPool::UnplayedOnly.eligible(&games)), ["C", "A"]);
        assert_eq!(ids(&PickPool::All.eligible(&games)), ["C", "A", "B"]);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn arb_games() -> impl Strategy<Value = Vec<Game>> {
            prop::collection::vec(
                (any::<bool>(), proptest::option::of(0i64..1_000)),
                0..40,
            )
            .prop_map(|entries| {
                entries
                    .into_iter()
                    .enumerate()
                    .map(|(idx, (played, created_at))| {
                        game(&idx.to_string(), played, created_at)
                    })
                    .collect()
            })
        }

        proptest! {
            /// No played game ever precedes an unplayed one
            #[test]
            fn unplayed_segment_comes_first(games in arb_games()) {
                let ordered = order_for_display(&games);
                let first_played = ordered.iter().position(|g| g.played).unwrap_or(ordered.len());
                prop_assert!(ordered[first_played..].iter().all(|g| g.played));
                prop_assert_eq!(ordered.len(), games.len());
            }

            /// Creation time decreases inside the unplayed segment and increases
            /// inside the played one
            #[test]
            fn segments_are_sorted_by_creation_time(games in arb_games()) {
                let ordered = order_for_display(&games);
                for pair in ordered.windows(2) {
                    let (a, b) = (pair[0], pair[1]);
                    if !a.played && !b.played {
                        prop_assert!(a.created_at_or_zero() >= b.created_at_or_zero());
                    }
                    if a.played && b.played {
                        prop_assert!(a.created_at_or_zero() <= b.created_at_or_zero());
                    }
                }
            }

            /// Ordering its own output changes nothing
            #[test]
            fn ordering_is_idempotent(games in arb_games()) {
                let once: Vec<Game> = order_for_display(&games).into_iter().cloned().collect();
                let twice: Vec<Game> = order_for_display(&once).into_iter().cloned().collect();
                prop_assert_eq!(once, twice);
            }

            /// A pick always lands on a member of the pool and leaves it intact
            #[test]
            fn pick_returns_pool_member(games in arb_games(), seed in any::<u64>()) {
                let before = games.clone();
                let mut rng = StdRng::seed_from_u64(seed);
                match pick_random(&games, &mut rng) {
                    Ok(picked) => prop_assert!(games.iter().any(|g| g.id == picked.id)),
                    Err(err) => {
                        prop_assert!(games.is_empty());
                        prop_assert!(matches!(err, LibraryError::EmptyPool));
                    }
                }
                prop_assert_eq!(before, games);
            }
        }
    }
}
