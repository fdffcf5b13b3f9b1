//! Application state for the game library.
//!
//! `Library` owns the collection and every transient reference into it. The
//! references are ids, never copies, so an edit shows up everywhere at once;
//! deleting a game has to clear them by hand, which `delete` does.

use rand::Rng;
use tracing::{debug, info};
use uuid::Uuid;

use crate::engine::{order_for_display, pick_random, PickPool};
use crate::error::{LibraryError, Result};
use crate::models::{Game, GameDraft};

/// Weak references into the collection held by the UI.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Focus {
    /// Game shown in the details view.
    pub viewing: Option<String>,
    /// Game loaded into the edit form.
    pub editing: Option<String>,
    /// Game awaiting delete confirmation.
    pub deleting: Option<String>,
    /// Result of the last roulette spin.
    pub selected: Option<String>,
}

impl Focus {
    fn forget(&mut self, id: &str) {
        for slot in [
            &mut self.viewing,
            &mut self.editing,
            &mut self.deleting,
            &mut self.selected,
        ] {
            if slot.as_deref() == Some(id) {
                *slot = None;
            }
        }
    }

    fn retain(&mut self, games: &[Game]) {
        for slot in [
            &mut self.viewing,
            &mut self.editing,
            &mut self.deleting,
            &mut self.selected,
        ] {
            let exists = slot
                .as_deref()
                .is_some_and(|id| games.iter().any(|game| game.id == id));
            if !exists {
                *slot = None;
            }
        }
    }
}

/// Roulette progress. Spins always run to completion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Spin {
    #[default]
    Idle,
    Selecting(SpinProgress),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpinProgress {
    pool: Vec<String>,
    remaining: u32,
    highlight: usize,
}

impl SpinProgress {
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn pool_len(&self) -> usize {
        self.pool.len()
    }
}

#[derive(Debug, Default)]
pub struct Library {
    games: Vec<Game>,
    focus: Focus,
    spin: Spin,
}

impl Library {
    pub fn new(games: Vec<Game>) -> Self {
        Self {
            games,
            focus: Focus::default(),
            spin: Spin::Idle,
        }
    }

    /// Games in storage order (newest additions first).
    pub fn games(&self) -> &[Game] {
        &self.games
    }

    /// Display order, recomputed from the current collection.
    pub fn ordered(&self) -> Vec<&Game> {
        order_for_display(&self.games)
    }

    pub fn focus(&self) -> &Focus {
        &self.focus
    }

    pub fn spin(&self) -> &Spin {
        &self.spin
    }

    pub fn is_spinning(&self) -> bool {
        matches!(self.spin, Spin::Selecting(_))
    }

    pub fn get(&self, id: &str) -> Option<&Game> {
        self.games.iter().find(|game| game.id == id)
    }

    fn get_mut(&mut self, id: &str) -> Result<&mut Game> {
        self.games
            .iter_mut()
            .find(|game| game.id == id)
            .ok_or_else(|| LibraryError::NotFound(id.to_string()))
    }

    fn require(&self, id: &str) -> Result<()> {
        self.get(id)
            .map(|_| ())
            .ok_or_else(|| LibraryError::NotFound(id.to_string()))
    }

    pub fn selected(&self) -> Option<&Game> {
        self.focus.selected.as_deref().and_then(|id| self.get(id))
    }

    pub fn viewing(&self) -> Option<&Game> {
        self.focus.viewing.as_deref().and_then(|id| self.get(id))
    }

    pub fn editing(&self) -> Option<&Game> {
        self.focus.editing.as_deref().and_then(|id| self.get(id))
    }

    pub fn deleting(&self) -> Option<&Game> {
        self.focus.deleting.as_deref().and_then(|id| self.get(id))
    }

    /// Validate the draft and insert a new game at the front of the
    /// collection. `now_ms` becomes the creation time unless an existing game
    /// is already at or past it, in which case the new one lands just after.
    pub fn add(&mut self, draft: GameDraft, now_ms: i64) -> Result<&Game> {
        draft.validate()?;

        let newest = self.games.iter().filter_map(|game| game.created_at).max();
        let created_at = match newest {
            Some(newest) if newest >= now_ms => newest.saturating_add(1),
            _ => now_ms,
        };

        let draft = trimmed(draft);
        let game = Game {
            id: self.fresh_id(),
            name: draft.name,
            description: draft.description,
            max_players: draft.max_players,
            available_on_hydra: draft.available_on_hydra,
            image_url: draft.image_url,
            added_by: draft.added_by,
            played: draft.played,
            created_at: Some(created_at),
        };
        debug!(id = %game.id, name = %game.name, "added game");

        self.games.insert(0, game);
        Ok(&self.games[0])
    }

    fn fresh_id(&self) -> String {
        loop {
            let id = Uuid::now_v7().to_string();
            if self.get(&id).is_none() {
                return id;
            }
        }
    }

    /// Replace every editable field of an existing game.
    pub fn edit(&mut self, id: &str, draft: GameDraft) -> Result<&Game> {
        draft.validate()?;
        let game = self.get_mut(id)?;
        game.apply(trimmed(draft));
        debug!(id, "edited game");
        Ok(game)
    }

    /// Flip the played flag and return the new value. The roulette selection
    /// is left alone.
    pub fn toggle_played(&mut self, id: &str) -> Result<bool> {
        let game = self.get_mut(id)?;
        game.played = !game.played;
        debug!(id, played = game.played, "toggled played");
        Ok(game.played)
    }

    /// Remove a game and invalidate every reference that pointed at it.
    pub fn delete(&mut self, id: &str) -> Result<Game> {
        let index = self
            .games
            .iter()
            .position(|game| game.id == id)
            .ok_or_else(|| LibraryError::NotFound(id.to_string()))?;
        let removed = self.games.remove(index);
        self.focus.forget(id);

        if let Spin::Selecting(progress) = &mut self.spin {
            progress.pool.retain(|pooled| pooled != id);
            if progress.pool.is_empty() {
                self.spin = Spin::Idle;
            } else {
                progress.highlight %= progress.pool.len();
            }
        }

        debug!(id, name = %removed.name, "deleted game");
        Ok(removed)
    }

    /// Swap in an imported collection wholesale.
    pub fn replace_all(&mut self, games: Vec<Game>) -> Result<()> {
        if self.is_spinning() {
            return Err(LibraryError::SpinInProgress);
        }
        self.games = games;
        self.focus.retain(&self.games);
        info!(count = self.games.len(), "replaced library contents");
        Ok(())
    }

    pub fn view(&mut self, id: &str) -> Result<()> {
        self.require(id)?;
        self.focus.viewing = Some(id.to_string());
        Ok(())
    }

    pub fn close_view(&mut self) {
        self.focus.viewing = None;
    }

    pub fn begin_edit(&mut self, id: &str) -> Result<()> {
        self.require(id)?;
        self.focus.editing = Some(id.to_string());
        Ok(())
    }

    pub fn cancel_edit(&mut self) {
        self.focus.editing = None;
    }

    pub fn request_delete(&mut self, id: &str) -> Result<()> {
        self.require(id)?;
        self.focus.deleting = Some(id.to_string());
        Ok(())
    }

    pub fn cancel_delete(&mut self) {
        self.focus.deleting = None;
    }

    /// Move from `Idle` to `Selecting`. The pool is captured now; games added
    /// later do not join a running spin.
    pub fn begin_spin(&mut self, pool: PickPool, ticks: u32) -> Result<()> {
        if self.is_spinning() {
            return Err(LibraryError::SpinInProgress);
        }

        let pool: Vec<String> = pool
            .eligible(&self.games)
            .into_iter()
            .map(|game| game.id.clone())
            .collect();
        if pool.is_empty() {
            return Err(LibraryError::EmptyPool);
        }

        debug!(pool = pool.len(), ticks, "spin started");
        self.spin = Spin::Selecting(SpinProgress {
            pool,
            remaining: ticks.max(1),
            highlight: 0,
        });
        Ok(())
    }

    /// Advance the animation by one tick. On the final tick the pick is made,
    /// stored as the current selection, and returned.
    pub fn advance_spin<R: Rng>(&mut self, rng: &mut R) -> Option<&Game> {
        let Spin::Selecting(progress) = &mut self.spin else {
            return None;
        };

        progress.remaining = progress.remaining.saturating_sub(1);
        if progress.remaining > 0 {
            progress.highlight = rng.random_range(0..progress.pool.len());
            return None;
        }

        let picked = pick_random(&progress.pool, rng).ok().cloned();
        self.spin = Spin::Idle;

        let id = picked?;
        self.focus.selected = Some(id.clone());
        let game = self.get(&id)?;
        info!(id = %game.id, name = %game.name, "roulette picked a game");
        Some(game)
    }

    /// Game under the spinning highlight.
    pub fn spin_highlight(&self) -> Option<&Game> {
        match &self.spin {
            Spin::Selecting(progress) => progress
                .pool
                .get(progress.highlight)
                .and_then(|id| self.get(id)),
            Spin::Idle => None,
        }
    }
}

fn trimmed(draft: GameDraft) -> GameDraft {
    GameDraft {
        name: draft.name.trim().to_string(),
        description: draft.description.trim().to_string(),
        image_url: draft.image_url.trim().to_string(),
        added_by: draft.added_by.trim().to_string(),
        ..draft
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn draft(name: &str) -> GameDraft {
        GameDraft {
            name: name.to_string(),
            description: format!("{name} description"),
            added_by: "Bia".to_string(),
            ..GameDraft::default()
        }
    }

    fn library_with(names: &[&str]) -> Library {
        let mut library = Library::default();
        for (offset, name) in names.iter().enumerate() {
            library.add(draft(name), 1_000 + offset as i64).unwrap();
        }
        library
    }

    fn id_of(library: &Library, name: &str) -> String {
        library
            .games()
            .iter()
            .find(|game| game.name == name)
            .map(|game| game.id.clone())
            .unwrap()
    }

    fn spin_to_end(library: &mut Library, seed: u64) -> Option<String> {
        let mut rng = StdRng::seed_from_u64(seed);
        for _ in 0..1_000 {
            if let Some(game) = library.advance_spin(&mut rng) {
                return Some(game.id.clone());
            }
            if !library.is_spinning() {
                return None;
            }
        }
        None
    }

    #[test]
    fn add_assigns_identity_and_inserts_first() {
        let library = library_with(&["Tetris", "Doom"]);
        let games = library.games();
        assert_eq!(games[0].name, "Doom");
        assert_eq!(games[1].name, "Tetris");
        assert_ne!(games[0].id, games[1].id);
        assert_eq!(games[0].created_at, Some(1_001));
    }

    #[test]
    fn add_keeps_creation_time_monotonic() {
        let mut library = library_with(&["Tetris"]);
        let game = library.add(draft("Doom"), 10).unwrap();
        assert_eq!(game.created_at, Some(1_001));
    }

    #[test]
    fn add_with_blank_name_is_rejected_and_changes_nothing() {
        let mut library = library_with(&["Tetris"]);
        let bad = GameDraft {
            name: String::new(),
            description: "x".to_string(),
            added_by: "y".to_string(),
            ..GameDraft::default()
        };
        let err = library.add(bad, 5_000).unwrap_err();
        assert!(matches!(err, LibraryError::Validation(_)));
        assert_eq!(library.games().len(), 1);
    }

    #[test]
    fn add_after_maximum_creation_time_does_not_overflow() {
        let far_future = Game {
            id: "future".to_string(),
            name: "Far Future".to_string(),
            description: "d".to_string(),
            max_players: 4,
            available_on_hydra: false,
            image_url: String::new(),
            added_by: "a".to_string(),
            played: false,
            created_at: Some(i64::MAX),
        };
        let mut library = Library::new(vec![far_future]);

        let game = library.add(draft("Doom"), 1_700_000_000_000).unwrap();
        assert_eq!(game.created_at, Some(i64::MAX));
        assert_eq!(library.games().len(), 2);
    }

    #[test]
    fn add_trims_text_fields() {
        let mut library = Library::default();
        let game = library.add(draft("  Portal  "), 1).unwrap();
        assert_eq!(game.name, "Portal");
    }

    #[test]
    fn edit_replaces_fields_but_not_identity() {
        let mut library = library_with(&["Tetris"]);
        let id = id_of(&library, "Tetris");
        let before = library.get(&id).unwrap().created_at;

        let mut changes = draft("Tetris 99");
        changes.max_players = 99;
        changes.played = true;
        let game = library.edit(&id, changes).unwrap();

        assert_eq!(game.id, id);
        assert_eq!(game.created_at, before);
        assert_eq!(game.max_players, 99);
        assert!(game.played);
    }

    #[test]
    fn edit_unknown_id_fails() {
        let mut library = library_with(&["Tetris"]);
        assert!(matches!(
            library.edit("missing", draft("x")),
            Err(LibraryError::NotFound(_))
        ));
    }

    #[test]
    fn edit_is_visible_through_the_selection() {
        let mut library = library_with(&["Tetris"]);
        let id = id_of(&library, "Tetris");
        library.begin_spin(PickPool::All, 1).unwrap();
        assert_eq!(spin_to_end(&mut library, 3), Some(id.clone()));

        library.edit(&id, draft("Tetris Effect")).unwrap();
        assert_eq!(library.selected().unwrap().name, "Tetris Effect");
    }

    #[test]
    fn toggling_selected_game_keeps_selection() {
        let mut library = library_with(&["Tetris"]);
        let id = id_of(&library, "Tetris");
        library.begin_spin(PickPool::All, 2).unwrap();
        spin_to_end(&mut library, 11);

        assert!(library.toggle_played(&id).unwrap());
        assert_eq!(library.focus().selected.as_deref(), Some(id.as_str()));
        assert!(!library.toggle_played(&id).unwrap());
    }

    #[test]
    fn deleting_selected_game_clears_every_reference() {
        let mut library = library_with(&["Tetris"]);
        let id = id_of(&library, "Tetris");
        library.begin_spin(PickPool::All, 1).unwrap();
        assert_eq!(spin_to_end(&mut library, 1), Some(id.clone()));
        library.view(&id).unwrap();
        library.begin_edit(&id).unwrap();
        library.request_delete(&id).unwrap();

        let removed = library.delete(&id).unwrap();
        assert_eq!(removed.name, "Tetris");
        assert_eq!(library.focus(), &Focus::default());
        assert!(library.selected().is_none());
        assert!(library.games().is_empty());
    }

    #[test]
    fn deleting_other_game_leaves_selection() {
        let mut library = library_with(&["Tetris", "Doom"]);
        let tetris = id_of(&library, "Tetris");
        let doom = id_of(&library, "Doom");
        library.focus.selected = Some(tetris.clone());

        library.delete(&doom).unwrap();
        assert_eq!(library.selected().unwrap().id, tetris);
    }

    #[test]
    fn spin_on_empty_library_fails_without_state_change() {
        let mut library = Library::default();
        assert!(matches!(
            library.begin_spin(PickPool::All, 5),
            Err(LibraryError::EmptyPool)
        ));
        assert_eq!(library.spin(), &Spin::Idle);
    }

    #[test]
    fn unplayed_only_spin_with_everything_played_fails() {
        let mut library = library_with(&["Tetris"]);
        let id = id_of(&library, "Tetris");
        library.toggle_played(&id).unwrap();
        assert!(matches!(
            library.begin_spin(PickPool::UnplayedOnly, 5),
            Err(LibraryError::EmptyPool)
        ));
    }

    #[test]
    fn spins_are_serialized() {
        let mut library = library_with(&["Tetris", "Doom"]);
        library.begin_spin(PickPool::All, 5).unwrap();
        assert!(matches!(
            library.begin_spin(PickPool::All, 5),
            Err(LibraryError::SpinInProgress)
        ));
        assert!(matches!(
            library.replace_all(Vec::new()),
            Err(LibraryError::SpinInProgress)
        ));
    }

    #[test]
    fn spin_runs_for_the_requested_ticks_and_selects_a_pool_member() {
        let mut library = library_with(&["Tetris", "Doom", "Portal"]);
        library.begin_spin(PickPool::All, 4).unwrap();
        let mut rng = StdRng::seed_from_u64(99);

        for expected_remaining in [3, 2, 1] {
            assert!(library.advance_spin(&mut rng).is_none());
            assert!(library.spin_highlight().is_some());
            match library.spin() {
                Spin::Selecting(progress) => {
                    assert_eq!(progress.remaining(), expected_remaining);
                    assert_eq!(progress.pool_len(), 3);
                }
                Spin::Idle => panic!("spin ended early"),
            }
        }

        let picked = library.advance_spin(&mut rng).map(|game| game.id.clone());
        let picked = picked.expect("final tick picks a game");
        assert!(library.get(&picked).is_some());
        assert_eq!(library.focus().selected.as_deref(), Some(picked.as_str()));
        assert_eq!(library.spin(), &Spin::Idle);
        assert!(library.advance_spin(&mut rng).is_none());
    }

    #[test]
    fn deleting_the_whole_pool_mid_spin_returns_to_idle() {
        let mut library = library_with(&["Tetris"]);
        let id = id_of(&library, "Tetris");
        library.begin_spin(PickPool::All, 10).unwrap();
        library.delete(&id).unwrap();
        assert_eq!(library.spin(), &Spin::Idle);
        assert!(library.selected().is_none());
    }

    #[test]
    fn replace_all_drops_dangling_references() {
        let mut library = library_with(&["Tetris", "Doom"]);
        let tetris = library.get(&id_of(&library, "Tetris")).cloned().unwrap();
        let doom = id_of(&library, "Doom");
        library.focus.selected = Some(tetris.id.clone());
        library.view(&doom).unwrap();

        library.replace_all(vec![tetris.clone()]).unwrap();
        assert_eq!(library.games(), &[tetris.clone()]);
        assert_eq!(library.focus().selected.as_deref(), Some(tetris.id.as_str()));
        assert!(library.focus().viewing.is_none());
    }

    #[test]
    fn transient_references_require_known_ids() {
        let mut library = library_with(&["Tetris"]);
        assert!(library.view("nope").is_err());
        assert!(library.begin_edit("nope").is_err());
        assert!(library.request_delete("nope").is_err());
        assert!(library.toggle_played("nope").is_err());
        assert!(library.delete("nope").is_err());
    }

    #[test]
    fn ordered_reflects_latest_mutations() {
        let mut library = library_with(&["Tetris", "Doom"]);
        let doom = id_of(&library, "Doom");
        assert_eq!(library.ordered()[0].name, "Doom");
        library.toggle_played(&doom).unwrap();
        let names: Vec<&str> = library.ordered().iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, ["Tetris", "Doom"]);
    }
}
