//! Domain models for the game library. `Game` mirrors the JSON objects that
//! are stored in the key-value table and exchanged through import/export
//! files, so the serde field names are part of the on-disk format.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{RequiredField, ValidationError};

/// Player count used whenever the form or an imported record does not carry a
/// usable value.
pub const DEFAULT_MAX_PLAYERS: u32 = 4;

fn default_max_players() -> u32 {
    DEFAULT_MAX_PLAYERS
}

/// A stored or imported `0` is not a usable player count.
fn positive_max_players<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let players = u32::deserialize(deserializer)?;
    Ok(if players == 0 {
        DEFAULT_MAX_PLAYERS
    } else {
        players
    })
}

/// One game record in the library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    /// Opaque identifier. Never reused once the game is deleted.
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(
        default = "default_max_players",
        deserialize_with = "positive_max_players"
    )]
    pub max_players: u32,
    #[serde(default)]
    pub available_on_hydra: bool,
    #[serde(default)]
    pub image_url: String,
    /// Who suggested the game.
    pub added_by: String,
    #[serde(default)]
    pub played: bool,
    /// Creation time in milliseconds since the epoch. Older exports may lack
    /// it; ordering treats a missing value as `0`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
}

impl Game {
    /// Sort key used by the display ordering.
    pub fn created_at_or_zero(&self) -> i64 {
        self.created_at.unwrap_or(0)
    }

    /// Short "up to N players" label shared by the list and the roulette
    /// panel.
    pub fn players_label(&self) -> String {
        if self.max_players == 1 {
            "1 player".to_string()
        } else {
            format!("up to {} players", self.max_players)
        }
    }

    /// Overwrite every editable field. `id` and `created_at` stay untouched.
    pub(crate) fn apply(&mut self, draft: GameDraft) {
        self.name = draft.name;
        self.description = draft.description;
        self.max_players = draft.max_players;
        self.available_on_hydra = draft.available_on_hydra;
        self.image_url = draft.image_url;
        self.added_by = draft.added_by;
        self.played = draft.played;
    }
}

/// Typed payload of the add/edit forms. Everything a user can change lives
/// here; identity and creation time are assigned by the library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameDraft {
    pub name: String,
    pub description: String,
    pub max_players: u32,
    pub available_on_hydra: bool,
    pub image_url: String,
    pub added_by: String,
    pub played: bool,
}

impl Default for GameDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            max_players: DEFAULT_MAX_PLAYERS,
            available_on_hydra: false,
            image_url: String::new(),
            added_by: String::new(),
            played: false,
        }
    }
}

impl GameDraft {
    /// Check every required text field at once so the caller can report all
    /// of the missing ones in a single notice.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let missing: Vec<RequiredField> = [
            (RequiredField::Name, &self.name),
            (RequiredField::Description, &self.description),
            (RequiredField::AddedBy, &self.added_by),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { missing })
        }
    }
}

impl From<&Game> for GameDraft {
    fn from(game: &Game) -> Self {
        Self {
            name: game.name.clone(),
            description: game.description.clone(),
            max_players: game.max_players,
            available_on_hydra: game.available_on_hydra,
            image_url: game.image_url.clone(),
            added_by: game.added_by.clone(),
            played: game.played,
        }
    }
}
