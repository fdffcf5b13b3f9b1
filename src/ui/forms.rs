use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use crate::models::{Game, GameDraft, DEFAULT_MAX_PLAYERS};

use super::helpers::checkbox;

/// Longest player count a user can type.
const MAX_PLAYERS_DIGITS: usize = 4;

/// Internal representation of the add/edit game form. Text fields are raw
/// buffers; `to_draft` turns them into the typed payload the library
/// validates.
#[derive(Clone, Debug)]
pub(crate) struct GameForm {
    pub(crate) name: String,
    pub(crate) description: String,
    pub(crate) max_players: String,
    pub(crate) image_url: String,
    pub(crate) added_by: String,
    pub(crate) available_on_hydra: bool,
    pub(crate) played: bool,
    pub(crate) active: GameField,
    pub(crate) error: Option<String>,
}

/// Fields of the game form, in tab order.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub(crate) enum GameField {
    #[default]
    Name,
    Description,
    MaxPlayers,
    ImageUrl,
    AddedBy,
    AvailableOnHydra,
    Played,
}

impl GameField {
    pub(crate) const ALL: [GameField; 7] = [
        GameField::Name,
        GameField::Description,
        GameField::MaxPlayers,
        GameField::ImageUrl,
        GameField::AddedBy,
        GameField::AvailableOnHydra,
        GameField::Played,
    ];

    pub(crate) fn label(self) -> &'static str {
        match self {
            GameField::Name => "Name",
            GameField::Description => "Description",
            GameField::MaxPlayers => "Max players",
            GameField::ImageUrl => "Image URL",
            GameField::AddedBy => "Added by",
            GameField::AvailableOnHydra => "Available on Hydra",
            GameField::Played => "Played",
        }
    }

    fn is_checkbox(self) -> bool {
        matches!(self, GameField::AvailableOnHydra | GameField::Played)
    }

    fn position(self) -> usize {
        Self::ALL
            .iter()
            .position(|field| *field == self)
            .unwrap_or(0)
    }
}

impl Default for GameForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            max_players: DEFAULT_MAX_PLAYERS.to_string(),
            image_url: String::new(),
            added_by: String::new(),
            available_on_hydra: false,
            played: false,
            active: GameField::Name,
            error: None,
        }
    }
}

impl GameForm {
    /// Populate the form from an existing game when editing.
    pub(crate) fn from_game(game: &Game) -> Self {
        Self {
            name: game.name.clone(),
            description: game.description.clone(),
            max_players: game.max_players.to_string(),
            image_url: game.image_url.clone(),
            added_by: game.added_by.clone(),
            available_on_hydra: game.available_on_hydra,
            played: game.played,
            active: GameField::Name,
            error: None,
        }
    }

    pub(crate) fn next_field(&mut self) {
        let next = (self.active.position() + 1) % GameField::ALL.len();
        self.active = GameField::ALL[next];
    }

    pub(crate) fn previous_field(&mut self) {
        let len = GameField::ALL.len();
        let previous = (self.active.position() + len - 1) % len;
        self.active = GameField::ALL[previous];
    }

    /// Feed a typed character to the active field. Space flips checkboxes,
    /// the player count only takes digits. Returns whether anything changed.
    pub(crate) fn push_char(&mut self, ch: char) -> bool {
        if ch.is_control() {
            return false;
        }
        match self.active {
            GameField::AvailableOnHydra | GameField::Played => {
                if ch != ' ' {
                    return false;
                }
                self.toggle_active_checkbox();
            }
            GameField::MaxPlayers => {
                if !ch.is_ascii_digit() || self.max_players.len() >= MAX_PLAYERS_DIGITS {
                    return false;
                }
                self.max_players.push(ch);
            }
            GameField::Name => self.name.push(ch),
            GameField::Description => self.description.push(ch),
            GameField::ImageUrl => self.image_url.push(ch),
            GameField::AddedBy => self.added_by.push(ch),
        }
        true
    }

    fn toggle_active_checkbox(&mut self) {
        match self.active {
            GameField::AvailableOnHydra => self.available_on_hydra = !self.available_on_hydra,
            GameField::Played => self.played = !self.played,
            _ => {}
        }
    }

    /// Remove the last character from the active text field.
    pub(crate) fn backspace(&mut self) {
        if let Some(buffer) = self.text_mut(self.active) {
            buffer.pop();
        }
    }

    fn text(&self, field: GameField) -> Option<&String> {
        match field {
            GameField::Name => Some(&self.name),
            GameField::Description => Some(&self.description),
            GameField::MaxPlayers => Some(&self.max_players),
            GameField::ImageUrl => Some(&self.image_url),
            GameField::AddedBy => Some(&self.added_by),
            GameField::AvailableOnHydra | GameField::Played => None,
        }
    }

    fn text_mut(&mut self, field: GameField) -> Option<&mut String> {
        match field {
            GameField::Name => Some(&mut self.name),
            GameField::Description => Some(&mut self.description),
            GameField::MaxPlayers => Some(&mut self.max_players),
            GameField::ImageUrl => Some(&mut self.image_url),
            GameField::AddedBy => Some(&mut self.added_by),
            GameField::AvailableOnHydra | GameField::Played => None,
        }
    }

    /// Blank, zero, or out-of-range player counts fall back to the default.
    pub(crate) fn parsed_max_players(&self) -> u32 {
        self.max_players
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|players| *players > 0)
            .unwrap_or(DEFAULT_MAX_PLAYERS)
    }

    /// Typed payload for the library. Required-field validation happens in
    /// the library so add and edit share one check.
    pub(crate) fn to_draft(&self) -> GameDraft {
        GameDraft {
            name: self.name.clone(),
            description: self.description.clone(),
            max_players: self.parsed_max_players(),
            available_on_hydra: self.available_on_hydra,
            image_url: self.image_url.clone(),
            added_by: self.added_by.clone(),
            played: self.played,
        }
    }

    /// Render a single line for the form widget.
    pub(crate) fn build_line(&self, field: GameField) -> Line<'static> {
        let is_active = self.active == field;
        let label = Span::raw(format!("{}: ", field.label()));

        if field.is_checkbox() {
            let checked = match field {
                GameField::AvailableOnHydra => self.available_on_hydra,
                _ => self.played,
            };
            let style = if is_active {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default()
            };
            return Line::from(vec![label, Span::styled(checkbox(checked), style)]);
        }

        let value = self.text(field).cloned().unwrap_or_default();
        let placeholder = match field {
            GameField::Name | GameField::Description | GameField::AddedBy => "<required>",
            GameField::MaxPlayers => "<4>",
            _ => "<optional>",
        };

        let style = if is_active {
            Style::default().fg(Color::Yellow)
        } else if value.is_empty() {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
        };

        let display = if value.is_empty() && !is_active {
            placeholder.to_string()
        } else {
            value
        };

        Line::from(vec![label, Span::styled(display, style)])
    }

    /// Cursor column offset inside the active row.
    pub(crate) fn cursor_offset(&self) -> u16 {
        let prefix = self.active.label().len() + 2;
        let value = match self.text(self.active) {
            Some(text) => text.chars().count(),
            None => 1,
        };
        (prefix + value) as u16
    }

    /// Row of the active field, counted from the top of the form.
    pub(crate) fn cursor_row(&self) -> u16 {
        self.active.position() as u16
    }
}

/// Free-text prompt used to ask for the path of an import file.
#[derive(Default, Clone, Debug)]
pub(crate) struct PathPrompt {
    pub(crate) input: String,
    pub(crate) error: Option<String>,
}

impl PathPrompt {
    pub(crate) const LABEL: &'static str = "File: ";

    pub(crate) fn push_char(&mut self, ch: char) -> bool {
        if ch.is_control() {
            return false;
        }
        self.input.push(ch);
        self.error = None;
        true
    }

    pub(crate) fn backspace(&mut self) {
        self.input.pop();
        self.error = None;
    }

    pub(crate) fn path(&self) -> Option<&str> {
        let trimmed = self.input.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_text(form: &mut GameForm, text: &str) {
        for ch in text.chars() {
            form.push_char(ch);
        }
    }

    #[test]
    fn new_form_defaults_to_four_players() {
        let form = GameForm::default();
        assert_eq!(form.max_players, "4");
        assert_eq!(form.to_draft().max_players, 4);
    }

    #[test]
    fn blank_or_zero_player_count_falls_back_to_default() {
        let mut form = GameForm::default();
        form.active = GameField::MaxPlayers;
        form.backspace();
        assert_eq!(form.parsed_max_players(), DEFAULT_MAX_PLAYERS);
        type_text(&mut form, "0");
        assert_eq!(form.parsed_max_players(), DEFAULT_MAX_PLAYERS);
    }

    #[test]
    fn player_count_accepts_only_digits() {
        let mut form = GameForm::default();
        form.active = GameField::MaxPlayers;
        form.backspace();
        assert!(!form.push_char('x'));
        type_text(&mut form, "12345");
        assert_eq!(form.max_players, "1234");
        assert_eq!(form.parsed_max_players(), 1234);
    }

    #[test]
    fn space_toggles_checkboxes() {
        let mut form = GameForm::default();
        form.active = GameField::AvailableOnHydra;
        assert!(form.push_char(' '));
        assert!(!form.push_char('y'));
        assert!(form.available_on_hydra);

        form.next_field();
        assert_eq!(form.active, GameField::Played);
        form.push_char(' ');
        assert!(form.played);
        form.backspace();
        assert!(form.played);
    }

    #[test]
    fn field_navigation_wraps() {
        let mut form = GameForm::default();
        form.previous_field();
        assert_eq!(form.active, GameField::Played);
        form.next_field();
        assert_eq!(form.active, GameField::Name);
    }

    #[test]
    fn draft_carries_typed_values() {
        let mut form = GameForm::default();
        type_text(&mut form, "Portal 2");
        form.next_field();
        type_text(&mut form, "Co-op puzzles");
        form.active = GameField::AddedBy;
        type_text(&mut form, "Leo");

        let draft = form.to_draft();
        assert_eq!(draft.name, "Portal 2");
        assert_eq!(draft.description, "Co-op puzzles");
        assert_eq!(draft.added_by, "Leo");
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn edit_form_round_trips_game_fields() {
        let game = Game {
            id: "1".to_string(),
            name: "Chess".to_string(),
            description: "Classic".to_string(),
            max_players: 2,
            available_on_hydra: true,
            image_url: "https://example.com/chess.png".to_string(),
            added_by: "Rui".to_string(),
            played: true,
            created_at: Some(1),
        };
        assert_eq!(GameForm::from_game(&game).to_draft(), GameDraft::from(&game));
    }

    #[test]
    fn cursor_tracks_active_text() {
        let mut form = GameForm::default();
        type_text(&mut form, "Doom");
        assert_eq!(form.cursor_row(), 0);
        assert_eq!(form.cursor_offset(), ("Name: ".len() + 4) as u16);
    }

    #[test]
    fn path_prompt_trims_input() {
        let mut prompt = PathPrompt::default();
        assert_eq!(prompt.path(), None);
        for ch in " games.json ".chars() {
            prompt.push_char(ch);
        }
        assert_eq!(prompt.path(), Some("games.json"));
    }
}
