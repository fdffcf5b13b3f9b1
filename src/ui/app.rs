use std::mem;
use std::path::Path;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::KeyCode;
use open::that as open_link;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::*;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;
use rusqlite::Connection;
use tracing::{error, info};

use crate::config::Settings;
use crate::db::store_games;
use crate::engine::PickPool;
use crate::models::Game;
use crate::state::Library;
use crate::transfer::{export_to_dir, import_from_path};

use super::forms::{GameField, GameForm, PathPrompt};
use super::helpers::{centered_rect, format_created_at, game_list_line, surface_error};
use super::screens::{ListCursor, PAGE_STEP};

/// Footer space reserved for status messages and instructions.
const FOOTER_HEIGHT: u16 = 3;
/// Height of the "now playing" panel above the list.
const ROULETTE_HEIGHT: u16 = 4;

/// Fine-grained modes of the single library screen.
enum Mode {
    Normal,
    ViewingGame,
    AddingGame(GameForm),
    EditingGame(GameForm),
    ConfirmDelete,
    Importing(PathPrompt),
}

/// Holds the footer message text plus its severity.
struct StatusMessage {
    text: String,
    kind: StatusKind,
}

/// Severity levels shown in the footer.
enum StatusKind {
    Info,
    Error,
}

impl StatusKind {
    fn style(&self) -> Style {
        match self {
            StatusKind::Info => Style::default().fg(Color::Green),
            StatusKind::Error => Style::default().fg(Color::Red),
        }
    }
}

/// Central application state shared across the TUI.
pub struct App {
    conn: Connection,
    library: Library,
    settings: Settings,
    pool: PickPool,
    cursor: ListCursor,
    mode: Mode,
    status: Option<StatusMessage>,
}

impl App {
    pub fn new(conn: Connection, games: Vec<Game>, settings: Settings) -> Self {
        info!(count = games.len(), "library loaded");
        Self {
            conn,
            library: Library::new(games),
            pool: settings.pool,
            settings,
            cursor: ListCursor::default(),
            mode: Mode::Normal,
            status: None,
        }
    }

    /// Delay between roulette animation frames.
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.settings.tick_ms)
    }

    /// Advance a running spin by one frame and announce the result when it
    /// lands.
    pub fn on_tick(&mut self) {
        if !self.library.is_spinning() {
            return;
        }

        let picked = self
            .library
            .advance_spin(&mut rand::rng())
            .map(|game| (game.id.clone(), game.name.clone()));

        if let Some((id, name)) = picked {
            self.focus_cursor(&id);
            self.set_status(format!("The roulette picked {name}!"), StatusKind::Info);
        } else if !self.library.is_spinning() {
            self.set_status("The roulette stopped without a pick.", StatusKind::Error);
        }
    }

    pub fn handle_key(&mut self, code: KeyCode) -> Result<bool> {
        if self.library.is_spinning() {
            if code == KeyCode::Char('q') {
                return Ok(true);
            }
            self.set_status(
                "The roulette is spinning, wait for it to stop.",
                StatusKind::Error,
            );
            return Ok(false);
        }

        let mut exit = false;
        let mut mode = mem::replace(&mut self.mode, Mode::Normal);

        mode = match mode {
            Mode::Normal => self.handle_normal_key(code, &mut exit),
            Mode::ViewingGame => self.handle_view_key(code, &mut exit),
            Mode::AddingGame(form) => self.handle_add_game(code, form),
            Mode::EditingGame(form) => self.handle_edit_game(code, form),
            Mode::ConfirmDelete => self.handle_confirm_delete(code),
            Mode::Importing(prompt) => self.handle_import(code, prompt),
        };

        self.mode = mode;
        Ok(exit)
    }

    fn handle_normal_key(&mut self, code: KeyCode, exit: &mut bool) -> Mode {
        let len = self.library.games().len();
        match code {
            KeyCode::Char('q') | KeyCode::Esc => {
                *exit = true;
            }
            KeyCode::Up => self.cursor.move_by(-1, len),
            KeyCode::Down => self.cursor.move_by(1, len),
            KeyCode::PageUp => self.cursor.move_by(-PAGE_STEP, len),
            KeyCode::PageDown => self.cursor.move_by(PAGE_STEP, len),
            KeyCode::Home => self.cursor.select_first(),
            KeyCode::End => self.cursor.select_last(len),
            KeyCode::Enter => {
                if let Some(id) = self.current_id() {
                    self.clear_status();
                    return self.open_view(&id);
                }
                self.set_status("No game selected.", StatusKind::Error);
            }
            KeyCode::Char(' ') => match self.current_id() {
                Some(id) => self.toggle_played(&id),
                None => self.set_status("No game selected.", StatusKind::Error),
            },
            KeyCode::Char('+') => {
                self.clear_status();
                return Mode::AddingGame(GameForm::default());
            }
            KeyCode::Char('e') | KeyCode::Char('E') => match self.current_id() {
                Some(id) => return self.open_edit(&id, Mode::Normal),
                None => self.set_status("No game selected to edit.", StatusKind::Error),
            },
            KeyCode::Char('-') => match self.current_id() {
                Some(id) => return self.open_delete(&id, Mode::Normal),
                None => self.set_status("No game selected to delete.", StatusKind::Error),
            },
            KeyCode::Char('r') | KeyCode::Char('R') => self.start_spin(),
            KeyCode::Char('u') | KeyCode::Char('U') => {
                self.pool = self.pool.toggled();
                self.set_status(
                    format!("The roulette now picks from {}.", self.pool.label()),
                    StatusKind::Info,
                );
            }
            KeyCode::Char('x') | KeyCode::Char('X') => self.export(),
            KeyCode::Char('i') | KeyCode::Char('I') => {
                self.clear_status();
                return Mode::Importing(PathPrompt::default());
            }
            _ => {}
        }
        Mode::Normal
    }

    fn handle_view_key(&mut self, code: KeyCode, exit: &mut bool) -> Mode {
        let Some(id) = self.library.focus().viewing.clone() else {
            return Mode::Normal;
        };

        match code {
            KeyCode::Char('q') => {
                *exit = true;
            }
            KeyCode::Esc | KeyCode::Enter | KeyCode::Backspace => {
                self.library.close_view();
                return Mode::Normal;
            }
            KeyCode::Char(' ') => self.toggle_played(&id),
            KeyCode::Char('e') | KeyCode::Char('E') => {
                return self.open_edit(&id, Mode::ViewingGame);
            }
            KeyCode::Char('-') => return self.open_delete(&id, Mode::ViewingGame),
            KeyCode::Char('o') | KeyCode::Char('O') => self.open_image(&id),
            _ => {}
        }
        Mode::ViewingGame
    }

    fn handle_add_game(&mut self, code: KeyCode, mut form: GameForm) -> Mode {
        match code {
            KeyCode::Esc => {
                self.set_status("Add game cancelled.", StatusKind::Info);
                return Mode::Normal;
            }
            KeyCode::Enter => {
                let now_ms = chrono::Utc::now().timestamp_millis();
                match self.library.add(form.to_draft(), now_ms) {
                    Ok(game) => {
                        let (id, name) = (game.id.clone(), game.name.clone());
                        self.focus_cursor(&id);
                        self.commit(format!("Added {name}."));
                        return Mode::Normal;
                    }
                    Err(err) => {
                        let message = err.to_string();
                        form.error = Some(message.clone());
                        self.set_status(message, StatusKind::Error);
                    }
                }
            }
            code => edit_form(&mut form, code),
        }
        Mode::AddingGame(form)
    }

    fn handle_edit_game(&mut self, code: KeyCode, mut form: GameForm) -> Mode {
        let Some(id) = self.library.focus().editing.clone() else {
            self.set_status("The game being edited no longer exists.", StatusKind::Error);
            return self.after_dialog();
        };

        match code {
            KeyCode::Esc => {
                self.library.cancel_edit();
                self.set_status("Edit cancelled.", StatusKind::Info);
                return self.after_dialog();
            }
            KeyCode::Enter => match self.library.edit(&id, form.to_draft()) {
                Ok(game) => {
                    let name = game.name.clone();
                    self.library.cancel_edit();
                    self.focus_cursor(&id);
                    self.commit(format!("Updated {name}."));
                    return self.after_dialog();
                }
                Err(err) => {
                    let message = err.to_string();
                    form.error = Some(message.clone());
                    self.set_status(message, StatusKind::Error);
                }
            },
            code => edit_form(&mut form, code),
        }
        Mode::EditingGame(form)
    }

    fn handle_confirm_delete(&mut self, code: KeyCode) -> Mode {
        let Some(id) = self.library.focus().deleting.clone() else {
            return self.after_dialog();
        };

        match code {
            KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => {
                self.library.cancel_delete();
                self.set_status("Deletion cancelled.", StatusKind::Info);
                self.after_dialog()
            }
            KeyCode::Enter | KeyCode::Char('y') | KeyCode::Char('Y') => {
                match self.library.delete(&id) {
                    Ok(removed) => {
                        self.cursor.clamp(self.library.games().len());
                        self.commit(format!("Deleted {}.", removed.name));
                    }
                    Err(err) => self.set_status(err.to_string(), StatusKind::Error),
                }
                self.after_dialog()
            }
            _ => Mode::ConfirmDelete,
        }
    }

    fn handle_import(&mut self, code: KeyCode, mut prompt: PathPrompt) -> Mode {
        match code {
            KeyCode::Esc => {
                self.set_status("Import cancelled.", StatusKind::Info);
                return Mode::Normal;
            }
            KeyCode::Backspace => prompt.backspace(),
            KeyCode::Enter => {
                let Some(path) = prompt.path().map(str::to_string) else {
                    prompt.error = Some("Enter the path of a JSON file.".to_string());
                    return Mode::Importing(prompt);
                };
                match self.import(Path::new(&path)) {
                    Ok(count) => {
                        self.commit(format!("Imported {count} games."));
                        return Mode::Normal;
                    }
                    Err(err) => {
                        let message = surface_error(&err);
                        error!("import from {path} failed: {err:#}");
                        prompt.error = Some(message.clone());
                        self.set_status(message, StatusKind::Error);
                    }
                }
            }
            KeyCode::Char(ch) => {
                prompt.push_char(ch);
            }
            _ => {}
        }
        Mode::Importing(prompt)
    }

    fn import(&mut self, path: &Path) -> Result<usize> {
        let games = import_from_path(path)?;
        let count = games.len();
        self.library.replace_all(games)?;
        self.cursor.clamp(count);
        Ok(count)
    }

    fn export(&mut self) {
        let today = chrono::Utc::now().date_naive();
        match export_to_dir(&self.settings.export_dir, self.library.games(), today) {
            Ok(path) => self.set_status(
                format!(
                    "Exported {} games to {}.",
                    self.library.games().len(),
                    path.display()
                ),
                StatusKind::Info,
            ),
            Err(err) => {
                error!("export failed: {err:#}");
                self.set_status(
                    format!("Export failed: {}", surface_error(&err)),
                    StatusKind::Error,
                );
            }
        }
    }

    fn start_spin(&mut self) {
        match self.library.begin_spin(self.pool, self.settings.spin_ticks) {
            Ok(()) => self.set_status(
                format!("Spinning over {}...", self.pool.label()),
                StatusKind::Info,
            ),
            Err(err) => self.set_status(err.to_string(), StatusKind::Error),
        }
    }

    fn toggle_played(&mut self, id: &str) {
        match self.library.toggle_played(id) {
            Ok(played) => {
                let name = self
                    .library
                    .get(id)
                    .map(|game| game.name.clone())
                    .unwrap_or_default();
                self.focus_cursor(id);
                let message = if played {
                    format!("Marked {name} as played.")
                } else {
                    format!("Marked {name} as not played.")
                };
                self.commit(message);
            }
            Err(err) => self.set_status(err.to_string(), StatusKind::Error),
        }
    }

    fn open_view(&mut self, id: &str) -> Mode {
        match self.library.view(id) {
            Ok(()) => Mode::ViewingGame,
            Err(err) => {
                self.set_status(err.to_string(), StatusKind::Error);
                Mode::Normal
            }
        }
    }

    fn open_edit(&mut self, id: &str, fallback: Mode) -> Mode {
        if let Err(err) = self.library.begin_edit(id) {
            self.set_status(err.to_string(), StatusKind::Error);
            return fallback;
        }
        self.clear_status();
        match self.library.editing() {
            Some(game) => Mode::EditingGame(GameForm::from_game(game)),
            None => fallback,
        }
    }

    fn open_delete(&mut self, id: &str, fallback: Mode) -> Mode {
        match self.library.request_delete(id) {
            Ok(()) => {
                self.clear_status();
                Mode::ConfirmDelete
            }
            Err(err) => {
                self.set_status(err.to_string(), StatusKind::Error);
                fallback
            }
        }
    }

    fn open_image(&mut self, id: &str) {
        let Some(url) = self.library.get(id).map(|game| game.image_url.trim().to_string()) else {
            return;
        };
        if url.is_empty() {
            self.set_status("This game does not have an image URL.", StatusKind::Error);
        } else if let Err(err) = open_link(&url) {
            self.set_status(format!("Failed to open link: {err}"), StatusKind::Error);
        } else {
            self.set_status(format!("Opened {url}."), StatusKind::Info);
        }
    }

    /// Dialogs opened from the details view return to it while the game still
    /// exists.
    fn after_dialog(&self) -> Mode {
        if self.library.viewing().is_some() {
            Mode::ViewingGame
        } else {
            Mode::Normal
        }
    }

    /// Persist the collection and report `message`, or the save failure.
    fn commit<S: Into<String>>(&mut self, message: S) {
        match store_games(&self.conn, self.library.games()) {
            Ok(()) => self.set_status(message, StatusKind::Info),
            Err(err) => {
                error!("failed to save games: {err:#}");
                self.set_status(
                    format!("Could not save changes: {}", surface_error(&err)),
                    StatusKind::Error,
                );
            }
        }
    }

    fn current_id(&self) -> Option<String> {
        self.cursor
            .current(&self.library.ordered())
            .map(|game| game.id.clone())
    }

    fn focus_cursor(&mut self, id: &str) {
        let ordered = self.library.ordered();
        self.cursor.focus_on(&ordered, id);
    }

    fn set_status<S: Into<String>>(&mut self, text: S, kind: StatusKind) {
        self.status = Some(StatusMessage {
            text: text.into(),
            kind,
        });
    }

    fn clear_status(&mut self) {
        self.status = None;
    }

    pub(crate) fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        let footer_height = FOOTER_HEIGHT.min(area.height);

        let (content_area, footer_area) = if area.height > footer_height {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(0), Constraint::Length(footer_height)])
                .split(area);
            (chunks[0], chunks[1])
        } else {
            (area, area)
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(ROULETTE_HEIGHT), Constraint::Min(0)])
            .split(content_area);
        self.draw_roulette(frame, chunks[0]);
        self.draw_game_list(frame, chunks[1]);

        if area.height >= footer_height {
            self.draw_footer(frame, footer_area);
        }

        match &self.mode {
            Mode::AddingGame(form) => self.draw_game_form(frame, area, "Add Game", form),
            Mode::EditingGame(form) => self.draw_game_form(frame, area, "Edit Game", form),
            Mode::ViewingGame => self.draw_details(frame, area),
            Mode::ConfirmDelete => self.draw_confirm_delete(frame, area),
            Mode::Importing(prompt) => self.draw_import_prompt(frame, area, prompt),
            Mode::Normal => {}
        }
    }

    fn draw_roulette(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!("Roulette ({})", self.pool.label()));

        let lines = if let Some(game) = self.library.spin_highlight() {
            vec![
                Line::from(Span::styled(
                    "Spinning...",
                    Style::default().fg(Color::Yellow),
                )),
                Line::from(Span::styled(
                    game.name.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
            ]
        } else if let Some(game) = self.library.selected() {
            let hydra = if game.available_on_hydra {
                "on Hydra"
            } else {
                "not on Hydra"
            };
            vec![
                Line::from(vec![
                    Span::raw("Now playing: "),
                    Span::styled(
                        game.name.clone(),
                        Style::default()
                            .fg(Color::Green)
                            .add_modifier(Modifier::BOLD),
                    ),
                ]),
                Line::from(Span::styled(
                    format!(
                        "{}, {hydra}, suggested by {}",
                        game.players_label(),
                        game.added_by
                    ),
                    Style::default().fg(Color::Gray),
                )),
            ]
        } else {
            vec![Line::from(Span::styled(
                "Press 'r' to spin the roulette.",
                Style::default().fg(Color::DarkGray),
            ))]
        };

        let paragraph = Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, area);
    }

    fn draw_game_list(&self, frame: &mut Frame, area: Rect) {
        let ordered = self.library.ordered();
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!("Games ({})", ordered.len()));

        if ordered.is_empty() {
            let message = Paragraph::new("No games yet. Press '+' to add one.")
                .block(block)
                .alignment(Alignment::Center);
            frame.render_widget(message, area);
            return;
        }

        let highlighted = self.library.spin_highlight().map(|game| game.id.as_str());
        let width = area.width.saturating_sub(4) as usize;
        let items: Vec<ListItem> = ordered
            .iter()
            .map(|game| {
                ListItem::new(game_list_line(
                    game,
                    width,
                    highlighted == Some(game.id.as_str()),
                ))
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_symbol("> ")
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

        let mut state = ListState::default();
        state.select(Some(self.cursor.selected.min(ordered.len() - 1)));
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn draw_footer(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::TOP);
        frame.render_widget(block.clone(), area);
        let inner = block.inner(area);

        let status_line = if let Some(status) = &self.status {
            Line::from(vec![Span::styled(status.text.clone(), status.kind.style())])
        } else {
            Line::from("")
        };

        let instructions = self.footer_instructions();

        let paragraph = Paragraph::new(vec![status_line, instructions]).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }

    fn footer_instructions(&self) -> Line<'static> {
        let key_style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        let keys = |pairs: &[(&'static str, &'static str)]| {
            let mut spans = Vec::with_capacity(pairs.len() * 2);
            for (index, (key, action)) in pairs.iter().enumerate() {
                spans.push(Span::styled(*key, key_style));
                if index + 1 == pairs.len() {
                    spans.push(Span::raw(format!(" {action}")));
                } else {
                    spans.push(Span::raw(format!(" {action}   ")));
                }
            }
            Line::from(spans)
        };

        if self.library.is_spinning() {
            return keys(&[("[q]", "Quit")]);
        }

        match &self.mode {
            Mode::AddingGame(_) | Mode::EditingGame(_) => keys(&[
                ("[Tab]", "Next Field"),
                ("[Space]", "Toggle Checkbox"),
                ("[Enter]", "Save"),
                ("[Esc]", "Cancel"),
            ]),
            Mode::ViewingGame => keys(&[
                ("[Space]", "Toggle Played"),
                ("[e]", "Edit"),
                ("[-]", "Delete"),
                ("[o]", "Open Image"),
                ("[Esc]", "Back"),
                ("[q]", "Quit"),
            ]),
            Mode::ConfirmDelete => keys(&[("[y]", "Delete"), ("[n]", "Keep")]),
            Mode::Importing(_) => keys(&[("[Enter]", "Import"), ("[Esc]", "Cancel")]),
            Mode::Normal => keys(&[
                ("[↑↓]", "Move"),
                ("[Enter]", "Details"),
                ("[Space]", "Played"),
                ("[+]", "Add"),
                ("[e]", "Edit"),
                ("[-]", "Delete"),
                ("[r]", "Spin"),
                ("[u]", "Pool"),
                ("[x]", "Export"),
                ("[i]", "Import"),
                ("[q]", "Quit"),
            ]),
        }
    }

    fn draw_game_form(&self, frame: &mut Frame, area: Rect, title: &str, form: &GameForm) {
        let popup_area = centered_rect(70, 60, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default().title(title).borders(Borders::ALL);
        frame.render_widget(block.clone(), popup_area);
        let inner = block.inner(popup_area);

        let mut lines: Vec<Line> = GameField::ALL
            .iter()
            .map(|field| form.build_line(*field))
            .collect();
        lines.push(Line::from(""));

        if let Some(error) = &form.error {
            lines.push(Line::from(Span::styled(
                error.clone(),
                Style::default().fg(Color::Red),
            )));
        } else {
            lines.push(Line::from(Span::styled(
                "Enter to save • Tab to switch • Esc to cancel",
                Style::default().fg(Color::Gray),
            )));
        }

        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);

        frame.set_cursor_position((
            inner.x + form.cursor_offset(),
            inner.y + form.cursor_row(),
        ));
    }

    fn draw_details(&self, frame: &mut Frame, area: Rect) {
        let Some(game) = self.library.viewing() else {
            return;
        };

        let popup_area = centered_rect(70, 60, area);
        frame.render_widget(Clear, popup_area);

        let yes_no = |flag: bool| if flag { "Yes" } else { "No" };
        let label_style = Style::default().fg(Color::Gray);
        let field = |label: &str, value: String| {
            Line::from(vec![
                Span::styled(format!("{label}: "), label_style),
                Span::raw(value),
            ])
        };
        let image = if game.image_url.trim().is_empty() {
            "none".to_string()
        } else {
            game.image_url.clone()
        };

        let lines = vec![
            Line::from(Span::styled(
                game.name.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(game.description.clone()),
            Line::from(""),
            field("Players", game.players_label()),
            field(
                "Available on Hydra",
                yes_no(game.available_on_hydra).to_string(),
            ),
            field("Played", yes_no(game.played).to_string()),
            field("Added by", game.added_by.clone()),
            field("Added on", format_created_at(game.created_at)),
            field("Image", image),
        ];

        let block = Block::default()
            .title("Game Details")
            .borders(Borders::ALL);
        let paragraph = Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, popup_area);
    }

    fn draw_confirm_delete(&self, frame: &mut Frame, area: Rect) {
        let Some(game) = self.library.deleting() else {
            return;
        };

        let popup_area = centered_rect(60, 30, area);
        frame.render_widget(Clear, popup_area);

        let lines = vec![
            Line::from(vec![
                Span::raw("Delete "),
                Span::styled(
                    game.name.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw("?"),
            ]),
            Line::from(""),
            Line::from(Span::styled(
                "This cannot be undone. Press y to confirm or n to cancel.",
                Style::default().fg(Color::Gray),
            )),
        ];

        let block = Block::default()
            .title("Confirm Delete")
            .borders(Borders::ALL);
        let paragraph = Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, popup_area);
    }

    fn draw_import_prompt(&self, frame: &mut Frame, area: Rect, prompt: &PathPrompt) {
        let popup_area = centered_rect(60, 25, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title("Import Games")
            .borders(Borders::ALL);
        frame.render_widget(block.clone(), popup_area);
        let inner = block.inner(popup_area);

        let mut lines = vec![Line::from(format!("{}{}", PathPrompt::LABEL, prompt.input))];
        lines.push(Line::from(""));
        if let Some(error) = &prompt.error {
            lines.push(Line::from(Span::styled(
                error.clone(),
                Style::default().fg(Color::Red),
            )));
        } else {
            lines.push(Line::from(Span::styled(
                "Importing replaces the whole list.",
                Style::default().fg(Color::Gray),
            )));
        }

        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);

        let cursor_x =
            inner.x + PathPrompt::LABEL.len() as u16 + prompt.input.chars().count() as u16;
        frame.set_cursor_position((cursor_x, inner.y));
    }
}

/// Keys shared by the add and edit forms.
fn edit_form(form: &mut GameForm, code: KeyCode) {
    match code {
        KeyCode::Tab | KeyCode::Down => form.next_field(),
        KeyCode::BackTab | KeyCode::Up => form.previous_field(),
        KeyCode::Backspace => form.backspace(),
        KeyCode::Char(ch) => {
            if form.push_char(ch) {
                form.error = None;
            }
        }
        _ => {}
    }
}
