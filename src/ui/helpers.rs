use anyhow::Error;
use chrono::DateTime;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::models::Game;

/// `[x]` or `[ ]`.
pub(crate) fn checkbox(checked: bool) -> &'static str {
    if checked {
        "[x]"
    } else {
        "[ ]"
    }
}

/// Cut `text` to at most `width` characters, marking the cut with `...`.
pub(crate) fn truncate_to(text: &str, width: usize) -> String {
    let count = text.chars().count();
    if count <= width {
        return text.to_string();
    }
    if width <= 3 {
        return text.chars().take(width).collect();
    }
    let mut cut: String = text.chars().take(width - 3).collect();
    cut.push_str("...");
    cut
}

/// Creation time rendered for the details view.
pub(crate) fn format_created_at(created_at: Option<i64>) -> String {
    created_at
        .and_then(DateTime::from_timestamp_millis)
        .map(|when| when.format("%Y-%m-%d %H:%M UTC").to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

/// One row of the library list: played checkbox, name, player count, the
/// Hydra badge, and who suggested it. Played games are dimmed; the game under
/// the spinning roulette is painted yellow.
pub(crate) fn game_list_line(game: &Game, width: usize, highlighted: bool) -> Line<'static> {
    let base = if highlighted {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else if game.played {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
    };

    let mut spans = vec![
        Span::styled(format!("{} ", checkbox(game.played)), base),
        Span::styled(game.name.clone(), base.add_modifier(Modifier::BOLD)),
        Span::styled(format!("  {}", game.players_label()), base),
    ];
    if game.available_on_hydra {
        spans.push(Span::styled(
            "  Hydra",
            if highlighted {
                base
            } else {
                Style::default().fg(Color::Green)
            },
        ));
    }
    spans.push(Span::styled(
        format!("  by {}", truncate_to(&game.added_by, width.max(8) / 4)),
        base,
    ));

    Line::from(spans)
}

/// Produce a rectangle centered within `area` that spans the requested percent
/// of the width and height. Used for modal dialogs.
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(area);

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(horizontal[1]);

    vertical[1]
}

/// Extract the most relevant error message from a chained error.
pub(crate) fn surface_error(err: &Error) -> String {
    err.chain()
        .last()
        .map(|cause| cause.to_string())
        .unwrap_or_else(|| err.to_string())
}
