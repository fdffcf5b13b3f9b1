use crate::models::Game;

/// Rows skipped by PgUp/PgDn.
pub(crate) const PAGE_STEP: isize = 5;

/// Cursor over the displayed game list. It stores a row index into the
/// display order, so callers clamp it whenever the collection changes.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ListCursor {
    pub(crate) selected: usize,
}

impl ListCursor {
    pub(crate) fn move_by(&mut self, offset: isize, len: usize) {
        if len == 0 {
            self.selected = 0;
            return;
        }
        let last = len as isize - 1;
        self.selected = (self.selected as isize + offset).clamp(0, last) as usize;
    }

    pub(crate) fn select_first(&mut self) {
        self.selected = 0;
    }

    pub(crate) fn select_last(&mut self, len: usize) {
        self.selected = len.saturating_sub(1);
    }

    /// Keep the cursor on a valid row after games were removed.
    pub(crate) fn clamp(&mut self, len: usize) {
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }

    /// Move to the row showing `id`. Unknown ids only clamp.
    pub(crate) fn focus_on(&mut self, ordered: &[&Game], id: &str) {
        match ordered.iter().position(|game| game.id == id) {
            Some(row) => self.selected = row,
            None => self.clamp(ordered.len()),
        }
    }

    /// Game under the cursor, if the list is not empty.
    pub(crate) fn current<'a>(&self, ordered: &[&'a Game]) -> Option<&'a Game> {
        ordered.get(self.selected).copied()
    }
}
