// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Navigable table of persons or events.
//!
//! A [`RecordTable`] holds a copy of a filtered list together with the
//! table selection. The copy is replaced whenever the model changes, and the
//! selection is kept within the new bounds.

mod event;
mod render;

use ratatui::{
    layout::Constraint,
    widgets::{Cell, TableState},
};

use crate::theme::Theme;

/// A row type that can be shown in a [`RecordTable`].
pub(crate) trait TableRecord {
    const TITLE: &'static str;

    fn header() -> Vec<&'static str>;

    fn widths() -> Vec<Constraint>;

    fn cells(&self, theme: &Theme) -> Vec<Cell<'_>>;
}

pub(crate) struct RecordTable<T> {
    pub(crate) items: Vec<T>,
    pub(crate) table_state: TableState,
    pub(crate) focused: bool,
}

impl<T: TableRecord> RecordTable<T> {
    pub(crate) fn new() -> Self {
        Self {
            items: vec![],
            table_state: TableState::new(),
            focused: false,
        }
    }

    /// Replaces the rows, keeping the selection on a valid row.
    pub(crate) fn set_items(&mut self, items: Vec<T>) {
        self.items = items;

        let selected = match (self.table_state.selected(), self.items.len()) {
            (_, 0) => None,
            (None, _) => Some(0),
            (Some(i), len) => Some(i.min(len - 1)),
        };
        self.table_state.select(selected);
    }

    pub(crate) fn select(&mut self, position: usize) {
        if position < self.items.len() {
            self.table_state.select(Some(position));
        }
    }

    pub(crate) fn selected(&self) -> Option<&T> {
        self.table_state.selected().and_then(|i| self.items.get(i))
    }

    fn goto_next(&mut self) {
        let len = self.items.len();
        if len == 0 {
            return;
        }
        let i = match self.table_state.selected() {
            Some(i) if i >= len - 1 => 0,
            Some(i) => i + 1,
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    fn goto_previous(&mut self) {
        let len = self.items.len();
        if len == 0 {
            return;
        }
        let i = match self.table_state.selected() {
            Some(0) => len - 1,
            Some(i) => i - 1,
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    fn goto_first(&mut self) {
        if !self.items.is_empty() {
            self.table_state.select(Some(0));
        }
    }

    fn goto_last(&mut self) {
        if let Some(last) = self.items.len().checked_sub(1) {
            self.table_state.select(Some(last));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        Person,
        test_support::{alice, benson, carl},
    };

    fn table() -> RecordTable<Person> {
        let mut table = RecordTable::new();
        table.set_items(vec![alice(), benson(), carl()]);
        table
    }

    #[test]
    fn selection_wraps() {
        let mut table = table();
        assert_eq!(table.selected(), Some(&alice()));

        table.goto_previous();
        assert_eq!(table.selected(), Some(&carl()));

        table.goto_next();
        assert_eq!(table.selected(), Some(&alice()));
    }

    #[test]
    fn selection_stays_in_bounds_when_rows_shrink() {
        let mut table = table();
        table.goto_last();

        table.set_items(vec![alice()]);
        assert_eq!(table.table_state.selected(), Some(0));

        table.set_items(vec![]);
        assert_eq!(table.selected(), None);
    }

    #[test]
    fn select_ignores_out_of_range() {
        let mut table = table();
        table.select(1);
        assert_eq!(table.selected(), Some(&benson()));

        table.select(3);
        assert_eq!(table.selected(), Some(&benson()));
    }
}
