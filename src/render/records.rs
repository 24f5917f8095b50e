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

//! How persons and events are laid out as table rows.

use ratatui::{
    layout::Constraint,
    style::Style,
    text::Line,
    widgets::Cell,
};

use crate::{
    components::TableRecord,
    model::{Event, Person},
    theme::Theme,
};

impl TableRecord for Person {
    const TITLE: &'static str = "Persons";

    fn header() -> Vec<&'static str> {
        vec!["Name", "Phone", "Email", "Address", "Tags"]
    }

    fn widths() -> Vec<Constraint> {
        vec![
            Constraint::Percentage(22),
            Constraint::Length(12),
            Constraint::Percentage(24),
            Constraint::Percentage(32),
            Constraint::Percentage(22),
        ]
    }

    fn cells(&self, theme: &Theme) -> Vec<Cell<'_>> {
        let detail = Style::default().fg(theme.table_detail_fg);
        vec![
            Cell::from(Line::from(self.name.as_str()).style(Style::default().fg(theme.table_name_fg))),
            Cell::from(Line::from(self.phone.to_string()).style(detail)),
            Cell::from(Line::from(self.email.to_string()).style(detail)),
            Cell::from(Line::from(self.address.to_string()).style(detail)),
            Cell::from(Line::from(self.tags_text()).style(Style::default().fg(theme.table_tag_fg))),
        ]
    }
}

impl TableRecord for Event {
    const TITLE: &'static str = "Events";

    fn header() -> Vec<&'static str> {
        vec!["Name", "Time", "Venue", "People"]
    }

    fn widths() -> Vec<Constraint> {
        vec![
            Constraint::Percentage(35),
            Constraint::Length(16),
            Constraint::Percentage(45),
            Constraint::Length(6),
        ]
    }

    fn cells(&self, theme: &Theme) -> Vec<Cell<'_>> {
        vec![
            Cell::from(Line::from(self.name.to_string()).style(Style::default().fg(theme.table_name_fg))),
            Cell::from(Line::from(self.time.to_string()).style(Style::default().fg(theme.table_time_fg))),
            Cell::from(Line::from(self.address.to_string()).style(Style::default().fg(theme.table_detail_fg))),
            Cell::from(
                Line::from(self.participants.len().to_string())
                    .style(Style::default().fg(theme.table_detail_fg))
                    .right_aligned(),
            ),
        ]
    }
}
