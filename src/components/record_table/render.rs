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

//! UI rendering logic for the record table.

use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Cell, Row, Table},
};

use crate::{
    components::{RecordTable, TableRecord},
    render::Render,
    theme::Theme,
};

impl<T: TableRecord> Render for RecordTable<T> {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let rows = self.items.iter().enumerate().map(|(i, item)| {
            let mut cells = vec![Cell::from(
                Line::from(format!("{}", i + 1))
                    .style(Style::default().fg(theme.table_index_fg))
                    .right_aligned(),
            )];
            cells.extend(item.cells(theme));
            Row::new(cells)
        });

        let mut widths = vec![Constraint::Length(4)];
        widths.extend(T::widths());

        let mut header = vec![Cell::from(Line::from("#").right_aligned())];
        header.extend(T::header().into_iter().map(Cell::from));

        let border_colour = if self.focused {
            theme.accent_colour
        } else {
            theme.border_colour
        };

        let table = Table::new(rows, widths)
            .header(
                Row::new(header)
                    .style(Style::default().add_modifier(Modifier::BOLD).fg(theme.accent_colour))
                    .bottom_margin(1),
            )
            .row_highlight_style(
                Style::default()
                    .bg(theme.highlight_bg)
                    .fg(theme.highlight_fg),
            )
            .block(
                Block::default()
                    .title(format!(" {} ({}) ", T::TITLE, self.items.len()))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border_colour)),
            );

        f.render_stateful_widget(table, area, &mut self.table_state);
    }
}
