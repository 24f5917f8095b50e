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

//! Result, details and help boxes.

use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap},
};

use crate::{App, commands::usage, theme::Theme};

pub(super) fn draw_feedback(f: &mut Frame, area: Rect, app: &App) {
    let fg = if app.feedback_is_error {
        app.theme.error_colour
    } else {
        app.theme.commander_colour
    };

    let paragraph = Paragraph::new(app.feedback.as_str())
        .style(Style::default().fg(fg))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(" Result ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.border_colour)),
        );

    f.render_widget(paragraph, area);
}

pub(super) fn draw_details(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let label = |text: &'static str| Span::styled(text, Style::default().fg(theme.table_detail_fg));

    let lines = match app.persons.selected() {
        Some(person) => {
            let portrait = if person.portrait.is_empty() {
                "none".to_string()
            } else {
                person.portrait.to_string()
            };
            vec![
                Line::from(Span::styled(
                    person.name.to_string(),
                    Style::default().fg(theme.accent_colour),
                )),
                Line::from(vec![label("Phone    "), Span::raw(person.phone.to_string())]),
                Line::from(vec![label("Email    "), Span::raw(person.email.to_string())]),
                Line::from(vec![label("Portrait "), Span::raw(portrait)]),
            ]
        }
        None => vec![Line::from(label("No person selected"))],
    };

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Details ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border_colour)),
    );

    f.render_widget(paragraph, area);
}

pub(super) fn draw_help(f: &mut Frame, area: Rect, theme: &Theme) {
    let [area] = Layout::horizontal([Constraint::Percentage(70)])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::vertical([Constraint::Length(12)])
        .flex(Flex::Center)
        .areas(area);

    let text = vec![
        Line::from(usage::SUMMARY),
        Line::from(""),
        Line::from("Tab switches between persons and events, j/k move, q quits."),
        Line::from("Esc closes this window."),
    ];

    let paragraph = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(theme.commander_colour).bg(theme.background_colour))
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .padding(Padding::horizontal(1))
                .border_style(Style::default().fg(theme.accent_colour)),
        );

    f.render_widget(Clear, area);
    f.render_widget(paragraph, area);
}
