//! Stateless UI rendering for the drill.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use strictly_roshambo::Move;
use strum::IntoEnumIterator;

use super::app::{App, Dialog};

/// Renders the status lines, move buttons and any open dialog.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(3), // Instruction
            Constraint::Length(2), // Score and turn
            Constraint::Min(5),    // Buttons
            Constraint::Length(1), // Help
        ])
        .split(area);

    let title = Paragraph::new("Strictly RPS")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    let instruction = Paragraph::new(app.instruction())
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(instruction, chunks[1]);

    let status = Paragraph::new(vec![
        Line::from(app.score_line()),
        Line::from(Span::styled(
            app.turn_line(),
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(status, chunks[2]);

    draw_buttons(frame, chunks[3], app);

    let help = Paragraph::new("←/→ + Enter, 1-3 or r/p/s to answer · q to quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[4]);

    if let Some(dialog) = app.dialog() {
        draw_dialog(frame, area, dialog);
    }
}

fn draw_buttons(frame: &mut Frame, area: Rect, app: &App) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    for (mv, col) in Move::iter().zip(cols.iter()) {
        let style = if mv == app.cursor() && app.dialog().is_none() {
            Style::default()
                .bg(Color::White)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };

        let button = Paragraph::new(app.symbols().render(mv))
            .style(style)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!("{}", mv.index() + 1)),
            );
        frame.render_widget(button, center_rect(*col, col.width, 3));
    }
}

fn draw_dialog(frame: &mut Frame, area: Rect, dialog: &Dialog) {
    let popup = center_rect(area, 32, 7);
    let color = if dialog.correct() {
        Color::Green
    } else {
        Color::Red
    };

    let body = Paragraph::new(vec![
        Line::from(""),
        Line::from(dialog.message()),
        Line::from(""),
        Line::from(Span::styled(
            format!("[ {} ]", dialog.button()),
            Style::default().add_modifier(Modifier::REVERSED),
        )),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(dialog.title())
            .title_alignment(Alignment::Center)
            .border_style(Style::default().fg(color).add_modifier(Modifier::BOLD)),
    );

    frame.render_widget(Clear, popup);
    frame.render_widget(body, popup);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
