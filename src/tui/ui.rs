//! Stateless UI rendering for Crackers.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Row, Table, Wrap},
};

use super::app::App;
use crate::about::{CARD_QUESTION, instructions, reveal};
use crackers_core::Phase;

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(8),    // Body
            Constraint::Length(3), // Status
        ])
        .split(area);

    let title = Paragraph::new("Crackers - Can I read your mind?")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    match app.controller().phase() {
        Phase::Welcome => draw_welcome(frame, chunks[1], app),
        Phase::Questioning => draw_card(frame, chunks[1], app),
        Phase::Reveal => draw_reveal(frame, chunks[1], app),
    }

    let status = Paragraph::new(app.status_message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);
}

fn draw_welcome(frame: &mut Frame, area: Rect, app: &App) {
    let current = app.controller().state().bound();

    let mut ranges = vec![Span::raw("Range: ")];
    for bound in app.allowed() {
        let label = format!(" 1-{} ", bound.upper_limit());
        let style = if *bound == current {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        ranges.push(Span::styled(label, style));
    }

    let text = instructions(current);
    let mut lines: Vec<Line> = text.lines().map(Line::from).collect();
    lines.push(Line::from(""));
    lines.push(Line::from(ranges));

    let welcome = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(" Welcome "));
    frame.render_widget(welcome, area);
}

fn draw_card(frame: &mut Frame, area: Rect, app: &App) {
    let card = app.controller().card();
    let layout = app.layout();
    let width = card.last().map(|n| n.to_string().len()).unwrap_or(1) as u16 + 2;

    let rows: Vec<Row> = layout
        .rows(&card)
        .map(|row| Row::new(row.iter().map(|n| format!("{:>w$}", n, w = width as usize - 1))))
        .collect();
    let widths = vec![Constraint::Length(width); layout.columns()];

    let table = Table::new(rows, widths).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", CARD_QUESTION)),
    );
    frame.render_widget(table, area);
}

fn draw_reveal(frame: &mut Frame, area: Rect, app: &App) {
    let guess = app.controller().state().guess();

    let text = Paragraph::new(reveal(guess))
        .style(Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(text, area);
}
