use crate::app::App;
use crate::ui::{section_tabs, status_line, work};
use crate::viewmodel::game_cards;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub fn render(app: &App, frame: &mut Frame) {
    let area = frame.area();
    let cards = game_cards(&app.catalog.games);

    // Layout: header(3) + cards(min) + status(1)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(1),
        ])
        .split(area);

    // ── Header ──
    let mut header_spans = vec![
        Span::styled(
            " Mirsol Portfolio ",
            Style::default()
                .fg(app.styles.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
    ];
    header_spans.extend(section_tabs(app));
    header_spans.push(Span::styled(
        format!("   [{} games]", cards.len()),
        Style::default().fg(app.styles.muted),
    ));
    let header = Paragraph::new(Line::from(header_spans)).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(app.styles.border)),
    );
    frame.render_widget(header, chunks[0]);

    // ── Cards ──
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.styles.border))
        .title(" Games ");
    let inner = block.inner(chunks[1]);
    frame.render_widget(block, chunks[1]);
    if cards.is_empty() {
        let placeholder = Paragraph::new("No games to show.")
            .style(Style::default().fg(app.styles.muted));
        frame.render_widget(placeholder, inner);
    } else {
        work::render_card_grid(app, frame, inner, &cards, app.game_selected);
    }

    // ── Status bar ──
    let hints: &[(&str, &str)] = &[
        ("↑↓", "Navigate"),
        ("Enter", "Detail"),
        ("Tab", "Section"),
        ("T", "Theme"),
        ("?", "Help"),
        ("q", "Quit"),
    ];
    frame.render_widget(Paragraph::new(status_line(app, hints)), chunks[2]);
}
