use crate::app::App;
use crate::ui::{section_tabs, status_line};
use crate::viewmodel::stars;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

pub fn render(app: &App, frame: &mut Frame) {
    let area = frame.area();

    // Layout: header(3) + reviews(min) + status(1)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(1),
        ])
        .split(area);

    // ── Header ──
    let avatar = match &app.avatar_url {
        Some(url) => Span::styled(format!("   avatar: {url}"), Style::default().fg(app.styles.link)),
        None => Span::styled("   avatar: — (placeholder)", Style::default().fg(app.styles.muted)),
    };
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
    header_spans.push(avatar);
    let header = Paragraph::new(Line::from(header_spans)).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(app.styles.border)),
    );
    frame.render_widget(header, chunks[0]);

    // ── Reviews ──
    let mut lines: Vec<Line> = Vec::new();
    if app.catalog.testimonials.is_empty() {
        lines.push(Line::from(Span::styled(
            "No testimonials yet.",
            Style::default().fg(app.styles.muted),
        )));
    }
    for review in &app.catalog.testimonials {
        let rating = review.rating.clamp(0, 5);
        lines.push(Line::from(vec![
            Span::styled(
                stars(review.rating),
                Style::default().fg(app.styles.star),
            ),
            Span::styled(
                format!("  {rating} out of 5"),
                Style::default().fg(app.styles.muted),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            format!("“{}”", review.quote),
            Style::default().fg(app.styles.text),
        )));
        let mut who = format!("— {}", if review.author.is_empty() { "Client" } else { &review.author });
        if !review.role.is_empty() {
            who.push_str(&format!(" • {}", review.role));
        }
        lines.push(Line::from(Span::styled(
            who,
            Style::default().fg(app.styles.muted),
        )));
        if !review.source.is_empty() {
            lines.push(Line::from(Span::styled(
                format!("  {}", review.source),
                Style::default()
                    .fg(app.styles.link)
                    .add_modifier(Modifier::UNDERLINED),
            )));
        }
        lines.push(Line::from(""));
    }

    let body = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((app.reviews_scroll, 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.styles.border))
                .title(format!(" Reviews [{}] ", app.catalog.testimonials.len())),
        );
    frame.render_widget(body, chunks[1]);

    // ── Status bar ──
    let hints: &[(&str, &str)] = &[
        ("↑↓", "Scroll"),
        ("Tab", "Section"),
        ("T", "Theme"),
        ("?", "Help"),
        ("q", "Quit"),
    ];
    frame.render_widget(Paragraph::new(status_line(app, hints)), chunks[2]);
}
