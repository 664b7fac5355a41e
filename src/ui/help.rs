use crate::app::App;
use crate::ui::centered_rect;
use ratatui::{
    Frame,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

pub fn render(app: &App, frame: &mut Frame) {
    let area = centered_rect(70, 70, frame.area());

    // Clear the area behind the popup
    frame.render_widget(Clear, area);

    let heading = |text: &'static str| {
        Line::from(Span::styled(
            text,
            Style::default()
                .fg(app.styles.accent)
                .add_modifier(Modifier::BOLD),
        ))
    };
    let key = |k: &'static str, action: &'static str| {
        Line::from(vec![
            Span::styled(format!("    {k:<10}"), Style::default().fg(app.styles.star)),
            Span::raw(action),
        ])
    };

    let help_text = vec![
        Line::from(""),
        heading("  Global"),
        key("?", "Toggle this help"),
        key("Tab / 1-3", "Switch section (Work / Games / Reviews)"),
        key("T", "Toggle dark/light theme"),
        key("q", "Quit application"),
        key("Esc", "Close overlay / clear search and filters"),
        Line::from(""),
        heading("  Work"),
        key("↑/k ↓/j", "Move card selection"),
        key("/", "Edit search (applies as you type)"),
        key("←/→", "Move between filter chips"),
        key("Space", "Toggle chip (All clears filters)"),
        key("s", "Cycle sort: newest / oldest / A–Z / Z–A"),
        key("v", "Toggle grid or list layout"),
        key("m", "Load more results"),
        key("g/G", "Jump to first/last visible card"),
        key("Enter", "Open project detail"),
        Line::from(""),
        heading("  Games / Reviews"),
        key("↑/↓", "Navigate cards or scroll reviews"),
        key("Enter", "Open game detail"),
        Line::from(""),
        heading("  Detail overlay"),
        key("↑/↓", "Scroll"),
        key("PgUp/PgDn", "Scroll faster"),
        key("y", "Copy link to clipboard"),
        key("o", "Open link in browser"),
        Line::from(""),
    ];

    let help = Paragraph::new(help_text)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.styles.accent))
                .title(" Help — Keybindings ")
                .title_bottom(
                    Line::from(" Press ? or Esc to close ")
                        .style(Style::default().fg(app.styles.muted)),
                ),
        )
        .style(Style::default().fg(app.styles.text));

    frame.render_widget(help, area);
}
