mod detail;
mod games;
mod help;
mod reviews;
mod work;

use crate::app::{App, Section};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Top-level render dispatch. Sections draw full-screen; detail and help
/// draw as overlays on top.
pub fn render(app: &App, frame: &mut Frame) {
    match app.section {
        Section::Work => work::render(app, frame),
        Section::Games => games::render(app, frame),
        Section::Reviews => reviews::render(app, frame),
    }

    if let Some(overlay) = app.overlay {
        detail::render(app, frame, overlay);
    }

    if app.show_help {
        help::render(app, frame);
    }
}

/// Section tab strip for the headers: `Work │ Games │ Reviews` with the
/// active one highlighted.
pub(crate) fn section_tabs(app: &App) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    for (i, section) in Section::ALL.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(app.styles.muted)));
        }
        let style = if *section == app.section {
            Style::default()
                .fg(app.styles.accent)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(app.styles.muted)
        };
        spans.push(Span::styled(section.label(), style));
    }
    spans
}

/// Truncate a string to `max_width` display columns, adding "…" if
/// truncated.
pub(crate) fn truncate_str(s: &str, max_width: usize) -> String {
    if UnicodeWidthStr::width(s) <= max_width {
        return s.to_string();
    }
    let mut out = String::new();
    let mut width = 0;
    for c in s.chars() {
        let cw = UnicodeWidthChar::width(c).unwrap_or(0);
        if width + cw > max_width.saturating_sub(1) {
            break;
        }
        out.push(c);
        width += cw;
    }
    out.push('…');
    out
}

/// Create a centered rectangle using percentage of parent area.
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);

    horizontal[1]
}

/// Assemble a status line from key/action hint pairs plus the transient
/// status message.
pub(crate) fn status_line(app: &App, hints: &[(&'static str, &'static str)]) -> Line<'static> {
    let mut spans = Vec::new();
    for (key, action) in hints {
        spans.push(Span::styled(
            format!(" {key}"),
            Style::default()
                .fg(app.styles.accent)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(format!(" {action} ")));
    }
    spans.push(Span::styled(
        app.status_msg.clone(),
        Style::default().fg(app.styles.muted),
    ));
    Line::from(spans)
}
