use crate::app::{App, Overlay};
use crate::model::{Game, Project};
use crate::ui::centered_rect;
use crate::video::{self, VideoSlot};
use ratatui::{
    Frame,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

/// Render the active detail overlay on top of the current section.
pub fn render(app: &App, frame: &mut Frame, overlay: Overlay) {
    match overlay {
        Overlay::Project { index } => {
            if let Some(project) = app.catalog.projects.get(index) {
                render_project(app, frame, project);
            }
        }
        Overlay::Game { index } => {
            if let Some(game) = app.catalog.games.get(index) {
                render_game(app, frame, game);
            }
        }
    }
}

fn render_project(app: &App, frame: &mut Frame, project: &Project) {
    let area = centered_rect(80, 85, frame.area());
    frame.render_widget(Clear, area);

    let mut lines = media_lines(app, &project.video);
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!(" {}", project.title),
        Style::default()
            .fg(app.styles.accent)
            .add_modifier(Modifier::BOLD),
    )));

    let mut meta = Vec::new();
    if !project.role.is_empty() {
        meta.push(Span::styled(" Role: ", Style::default().fg(app.styles.muted)));
        meta.push(Span::styled(
            project.role.clone(),
            Style::default().fg(app.styles.text),
        ));
    }
    if !project.tools.is_empty() {
        meta.push(Span::styled("   Tools: ", Style::default().fg(app.styles.muted)));
        meta.push(Span::styled(
            project.tools.join(", "),
            Style::default().fg(app.styles.text),
        ));
    }
    if !project.date.is_empty() {
        meta.push(Span::styled("   Date: ", Style::default().fg(app.styles.muted)));
        meta.push(Span::styled(
            project.date.clone(),
            Style::default().fg(app.styles.text),
        ));
    }
    if !meta.is_empty() {
        lines.push(Line::from(meta));
    }

    if !project.summary.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!(" {}", project.summary),
            Style::default().fg(app.styles.text),
        )));
    }

    if !project.tags.is_empty() {
        let tags = project
            .tags
            .iter()
            .map(|t| format!("#{t}"))
            .collect::<Vec<_>>()
            .join(" ");
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!(" {tags}"),
            Style::default().fg(app.styles.accent),
        )));
    }

    for paragraph in &project.body {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!(" {paragraph}"),
            Style::default().fg(app.styles.text),
        )));
    }

    let mut links = Vec::new();
    if !project.links.play.is_empty() {
        links.push(("Play", project.links.play.as_str()));
    }
    if !project.links.source.is_empty() {
        links.push(("Source", project.links.source.as_str()));
    }
    if !links.is_empty() {
        lines.push(Line::from(""));
        for (label, url) in links {
            lines.push(Line::from(vec![
                Span::styled(format!(" {label}: "), Style::default().fg(app.styles.muted)),
                Span::styled(
                    url.to_string(),
                    Style::default()
                        .fg(app.styles.link)
                        .add_modifier(Modifier::UNDERLINED),
                ),
            ]));
        }
    }

    let body = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((app.detail_scroll, 0))
        .block(overlay_block(app, " Project Detail "));
    frame.render_widget(body, area);
}

fn render_game(app: &App, frame: &mut Frame, game: &Game) {
    let area = centered_rect(70, 60, frame.area());
    frame.render_widget(Clear, area);

    let mut lines = media_lines(app, &game.video);
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!(" {}", game.title),
        Style::default()
            .fg(app.styles.accent)
            .add_modifier(Modifier::BOLD),
    )));
    if !game.summary.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!(" {}", game.summary),
            Style::default().fg(app.styles.text),
        )));
    }
    if !game.link.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled(" Play: ", Style::default().fg(app.styles.muted)),
            Span::styled(
                game.link.clone(),
                Style::default()
                    .fg(app.styles.link)
                    .add_modifier(Modifier::UNDERLINED),
            ),
        ]));
    }

    let body = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((app.detail_scroll, 0))
        .block(overlay_block(app, " Game Detail "));
    frame.render_widget(body, area);
}

fn overlay_block(app: &App, title: &'static str) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.styles.accent))
        .title(title)
        .title_bottom(
            Line::from(" ↑↓ Scroll  y Yank link  o Open link  Esc Close ")
                .style(Style::default().fg(app.styles.muted)),
        )
}

/// The media slot at the top of an overlay, derived from the record's
/// video reference.
fn media_lines(app: &App, video: &str) -> Vec<Line<'static>> {
    match video::classify(video) {
        VideoSlot::Missing => vec![Line::from(Span::styled(
            " Add your video link here",
            Style::default().fg(app.styles.muted),
        ))],
        VideoSlot::YouTube { id } => vec![Line::from(vec![
            Span::styled(" ▶ YouTube: ", Style::default().fg(app.styles.muted)),
            Span::styled(
                video::embed_url(&id),
                Style::default()
                    .fg(app.styles.link)
                    .add_modifier(Modifier::UNDERLINED),
            ),
        ])],
        VideoSlot::File { url } => vec![Line::from(vec![
            Span::styled(" ▶ Video: ", Style::default().fg(app.styles.muted)),
            Span::styled(
                url,
                Style::default()
                    .fg(app.styles.link)
                    .add_modifier(Modifier::UNDERLINED),
            ),
            Span::styled("  (plays natively)", Style::default().fg(app.styles.muted)),
        ])],
        VideoSlot::Unsupported => vec![Line::from(Span::styled(
            " Unsupported video format",
            Style::default().fg(app.styles.muted),
        ))],
    }
}
