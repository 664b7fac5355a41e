use crate::app::{App, DEFAULT_TAGS, InputMode};
use crate::query::ViewMode;
use crate::ui::{section_tabs, status_line, truncate_str};
use crate::viewmodel::{Card, CardFace, EMPTY_RESULTS_MSG, WorkView};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

const GRID_COLS: usize = 3;
const GRID_CELL_HEIGHT: u16 = 5;

pub fn render(app: &App, frame: &mut Frame) {
    let area = frame.area();
    let view = WorkView::from_matches(&app.catalog.projects, &app.matches, app.controls.visible);

    // Layout: header(3) + search(3) + chips(3) + cards(min) + status(1)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
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
        format!("   [{}]", view.count_label),
        Style::default().fg(app.styles.muted),
    ));
    let header = Paragraph::new(Line::from(header_spans)).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(app.styles.border)),
    );
    frame.render_widget(header, chunks[0]);

    // ── Search bar ──
    let search_style = match app.input_mode {
        InputMode::Editing => Style::default().fg(app.styles.accent),
        InputMode::Normal => Style::default().fg(app.styles.muted),
    };
    let search_label = if app.input_mode == InputMode::Editing {
        " 🔍 Search (Enter to apply, Esc to cancel): "
    } else {
        " 🔍 Search (/): "
    };
    let search_bar = Paragraph::new(format!("{}{}", search_label, app.search_input))
        .style(search_style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(search_style)
                .title(" Search "),
        );
    frame.render_widget(search_bar, chunks[1]);

    if app.input_mode == InputMode::Editing {
        let cursor_x = chunks[1].x + search_label.chars().count() as u16
            + app.search_input.chars().count() as u16;
        frame.set_cursor_position((cursor_x, chunks[1].y + 1));
    }

    // ── Filter chips ──
    frame.render_widget(chip_row(app), chunks[2]);

    // ── Cards ──
    if view.empty {
        let placeholder = Paragraph::new(EMPTY_RESULTS_MSG)
            .style(Style::default().fg(app.styles.muted))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(app.styles.border))
                    .title(" Work "),
            );
        frame.render_widget(placeholder, chunks[3]);
    } else {
        match app.controls.view {
            ViewMode::List => render_card_list(app, frame, chunks[3], &view),
            ViewMode::Grid => {
                let block = card_area_block(app, &view);
                let inner = block.inner(chunks[3]);
                frame.render_widget(block, chunks[3]);
                render_card_grid(app, frame, inner, &view.cards, app.work_selected);
            }
        }
    }

    // ── Status bar ──
    let hints: &[(&str, &str)] = &[
        ("↑↓", "Navigate"),
        ("/", "Search"),
        ("Space", "Filter"),
        ("s", "Sort"),
        ("v", "View"),
        ("m", "More"),
        ("Enter", "Detail"),
        ("?", "Help"),
    ];
    frame.render_widget(Paragraph::new(status_line(app, hints)), chunks[4]);
}

fn chip_row(app: &App) -> Paragraph<'static> {
    let none_active = app.controls.tags.is_empty();
    let mut spans = Vec::new();

    for i in 0..=DEFAULT_TAGS.len() {
        let (label, active) = if i == 0 {
            ("All".to_string(), none_active)
        } else {
            let tag = DEFAULT_TAGS[i - 1];
            (tag.to_string(), app.controls.tags.iter().any(|t| t == tag))
        };

        let mut style = if active {
            Style::default()
                .bg(app.styles.chip_on_bg)
                .fg(app.styles.chip_on_fg)
        } else {
            Style::default().fg(app.styles.muted)
        };
        if i == app.chip_cursor {
            style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
        }
        spans.push(Span::styled(format!(" {label} "), style));
        spans.push(Span::raw(" "));
    }

    Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(app.styles.border))
            .title(" Filters (←/→ move, Space toggle) "),
    )
}

fn card_area_block(app: &App, view: &WorkView) -> Block<'static> {
    let mut page_info = format!(" {} ", view.count_label);
    if view.load_more {
        page_info.push_str("· m loads more ");
    }
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.styles.border))
        .title(format!(" Work — {} ", app.controls.sort.label()))
        .title_bottom(Line::from(page_info).alignment(Alignment::Right))
}

fn render_card_list(app: &App, frame: &mut Frame, area: Rect, view: &WorkView) {
    let width = area.width as usize;
    let items: Vec<ListItem> = view
        .cards
        .iter()
        .map(|card| ListItem::new(card_line(app, card, width)))
        .collect();

    let list = List::new(items)
        .block(card_area_block(app, view))
        .highlight_style(
            Style::default()
                .bg(app.styles.highlight_bg)
                .fg(app.styles.highlight_fg)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▸ ");

    let mut state = ListState::default();
    state.select(Some(app.work_selected));
    frame.render_stateful_widget(list, area, &mut state);
}

fn card_line(app: &App, card: &Card, width: usize) -> Line<'static> {
    let badge = match &card.face {
        CardFace::Initials(i) => Span::styled(
            format!("[{i:>2}] "),
            Style::default()
                .fg(app.styles.accent)
                .add_modifier(Modifier::BOLD),
        ),
        CardFace::Cover(_) => Span::styled("[▣ ] ", Style::default().fg(app.styles.muted)),
    };

    let tags = if card.tags.is_empty() {
        String::new()
    } else {
        format!(
            "  {}",
            card.tags
                .iter()
                .map(|t| format!("#{t}"))
                .collect::<Vec<_>>()
                .join(" ")
        )
    };

    Line::from(vec![
        badge,
        Span::styled(
            card.title.clone(),
            Style::default().fg(app.styles.text).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {}", truncate_str(&card.summary, width.saturating_sub(40))),
            Style::default().fg(app.styles.muted),
        ),
        Span::styled(tags, Style::default().fg(app.styles.accent)),
    ])
}

/// Grid layout: fixed-height cells, three per row, scrolled so the
/// selected card is always on screen. Shared with the games section.
pub(super) fn render_card_grid(
    app: &App,
    frame: &mut Frame,
    area: Rect,
    cards: &[Card],
    selected: usize,
) {
    if area.width < 12 || area.height < GRID_CELL_HEIGHT {
        return;
    }
    let visible_rows = (area.height / GRID_CELL_HEIGHT).max(1) as usize;
    let sel_row = selected / GRID_COLS;
    let first_row = sel_row.saturating_sub(visible_rows - 1);
    let cell_width = area.width / GRID_COLS as u16;

    for (row_idx, row) in cards
        .chunks(GRID_COLS)
        .enumerate()
        .skip(first_row)
        .take(visible_rows)
    {
        let y = area.y + ((row_idx - first_row) as u16) * GRID_CELL_HEIGHT;
        for (col_idx, card) in row.iter().enumerate() {
            let rect = Rect {
                x: area.x + col_idx as u16 * cell_width,
                y,
                width: cell_width,
                height: GRID_CELL_HEIGHT,
            };
            let index = row_idx * GRID_COLS + col_idx;
            render_card_cell(app, frame, rect, card, index == selected);
        }
    }
}

fn render_card_cell(app: &App, frame: &mut Frame, rect: Rect, card: &Card, selected: bool) {
    let border_style = if selected {
        Style::default()
            .fg(app.styles.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(app.styles.border)
    };
    let inner_width = rect.width.saturating_sub(2) as usize;

    let face = match &card.face {
        CardFace::Initials(i) => Span::styled(
            format!(" {i} "),
            Style::default()
                .fg(app.styles.accent)
                .add_modifier(Modifier::BOLD),
        ),
        CardFace::Cover(url) => Span::styled(
            format!("▣ {}", truncate_str(url, inner_width.saturating_sub(3))),
            Style::default().fg(app.styles.muted),
        ),
    };

    let mut lines = vec![
        Line::from(face),
        Line::from(Span::styled(
            truncate_str(&card.summary, inner_width),
            Style::default().fg(app.styles.text),
        )),
    ];
    if !card.tags.is_empty() {
        let tags = card
            .tags
            .iter()
            .map(|t| format!("#{t}"))
            .collect::<Vec<_>>()
            .join(" ");
        lines.push(Line::from(Span::styled(
            truncate_str(&tags, inner_width),
            Style::default().fg(app.styles.accent),
        )));
    }

    let cell = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(truncate_str(&card.title, inner_width)),
    );
    frame.render_widget(cell, rect);
}
