use crate::model::Catalog;
use crate::query::{self, Controls, PAGE_SIZE};
use crate::theme::{Preferences, Styles, Theme};
use crate::viewmodel::GAMES_SHOWN;
use std::time::{Duration, Instant};

/// The default tag chips, always offered regardless of which tags the
/// fetched projects actually carry.
pub const DEFAULT_TAGS: [&str; 12] = [
    "Scripting",
    "Systems",
    "UI",
    "VFX",
    "Tools",
    "Monetization",
    "Multiplayer",
    "Optimization",
    "Backend",
    "Data",
    "Design",
    "AI",
];

/// How long the search input must be quiet before the query re-runs.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(120);

/// Which section is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Work,
    Games,
    Reviews,
}

impl Section {
    pub fn next(self) -> Self {
        match self {
            Self::Work => Self::Games,
            Self::Games => Self::Reviews,
            Self::Reviews => Self::Work,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Work => Self::Reviews,
            Self::Games => Self::Work,
            Self::Reviews => Self::Games,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Work => "Work",
            Self::Games => "Games",
            Self::Reviews => "Reviews",
        }
    }

    pub const ALL: [Section; 3] = [Self::Work, Self::Games, Self::Reviews];
}

/// A detail overlay over the current section. At most one is active; the
/// help popup counts as an overlay for close purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    /// Index into `catalog.projects`.
    Project { index: usize },
    /// Index into `catalog.games`.
    Game { index: usize },
}

/// Input mode for the search bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Editing,
}

/// Main application state.
pub struct App {
    pub catalog: Catalog,
    pub avatar_url: Option<String>,
    pub should_quit: bool,
    pub section: Section,
    pub show_help: bool,

    pub controls: Controls,
    /// Cached query result: indices into `catalog.projects`.
    pub matches: Vec<usize>,

    // Work section state
    pub work_selected: usize,
    /// 0 is the "All" chip; 1..=DEFAULT_TAGS.len() are tag chips.
    pub chip_cursor: usize,

    // Search input state
    pub search_input: String,
    pub input_mode: InputMode,
    pub search_dirty_since: Option<Instant>,

    // Games / reviews section state
    pub game_selected: usize,
    pub reviews_scroll: u16,

    // Overlay state
    pub overlay: Option<Overlay>,
    pub detail_scroll: u16,

    pub theme: Theme,
    pub styles: Styles,
    pub status_msg: String,
}

impl App {
    pub fn new(catalog: Catalog, avatar_url: Option<String>, theme: Theme) -> Self {
        let mut app = Self {
            catalog,
            avatar_url,
            should_quit: false,
            section: Section::Work,
            show_help: false,

            controls: Controls::default(),
            matches: Vec::new(),

            work_selected: 0,
            chip_cursor: 0,

            search_input: String::new(),
            input_mode: InputMode::Normal,
            search_dirty_since: None,

            game_selected: 0,
            reviews_scroll: 0,

            overlay: None,
            detail_scroll: 0,

            theme,
            styles: Styles::for_theme(theme),
            status_msg: String::new(),
        };
        app.refresh_matches();
        app.status_msg = format!("{} projects loaded", app.catalog.projects.len());
        app
    }

    /// Re-run the query pipeline against the current controls.
    pub fn refresh_matches(&mut self) {
        self.matches = query::query(&self.catalog.projects, &self.controls);
        let shown = self.visible_count();
        if self.work_selected >= shown {
            self.work_selected = shown.saturating_sub(1);
        }
    }

    /// How many cards the current window actually shows.
    pub fn visible_count(&self) -> usize {
        self.matches.len().min(self.controls.visible)
    }

    pub fn more_available(&self) -> bool {
        self.controls.visible < self.matches.len()
    }

    // Every search/filter/sort change resets the window to the first page;
    // load-more and view-mode changes do not come through here.
    fn reset_window(&mut self) {
        self.controls.visible = PAGE_SIZE;
        self.work_selected = 0;
        self.refresh_matches();
    }

    /// Commit the pending search input into the controls.
    pub fn commit_search(&mut self) {
        self.search_dirty_since = None;
        let q = self.search_input.trim().to_lowercase();
        if q == self.controls.search {
            return;
        }
        self.controls.search = q;
        self.reset_window();
        self.status_msg = format!(
            "{} results for \"{}\"",
            self.matches.len(),
            if self.controls.search.is_empty() {
                "all"
            } else {
                &self.controls.search
            }
        );
    }

    /// Called once per event-loop pass; applies the debounced search.
    pub fn tick(&mut self) {
        if let Some(since) = self.search_dirty_since {
            if since.elapsed() >= SEARCH_DEBOUNCE {
                self.commit_search();
            }
        }
    }

    pub fn mark_search_dirty(&mut self) {
        self.search_dirty_since = Some(Instant::now());
    }

    pub fn chip_left(&mut self) {
        self.chip_cursor = self.chip_cursor.saturating_sub(1);
    }

    pub fn chip_right(&mut self) {
        if self.chip_cursor < DEFAULT_TAGS.len() {
            self.chip_cursor += 1;
        }
    }

    /// Toggle the chip under the cursor. The "All" chip clears every
    /// active filter instead of toggling one.
    pub fn toggle_chip(&mut self) {
        if self.chip_cursor == 0 {
            self.controls.tags.clear();
            self.status_msg = "Filters cleared".to_string();
        } else {
            let tag = DEFAULT_TAGS[self.chip_cursor - 1];
            if let Some(pos) = self.controls.tags.iter().position(|t| t == tag) {
                self.controls.tags.remove(pos);
                self.status_msg = format!("Filter off: {tag}");
            } else {
                self.controls.tags.push(tag.to_string());
                self.status_msg = format!("Filter on: {tag}");
            }
        }
        self.reset_window();
    }

    pub fn cycle_sort(&mut self) {
        self.controls.sort = self.controls.sort.next();
        self.reset_window();
        self.status_msg = format!("Sort: {}", self.controls.sort.label());
    }

    /// Grid/list toggle. Layout only: the window and the item set stay
    /// exactly as they are.
    pub fn toggle_view(&mut self) {
        self.controls.view = self.controls.view.toggle();
        self.status_msg = format!("View: {}", self.controls.view.label());
    }

    pub fn load_more(&mut self) {
        if self.more_available() {
            self.controls.visible += PAGE_SIZE;
            self.status_msg = format!(
                "{} of {} projects",
                self.visible_count(),
                self.matches.len()
            );
        }
    }

    pub fn work_next(&mut self) {
        if self.work_selected + 1 < self.visible_count() {
            self.work_selected += 1;
        } else if self.more_available() {
            self.status_msg = "End of page — press m to load more".to_string();
        }
    }

    pub fn work_prev(&mut self) {
        self.work_selected = self.work_selected.saturating_sub(1);
    }

    pub fn work_first(&mut self) {
        self.work_selected = 0;
    }

    pub fn work_last(&mut self) {
        self.work_selected = self.visible_count().saturating_sub(1);
    }

    pub fn game_next(&mut self) {
        let shown = self.catalog.games.len().min(GAMES_SHOWN);
        if self.game_selected + 1 < shown {
            self.game_selected += 1;
        }
    }

    pub fn game_prev(&mut self) {
        self.game_selected = self.game_selected.saturating_sub(1);
    }

    /// Open the detail overlay for the current selection.
    pub fn open_selected(&mut self) {
        match self.section {
            Section::Work => {
                if let Some(&index) = self.matches.get(self.work_selected) {
                    self.overlay = Some(Overlay::Project { index });
                    self.detail_scroll = 0;
                }
            }
            Section::Games => {
                let shown = self.catalog.games.len().min(GAMES_SHOWN);
                if self.game_selected < shown {
                    self.overlay = Some(Overlay::Game {
                        index: self.game_selected,
                    });
                    self.detail_scroll = 0;
                }
            }
            Section::Reviews => {}
        }
    }

    /// Deactivate every overlay uniformly: detail and help both.
    pub fn close_overlays(&mut self) {
        self.overlay = None;
        self.show_help = false;
        self.detail_scroll = 0;
    }

    /// The link the active overlay would yank or open, if any. Projects
    /// prefer the play-platform link over the source link.
    pub fn overlay_link(&self) -> Option<String> {
        match self.overlay? {
            Overlay::Project { index } => {
                let links = &self.catalog.projects.get(index)?.links;
                if !links.play.is_empty() {
                    Some(links.play.clone())
                } else if !links.source.is_empty() {
                    Some(links.source.clone())
                } else {
                    None
                }
            }
            Overlay::Game { index } => {
                let link = &self.catalog.games.get(index)?.link;
                if link.is_empty() { None } else { Some(link.clone()) }
            }
        }
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggle();
        self.styles = Styles::for_theme(self.theme);
        let prefs = Preferences { theme: self.theme };
        match prefs.store() {
            Ok(()) => self.status_msg = format!("Theme: {}", self.theme.label()),
            Err(e) => {
                self.status_msg = format!("Theme: {} (not saved: {e})", self.theme.label());
            }
        }
    }

    pub fn scroll_down(&mut self) {
        self.detail_scroll = self.detail_scroll.saturating_add(1);
    }

    pub fn scroll_up(&mut self) {
        self.detail_scroll = self.detail_scroll.saturating_sub(1);
    }

    pub fn scroll_page_down(&mut self) {
        self.detail_scroll = self.detail_scroll.saturating_add(10);
    }

    pub fn scroll_page_up(&mut self) {
        self.detail_scroll = self.detail_scroll.saturating_sub(10);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Project;
    use crate::samples;

    fn app_with_projects(n: usize) -> App {
        let catalog = Catalog {
            projects: (0..n)
                .map(|i| Project {
                    id: format!("p{i}"),
                    title: format!("Project {i:02}"),
                    date: format!("2024-01-{:02}", (i % 28) + 1),
                    summary: "demo".to_string(),
                    tags: vec!["Systems".to_string()],
                    ..Project::default()
                })
                .collect(),
            ..Catalog::default()
        };
        App::new(catalog, None, Theme::Dark)
    }

    #[test]
    fn load_more_grows_the_window_by_a_page() {
        let mut app = app_with_projects(12);
        assert_eq!(app.visible_count(), 9);
        assert!(app.more_available());

        app.load_more();
        assert_eq!(app.visible_count(), 12);
        assert!(!app.more_available());

        // Nothing left to reveal; the window stays put.
        let visible = app.controls.visible;
        app.load_more();
        assert_eq!(app.controls.visible, visible);
    }

    #[test]
    fn search_commit_resets_the_window() {
        let mut app = app_with_projects(12);
        app.load_more();
        assert_eq!(app.visible_count(), 12);

        app.search_input = "Project".to_string();
        app.commit_search();
        assert_eq!(app.controls.visible, PAGE_SIZE);
        assert_eq!(app.controls.search, "project");
        assert_eq!(app.work_selected, 0);
    }

    #[test]
    fn chip_toggle_resets_the_window() {
        let mut app = app_with_projects(12);
        app.load_more();

        app.chip_cursor = 2; // "Systems"
        app.toggle_chip();
        assert_eq!(app.controls.tags, ["Systems"]);
        assert_eq!(app.controls.visible, PAGE_SIZE);

        // Toggling again removes the filter.
        app.toggle_chip();
        assert!(app.controls.tags.is_empty());
    }

    #[test]
    fn all_chip_clears_every_filter() {
        let mut app = app_with_projects(3);
        app.controls.tags = vec!["Systems".to_string(), "UI".to_string()];
        app.chip_cursor = 0;
        app.toggle_chip();
        assert!(app.controls.tags.is_empty());
    }

    #[test]
    fn sort_change_resets_the_window_but_not_the_match_set() {
        let mut app = app_with_projects(12);
        app.load_more();
        let before: Vec<usize> = {
            let mut m = app.matches.clone();
            m.sort_unstable();
            m
        };

        app.cycle_sort();
        assert_eq!(app.controls.visible, PAGE_SIZE);
        let after: Vec<usize> = {
            let mut m = app.matches.clone();
            m.sort_unstable();
            m
        };
        assert_eq!(before, after);
    }

    #[test]
    fn view_mode_never_touches_window_or_matches() {
        let mut app = app_with_projects(12);
        app.load_more();
        let visible = app.controls.visible;
        let matches = app.matches.clone();

        app.toggle_view();
        assert_eq!(app.controls.visible, visible);
        assert_eq!(app.matches, matches);
    }

    #[test]
    fn debounced_search_applies_after_the_delay() {
        let mut app = app_with_projects(5);
        app.search_input = "project 01".to_string();
        app.mark_search_dirty();

        // Not yet elapsed: tick is a no-op.
        app.tick();
        assert_eq!(app.controls.search, "");

        // Force the deadline into the past, then tick.
        app.search_dirty_since = Some(Instant::now() - SEARCH_DEBOUNCE * 2);
        app.tick();
        assert_eq!(app.controls.search, "project 01");
        assert!(app.search_dirty_since.is_none());
    }

    #[test]
    fn open_selected_resolves_through_the_query_result() {
        let mut app = app_with_projects(3);
        // Newest-first: selection 0 is the project with the latest date.
        let expected = app.matches[0];
        app.open_selected();
        assert_eq!(app.overlay, Some(Overlay::Project { index: expected }));
    }

    #[test]
    fn close_overlays_clears_detail_and_help_uniformly() {
        let mut app = app_with_projects(3);
        app.open_selected();
        app.show_help = true;
        app.detail_scroll = 7;

        app.close_overlays();
        assert_eq!(app.overlay, None);
        assert!(!app.show_help);
        assert_eq!(app.detail_scroll, 0);
    }

    #[test]
    fn fallback_catalog_renders_like_the_samples() {
        // All-or-nothing fallback: an app over samples::catalog() must be
        // indistinguishable from one whose fetch failed.
        let app = App::new(samples::catalog(), None, Theme::Dark);
        assert_eq!(app.matches.len(), samples::projects().len());
        assert_eq!(app.catalog.games.len(), samples::games().len());
        assert_eq!(
            app.catalog.testimonials.len(),
            samples::testimonials().len()
        );
    }

    #[test]
    fn overlay_link_prefers_play_over_source() {
        let mut app = app_with_projects(1);
        app.catalog.projects[0].links.source = "https://example.com/src".to_string();
        app.open_selected();
        assert_eq!(app.overlay_link().as_deref(), Some("https://example.com/src"));

        app.catalog.projects[0].links.play = "https://example.com/play".to_string();
        assert_eq!(app.overlay_link().as_deref(), Some("https://example.com/play"));
    }
}
