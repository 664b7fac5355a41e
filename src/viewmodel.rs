//! The pure half of the renderer: query result → pagination window → card
//! faces and status labels. Everything here is computable without a
//! terminal, which is where the catalog behavior gets unit-tested.

use crate::model::{Game, Project};
use crate::query::{self, Controls};

pub const EMPTY_RESULTS_MSG: &str = "No results. Try clearing filters or changing the search.";

/// How many games the games section presents, regardless of how many the
/// endpoint returns.
pub const GAMES_SHOWN: usize = 5;

/// Cover art slot on a card: an image reference when the record has one,
/// otherwise up to two uppercase initials derived from the title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardFace {
    Cover(String),
    Initials(String),
}

/// Up to two uppercase initials from the title's whitespace-separated
/// words; a generic glyph when there is no title to derive from.
pub fn initials(title: &str) -> String {
    let s: String = title
        .split_whitespace()
        .filter_map(|w| w.chars().next())
        .take(2)
        .flat_map(|c| c.to_uppercase())
        .collect();
    if s.is_empty() { "⚙".to_string() } else { s }
}

fn card_face(cover: &str, title: &str) -> CardFace {
    if cover.is_empty() {
        CardFace::Initials(initials(title))
    } else {
        CardFace::Cover(cover.to_string())
    }
}

/// One catalog card. `index` points back into the source collection so
/// selection can resolve the underlying record.
#[derive(Debug, Clone)]
pub struct Card {
    pub index: usize,
    pub title: String,
    pub summary: String,
    pub tags: Vec<String>,
    pub face: CardFace,
}

/// Everything the work section needs to draw one frame.
#[derive(Debug, Clone)]
pub struct WorkView {
    pub cards: Vec<Card>,
    pub total: usize,
    pub count_label: String,
    pub load_more: bool,
    pub empty: bool,
}

impl WorkView {
    /// Build from an already-computed query result (indices into
    /// `projects`) and the current visible-count cursor.
    pub fn from_matches(projects: &[Project], matches: &[usize], visible: usize) -> Self {
        let total = matches.len();
        let window = &matches[..total.min(visible)];
        let cards: Vec<Card> = window
            .iter()
            .map(|&i| {
                let p = &projects[i];
                Card {
                    index: i,
                    title: p.title.clone(),
                    summary: p.summary.clone(),
                    tags: p.tags.clone(),
                    face: card_face(&p.cover, &p.title),
                }
            })
            .collect();

        WorkView {
            count_label: format!("{} of {} projects", cards.len(), total),
            load_more: cards.len() < total,
            empty: cards.is_empty(),
            total,
            cards,
        }
    }
}

/// Query + paginate in one step.
pub fn work_view(projects: &[Project], controls: &Controls) -> WorkView {
    let matches = query::query(projects, controls);
    WorkView::from_matches(projects, &matches, controls.visible)
}

/// Cards for the games section: the first [`GAMES_SHOWN`] entries, no tags.
pub fn game_cards(games: &[Game]) -> Vec<Card> {
    games
        .iter()
        .take(GAMES_SHOWN)
        .enumerate()
        .map(|(i, g)| Card {
            index: i,
            title: g.title.clone(),
            summary: g.summary.clone(),
            tags: Vec::new(),
            face: card_face(&g.cover, &g.title),
        })
        .collect()
}

/// Star row for a testimonial rating, clamped to [0, 5].
pub fn stars(rating: i64) -> String {
    "★★★★★".chars().take(rating.clamp(0, 5) as usize).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{PAGE_SIZE, SortKey};

    fn many_projects(n: usize) -> Vec<Project> {
        (0..n)
            .map(|i| Project {
                id: format!("p{i}"),
                title: format!("Project {i:02}"),
                date: format!("2024-01-{:02}", i + 1),
                summary: "demo".to_string(),
                ..Project::default()
            })
            .collect()
    }

    #[test]
    fn first_window_shows_nine_and_offers_load_more() {
        let projects = many_projects(12);
        let controls = Controls::default();
        let view = work_view(&projects, &controls);

        assert_eq!(view.cards.len(), PAGE_SIZE);
        assert_eq!(view.total, 12);
        assert_eq!(view.count_label, "9 of 12 projects");
        assert!(view.load_more);
        assert!(!view.empty);
    }

    #[test]
    fn one_load_more_reveals_everything() {
        let projects = many_projects(12);
        let controls = Controls {
            visible: PAGE_SIZE * 2,
            ..Controls::default()
        };
        let view = work_view(&projects, &controls);

        assert_eq!(view.cards.len(), 12);
        assert_eq!(view.count_label, "12 of 12 projects");
        assert!(!view.load_more);
    }

    #[test]
    fn empty_window_flags_the_placeholder() {
        let projects = many_projects(3);
        let controls = Controls {
            search: "no such project".to_string(),
            ..Controls::default()
        };
        let view = work_view(&projects, &controls);

        assert!(view.empty);
        assert!(view.cards.is_empty());
        assert_eq!(view.count_label, "0 of 0 projects");
        assert!(!view.load_more);
    }

    #[test]
    fn sort_reorders_without_changing_the_set() {
        let projects = many_projects(5);
        let newest = work_view(&projects, &Controls::default());
        let oldest = work_view(
            &projects,
            &Controls {
                sort: SortKey::Oldest,
                ..Controls::default()
            },
        );

        let mut a: Vec<usize> = newest.cards.iter().map(|c| c.index).collect();
        let mut b: Vec<usize> = oldest.cards.iter().map(|c| c.index).collect();
        assert_ne!(a, b);
        a.sort_unstable();
        b.sort_unstable();
        assert_eq!(a, b);
    }

    #[test]
    fn cover_wins_over_initials() {
        let mut p = Project {
            title: "Neo Obby".to_string(),
            ..Project::default()
        };
        let view = WorkView::from_matches(std::slice::from_ref(&p), &[0], 9);
        assert_eq!(view.cards[0].face, CardFace::Initials("NO".to_string()));

        p.cover = "https://cdn.example.com/neo.png".to_string();
        let view = WorkView::from_matches(std::slice::from_ref(&p), &[0], 9);
        assert_eq!(
            view.cards[0].face,
            CardFace::Cover("https://cdn.example.com/neo.png".to_string())
        );
    }

    #[test]
    fn initials_take_at_most_two_words() {
        assert_eq!(initials("Neo Obby"), "NO");
        assert_eq!(initials("Crystal"), "C");
        assert_eq!(initials("a very long title"), "AV");
        assert_eq!(initials(""), "⚙");
        assert_eq!(initials("   "), "⚙");
    }

    #[test]
    fn games_are_capped_at_five() {
        let games: Vec<Game> = (0..8)
            .map(|i| Game {
                id: format!("g{i}"),
                title: format!("Game {i}"),
                ..Game::default()
            })
            .collect();
        let cards = game_cards(&games);
        assert_eq!(cards.len(), GAMES_SHOWN);
        assert!(cards.iter().all(|c| c.tags.is_empty()));
    }

    #[test]
    fn stars_clamp_to_range() {
        assert_eq!(stars(5), "★★★★★");
        assert_eq!(stars(3), "★★★");
        assert_eq!(stars(0), "");
        assert_eq!(stars(-2), "");
        assert_eq!(stars(99), "★★★★★");
    }
}
