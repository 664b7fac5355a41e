use crate::model::Project;

/// How many more cards each "load more" reveals, and the initial window.
pub const PAGE_SIZE: usize = 9;

/// Sort order for the work catalog. Newest/Oldest compare the raw ISO date
/// strings; lexicographic order equals chronological order for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Newest,
    Oldest,
    TitleAsc,
    TitleDesc,
}

impl SortKey {
    pub fn next(self) -> Self {
        match self {
            Self::Newest => Self::Oldest,
            Self::Oldest => Self::TitleAsc,
            Self::TitleAsc => Self::TitleDesc,
            Self::TitleDesc => Self::Newest,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Newest => "Newest",
            Self::Oldest => "Oldest",
            Self::TitleAsc => "Title A–Z",
            Self::TitleDesc => "Title Z–A",
        }
    }
}

/// Grid or list layout. Display-only: never changes which items are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Grid,
    List,
}

impl ViewMode {
    pub fn toggle(self) -> Self {
        match self {
            Self::Grid => Self::List,
            Self::List => Self::Grid,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Grid => "grid",
            Self::List => "list",
        }
    }
}

/// The user-facing catalog controls. `search` is stored lowercased and
/// trimmed; `tags` must ALL match for a project to pass (AND semantics).
#[derive(Debug, Clone)]
pub struct Controls {
    pub search: String,
    pub tags: Vec<String>,
    pub sort: SortKey,
    pub view: ViewMode,
    pub visible: usize,
}

impl Default for Controls {
    fn default() -> Self {
        Self {
            search: String::new(),
            tags: Vec::new(),
            sort: SortKey::Newest,
            view: ViewMode::Grid,
            visible: PAGE_SIZE,
        }
    }
}

/// Run the catalog query: search filter, then tag filter, then a stable
/// sort. Returns indices into `projects` so callers keep borrowing the
/// original records. Deterministic for a given (projects, controls) pair.
pub fn query(projects: &[Project], controls: &Controls) -> Vec<usize> {
    let mut out: Vec<usize> = (0..projects.len()).collect();

    if !controls.search.is_empty() {
        let q = controls.search.to_lowercase();
        out.retain(|&i| {
            let p = &projects[i];
            p.title.to_lowercase().contains(&q)
                || p.summary.to_lowercase().contains(&q)
                || p.tags.iter().any(|t| t.to_lowercase().contains(&q))
        });
    }

    if !controls.tags.is_empty() {
        out.retain(|&i| {
            let have: Vec<String> = projects[i].tags.iter().map(|t| t.to_lowercase()).collect();
            controls
                .tags
                .iter()
                .all(|f| have.contains(&f.to_lowercase()))
        });
    }

    // Missing dates/titles are empty strings, which sort first ascending.
    match controls.sort {
        SortKey::Newest => out.sort_by(|&a, &b| projects[b].date.cmp(&projects[a].date)),
        SortKey::Oldest => out.sort_by(|&a, &b| projects[a].date.cmp(&projects[b].date)),
        SortKey::TitleAsc => out.sort_by(|&a, &b| projects[a].title.cmp(&projects[b].title)),
        SortKey::TitleDesc => out.sort_by(|&a, &b| projects[b].title.cmp(&projects[a].title)),
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn project(id: &str, title: &str, date: &str, summary: &str, tags: &[&str]) -> Project {
        Project {
            id: id.to_string(),
            title: title.to_string(),
            date: date.to_string(),
            summary: summary.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            ..Project::default()
        }
    }

    fn fixture() -> Vec<Project> {
        vec![
            project("a", "Zeta", "2024-01-01", "combat framework", &["Scripting", "Systems"]),
            project("b", "Alpha", "2023-06-01", "shop UI", &["UI", "Monetization"]),
            project("c", "Midway", "2023-12-31", "matchmaking", &["Systems", "Multiplayer"]),
        ]
    }

    fn titles(projects: &[Project], indices: &[usize]) -> Vec<String> {
        indices.iter().map(|&i| projects[i].title.clone()).collect()
    }

    #[test]
    fn newest_sorts_by_date_descending() {
        let projects = fixture();
        let controls = Controls::default();
        let out = query(&projects, &controls);
        assert_eq!(titles(&projects, &out), ["Zeta", "Midway", "Alpha"]);
    }

    #[test]
    fn oldest_sorts_by_date_ascending() {
        let projects = fixture();
        let controls = Controls {
            sort: SortKey::Oldest,
            ..Controls::default()
        };
        let out = query(&projects, &controls);
        assert_eq!(titles(&projects, &out), ["Alpha", "Midway", "Zeta"]);
    }

    #[test]
    fn title_sort_is_lexicographic() {
        let projects = fixture();
        let az = query(
            &projects,
            &Controls {
                sort: SortKey::TitleAsc,
                ..Controls::default()
            },
        );
        assert_eq!(titles(&projects, &az), ["Alpha", "Midway", "Zeta"]);

        let za = query(
            &projects,
            &Controls {
                sort: SortKey::TitleDesc,
                ..Controls::default()
            },
        );
        assert_eq!(titles(&projects, &za), ["Zeta", "Midway", "Alpha"]);
    }

    #[test]
    fn missing_date_sorts_first_ascending() {
        let mut projects = fixture();
        projects.push(project("d", "Undated", "", "mystery", &[]));
        let out = query(
            &projects,
            &Controls {
                sort: SortKey::Oldest,
                ..Controls::default()
            },
        );
        assert_eq!(projects[out[0]].title, "Undated");
    }

    #[test]
    fn search_is_case_insensitive_across_fields() {
        let projects = fixture();
        let hit = |needle: &str| {
            query(
                &projects,
                &Controls {
                    search: needle.to_string(),
                    ..Controls::default()
                },
            )
        };

        // Title, summary, and tag substrings all match.
        assert_eq!(titles(&projects, &hit("zeta")), ["Zeta"]);
        assert_eq!(titles(&projects, &hit("SHOP")), ["Alpha"]);
        assert_eq!(titles(&projects, &hit("multi")), ["Midway"]);
        assert!(hit("nonexistent").is_empty());
    }

    #[test]
    fn tag_filter_is_and_not_or() {
        let projects = fixture();
        let with_tags = |tags: &[&str]| {
            query(
                &projects,
                &Controls {
                    tags: tags.iter().map(|t| t.to_string()).collect(),
                    ..Controls::default()
                },
            )
        };

        // "Systems" alone matches two projects; adding "Multiplayer" must
        // narrow to the one carrying both.
        assert_eq!(with_tags(&["Systems"]).len(), 2);
        assert_eq!(titles(&projects, &with_tags(&["Systems", "Multiplayer"])), ["Midway"]);
        // Case-insensitive membership.
        assert_eq!(titles(&projects, &with_tags(&["systems", "MULTIPLAYER"])), ["Midway"]);
        assert!(with_tags(&["Systems", "UI"]).is_empty());
    }

    #[test]
    fn query_is_deterministic() {
        let projects = fixture();
        let controls = Controls {
            search: "a".to_string(),
            sort: SortKey::TitleAsc,
            ..Controls::default()
        };
        assert_eq!(query(&projects, &controls), query(&projects, &controls));
    }

    #[test]
    fn equal_keys_keep_input_order() {
        let projects = vec![
            project("first", "Same", "2024-01-01", "", &[]),
            project("second", "Same", "2024-01-01", "", &[]),
        ];
        let out = query(
            &projects,
            &Controls {
                sort: SortKey::TitleAsc,
                ..Controls::default()
            },
        );
        assert_eq!(out, [0, 1]);
    }

    proptest! {
        #[test]
        fn output_is_a_permutation_of_matches(
            titles in proptest::collection::vec("[a-z]{0,8}", 0..20),
            needle in "[a-z]{0,3}",
        ) {
            let projects: Vec<Project> = titles
                .iter()
                .enumerate()
                .map(|(i, t)| project(&format!("p{i}"), t, "2024-01-01", "", &[]))
                .collect();
            let controls = Controls { search: needle.clone(), ..Controls::default() };
            let out = query(&projects, &controls);

            // No duplicates, all in range, and every survivor matches.
            let mut seen = out.clone();
            seen.sort_unstable();
            seen.dedup();
            prop_assert_eq!(seen.len(), out.len());
            for &i in &out {
                prop_assert!(i < projects.len());
                prop_assert!(needle.is_empty() || projects[i].title.contains(&needle));
            }
        }

        #[test]
        fn sort_orders_dates(dates in proptest::collection::vec("20[0-9]{2}-[01][0-9]-[0-3][0-9]", 1..12)) {
            let projects: Vec<Project> = dates
                .iter()
                .enumerate()
                .map(|(i, d)| project(&format!("p{i}"), "T", d, "", &[]))
                .collect();
            let out = query(&projects, &Controls { sort: SortKey::Oldest, ..Controls::default() });
            for pair in out.windows(2) {
                prop_assert!(projects[pair[0]].date <= projects[pair[1]].date);
            }
        }
    }
}
