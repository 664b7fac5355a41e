use serde::{Deserialize, Serialize};

/// A portfolio project entry.
///
/// `date` is an ISO `YYYY-MM-DD` string and is only ever compared
/// lexicographically, which for ISO dates equals chronological order.
/// Missing optional fields deserialize to empty values and never fail.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub date: String,
    pub summary: String,
    pub tags: Vec<String>,
    pub cover: String,
    pub video: String,
    pub role: String,
    pub tools: Vec<String>,
    pub links: ProjectLinks,
    pub body: Vec<String>,
}

/// External links on a project, by kind. The published data files use the
/// platform names as keys; both spellings parse.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectLinks {
    /// Primary play-platform page (`roblox` in the data files).
    #[serde(alias = "roblox")]
    pub play: String,
    /// Source repository (`github` in the data files).
    #[serde(alias = "github")]
    pub source: String,
}

/// A showcased game. No tags, no date; games are never filtered or sorted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Game {
    pub id: String,
    pub title: String,
    pub cover: String,
    pub video: String,
    pub link: String,
    pub summary: String,
}

/// A client testimonial. `rating` is clamped to [0, 5] at display time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
    pub role: String,
    pub rating: i64,
    pub source: String,
}

impl Default for Testimonial {
    fn default() -> Self {
        Self {
            quote: String::new(),
            author: String::new(),
            role: String::new(),
            rating: 5,
            source: String::new(),
        }
    }
}

/// The three collections, fetched once at startup and read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub projects: Vec<Project>,
    pub games: Vec<Game>,
    pub testimonials: Vec<Testimonial>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_missing_fields_default_to_empty() {
        let p: Project = serde_json::from_str(r#"{ "id": "x" }"#).unwrap();
        assert_eq!(p.id, "x");
        assert_eq!(p.title, "");
        assert_eq!(p.date, "");
        assert!(p.tags.is_empty());
        assert!(p.body.is_empty());
        assert_eq!(p.links.play, "");
    }

    #[test]
    fn project_links_accept_platform_keys() {
        let p: Project = serde_json::from_str(
            r#"{ "id": "x", "links": { "roblox": "https://r", "github": "https://g" } }"#,
        )
        .unwrap();
        assert_eq!(p.links.play, "https://r");
        assert_eq!(p.links.source, "https://g");

        // Snapshot output spells the kinds out; those parse too.
        let p: Project = serde_json::from_str(
            r#"{ "id": "x", "links": { "play": "https://r", "source": "https://g" } }"#,
        )
        .unwrap();
        assert_eq!(p.links.play, "https://r");
        assert_eq!(p.links.source, "https://g");
    }

    #[test]
    fn testimonial_rating_defaults_to_five() {
        let t: Testimonial = serde_json::from_str(r#"{ "quote": "great" }"#).unwrap();
        assert_eq!(t.rating, 5);
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let g: Game =
            serde_json::from_str(r#"{ "id": "g", "title": "T", "genre": "tycoon" }"#).unwrap();
        assert_eq!(g.id, "g");
    }
}
