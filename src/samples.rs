//! Embedded fallback records, used whenever the catalog endpoints cannot be
//! reached. The set mirrors the published sample data so the explorer is
//! fully usable offline.

use crate::model::{Catalog, Game, Project, ProjectLinks, Testimonial};
use chrono::Utc;

pub fn catalog() -> Catalog {
    Catalog {
        projects: projects(),
        games: games(),
        testimonials: testimonials(),
    }
}

pub fn projects() -> Vec<Project> {
    let now = Utc::now().format("%Y-%m-%d").to_string();
    let project = |id: &str,
                   title: &str,
                   summary: &str,
                   tags: &[&str],
                   role: &str,
                   tools: &[&str],
                   links: ProjectLinks,
                   body: &[&str]| Project {
        id: id.to_string(),
        title: title.to_string(),
        date: now.clone(),
        summary: summary.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        role: role.to_string(),
        tools: tools.iter().map(|t| t.to_string()).collect(),
        links,
        body: body.iter().map(|b| b.to_string()).collect(),
        ..Project::default()
    };

    vec![
        project(
            "inv-system",
            "Inventory System",
            "Modular inventory with stackable items, rarity, and hotbar.",
            &["Scripting", "Systems", "UI"],
            "Systems & UI",
            &["Luau", "Knit", "ProfileService"],
            ProjectLinks::default(),
            &[
                "Built with clean modules and events for performance.",
                "Includes drag-and-drop, tooltips, and rarity colors.",
            ],
        ),
        project(
            "economy",
            "Economy & Shop",
            "Data-backed shop with products, passes, limiteds, and analytics hooks.",
            &["Monetization", "Data", "Systems"],
            "Scripting",
            &["Luau", "DataStore2"],
            ProjectLinks::default(),
            &[
                "Supports featured rotations and discounts.",
                "Plug-in config via folder attributes.",
            ],
        ),
        project(
            "ui-framework",
            "Game UI Framework",
            "Responsive UI toolkit with theming and animations.",
            &["UI", "Design", "Tools"],
            "UI/UX",
            &["Roact", "TweenService"],
            ProjectLinks::default(),
            &[
                "Reusable components for menus, HUDs, and modals.",
                "Supports light/dark themes and localization.",
            ],
        ),
        project(
            "vfx-kit",
            "VFX Pack",
            "Hit sparks, ability trails, and environment glows.",
            &["VFX", "Design"],
            "VFX",
            &["ParticleEmitters"],
            ProjectLinks::default(),
            &[
                "Optimized emission and lifetimes.",
                "Preset colorways for quick theming.",
            ],
        ),
        project(
            "matchmaking",
            "Matchmaking & Lobby",
            "Queue, party, server routing, and cross-server comms.",
            &["Multiplayer", "Backend", "Scripting"],
            "Networking",
            &["MessagingService"],
            ProjectLinks::default(),
            &[
                "Reliable messaging with backoff.",
                "Party invites and cross-server chat.",
            ],
        ),
        project(
            "optimization",
            "Performance Pass",
            "Profiling, memory audits, and FPS uplift.",
            &["Optimization", "Scripting", "Tools"],
            "Optimization",
            &[],
            ProjectLinks::default(),
            &["Measured improvements with before/after metrics."],
        ),
    ]
}

pub fn games() -> Vec<Game> {
    let game = |id: &str, title: &str, summary: &str| Game {
        id: id.to_string(),
        title: title.to_string(),
        summary: summary.to_string(),
        ..Game::default()
    };

    vec![
        game("game1", "Crystal Tycoon", "Resource mining, upgrades, and trading."),
        game("game2", "Neo Obby", "Polished parkour with checkpoints and cosmetics."),
        game("game3", "Arena Rush", "Wave combat with abilities and power-ups."),
        game("game4", "Build & Battle", "Quick build PVP with destructible blocks."),
        game("game5", "Cyber Runner", "Endless runner with daily challenges."),
    ]
}

pub fn testimonials() -> Vec<Testimonial> {
    let review = |quote: &str, author: &str, role: &str| Testimonial {
        quote: quote.to_string(),
        author: author.to_string(),
        role: role.to_string(),
        rating: 5,
        source: String::new(),
    };

    vec![
        review(
            "Fast, communicative, and the code was super clean. Delivered exactly what we needed.",
            "Game Studio Owner",
            "Commission",
        ),
        review(
            "UI felt so polished. Players noticed the quality instantly.",
            "Indie Dev",
            "UI/UX",
        ),
        review(
            "Handled data and monetization like a pro. Revenue went up after release.",
            "Tycoon Team Lead",
            "Systems",
        ),
        review(
            "Great optimization pass—FPS improved without breaking anything.",
            "Community Creator",
            "Performance",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_project_ids_are_unique() {
        let projects = projects();
        for (i, p) in projects.iter().enumerate() {
            assert!(!p.id.is_empty());
            assert!(
                projects[i + 1..].iter().all(|q| q.id != p.id),
                "duplicate id {}",
                p.id
            );
        }
    }

    #[test]
    fn sample_dates_are_iso() {
        for p in projects() {
            assert_eq!(p.date.len(), 10, "{} has a non-ISO date", p.id);
            assert!(chrono::NaiveDate::parse_from_str(&p.date, "%Y-%m-%d").is_ok());
        }
    }

    #[test]
    fn sample_catalog_is_complete() {
        let c = catalog();
        assert_eq!(c.projects.len(), 6);
        assert_eq!(c.games.len(), 5);
        assert_eq!(c.testimonials.len(), 4);
    }
}
