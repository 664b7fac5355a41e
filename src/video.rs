use regex::Regex;
use std::sync::OnceLock;

/// What the detail overlay should show in the media slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VideoSlot {
    /// No video reference on the record.
    Missing,
    /// A recognized YouTube URL; `id` is the extracted embed identifier.
    YouTube { id: String },
    /// A direct video file reference, playable natively.
    File { url: String },
    /// A non-empty reference in a format we cannot present.
    Unsupported,
}

// Matches watch URLs (v=), embed URLs, and youtu.be short links.
fn youtube_id_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?:youtube\.com.*(?:v=|embed/)|youtu\.be/)([^&?/]+)")
            .expect("static pattern")
    })
}

/// Classify a record's video reference.
pub fn classify(video: &str) -> VideoSlot {
    if video.is_empty() {
        return VideoSlot::Missing;
    }
    if let Some(caps) = youtube_id_re().captures(video) {
        return VideoSlot::YouTube {
            id: caps[1].to_string(),
        };
    }
    if video.ends_with(".mp4") {
        return VideoSlot::File {
            url: video.to_string(),
        };
    }
    VideoSlot::Unsupported
}

/// Embed URL for an extracted YouTube id.
pub fn embed_url(id: &str) -> String {
    format!("https://www.youtube.com/embed/{id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_reference_is_missing() {
        assert_eq!(classify(""), VideoSlot::Missing);
    }

    #[test]
    fn watch_urls_extract_the_v_parameter() {
        assert_eq!(
            classify("https://www.youtube.com/watch?v=dQw4w9WgXcQ"),
            VideoSlot::YouTube {
                id: "dQw4w9WgXcQ".to_string()
            }
        );
        // Trailing parameters stop at the delimiter.
        assert_eq!(
            classify("https://www.youtube.com/watch?v=abc123&t=42"),
            VideoSlot::YouTube {
                id: "abc123".to_string()
            }
        );
    }

    #[test]
    fn embed_and_short_urls_are_recognized() {
        assert_eq!(
            classify("https://www.youtube.com/embed/xyz789"),
            VideoSlot::YouTube {
                id: "xyz789".to_string()
            }
        );
        assert_eq!(
            classify("https://youtu.be/short1"),
            VideoSlot::YouTube {
                id: "short1".to_string()
            }
        );
    }

    #[test]
    fn mp4_references_play_natively() {
        assert_eq!(
            classify("https://cdn.example.com/demo.mp4"),
            VideoSlot::File {
                url: "https://cdn.example.com/demo.mp4".to_string()
            }
        );
    }

    #[test]
    fn anything_else_is_unsupported() {
        assert_eq!(classify("https://vimeo.com/12345"), VideoSlot::Unsupported);
        assert_eq!(classify("clip.webm"), VideoSlot::Unsupported);
    }

    #[test]
    fn embed_url_formats_the_id() {
        assert_eq!(embed_url("abc"), "https://www.youtube.com/embed/abc");
    }
}
