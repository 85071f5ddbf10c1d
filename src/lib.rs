pub mod assemble;
pub mod captions;
pub mod config;
pub mod output;
pub mod pipeline;
pub mod server;
pub mod summarize;
pub mod youtube;

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// A single decoded caption segment, in speaking order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub text: String,
}

impl Segment {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Word/segment counts for an assembled transcript
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub words: usize,
    pub segments: usize,
    pub estimated_speaking_minutes: usize,
}

/// Readable transcript reconstructed from caption segments
#[derive(Debug, Clone, Serialize)]
pub struct Transcript {
    pub full_text: String,
    pub paragraphs: Vec<String>,
    pub stats: Stats,
    pub segments: Vec<Segment>,
}

/// Query carried by a single extraction request
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Query {
    pub url: Option<String>,
    #[serde(rename = "videoId")]
    pub video_id: Option<String>,
    /// Preferred caption language; the first listed track wins when absent or missing
    pub lang: Option<String>,
}

static URL_VIDEO_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(youtu\.be/|v=|/shorts/)([a-zA-Z0-9_-]{11})").expect("Invalid video id regex")
});

static BARE_VIDEO_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9_-]{11}$").expect("Invalid bare video id regex"));

/// Extract video ID from a short link, a `v=` parameter or a shorts path
pub fn extract_video_id(url: &str) -> Option<String> {
    URL_VIDEO_ID
        .captures(url)
        .and_then(|caps| caps.get(2))
        .map(|m| m.as_str().to_string())
}

/// Resolve the video ID for a request.
///
/// An explicit, non-empty `videoId` is taken as-is. Otherwise the URL is scanned
/// with [`extract_video_id`].
pub fn resolve_video_id(query: &Query) -> Option<String> {
    if let Some(id) = query.video_id.as_deref().filter(|id| !id.is_empty()) {
        return Some(id.to_string());
    }
    query.url.as_deref().and_then(extract_video_id)
}

/// Whitespace as caption text is split on: ECMAScript WhiteSpace and LineTerminator.
///
/// Unlike `char::is_whitespace` this includes U+FEFF and excludes U+0085.
pub fn is_caption_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Non-empty runs of text between caption whitespace
pub fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split(is_caption_whitespace).filter(|w| !w.is_empty())
}

/// Length in UTF-16 code units, the unit caption length thresholds are measured in
pub fn text_len(text: &str) -> usize {
    text.encode_utf16().count()
}

/// True for a bare 11-character video ID
pub fn is_bare_video_id(input: &str) -> bool {
    BARE_VIDEO_ID.is_match(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(url: Option<&str>, video_id: Option<&str>) -> Query {
        Query {
            url: url.map(String::from),
            video_id: video_id.map(String::from),
            lang: None,
        }
    }

    #[test]
    fn test_watch_url() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_watch_url_with_extra_params() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=5"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_short_url() {
        assert_eq!(
            extract_video_id("https://youtu.be/dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_shorts_url() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/shorts/dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_embed_url_not_recognized() {
        assert_eq!(extract_video_id("https://www.youtube.com/embed/dQw4w9WgXcQ"), None);
    }

    #[test]
    fn test_too_short_id() {
        assert_eq!(extract_video_id("https://youtu.be/abc"), None);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(extract_video_id(""), None);
    }

    #[test]
    fn test_explicit_id_wins_over_url() {
        let q = query(Some("https://youtu.be/dQw4w9WgXcQ"), Some("anything"));
        assert_eq!(resolve_video_id(&q), Some("anything".to_string()));
    }

    #[test]
    fn test_empty_explicit_id_falls_back_to_url() {
        let q = query(Some("https://youtu.be/dQw4w9WgXcQ"), Some(""));
        assert_eq!(resolve_video_id(&q), Some("dQw4w9WgXcQ".to_string()));
    }

    #[test]
    fn test_nothing_to_resolve() {
        assert_eq!(resolve_video_id(&query(None, None)), None);
        assert_eq!(resolve_video_id(&query(Some("https://example.com"), None)), None);
    }

    #[test]
    fn test_words_use_caption_whitespace() {
        assert_eq!(words(" a\u{FEFF}b\u{3000}c ").collect::<Vec<_>>(), vec!["a", "b", "c"]);
        assert_eq!(words("a\u{85}b").collect::<Vec<_>>(), vec!["a\u{85}b"]);
        assert_eq!(words("").count(), 0);
    }

    #[test]
    fn test_text_len_counts_utf16_units() {
        assert_eq!(text_len("abc"), 3);
        assert_eq!(text_len("😀a"), 3);
        assert_eq!(text_len("é"), 1);
    }

    #[test]
    fn test_bare_video_id() {
        assert!(is_bare_video_id("dQw4w9WgXcQ"));
        assert!(!is_bare_video_id("https://youtu.be/dQw4w9WgXcQ"));
    }
}
