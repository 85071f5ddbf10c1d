use crate::config::Tuning;
use crate::{Segment, Stats, Transcript, is_caption_whitespace, words};

/// Join segments into full text, paragraphs and stats
pub fn assemble(segments: Vec<Segment>, tuning: &Tuning) -> Transcript {
    let full_text = segments.iter().map(|s| s.text.as_str()).collect::<Vec<_>>().join(" ");
    let paragraphs = build_paragraphs(&segments, tuning.paragraph_size);
    let words = count_words(&full_text);

    Transcript {
        stats: Stats {
            words,
            segments: segments.len(),
            estimated_speaking_minutes: speaking_minutes(words, tuning.words_per_minute),
        },
        full_text,
        paragraphs,
        segments,
    }
}

/// Group consecutive segments into paragraphs of `size`; the last may be shorter
pub fn build_paragraphs(segments: &[Segment], size: usize) -> Vec<String> {
    segments
        .chunks(size.max(1))
        .map(|group| {
            group
                .iter()
                .map(|s| s.text.as_str())
                .collect::<Vec<_>>()
                .join(" ")
                .trim_matches(is_caption_whitespace)
                .to_string()
        })
        .filter(|paragraph| !paragraph.is_empty())
        .collect()
}

pub fn count_words(text: &str) -> usize {
    words(text).count()
}

/// Minutes needed to speak `words` at `words_per_minute`, rounded up
pub fn speaking_minutes(words: usize, words_per_minute: usize) -> usize {
    words.div_ceil(words_per_minute.max(1))
}
