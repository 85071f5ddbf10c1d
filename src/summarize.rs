use std::collections::HashSet;

use crate::config::Tuning;
use crate::text_len;

/// Delimiter used to split the transcript into candidate sentences
pub const SENTENCE_DELIMITER: &str = ". ";

/// Extractive summary of a transcript.
///
/// Candidates are the `". "`-separated spans longer than `min_sentence_chars`
/// UTF-16 units.
/// With fewer than `min_sampled_sentences` candidates they are joined as-is.
/// Otherwise the head, every `sample_stride`-th sentence after the head, and the
/// tail are joined in that order with duplicates dropped, ending in one period.
pub fn summarize(full_text: &str, tuning: &Tuning) -> String {
    let sentences: Vec<&str> = full_text
        .split(SENTENCE_DELIMITER)
        .filter(|s| text_len(s) > tuning.min_sentence_chars)
        .collect();

    if sentences.len() < tuning.min_sampled_sentences {
        return sentences.join(SENTENCE_DELIMITER);
    }

    let head = sentences.iter().take(tuning.summary_head);
    let middle = sentences
        .iter()
        .skip(tuning.summary_head)
        .step_by(tuning.sample_stride.max(1));
    let tail = sentences[sentences.len().saturating_sub(tuning.summary_tail)..].iter();

    let mut seen = HashSet::new();
    let picked: Vec<&str> = head
        .chain(middle)
        .chain(tail)
        .copied()
        .filter(|s| seen.insert(*s))
        .collect();

    format!("{}.", picked.join(SENTENCE_DELIMITER))
}
