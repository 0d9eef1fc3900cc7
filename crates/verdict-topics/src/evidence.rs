//! Evidence samples for cluster labels.

use crate::ReviewRecord;

/// Truncates `text` to at most `limit` characters.
pub fn truncate_chars(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

/// Picks up to `cap` sample texts from the earliest members.
///
/// `members` are review indices in document order. Each sample is cut to
/// `max_chars` characters.
pub fn select_samples(
    reviews: &[ReviewRecord],
    members: &[usize],
    cap: usize,
    max_chars: usize,
) -> Vec<String> {
    members
        .iter()
        .filter_map(|&index| reviews.get(index))
        .take(cap)
        .map(|review| truncate_chars(&review.content, max_chars).to_string())
        .collect()
}
