//! Formatting utilities for terminal output

use crate::ranking::LetterCount;

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar for one histogram entry, scaled against the largest count
#[must_use]
pub fn histogram_bar(entry: &LetterCount, largest: usize, width: usize) -> String {
    create_progress_bar(entry.count as f64, largest as f64, width)
}

/// Render a word list as comma-separated columns of at most `per_line` words
#[must_use]
pub fn word_columns<S: AsRef<str>>(words: &[S], per_line: usize) -> Vec<String> {
    words
        .chunks(per_line.max(1))
        .map(|chunk| {
            chunk
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<_>>()
                .join(", ")
        })
        .collect()
}
